use crate::cli::balance_policy::BalancePolicy;
use crate::cli::helpers::{capitalize, format_currency};
use crate::errors::ClientError;
use serde::{Deserialize, Serialize};

/// Label used for accounts that report no subtype.
pub const UNKNOWN_SUBTYPE: &str = "Unknown";

/// **Balances of an account, as reported by the remote API**
///
/// Any of them can be missing.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Balances {
    pub available: Option<f64>,
    pub current: Option<f64>,
    pub iso_currency_code: Option<String>,
}

/// **A read-only projection of a linked account**
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Account {
    #[serde(default)]
    pub account_id: String,
    pub name: String,
    pub official_name: Option<String>,
    #[serde(rename = "type", default)]
    pub account_type: String,
    pub subtype: Option<String>,
    pub balances: Balances,
}

/// **What gets displayed for an account**
#[derive(Clone, Debug, PartialEq)]
pub struct AccountSummary {
    pub name: String,
    pub subtype_label: String,
    pub balance: f64,
}

impl AccountSummary {
    /// **Builds the display projection of an account**
    ///
    /// # Errors
    /// - Neither balance can be selected under the `policy`, `ClientError::MalformedResponse`
    pub fn from_account(account: &Account, policy: BalancePolicy) -> Result<Self, ClientError> {
        let balance = policy
            .select(account.balances.available, account.balances.current)
            .ok_or_else(|| {
                ClientError::MalformedResponse(format!(
                    "account \"{}\" has no usable balance",
                    account.name
                ))
            })?;

        let subtype_label = match account.subtype.as_deref().map(str::trim) {
            Some(subtype) if !subtype.is_empty() => capitalize(subtype),
            _ => UNKNOWN_SUBTYPE.to_string(),
        };

        Ok(AccountSummary {
            name: account.name.clone(),
            subtype_label,
            balance,
        })
    }

    /// The balance as a currency string, e.g. `$1,234.50`.
    pub fn formatted_balance(&self) -> String {
        format_currency(self.balance)
    }
}

/// **Builds summaries for all accounts, or none at all**
///
/// # Errors
/// - The first account that can't be summarized, `ClientError::MalformedResponse`
pub fn summarize(
    accounts: &[Account],
    policy: BalancePolicy,
) -> Result<Vec<AccountSummary>, ClientError> {
    accounts
        .iter()
        .map(|account| AccountSummary::from_account(account, policy))
        .collect()
}
