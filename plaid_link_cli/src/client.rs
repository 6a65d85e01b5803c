//! The token exchange client
//!
//! It issues the remote calls in sequence: create a sandbox public token,
//! exchange it for an access token, then list the accounts with balances.
//!
//! Each operation comes in two flavours:
//! - a typed one, returning a [`Result`] with a [`ClientError`] cause;
//! - a console one, which prints progress and failures to the output it's given.

use crate::api::PlaidApi;
use plaid_link_common::accounts::{summarize, Account, AccountSummary};
use plaid_link_common::cli::constants::{SEPARATOR_LONG, SEPARATOR_SHORT};
use plaid_link_common::config::ClientConfig;
use plaid_link_common::errors::{ClientError, MISSING_ACCESS_TOKEN_MSG};
use plaid_link_common::requests::*;
use plaid_link_common::token::AccessToken;
use plaid_link_common::validation::is_non_empty;
use std::fmt;
use std::io::Write;

/// **A client for the token exchange and account listing**
///
/// Holds an immutable configuration and the remote API it talks to.
/// Safe to reuse for any number of sequential calls.
#[derive(Debug)]
pub struct TokenExchangeClient<A> {
    config: ClientConfig,
    api: A,
}

impl<A: PlaidApi> TokenExchangeClient<A> {
    pub fn new(config: ClientConfig, api: A) -> Self {
        TokenExchangeClient { config, api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// **Creates a sandbox public token and exchanges it for an access token**
    ///
    /// The public token is scoped to the configured institution and products.
    ///
    /// # Errors
    /// - Any failure of either remote call, with its cause;
    /// - An empty token in a response, `ClientError::MalformedResponse`.
    pub async fn exchange_sandbox_token(&self) -> Result<AccessToken, ClientError> {
        log::info!(
            "Creating a sandbox public token for institution {} with products {:?}",
            self.config.institution_id, self.config.products
        );
        let request = SandboxPublicTokenCreateRequest {
            institution_id: self.config.institution_id.clone(),
            initial_products: self.config.products.clone(),
        };
        let created = self.api.sandbox_public_token_create(&request).await?;

        if !is_non_empty(&created.public_token) {
            return Err(ClientError::MalformedResponse(
                "empty public token".to_string(),
            ));
        }
        log::debug!("Public token created; request_id = {}", created.request_id);

        log::info!("Exchanging the public token for an access token");
        let request = ItemPublicTokenExchangeRequest {
            public_token: created.public_token,
        };
        let exchanged = self.api.item_public_token_exchange(&request).await?;
        log::debug!(
            "Public token exchanged; item_id = {}, request_id = {}",
            exchanged.item_id, exchanged.request_id
        );

        AccessToken::new(exchanged.access_token)
            .ok_or_else(|| ClientError::MalformedResponse("empty access token".to_string()))
    }

    /// **Obtains an access token, reporting the outcome on `out`**
    ///
    /// Never fails: any failure is printed as an `Error ...` line, logged,
    /// and turned into `None`.
    pub async fn create_link_token<W: Write>(&self, out: &mut W) -> Option<AccessToken> {
        emit(out, format_args!("1. Creating and exchanging a sandbox public token..."));

        match self.exchange_sandbox_token().await {
            Ok(token) => {
                emit(out, format_args!("  -> Exchange Token Created: {}", token));
                Some(token)
            }
            Err(err) => {
                log::error!("Token exchange failed: {}", err);
                emit(out, format_args!("Error generating token: {}", err));
                None
            }
        }
    }

    /// **Lists the accounts linked to the access token**
    ///
    /// # Errors
    /// Any failure of the remote call, with its cause.
    pub async fn fetch_accounts(
        &self,
        access_token: &AccessToken,
    ) -> Result<Vec<Account>, ClientError> {
        log::info!("Fetching accounts");
        let request = AccountsGetRequest {
            access_token: access_token.as_str().to_string(),
        };
        let response = self.api.accounts_get(&request).await?;
        log::debug!(
            "Fetched {} accounts; request_id = {}",
            response.accounts.len(),
            response.request_id
        );

        Ok(response.accounts)
    }

    /// **Fetches the accounts and prints their names, subtypes and balances**
    ///
    /// An absent or empty `access_token` prints a diagnostic and makes no remote call.
    ///
    /// Either all accounts are printed or none: summaries are built for
    /// every account before anything is written.
    ///
    /// # Errors
    /// - No access token, `ClientError::MissingAccessToken`;
    /// - Any failure of the remote call, with its cause;
    /// - An account without a usable balance, `ClientError::MalformedResponse`;
    /// - Writing to `out` fails, `ClientError::Output`.
    pub async fn fetch_and_display_accounts<W: Write>(
        &self,
        access_token: Option<&str>,
        out: &mut W,
    ) -> Result<Vec<AccountSummary>, ClientError> {
        let Some(access_token) = access_token.and_then(|token| AccessToken::new(token)) else {
            log::warn!("No access token; not fetching accounts");
            writeln!(out, "\n{}", MISSING_ACCESS_TOKEN_MSG)?;
            return Err(ClientError::MissingAccessToken);
        };

        writeln!(out, "\n2. Fetching Accounts and Balances...")?;

        let summaries = match self.fetch_summaries(&access_token).await {
            Ok(summaries) => summaries,
            Err(err) => {
                log::error!("Fetching accounts failed: {}", err);
                writeln!(out, "Error fetching accounts: {}", err)?;
                return Err(err);
            }
        };

        display_accounts(out, &summaries)?;

        Ok(summaries)
    }

    async fn fetch_summaries(
        &self,
        access_token: &AccessToken,
    ) -> Result<Vec<AccountSummary>, ClientError> {
        let accounts = self.fetch_accounts(access_token).await?;
        summarize(&accounts, self.config.balance_policy)
    }
}

/// **Prints account summaries**
pub fn display_accounts<W: Write>(
    out: &mut W,
    summaries: &[AccountSummary],
) -> Result<(), ClientError> {
    writeln!(out, "\nSUCCESS: Found {} accounts:", summaries.len())?;
    writeln!(out, "{}", SEPARATOR_LONG)?;

    for summary in summaries {
        writeln!(
            out,
            "  Account Name: {} ({})",
            summary.name, summary.subtype_label
        )?;
        writeln!(out, "  Balance:      {}", summary.formatted_balance())?;
        writeln!(out, "{}", SEPARATOR_SHORT)?;
    }

    Ok(())
}

/// Writes a line where a failed write can't be propagated; the failure is only logged.
fn emit<W: Write>(out: &mut W, line: fmt::Arguments) {
    if let Err(err) = writeln!(out, "{}", line) {
        log::warn!("Failed to write to the output: {}", err);
    }
}
