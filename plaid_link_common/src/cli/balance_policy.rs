//! The balance selection policy
//!
//! An account reports up to two balances, an available one and a current one,
//! and only one of them is displayed.
//!
//! It can be:
//! - TruthyAvailable
//! - PreferAvailable
//!
//! The two policies differ only when the available balance is exactly zero.

use std::str::FromStr;

/// **Which balance of an account gets displayed**
///
/// It can be:
/// - TruthyAvailable
/// - PreferAvailable
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BalancePolicy {
    /// Available balance if it's present *and* non-zero, else the current balance.
    ///
    /// An available balance of exactly `0.0` falls through to the current one.
    #[default]
    TruthyAvailable,

    /// Available balance whenever it's present, zero included, else the current balance.
    PreferAvailable,
}

impl BalancePolicy {
    /// **Selects the balance to display**
    ///
    /// Returns `None` if the policy can't pick either balance.
    pub fn select(&self, available: Option<f64>, current: Option<f64>) -> Option<f64> {
        match self {
            BalancePolicy::TruthyAvailable => available.filter(|&a| a != 0.0).or(current),
            BalancePolicy::PreferAvailable => available.or(current),
        }
    }
}

impl FromStr for BalancePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "truthy" | "truthy-available" => Ok(BalancePolicy::TruthyAvailable),
            "prefer-available" | "available" => Ok(BalancePolicy::PreferAvailable),
            other => Err(other.to_string()),
        }
    }
}
