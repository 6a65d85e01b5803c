pub mod accounts;
pub mod cli;
pub mod config;
pub mod errors;
pub mod requests;
pub mod token;
pub mod validation;

pub use accounts::{Account, AccountSummary, Balances};
pub use cli::balance_policy::BalancePolicy;
pub use config::{ClientConfig, Credentials, PlaidEnvironment, Product};
pub use errors::{ClientError, ConfigError};
pub use requests::*;
pub use token::AccessToken;
