/// Environment variables

pub const CLIENT_ID_VAR: &str = "PLAID_CLIENT_ID";
pub const SECRET_VAR: &str = "PLAID_SECRET";
pub const INSTITUTION_ID_VAR: &str = "PLAID_INSTITUTION_ID";
pub const PRODUCTS_VAR: &str = "PLAID_PRODUCTS";
pub const ENV_VAR: &str = "PLAID_ENV";
pub const VERSION_VAR: &str = "PLAID_VERSION";
pub const BALANCE_POLICY_VAR: &str = "PLAID_BALANCE_POLICY";
pub const TIMEOUT_VAR: &str = "PLAID_TIMEOUT_SECS";

/// Defaults

pub const DEFAULT_API_VERSION: &str = "2020-09-14";
pub const DEFAULT_PRODUCT: &str = "transactions";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LOG_FILTER: &str = "plaid_link=info";

/// Base URLs of the API environments

pub const SANDBOX_URL: &str = "https://sandbox.plaid.com/";
pub const DEVELOPMENT_URL: &str = "https://development.plaid.com/";
pub const PRODUCTION_URL: &str = "https://production.plaid.com/";

/// Console output

pub const SEPARATOR_LONG: &str = "---------------------------------------------";
pub const SEPARATOR_SHORT: &str = "---";
