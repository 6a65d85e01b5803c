//! Client configuration
//!
//! Everything is read once, at startup, and is immutable afterwards.
//! The configuration is passed to the client explicitly.

use crate::cli::balance_policy::BalancePolicy;
use crate::cli::constants::*;
use crate::errors::ConfigError;
use crate::validation::{is_non_empty, required};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// **API credentials**
///
/// The secret is never printed; see the `Debug` implementation.
#[derive(Clone, PartialEq)]
pub struct Credentials {
    pub client_id: String,
    pub secret: String,
    pub api_version: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("secret", &"<redacted>")
            .field("api_version", &self.api_version)
            .finish()
    }
}

/// **The API environment to talk to**
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlaidEnvironment {
    #[default]
    Sandbox,
    Development,
    Production,
}

impl PlaidEnvironment {
    /// The environment's base URL, with a trailing slash so that paths can be joined to it.
    pub fn base_url(&self) -> &'static str {
        match self {
            PlaidEnvironment::Sandbox => SANDBOX_URL,
            PlaidEnvironment::Development => DEVELOPMENT_URL,
            PlaidEnvironment::Production => PRODUCTION_URL,
        }
    }
}

impl FromStr for PlaidEnvironment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sandbox" => Ok(PlaidEnvironment::Sandbox),
            "development" => Ok(PlaidEnvironment::Development),
            "production" => Ok(PlaidEnvironment::Production),
            other => Err(other.to_string()),
        }
    }
}

/// **A category of data the API can provide**
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Product {
    Transactions,
    Auth,
    Balance,
    Identity,
    Investments,
    Liabilities,
    Assets,
}

impl FromStr for Product {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "transactions" => Ok(Product::Transactions),
            "auth" => Ok(Product::Auth),
            "balance" => Ok(Product::Balance),
            "identity" => Ok(Product::Identity),
            "investments" => Ok(Product::Investments),
            "liabilities" => Ok(Product::Liabilities),
            "assets" => Ok(Product::Assets),
            other => Err(other.to_string()),
        }
    }
}

/// **Parses a comma-separated product list**
///
/// Entries are trimmed, blanks and duplicates are skipped.
/// An absent or empty list yields [`DEFAULT_PRODUCT`].
///
/// # Errors
/// - Unknown product name, `ConfigError::InvalidValue`
pub fn parse_products(raw: Option<&str>) -> Result<Vec<Product>, ConfigError> {
    let mut products = Vec::new();

    for entry in raw.unwrap_or_default().split(',').filter(|e| is_non_empty(e)) {
        let product = entry.parse::<Product>().map_err(|_| ConfigError::InvalidValue {
            name: PRODUCTS_VAR.to_string(),
            value: entry.trim().to_string(),
        })?;
        if !products.contains(&product) {
            products.push(product);
        }
    }

    if products.is_empty() {
        return parse_products(Some(DEFAULT_PRODUCT));
    }

    Ok(products)
}

/// **The complete client configuration**
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub credentials: Credentials,
    pub environment: PlaidEnvironment,
    pub institution_id: String,
    pub products: Vec<Product>,
    pub balance_policy: BalancePolicy,
    pub timeout: Duration,
}

impl ClientConfig {
    /// **Loads the configuration from the process environment**
    ///
    /// A `.env` file is not read here; the entry point loads it before anything else.
    ///
    /// # Errors
    /// See [`ClientConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// **Builds the configuration from an arbitrary variable lookup**
    ///
    /// # Errors
    /// - A required variable is missing or blank, `ConfigError::MissingVar`;
    /// - A variable has a value that can't be parsed, `ConfigError::InvalidValue`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let invalid = |name: &str, value: &str| ConfigError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        };
        let optional = |name: &str| lookup(name).filter(|v| is_non_empty(v));

        let credentials = Credentials {
            client_id: required(CLIENT_ID_VAR, lookup(CLIENT_ID_VAR))?,
            secret: required(SECRET_VAR, lookup(SECRET_VAR))?,
            api_version: optional(VERSION_VAR)
                .map(|v| v.trim().to_string())
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
        };

        let institution_id = required(INSTITUTION_ID_VAR, lookup(INSTITUTION_ID_VAR))?;

        let products = parse_products(lookup(PRODUCTS_VAR).as_deref())?;

        let environment = match optional(ENV_VAR) {
            Some(v) => v.parse().map_err(|_| invalid(ENV_VAR, &v))?,
            None => PlaidEnvironment::default(),
        };

        let balance_policy = match optional(BALANCE_POLICY_VAR) {
            Some(v) => v.parse().map_err(|_| invalid(BALANCE_POLICY_VAR, &v))?,
            None => BalancePolicy::default(),
        };

        let timeout = match optional(TIMEOUT_VAR) {
            Some(v) => match v.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(invalid(TIMEOUT_VAR, &v)),
            },
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(ClientConfig {
            credentials,
            environment,
            institution_id,
            products,
            balance_policy,
            timeout,
        })
    }
}
