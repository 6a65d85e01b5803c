//! A scripted [`PlaidApi`] for tests

use crate::api::PlaidApi;
use async_trait::async_trait;
use plaid_link_common::accounts::{Account, Balances};
use plaid_link_common::config::{ClientConfig, Credentials, PlaidEnvironment, Product};
use plaid_link_common::errors::ClientError;
use plaid_link_common::requests::*;
use plaid_link_common::BalancePolicy;
use std::sync::Mutex;
use std::time::Duration;

pub const PUBLIC_TOKEN: &str = "public-sandbox-1";

/// Answers each operation with a canned result, and records the calls it receives.
pub struct MockPlaidApi {
    pub public_token: Result<String, ClientError>,
    pub access_token: Result<String, ClientError>,
    pub accounts: Result<Vec<Account>, ClientError>,
    calls: Mutex<Vec<String>>,
}

impl MockPlaidApi {
    pub fn new(access_token: &str, accounts: Vec<Account>) -> Self {
        MockPlaidApi {
            public_token: Ok(PUBLIC_TOKEN.to_string()),
            access_token: Ok(access_token.to_string()),
            accounts: Ok(accounts),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// The calls received so far, as `operation:argument`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, operation: &str, argument: &str) {
        self.calls
            .lock()
            .unwrap()
            .push(format!("{operation}:{argument}"));
    }
}

#[async_trait]
impl PlaidApi for MockPlaidApi {
    async fn sandbox_public_token_create(
        &self,
        request: &SandboxPublicTokenCreateRequest,
    ) -> Result<SandboxPublicTokenCreateResponse, ClientError> {
        self.record("sandbox_public_token_create", &request.institution_id);
        self.public_token
            .clone()
            .map(|public_token| SandboxPublicTokenCreateResponse {
                public_token,
                request_id: "req-create".to_string(),
            })
    }

    async fn item_public_token_exchange(
        &self,
        request: &ItemPublicTokenExchangeRequest,
    ) -> Result<ItemPublicTokenExchangeResponse, ClientError> {
        self.record("item_public_token_exchange", &request.public_token);
        self.access_token
            .clone()
            .map(|access_token| ItemPublicTokenExchangeResponse {
                access_token,
                item_id: "item-1".to_string(),
                request_id: "req-exchange".to_string(),
            })
    }

    async fn accounts_get(
        &self,
        request: &AccountsGetRequest,
    ) -> Result<AccountsGetResponse, ClientError> {
        self.record("accounts_get", &request.access_token);
        self.accounts.clone().map(|accounts| AccountsGetResponse {
            accounts,
            request_id: "req-accounts".to_string(),
        })
    }
}

pub fn test_config() -> ClientConfig {
    ClientConfig {
        credentials: Credentials {
            client_id: "client-123".to_string(),
            secret: "secret-456".to_string(),
            api_version: "2020-09-14".to_string(),
        },
        environment: PlaidEnvironment::Sandbox,
        institution_id: "ins_109508".to_string(),
        products: vec![Product::Transactions],
        balance_policy: BalancePolicy::TruthyAvailable,
        timeout: Duration::from_secs(5),
    }
}

/// An account named "Plaid Checking" with the given subtype and balances.
pub fn account(subtype: &str, available: Option<f64>, current: Option<f64>) -> Account {
    Account {
        account_id: format!("acc-{subtype}"),
        name: "Plaid Checking".to_string(),
        official_name: None,
        account_type: "depository".to_string(),
        subtype: Some(subtype.to_string()),
        balances: Balances {
            available,
            current,
            iso_currency_code: Some("USD".to_string()),
        },
    }
}
