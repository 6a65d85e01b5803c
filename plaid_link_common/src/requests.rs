//! Request and response bodies of the remote API

use crate::accounts::Account;
use crate::config::Product;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct SandboxPublicTokenCreateRequest {
    pub institution_id: String,
    pub initial_products: Vec<Product>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SandboxPublicTokenCreateResponse {
    pub public_token: String,
    #[serde(default)]
    pub request_id: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ItemPublicTokenExchangeRequest {
    pub public_token: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ItemPublicTokenExchangeResponse {
    pub access_token: String,
    #[serde(default)]
    pub item_id: String,
    #[serde(default)]
    pub request_id: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct AccountsGetRequest {
    pub access_token: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct AccountsGetResponse {
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub request_id: String,
}

/// **The body of a non-success response**
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error_type: String,
    #[serde(default)]
    pub error_code: String,
    #[serde(default)]
    pub error_message: String,
    pub display_message: Option<String>,
    #[serde(default)]
    pub request_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_token_request_body() {
        let request = SandboxPublicTokenCreateRequest {
            institution_id: "ins_109508".to_string(),
            initial_products: vec![Product::Transactions],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "institution_id": "ins_109508",
                "initial_products": ["transactions"],
            })
        );
    }

    #[test]
    fn test_exchange_response_ignores_unknown_fields() {
        let body = r#"{"access_token": "access-sandbox-1", "item_id": "item-1",
                       "request_id": "req-1", "extra": true}"#;
        let response: ItemPublicTokenExchangeResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.access_token, "access-sandbox-1");
        assert_eq!(response.item_id, "item-1");
    }

    #[test]
    fn test_error_body_with_null_display_message() {
        let body = r#"{"error_type": "INVALID_INPUT", "error_code": "INVALID_INSTITUTION",
                       "error_message": "invalid institution_id provided",
                       "display_message": null, "request_id": "req-2"}"#;
        let error: ApiErrorBody = serde_json::from_str(body).unwrap();
        assert_eq!(error.error_code, "INVALID_INSTITUTION");
        assert_eq!(error.display_message, None);
    }
}
