//! The remote API, behind a trait, so that the client can be driven by a mock in tests.

use crate::USER_AGENT;
use async_trait::async_trait;
use plaid_link_common::config::Credentials;
use plaid_link_common::errors::ClientError;
use plaid_link_common::requests::*;
use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

const CLIENT_ID_HEADER: &str = "plaid-client-id";
const SECRET_HEADER: &str = "plaid-secret";
const VERSION_HEADER: &str = "plaid-version";

pub const PUBLIC_TOKEN_CREATE_PATH: &str = "sandbox/public_token/create";
pub const PUBLIC_TOKEN_EXCHANGE_PATH: &str = "item/public_token/exchange";
pub const ACCOUNTS_GET_PATH: &str = "accounts/get";

/// **The three remote operations the client consumes**
#[async_trait]
pub trait PlaidApi: Send + Sync {
    /// Creates a public token for a simulated institution link.
    async fn sandbox_public_token_create(
        &self,
        request: &SandboxPublicTokenCreateRequest,
    ) -> Result<SandboxPublicTokenCreateResponse, ClientError>;

    /// Exchanges a public token for a long-lived access token.
    async fn item_public_token_exchange(
        &self,
        request: &ItemPublicTokenExchangeRequest,
    ) -> Result<ItemPublicTokenExchangeResponse, ClientError>;

    /// Lists the accounts of a linked institution, with balances.
    async fn accounts_get(
        &self,
        request: &AccountsGetRequest,
    ) -> Result<AccountsGetResponse, ClientError>;
}

/// **The HTTP implementation of [`PlaidApi`]**
///
/// All operations are JSON `POST`s; the credentials travel in headers.
#[derive(Debug)]
pub struct HttpPlaidApi {
    client: Client,
    base_url: Url,
}

impl HttpPlaidApi {
    /// Builds a reusable HTTP client with the authentication headers preset.
    ///
    /// # Errors
    /// - Credentials that can't be used as header values, `ClientError::Validation`;
    /// - The HTTP client can't be built, `ClientError::Network`.
    pub fn new(
        base_url: Url,
        credentials: &Credentials,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let headers = auth_headers(credentials)?;

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(|err| ClientError::Network(err.to_string()))?;

        Ok(HttpPlaidApi { client, base_url })
    }

    /// **Sends a POST request and decodes the response**
    ///
    /// Non-success responses are classified by [`classify_error`].
    async fn post<Req, Resp>(&self, path: &str, request: &Req) -> Result<Resp, ClientError>
    where
        Req: Serialize + Sync,
        Resp: DeserializeOwned,
    {
        let url = self
            .base_url
            .join(path)
            .map_err(|err| ClientError::Validation(format!("bad URL path \"{path}\": {err}")))?;
        log::debug!("POST {}", url);

        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;
        log::debug!("{} answered {}", path, status);

        if status.is_success() {
            serde_json::from_str(&body).map_err(|err| ClientError::MalformedResponse(err.to_string()))
        } else {
            Err(classify_error(status, &body))
        }
    }
}

#[async_trait]
impl PlaidApi for HttpPlaidApi {
    async fn sandbox_public_token_create(
        &self,
        request: &SandboxPublicTokenCreateRequest,
    ) -> Result<SandboxPublicTokenCreateResponse, ClientError> {
        self.post(PUBLIC_TOKEN_CREATE_PATH, request).await
    }

    async fn item_public_token_exchange(
        &self,
        request: &ItemPublicTokenExchangeRequest,
    ) -> Result<ItemPublicTokenExchangeResponse, ClientError> {
        self.post(PUBLIC_TOKEN_EXCHANGE_PATH, request).await
    }

    async fn accounts_get(
        &self,
        request: &AccountsGetRequest,
    ) -> Result<AccountsGetResponse, ClientError> {
        self.post(ACCOUNTS_GET_PATH, request).await
    }
}

/// **Headers sent with every request**
///
/// The secret is marked as sensitive, so it doesn't show up in debug output.
///
/// # Errors
/// - A credential contains characters that aren't allowed in a header, `ClientError::Validation`
pub fn auth_headers(credentials: &Credentials) -> Result<HeaderMap, ClientError> {
    let value = |name: &str, raw: &str| {
        HeaderValue::from_str(raw)
            .map_err(|_| ClientError::Validation(format!("{name} isn't a valid header value")))
    };

    let mut secret = value("secret", &credentials.secret)?;
    secret.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));
    headers.insert(
        HeaderName::from_static(CLIENT_ID_HEADER),
        value("client id", &credentials.client_id)?,
    );
    headers.insert(HeaderName::from_static(SECRET_HEADER), secret);
    headers.insert(
        HeaderName::from_static(VERSION_HEADER),
        value("API version", &credentials.api_version)?,
    );

    Ok(headers)
}

fn transport_error(err: reqwest::Error) -> ClientError {
    if err.is_decode() {
        ClientError::MalformedResponse(err.to_string())
    } else {
        ClientError::Network(err.to_string())
    }
}

/// **Maps a non-success response to a failure cause**
///
/// The vendor's error code wins over the HTTP status where both say something:
/// - bad API keys, 401 or 403 → `Authentication`;
/// - unknown institution or item, 404 → `NotFound`;
/// - rate limit, 429 → `RateLimited`;
/// - other invalid input, 400 → `Validation`;
/// - anything else → `Remote`.
pub fn classify_error(status: StatusCode, body: &str) -> ClientError {
    let error: ApiErrorBody = serde_json::from_str(body).unwrap_or_default();

    let msg = if error.error_code.is_empty() {
        match body.trim() {
            "" => status.to_string(),
            text => text.to_string(),
        }
    } else {
        format!("{} ({})", error.error_message, error.error_code)
    };

    let code = error.error_code.as_str();
    let kind = error.error_type.as_str();

    match (status.as_u16(), code, kind) {
        (_, "INVALID_API_KEYS", _) | (401 | 403, _, _) => ClientError::Authentication(msg),
        (_, "INVALID_INSTITUTION" | "INSTITUTION_NOT_FOUND" | "ITEM_NOT_FOUND", _) | (404, _, _) => {
            ClientError::NotFound(msg)
        }
        (_, _, "RATE_LIMIT_EXCEEDED") | (429, _, _) => ClientError::RateLimited(msg),
        (_, _, "INVALID_REQUEST" | "INVALID_INPUT") | (400, _, _) => ClientError::Validation(msg),
        (status, _, _) => ClientError::Remote { status, msg },
    }
}
