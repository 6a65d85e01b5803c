use crate::api::{HttpPlaidApi, PlaidApi};
use crate::client::TokenExchangeClient;
use plaid_link_common::accounts::AccountSummary;
use plaid_link_common::config::{ClientConfig, PlaidEnvironment};
use plaid_link_common::errors::ClientError;
use reqwest::Url;
use std::io::Write;

/// **Runs the whole pipeline**
///
/// Obtains an access token and uses it right away to fetch and display
/// the linked accounts. Nothing is kept once this returns.
///
/// # Errors
/// - No access token could be obtained, `ClientError::MissingAccessToken`
///   (the cause has already been printed by then);
/// - Any failure of fetching or displaying the accounts.
pub async fn run<A: PlaidApi, W: Write>(
    client: &TokenExchangeClient<A>,
    out: &mut W,
) -> Result<Vec<AccountSummary>, ClientError> {
    let token = client.create_link_token(out).await;

    client
        .fetch_and_display_accounts(token.as_ref().map(|t| t.as_str()), out)
        .await
}

/// **Builds a client that talks HTTP to `base_url`**
///
/// # Errors
/// See [`HttpPlaidApi::new`].
pub fn build_client(
    config: ClientConfig,
    base_url: Url,
) -> Result<TokenExchangeClient<HttpPlaidApi>, ClientError> {
    let api = HttpPlaidApi::new(base_url, &config.credentials, config.timeout)?;
    Ok(TokenExchangeClient::new(config, api))
}

/// **Resolves the URL every API path is joined to**
///
/// A command-line override wins when it parses into a URL that can carry paths.
/// Its path is given a trailing slash, so `http://host/plaid` serves
/// `http://host/plaid/accounts/get` rather than `http://host/accounts/get`.
///
/// Without an override, or with one that doesn't parse, the configured
/// environment's URL is used; an unusable override is logged as a warning.
///
/// # Errors
/// - The environment's own URL can't be parsed, `ClientError::Validation`
pub fn get_base_url(
    base_url: Option<String>,
    environment: PlaidEnvironment,
) -> Result<Url, ClientError> {
    let default = || {
        Url::parse(environment.base_url())
            .map_err(|err| ClientError::Validation(format!("bad environment URL: {err}")))
    };

    let Some(base_url) = base_url else {
        log::info!(
            "No base URL provided; using the {:?} environment: {}",
            environment,
            environment.base_url()
        );
        return default();
    };

    match Url::parse(&base_url) {
        Ok(mut url) if !url.cannot_be_a_base() => {
            if !url.path().ends_with('/') {
                let path = format!("{}/", url.path());
                url.set_path(&path);
            }
            Ok(url)
        }
        _ => {
            log::warn!(
                "Provided base URL \"{}\" could not be parsed; using: {}",
                base_url,
                environment.base_url()
            );
            default()
        }
    }
}
