//! The "Plaid Link CLI" app's entry point.

use plaid_link_cli::logic::{build_client, get_base_url, run};
use plaid_link_common::cli::constants::DEFAULT_LOG_FILTER;
use plaid_link_common::config::ClientConfig;
use std::env;
use std::error::Error;
use std::io;

/// The "Plaid Link CLI" app's entry point.
///
/// The optional first argument overrides the API base URL.
///
/// Exits with a non-zero status if configuration, the token exchange,
/// or fetching the accounts fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", DEFAULT_LOG_FILTER);
    }
    pretty_env_logger::init();

    let config = ClientConfig::from_env()?;
    log::debug!("Loaded configuration: {:?}", config);

    let base_url = get_base_url(env::args().nth(1), config.environment)?;
    let client = build_client(config, base_url)?;

    run(&client, &mut io::stdout()).await?;

    Ok(())
}
