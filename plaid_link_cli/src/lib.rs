pub mod api;
pub mod client;
pub mod logic;

#[cfg(test)]
mod mock;

pub use api::{HttpPlaidApi, PlaidApi};
pub use client::TokenExchangeClient;

pub const USER_AGENT: &str = "plaid_link_cli";
