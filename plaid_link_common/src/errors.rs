use thiserror::Error;

/// **An error that can occur while building the client configuration**
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("required environment variable `{0}` is missing or empty")]
    MissingVar(String),

    #[error("environment variable `{name}` has an invalid value: \"{value}\"")]
    InvalidValue { name: String, value: String },
}

/// **An application-specific error type for remote calls**
///
/// A closed set of failure causes, so that callers and tests
/// can branch on the cause rather than on printed text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    /// Connection, DNS or timeout failure; the request may not have reached the vendor.
    #[error("network error: {0}")]
    Network(String),

    /// Invalid or missing API keys.
    #[error("authentication error: {0}")]
    Authentication(String),

    /// The vendor rejected the request's parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// Unknown institution, item or resource.
    #[error("not found: {0}")]
    NotFound(String),

    #[error("rate limited: {0}")]
    RateLimited(String),

    /// Any other non-success response.
    #[error("remote error ({status}): {msg}")]
    Remote { status: u16, msg: String },

    /// The response body didn't have the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("access token is missing")]
    MissingAccessToken,

    /// Writing to the console failed.
    #[error("output error: {0}")]
    Output(String),
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::Output(err.to_string())
    }
}

pub const MISSING_ACCESS_TOKEN_MSG: &str = "Cannot fetch accounts: Access Token is missing.";
