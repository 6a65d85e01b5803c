use crate::validation::is_non_empty;
use std::fmt;

/// **An opaque, non-empty access token issued by the remote API**
///
/// It authorizes data queries against one linked institution.
/// It lives only as long as the process; nothing persists it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Returns `None` for an empty or blank token.
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if is_non_empty(&token) {
            Some(AccessToken(token))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
