//! REST endpoint authenticator definitions.

use std::any::Any;

use crate::authenticator::{Authenticator, AuthenticatorKind};

/// One configured REST authenticator: credentials are posted to the endpoint
/// and the response body carries the user profile.
#[derive(Debug, Clone)]
pub struct RestAuthenticator {
    name: String,
    pub url: String,
}

impl RestAuthenticator {
    /// Creates a definition named `rest{index}`.
    pub fn new(index: usize, url: impl Into<String>) -> Self {
        RestAuthenticator {
            name: format!("rest{}", index),
            url: url.into(),
        }
    }

    /// Registry name of this definition.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Authenticator for RestAuthenticator {
    fn kind(&self) -> AuthenticatorKind {
        AuthenticatorKind::Rest
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
