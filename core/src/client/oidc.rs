//! OpenID Connect clients.

use std::any::Any;

use serde::{Deserialize, Serialize};

use crate::client::{Client, ClientKind};

/// OIDC provider flavor.
///
/// `Google` and `Azure` imply the provider's well-known discovery document;
/// `Generic` requires an explicit discovery URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OidcType {
    Generic,
    Google,
    Azure,
}

impl OidcType {
    /// Parses the type property value ("generic", "google", "azure").
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "generic" => Some(OidcType::Generic),
            "google" => Some(OidcType::Google),
            "azure" => Some(OidcType::Azure),
            _ => None,
        }
    }
}

/// One configured OIDC relying party.
#[derive(Debug, Clone)]
pub struct OidcClient {
    name: String,
    pub client_id: String,
    pub secret: String,
    pub oidc_type: OidcType,
    pub discovery_uri: Option<String>,
    pub scope: Option<String>,
    pub use_nonce: bool,
    pub preferred_jws_algorithm: Option<String>,
    /// Tolerated clock skew when validating tokens, in seconds.
    pub max_clock_skew: Option<u32>,
}

impl OidcClient {
    /// Creates a generic client named `oidc{index}`.
    pub fn new(index: usize, client_id: impl Into<String>, secret: impl Into<String>) -> Self {
        OidcClient {
            name: format!("oidc{}", index),
            client_id: client_id.into(),
            secret: secret.into(),
            oidc_type: OidcType::Generic,
            discovery_uri: None,
            scope: None,
            use_nonce: false,
            preferred_jws_algorithm: None,
            max_clock_skew: None,
        }
    }

    /// Sets the provider flavor.
    pub fn oidc_type(mut self, oidc_type: OidcType) -> Self {
        self.oidc_type = oidc_type;
        self
    }

    /// Sets the discovery document URI.
    pub fn discovery_uri(mut self, uri: impl Into<String>) -> Self {
        self.discovery_uri = Some(uri.into());
        self
    }

    /// Sets the requested scope.
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Enables nonce validation.
    pub fn use_nonce(mut self, use_nonce: bool) -> Self {
        self.use_nonce = use_nonce;
        self
    }

    /// Sets the preferred JWS algorithm.
    pub fn preferred_jws_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.preferred_jws_algorithm = Some(algorithm.into());
        self
    }

    /// Sets the tolerated clock skew in seconds.
    pub fn max_clock_skew(mut self, seconds: u32) -> Self {
        self.max_clock_skew = Some(seconds);
        self
    }
}

impl Client for OidcClient {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ClientKind {
        ClientKind::Oidc
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
