//! SAML 2.0 service provider clients.

use std::any::Any;

use crate::client::{Client, ClientKind};

/// One configured SAML 2.0 service provider.
///
/// Keystore and metadata material is referenced by path; reading and
/// validating it happens in the SAML runtime, not here.
#[derive(Debug, Clone)]
pub struct SamlClient {
    name: String,
    pub keystore_path: String,
    pub keystore_password: String,
    pub private_key_password: String,
    pub identity_provider_metadata_path: String,
    pub service_provider_entity_id: Option<String>,
    pub service_provider_metadata_path: Option<String>,
    /// Maximum accepted age of an authentication, in seconds.
    pub maximum_authentication_lifetime: Option<u64>,
}

impl SamlClient {
    /// Creates a client named `saml{index}` from the four required settings.
    pub fn new(
        index: usize,
        keystore_path: impl Into<String>,
        keystore_password: impl Into<String>,
        private_key_password: impl Into<String>,
        identity_provider_metadata_path: impl Into<String>,
    ) -> Self {
        SamlClient {
            name: format!("saml{}", index),
            keystore_path: keystore_path.into(),
            keystore_password: keystore_password.into(),
            private_key_password: private_key_password.into(),
            identity_provider_metadata_path: identity_provider_metadata_path.into(),
            service_provider_entity_id: None,
            service_provider_metadata_path: None,
            maximum_authentication_lifetime: None,
        }
    }

    /// Sets the service provider entity id.
    pub fn service_provider_entity_id(mut self, entity_id: impl Into<String>) -> Self {
        self.service_provider_entity_id = Some(entity_id.into());
        self
    }

    /// Sets the path the generated service provider metadata is written to.
    pub fn service_provider_metadata_path(mut self, path: impl Into<String>) -> Self {
        self.service_provider_metadata_path = Some(path.into());
        self
    }

    /// Sets the maximum accepted authentication age in seconds.
    pub fn maximum_authentication_lifetime(mut self, seconds: u64) -> Self {
        self.maximum_authentication_lifetime = Some(seconds);
        self
    }
}

impl Client for SamlClient {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ClientKind {
        ClientKind::Saml
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
