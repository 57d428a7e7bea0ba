//! SAML client builder.

use tracing::debug;

use crate::builder::{parse_u64, ClientBuilder};
use crate::client::SamlClient;
use crate::error::ConfigError;
use crate::keys;
use crate::properties::Properties;
use crate::registry::ClientList;

/// Appends one client per index carrying the full keystore/metadata
/// quadruple; partially configured indices are skipped, mirroring the
/// detection rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct SamlClientBuilder;

impl ClientBuilder for SamlClientBuilder {
    fn try_create_clients(
        &self,
        properties: &Properties,
        clients: &mut ClientList,
    ) -> Result<(), ConfigError> {
        for i in 0..=keys::MAX_NUM_CLIENTS {
            let complete = properties.is_set_at(keys::SAML_KEYSTORE_PASSWORD, i)
                && properties.is_set_at(keys::SAML_PRIVATE_KEY_PASSWORD, i)
                && properties.is_set_at(keys::SAML_KEYSTORE_PATH, i)
                && properties.is_set_at(keys::SAML_IDENTITY_PROVIDER_METADATA_PATH, i);
            if !complete {
                continue;
            }

            let mut client = SamlClient::new(
                i,
                properties.get_at(keys::SAML_KEYSTORE_PATH, i).unwrap_or_default(),
                properties
                    .get_at(keys::SAML_KEYSTORE_PASSWORD, i)
                    .unwrap_or_default(),
                properties
                    .get_at(keys::SAML_PRIVATE_KEY_PASSWORD, i)
                    .unwrap_or_default(),
                properties
                    .get_at(keys::SAML_IDENTITY_PROVIDER_METADATA_PATH, i)
                    .unwrap_or_default(),
            );
            if let Some(entity_id) = properties.get_at(keys::SAML_SERVICE_PROVIDER_ENTITY_ID, i) {
                if !entity_id.trim().is_empty() {
                    client = client.service_provider_entity_id(entity_id);
                }
            }
            if let Some(path) = properties.get_at(keys::SAML_SERVICE_PROVIDER_METADATA_PATH, i) {
                if !path.trim().is_empty() {
                    client = client.service_provider_metadata_path(path);
                }
            }
            if let Some(lifetime) =
                properties.get_at(keys::SAML_MAXIMUM_AUTHENTICATION_LIFETIME, i)
            {
                if !lifetime.trim().is_empty() {
                    client = client.maximum_authentication_lifetime(parse_u64(
                        keys::SAML_MAXIMUM_AUTHENTICATION_LIFETIME,
                        i,
                        lifetime,
                    )?);
                }
            }

            debug!("created saml client saml{}", i);
            clients.push(Box::new(client));
        }
        Ok(())
    }
}
