//! OIDC client builder.

use tracing::debug;

use crate::builder::{parse_bool, parse_u32, ClientBuilder};
use crate::client::{OidcClient, OidcType};
use crate::error::ConfigError;
use crate::keys;
use crate::properties::Properties;
use crate::registry::ClientList;

/// Appends one client per index setting both `oidc.id` and `oidc.secret`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OidcClientBuilder;

impl ClientBuilder for OidcClientBuilder {
    fn try_create_clients(
        &self,
        properties: &Properties,
        clients: &mut ClientList,
    ) -> Result<(), ConfigError> {
        for i in 0..=keys::MAX_NUM_CLIENTS {
            if !properties.is_set_at(keys::OIDC_ID, i) || !properties.is_set_at(keys::OIDC_SECRET, i)
            {
                continue;
            }

            let mut client = OidcClient::new(
                i,
                properties.get_at(keys::OIDC_ID, i).unwrap_or_default(),
                properties.get_at(keys::OIDC_SECRET, i).unwrap_or_default(),
            );
            if let Some(oidc_type) = properties.get_at(keys::OIDC_TYPE, i) {
                if !oidc_type.trim().is_empty() {
                    let parsed = OidcType::parse(oidc_type.trim())
                        .ok_or_else(|| ConfigError::invalid(keys::OIDC_TYPE, i, oidc_type))?;
                    client = client.oidc_type(parsed);
                }
            }
            if let Some(uri) = properties.get_at(keys::OIDC_DISCOVERY_URI, i) {
                if !uri.trim().is_empty() {
                    client = client.discovery_uri(uri);
                }
            }
            if let Some(scope) = properties.get_at(keys::OIDC_SCOPE, i) {
                if !scope.trim().is_empty() {
                    client = client.scope(scope);
                }
            }
            if let Some(use_nonce) = properties.get_at(keys::OIDC_USE_NONCE, i) {
                if !use_nonce.trim().is_empty() {
                    client = client.use_nonce(parse_bool(keys::OIDC_USE_NONCE, i, use_nonce)?);
                }
            }
            if let Some(algorithm) = properties.get_at(keys::OIDC_PREFERRED_JWS_ALGORITHM, i) {
                if !algorithm.trim().is_empty() {
                    client = client.preferred_jws_algorithm(algorithm);
                }
            }
            if let Some(skew) = properties.get_at(keys::OIDC_MAX_CLOCK_SKEW, i) {
                if !skew.trim().is_empty() {
                    client = client.max_clock_skew(parse_u32(keys::OIDC_MAX_CLOCK_SKEW, i, skew)?);
                }
            }

            debug!("created oidc client oidc{}", i);
            clients.push(Box::new(client));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_client_with_options() {
        let props = Properties::new()
            .with("oidc.id.0", "client-id")
            .with("oidc.secret.0", "client-secret")
            .with("oidc.type.0", "google")
            .with("oidc.useNonce.0", "true")
            .with("oidc.maxClockSkew.0", "30");
        let mut clients = ClientList::new();

        OidcClientBuilder.try_create_clients(&props, &mut clients).unwrap();

        let client = clients.find("oidc0").unwrap();
        let oidc = client.as_any().downcast_ref::<OidcClient>().unwrap();
        assert_eq!(oidc.oidc_type, OidcType::Google);
        assert!(oidc.use_nonce);
        assert_eq!(oidc.max_clock_skew, Some(30));
    }

    #[test]
    fn test_id_without_secret_is_skipped() {
        let props = Properties::new().with("oidc.id.0", "client-id");
        let mut clients = ClientList::new();

        OidcClientBuilder.try_create_clients(&props, &mut clients).unwrap();
        assert!(clients.is_empty());
    }

    #[test]
    fn test_bad_nonce_flag_fails() {
        let props = Properties::new()
            .with("oidc.id.0", "client-id")
            .with("oidc.secret.0", "client-secret")
            .with("oidc.useNonce.0", "yes");
        let mut clients = ClientList::new();

        let err = OidcClientBuilder
            .try_create_clients(&props, &mut clients)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPropertyValue { .. }));
    }
}
