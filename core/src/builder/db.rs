//! Database authenticator builder.

use std::sync::Arc;

use tracing::debug;

use crate::authenticator::DbAuthenticator;
use crate::builder::AuthenticatorBuilder;
use crate::error::ConfigError;
use crate::keys;
use crate::properties::Properties;
use crate::registry::{AuthenticatorRegistry, EncoderRegistry};

/// Registers one definition per index identifying a database, under the name
/// `db{index}`.
///
/// This is the stage that makes the encoder-before-database ordering
/// load-bearing: a `db.passwordEncoder` reference is resolved against the
/// encoder registry as it stands when this builder runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct DbAuthenticatorBuilder;

impl AuthenticatorBuilder for DbAuthenticatorBuilder {
    fn try_build_authenticator(
        &self,
        properties: &Properties,
        authenticators: &mut AuthenticatorRegistry,
        encoders: &EncoderRegistry,
    ) -> Result<(), ConfigError> {
        for i in 0..=keys::MAX_NUM_AUTHENTICATORS {
            let has_class = properties.is_set_at(keys::DB_DATASOURCE_CLASS_NAME, i);
            let has_url = properties.is_set_at(keys::DB_JDBC_URL, i);
            if !has_class && !has_url {
                continue;
            }

            let mut authenticator = DbAuthenticator::new(i);
            if has_class {
                authenticator.data_source_class_name = properties
                    .get_at(keys::DB_DATASOURCE_CLASS_NAME, i)
                    .map(str::to_string);
            }
            if has_url {
                authenticator.jdbc_url = properties.get_at(keys::DB_JDBC_URL, i).map(str::to_string);
            }
            authenticator.username = properties.get_at(keys::DB_USERNAME, i).map(str::to_string);
            authenticator.password = properties.get_at(keys::DB_PASSWORD, i).map(str::to_string);
            if let Some(table) = properties.get_at(keys::DB_USERS_TABLE, i) {
                if !table.trim().is_empty() {
                    authenticator.users_table = table.trim().to_string();
                }
            }
            if let Some(attributes) = properties.get_at(keys::DB_ATTRIBUTES, i) {
                authenticator.attributes = attributes
                    .split(',')
                    .map(str::trim)
                    .filter(|a| !a.is_empty())
                    .map(str::to_string)
                    .collect();
            }
            if let Some(encoder_name) = properties.get_at(keys::DB_PASSWORD_ENCODER, i) {
                if !encoder_name.trim().is_empty() {
                    let encoder_name = encoder_name.trim();
                    let encoder =
                        encoders
                            .get(encoder_name)
                            .ok_or_else(|| ConfigError::UnknownEncoder {
                                name: encoder_name.to_string(),
                            })?;
                    authenticator = authenticator.with_password_encoder(encoder);
                }
            }

            let name = authenticator.name().to_string();
            debug!("registering authenticator {}", name);
            authenticators.register(name, Arc::new(authenticator));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::NoOpPasswordEncoder;

    #[test]
    fn test_registers_definition_from_jdbc_url() {
        let props = Properties::new()
            .with("db.jdbcUrl.0", "jdbc:postgresql://localhost/app")
            .with("db.username.0", "app")
            .with("db.attributes.0", "first_name, last_name");
        let mut authenticators = AuthenticatorRegistry::new();

        DbAuthenticatorBuilder
            .try_build_authenticator(&props, &mut authenticators, &EncoderRegistry::new())
            .unwrap();

        let db = authenticators.get("db0").unwrap();
        let db = db.as_any().downcast_ref::<DbAuthenticator>().unwrap();
        assert_eq!(db.jdbc_url.as_deref(), Some("jdbc:postgresql://localhost/app"));
        assert_eq!(db.users_table, "users");
        assert_eq!(db.attributes, vec!["first_name", "last_name"]);
        assert!(db.password_encoder().is_none());
    }

    #[test]
    fn test_resolves_registered_encoder() {
        let props = Properties::new()
            .with("db.jdbcUrl.0", "jdbc:h2:mem:test")
            .with("db.passwordEncoder.0", "springencoder0");
        let mut encoders = EncoderRegistry::new();
        encoders.register("springencoder0", Arc::new(NoOpPasswordEncoder));
        let mut authenticators = AuthenticatorRegistry::new();

        DbAuthenticatorBuilder
            .try_build_authenticator(&props, &mut authenticators, &encoders)
            .unwrap();

        let db = authenticators.get("db0").unwrap();
        let db = db.as_any().downcast_ref::<DbAuthenticator>().unwrap();
        assert!(db.password_encoder().is_some());
    }

    #[test]
    fn test_dangling_encoder_reference_fails() {
        let props = Properties::new()
            .with("db.jdbcUrl.0", "jdbc:h2:mem:test")
            .with("db.passwordEncoder.0", "nosuchencoder");
        let mut authenticators = AuthenticatorRegistry::new();

        let err = DbAuthenticatorBuilder
            .try_build_authenticator(&props, &mut authenticators, &EncoderRegistry::new())
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownEncoder { .. }));
    }
}
