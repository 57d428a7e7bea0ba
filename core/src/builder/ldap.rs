//! LDAP authenticator builder.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::authenticator::{LdapAuthenticator, LdapConnectionType};
use crate::builder::{parse_bool, parse_u64, AuthenticatorBuilder};
use crate::error::ConfigError;
use crate::keys;
use crate::properties::Properties;
use crate::registry::{AuthenticatorRegistry, EncoderRegistry};

/// Registers one definition per index setting `ldap.type`, under the name
/// `ldap{index}`. The server URL is required; everything else has search
/// defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct LdapAuthenticatorBuilder;

impl AuthenticatorBuilder for LdapAuthenticatorBuilder {
    fn try_build_authenticator(
        &self,
        properties: &Properties,
        authenticators: &mut AuthenticatorRegistry,
        _encoders: &EncoderRegistry,
    ) -> Result<(), ConfigError> {
        for i in 0..=keys::MAX_NUM_AUTHENTICATORS {
            let connection_type = match properties.get_at(keys::LDAP_TYPE, i) {
                Some(t) if !t.trim().is_empty() => t.trim(),
                _ => continue,
            };
            let connection_type = LdapConnectionType::parse(connection_type)
                .ok_or_else(|| ConfigError::invalid(keys::LDAP_TYPE, i, connection_type))?;

            let url = properties
                .get_at(keys::LDAP_URL, i)
                .filter(|u| !u.trim().is_empty())
                .ok_or_else(|| ConfigError::missing(keys::LDAP_URL, i))?;

            let mut authenticator = LdapAuthenticator::new(i, connection_type, url);
            if let Some(base_dn) = properties.get_at(keys::LDAP_BASE_DN, i) {
                authenticator.base_dn = base_dn.to_string();
            }
            if let Some(base) = properties.get_at(keys::LDAP_USER_SEARCH_BASE, i) {
                authenticator.user_search_base = base.to_string();
            }
            if let Some(filter) = properties.get_at(keys::LDAP_USER_SEARCH_FILTER, i) {
                authenticator.user_search_filter = filter.to_string();
            }
            if let Some(pattern) = properties.get_at(keys::LDAP_USER_DN_PATTERN, i) {
                authenticator.user_dn_pattern = Some(pattern.to_string());
            }
            if let Some(bind_dn) = properties.get_at(keys::LDAP_BIND_DN, i) {
                authenticator.bind_dn = Some(bind_dn.to_string());
            }
            if let Some(bind_password) = properties.get_at(keys::LDAP_BIND_PASSWORD, i) {
                authenticator.bind_password = Some(bind_password.to_string());
            }
            if let Some(attribute) = properties.get_at(keys::LDAP_USERNAME_ATTRIBUTE, i) {
                authenticator.username_attribute = attribute.to_string();
            }
            if let Some(timeout) = properties.get_at(keys::LDAP_CONNECT_TIMEOUT, i) {
                authenticator.connect_timeout =
                    Duration::from_millis(parse_u64(keys::LDAP_CONNECT_TIMEOUT, i, timeout)?);
            }
            if let Some(timeout) = properties.get_at(keys::LDAP_OPERATION_TIMEOUT, i) {
                authenticator.operation_timeout =
                    Duration::from_millis(parse_u64(keys::LDAP_OPERATION_TIMEOUT, i, timeout)?);
            }
            if let Some(starttls) = properties.get_at(keys::LDAP_USE_START_TLS, i) {
                authenticator.use_starttls = parse_bool(keys::LDAP_USE_START_TLS, i, starttls)?;
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
    use crate::authenticator::AuthenticatorKind;

    #[test]
    fn test_registers_definition_with_defaults() {
        let props = Properties::new()
            .with("ldap.type.0", "search")
            .with("ldap.url.0", "ldap://localhost:389");
        let mut authenticators = AuthenticatorRegistry::new();

        LdapAuthenticatorBuilder
            .try_build_authenticator(&props, &mut authenticators, &EncoderRegistry::new())
            .unwrap();

        let authenticator = authenticators.get("ldap0").unwrap();
        assert_eq!(authenticator.kind(), AuthenticatorKind::Ldap);
        let ldap = authenticator
            .as_any()
            .downcast_ref::<LdapAuthenticator>()
            .unwrap();
        assert_eq!(ldap.user_search_filter, "(uid={0})");
        assert_eq!(ldap.connect_timeout, Duration::from_millis(5_000));
    }

    #[test]
    fn test_missing_url_fails() {
        let props = Properties::new().with("ldap.type.0", "direct");
        let mut authenticators = AuthenticatorRegistry::new();

        let err = LdapAuthenticatorBuilder
            .try_build_authenticator(&props, &mut authenticators, &EncoderRegistry::new())
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingProperty { .. }));
    }

    #[test]
    fn test_unknown_type_fails() {
        let props = Properties::new()
            .with("ldap.type.0", "kerberos")
            .with("ldap.url.0", "ldap://localhost:389");
        let mut authenticators = AuthenticatorRegistry::new();

        let err = LdapAuthenticatorBuilder
            .try_build_authenticator(&props, &mut authenticators, &EncoderRegistry::new())
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPropertyValue { .. }));
    }
}
