//! The configuration factory.

use tracing::debug;

use crate::builder::{BuilderSet, Stage};
use crate::config::Config;
use crate::detection::ProtocolFamily;
use crate::error::ConfigError;
use crate::properties::Properties;
use crate::registry::{AuthenticatorRegistry, ClientList, EncoderRegistry};

/// Builds a [`Config`] from a flat property map.
///
/// For each protocol family, in the fixed
/// [`ProtocolFamily::BUILD_ORDER`]: run the family's detection predicate,
/// and when it is true hand the shared collections to the installed builder.
/// Detection is a heuristic "try" - a detected family whose builder emits
/// nothing is fine; a builder hitting an unusable property value aborts the
/// whole build.
///
/// # Example
/// ```
/// use props_security_core::{Properties, PropertiesConfigFactory};
///
/// let props = Properties::new().with("cas.loginUrl.0", "https://cas.example.org/login");
/// let config = PropertiesConfigFactory::new(props)
///     .with_callback_url("https://app.example.org/callback")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.clients().len(), 1);
/// assert_eq!(config.callback_url(), Some("https://app.example.org/callback"));
/// ```
pub struct PropertiesConfigFactory {
    callback_url: Option<String>,
    properties: Properties,
    builders: BuilderSet,
}

impl PropertiesConfigFactory {
    /// Creates a factory with the standard builder suite and no callback
    /// URL.
    pub fn new(properties: Properties) -> Self {
        PropertiesConfigFactory {
            callback_url: None,
            properties,
            builders: BuilderSet::standard(),
        }
    }

    /// Sets the callback URL stored in the resulting configuration.
    pub fn with_callback_url(mut self, callback_url: impl Into<String>) -> Self {
        self.callback_url = Some(callback_url.into());
        self
    }

    /// Replaces the builder suite.
    pub fn with_builders(mut self, builders: BuilderSet) -> Self {
        self.builders = builders;
        self
    }

    /// Runs detection and assembly once over the property snapshot.
    ///
    /// The call is synchronous, performs no I/O, and can be re-invoked with
    /// the same properties; an empty property set yields an empty
    /// configuration, not an error.
    pub fn build(&self) -> Result<Config, ConfigError> {
        let mut encoders = EncoderRegistry::new();
        let mut authenticators = AuthenticatorRegistry::new();
        let mut clients = ClientList::new();

        for family in ProtocolFamily::BUILD_ORDER {
            if !family.is_configured(&self.properties) {
                continue;
            }
            let stage = match self.builders.stage(family) {
                Some(stage) => stage,
                None => {
                    debug!("{} configured but no builder installed, skipping", family);
                    continue;
                }
            };
            debug!("{} configured, running builder", family);
            match stage {
                Stage::Encoder(builder) => {
                    builder.try_create_password_encoder(&self.properties, &mut encoders)?
                }
                Stage::Authenticator(builder) => builder.try_build_authenticator(
                    &self.properties,
                    &mut authenticators,
                    &encoders,
                )?,
                Stage::Client(builder) => {
                    builder.try_create_clients(&self.properties, &mut clients)?
                }
                Stage::Http(builder) => builder.try_create_authenticators_and_clients(
                    &self.properties,
                    &mut authenticators,
                    &mut clients,
                )?,
            }
        }

        Ok(Config::new(
            self.callback_url.clone(),
            clients,
            authenticators,
            encoders,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_properties_build_empty_config() {
        let config = PropertiesConfigFactory::new(Properties::new()).build().unwrap();

        assert!(config.clients().is_empty());
        assert!(config.authenticators().is_empty());
        assert!(config.encoders().is_empty());
        assert_eq!(config.callback_url(), None);
    }

    #[test]
    fn test_detected_family_without_builder_is_skipped() {
        let props = Properties::new().with("cas.loginUrl.0", "https://cas.example.org/login");
        let config = PropertiesConfigFactory::new(props)
            .with_builders(BuilderSet::empty())
            .build()
            .unwrap();

        assert!(config.clients().is_empty());
    }

    #[test]
    fn test_builder_error_aborts_build() {
        let props = Properties::new().with("encoder.spring.type.0", "plaintext");
        let err = PropertiesConfigFactory::new(props).build().unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedEncoderType { .. }));
    }
}
