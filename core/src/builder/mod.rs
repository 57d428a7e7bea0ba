//! Builder collaborators and the builder registry.
//!
//! A builder turns one detected property family into concrete objects. The
//! traits here are the seam to the protocol-specific world: the engine only
//! decides *whether* a family builder runs and *in what order* results are
//! merged.
//!
//! [`BuilderSet`] is the explicit capability list: one optional builder slot
//! per protocol family, supplied by the caller. A family that is detected in
//! the properties but has no installed builder is skipped; library
//! availability is declared here instead of being probed from the
//! environment.
//!
//! - `spring_encoder` / `shiro_encoder` - password encoder builders
//! - `ldap` / `db` - authenticator builders
//! - `oauth` / `saml` / `cas` / `oidc` - self-contained client builders
//! - `http` - REST authenticators plus form/basic/anonymous clients

use crate::detection::ProtocolFamily;
use crate::error::ConfigError;
use crate::properties::Properties;
use crate::registry::{AuthenticatorRegistry, ClientList, EncoderRegistry};

pub use cas::CasClientBuilder;
pub use db::DbAuthenticatorBuilder;
pub use http::HttpClientsBuilder;
pub use ldap::LdapAuthenticatorBuilder;
pub use oauth::OAuthBuilder;
pub use oidc::OidcClientBuilder;
pub use saml::SamlClientBuilder;
pub use shiro_encoder::ShiroEncoderBuilder;
pub use spring_encoder::SpringEncoderBuilder;

pub mod cas;
pub mod db;
pub mod http;
pub mod ldap;
pub mod oauth;
pub mod oidc;
pub mod saml;
pub mod shiro_encoder;
pub mod spring_encoder;

/// Builds named password encoders from one property family.
pub trait EncoderBuilder: Send + Sync {
    /// Scans the encoder index range and registers zero or more encoders.
    fn try_create_password_encoder(
        &self,
        properties: &Properties,
        encoders: &mut EncoderRegistry,
    ) -> Result<(), ConfigError>;
}

/// Builds named authenticator definitions from one property family.
pub trait AuthenticatorBuilder: Send + Sync {
    /// Scans the authenticator index range and registers zero or more
    /// definitions. Previously registered encoders are available for
    /// resolution by name.
    fn try_build_authenticator(
        &self,
        properties: &Properties,
        authenticators: &mut AuthenticatorRegistry,
        encoders: &EncoderRegistry,
    ) -> Result<(), ConfigError>;
}

/// Builds self-contained clients from one property family.
pub trait ClientBuilder: Send + Sync {
    /// Appends zero or more clients.
    fn try_create_clients(
        &self,
        properties: &Properties,
        clients: &mut ClientList,
    ) -> Result<(), ConfigError>;
}

/// Builds the HTTP family: REST authenticators first, then clients that may
/// resolve authenticators by name.
pub trait HttpClientBuilder: Send + Sync {
    /// Registers REST authenticators and appends form/basic/anonymous
    /// clients.
    fn try_create_authenticators_and_clients(
        &self,
        properties: &Properties,
        authenticators: &mut AuthenticatorRegistry,
        clients: &mut ClientList,
    ) -> Result<(), ConfigError>;
}

/// Borrowed view of one installed build stage.
pub enum Stage<'a> {
    Encoder(&'a dyn EncoderBuilder),
    Authenticator(&'a dyn AuthenticatorBuilder),
    Client(&'a dyn ClientBuilder),
    Http(&'a dyn HttpClientBuilder),
}

/// Per-family builder slots, assembled by the caller.
///
/// # Example
/// ```
/// use props_security_core::builder::{BuilderSet, CasClientBuilder};
///
/// // only CAS support, nothing else
/// let builders = BuilderSet::empty().cas(CasClientBuilder);
/// assert_eq!(builders.stages().len(), 1);
/// ```
pub struct BuilderSet {
    spring_encoder: Option<Box<dyn EncoderBuilder>>,
    shiro_encoder: Option<Box<dyn EncoderBuilder>>,
    ldap: Option<Box<dyn AuthenticatorBuilder>>,
    db: Option<Box<dyn AuthenticatorBuilder>>,
    oauth: Option<Box<dyn ClientBuilder>>,
    saml: Option<Box<dyn ClientBuilder>>,
    cas: Option<Box<dyn ClientBuilder>>,
    oidc: Option<Box<dyn ClientBuilder>>,
    http: Option<Box<dyn HttpClientBuilder>>,
}

impl BuilderSet {
    /// All nine default builders.
    pub fn standard() -> Self {
        BuilderSet::empty()
            .spring_encoder(SpringEncoderBuilder)
            .shiro_encoder(ShiroEncoderBuilder)
            .ldap(LdapAuthenticatorBuilder)
            .db(DbAuthenticatorBuilder)
            .oauth(OAuthBuilder)
            .saml(SamlClientBuilder)
            .cas(CasClientBuilder)
            .oidc(OidcClientBuilder)
            .http(HttpClientsBuilder)
    }

    /// No builders installed.
    pub fn empty() -> Self {
        BuilderSet {
            spring_encoder: None,
            shiro_encoder: None,
            ldap: None,
            db: None,
            oauth: None,
            saml: None,
            cas: None,
            oidc: None,
            http: None,
        }
    }

    /// Installs the spring encoder builder.
    pub fn spring_encoder(mut self, builder: impl EncoderBuilder + 'static) -> Self {
        self.spring_encoder = Some(Box::new(builder));
        self
    }

    /// Installs the shiro encoder builder.
    pub fn shiro_encoder(mut self, builder: impl EncoderBuilder + 'static) -> Self {
        self.shiro_encoder = Some(Box::new(builder));
        self
    }

    /// Installs the LDAP authenticator builder.
    pub fn ldap(mut self, builder: impl AuthenticatorBuilder + 'static) -> Self {
        self.ldap = Some(Box::new(builder));
        self
    }

    /// Installs the database authenticator builder.
    pub fn db(mut self, builder: impl AuthenticatorBuilder + 'static) -> Self {
        self.db = Some(Box::new(builder));
        self
    }

    /// Installs the OAuth client builder.
    pub fn oauth(mut self, builder: impl ClientBuilder + 'static) -> Self {
        self.oauth = Some(Box::new(builder));
        self
    }

    /// Installs the SAML client builder.
    pub fn saml(mut self, builder: impl ClientBuilder + 'static) -> Self {
        self.saml = Some(Box::new(builder));
        self
    }

    /// Installs the CAS client builder.
    pub fn cas(mut self, builder: impl ClientBuilder + 'static) -> Self {
        self.cas = Some(Box::new(builder));
        self
    }

    /// Installs the OIDC client builder.
    pub fn oidc(mut self, builder: impl ClientBuilder + 'static) -> Self {
        self.oidc = Some(Box::new(builder));
        self
    }

    /// Installs the HTTP authenticators-and-clients builder.
    pub fn http(mut self, builder: impl HttpClientBuilder + 'static) -> Self {
        self.http = Some(Box::new(builder));
        self
    }

    /// The installed builder for one family, if any.
    pub fn stage(&self, family: ProtocolFamily) -> Option<Stage<'_>> {
        match family {
            ProtocolFamily::SpringEncoder => self.spring_encoder.as_deref().map(Stage::Encoder),
            ProtocolFamily::ShiroEncoder => self.shiro_encoder.as_deref().map(Stage::Encoder),
            ProtocolFamily::LdapAuthenticator => self.ldap.as_deref().map(Stage::Authenticator),
            ProtocolFamily::DbAuthenticator => self.db.as_deref().map(Stage::Authenticator),
            ProtocolFamily::OAuth => self.oauth.as_deref().map(Stage::Client),
            ProtocolFamily::Saml => self.saml.as_deref().map(Stage::Client),
            ProtocolFamily::Cas => self.cas.as_deref().map(Stage::Client),
            ProtocolFamily::Oidc => self.oidc.as_deref().map(Stage::Client),
            ProtocolFamily::Http => self.http.as_deref().map(Stage::Http),
        }
    }

    /// The installed (family, builder) pairs in build order, regardless of
    /// installation order.
    pub fn stages(&self) -> Vec<(ProtocolFamily, Stage<'_>)> {
        ProtocolFamily::BUILD_ORDER
            .iter()
            .filter_map(|family| self.stage(*family).map(|stage| (*family, stage)))
            .collect()
    }
}

impl Default for BuilderSet {
    fn default() -> Self {
        BuilderSet::standard()
    }
}

/// Parses a boolean property ("true"/"false").
pub(crate) fn parse_bool(key: &str, index: usize, value: &str) -> Result<bool, ConfigError> {
    match value.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ConfigError::invalid(key, index, value)),
    }
}

/// Parses an unsigned numeric property.
pub(crate) fn parse_u64(key: &str, index: usize, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::invalid(key, index, value))
}

/// Parses an unsigned 32-bit numeric property.
pub(crate) fn parse_u32(key: &str, index: usize, value: &str) -> Result<u32, ConfigError> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| ConfigError::invalid(key, index, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stages_follow_build_order() {
        let builders = BuilderSet::standard();
        let families: Vec<ProtocolFamily> = builders.stages().iter().map(|(f, _)| *f).collect();
        assert_eq!(families, ProtocolFamily::BUILD_ORDER.to_vec());
    }

    #[test]
    fn test_installation_order_does_not_matter() {
        let builders = BuilderSet::empty()
            .http(HttpClientsBuilder)
            .spring_encoder(SpringEncoderBuilder);
        let families: Vec<ProtocolFamily> = builders.stages().iter().map(|(f, _)| *f).collect();
        assert_eq!(
            families,
            vec![ProtocolFamily::SpringEncoder, ProtocolFamily::Http]
        );
    }

    #[test]
    fn test_empty_set_has_no_stages() {
        assert!(BuilderSet::empty().stages().is_empty());
    }
}
