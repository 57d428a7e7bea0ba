//! Client descriptors.
//!
//! A client is one configured authentication mechanism instance (one OAuth
//! provider, one SAML service provider, ...). The descriptors here carry
//! validated configuration only; running the actual protocol flow is the job
//! of whatever consumes the assembled configuration.
//!
//! - `oauth` - OAuth 1.0/2.0 provider clients
//! - `saml` - SAML 2.0 service provider clients
//! - `cas` - CAS clients
//! - `oidc` - OpenID Connect clients
//! - `http` - form login, HTTP basic auth and anonymous clients

use std::any::Any;

use derive_more::Display;
use serde::{Deserialize, Serialize};

pub use cas::{CasClient, CasProtocol};
pub use http::{AnonymousClient, DirectBasicAuthClient, FormClient, IndirectBasicAuthClient};
pub use oauth::{OAuthClient, OAuthProvider};
pub use oidc::{OidcClient, OidcType};
pub use saml::SamlClient;

pub mod cas;
pub mod http;
pub mod oauth;
pub mod oidc;
pub mod saml;

/// A configured authentication mechanism instance.
pub trait Client: Send + Sync {
    /// Unique name within one configuration (used for lookup and logging).
    fn name(&self) -> &str;

    /// The protocol family this client belongs to.
    fn kind(&self) -> ClientKind;

    /// Downcast seam so consumers can recover the concrete descriptor.
    fn as_any(&self) -> &dyn Any;
}

/// Protocol family of a client.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClientKind {
    #[display("oauth")]
    OAuth,
    #[display("saml")]
    Saml,
    #[display("cas")]
    Cas,
    #[display("oidc")]
    Oidc,
    #[display("form")]
    Form,
    #[display("indirect-basic-auth")]
    IndirectBasicAuth,
    #[display("direct-basic-auth")]
    DirectBasicAuth,
    #[display("anonymous")]
    Anonymous,
}
