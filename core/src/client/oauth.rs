//! OAuth provider clients.

use std::any::Any;

use serde::{Deserialize, Serialize};

use crate::client::{Client, ClientKind};

/// Supported OAuth providers.
///
/// `Generic` covers any OAuth 2.0 provider configured with explicit
/// authorization and token endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OAuthProvider {
    Facebook,
    Twitter,
    Dropbox,
    Github,
    Yahoo,
    Google,
    Foursquare,
    WindowsLive,
    LinkedIn,
    Generic,
}

impl OAuthProvider {
    /// Provider token, also used as the client name.
    pub fn name(&self) -> &'static str {
        match self {
            OAuthProvider::Facebook => "facebook",
            OAuthProvider::Twitter => "twitter",
            OAuthProvider::Dropbox => "dropbox",
            OAuthProvider::Github => "github",
            OAuthProvider::Yahoo => "yahoo",
            OAuthProvider::Google => "google",
            OAuthProvider::Foursquare => "foursquare",
            OAuthProvider::WindowsLive => "windowslive",
            OAuthProvider::LinkedIn => "linkedin",
            OAuthProvider::Generic => "oauth2",
        }
    }
}

/// One configured OAuth provider.
///
/// # Example
/// ```
/// use props_security_core::client::{OAuthClient, OAuthProvider};
///
/// let client = OAuthClient::new(OAuthProvider::Github, "key", "secret")
///     .scope("read:user");
/// assert_eq!(client.provider, OAuthProvider::Github);
/// ```
#[derive(Debug, Clone)]
pub struct OAuthClient {
    pub provider: OAuthProvider,
    pub key: String,
    pub secret: String,
    pub scope: Option<String>,
    /// Extra profile fields requested from the provider (Facebook only).
    pub fields: Option<String>,
    /// Authorization endpoint; required for `Generic`, implied otherwise.
    pub auth_url: Option<String>,
    /// Token endpoint; required for `Generic`, implied otherwise.
    pub token_url: Option<String>,
    pub profile_url: Option<String>,
}

impl OAuthClient {
    /// Creates a client for a well-known provider.
    pub fn new(provider: OAuthProvider, key: impl Into<String>, secret: impl Into<String>) -> Self {
        OAuthClient {
            provider,
            key: key.into(),
            secret: secret.into(),
            scope: None,
            fields: None,
            auth_url: None,
            token_url: None,
            profile_url: None,
        }
    }

    /// Creates a generic OAuth 2.0 client with explicit endpoints.
    pub fn generic(
        key: impl Into<String>,
        secret: impl Into<String>,
        auth_url: impl Into<String>,
        token_url: impl Into<String>,
    ) -> Self {
        let mut client = OAuthClient::new(OAuthProvider::Generic, key, secret);
        client.auth_url = Some(auth_url.into());
        client.token_url = Some(token_url.into());
        client
    }

    /// Sets the requested scope.
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Sets the requested profile fields.
    pub fn fields(mut self, fields: impl Into<String>) -> Self {
        self.fields = Some(fields.into());
        self
    }

    /// Sets the profile endpoint.
    pub fn profile_url(mut self, profile_url: impl Into<String>) -> Self {
        self.profile_url = Some(profile_url.into());
        self
    }
}

impl Client for OAuthClient {
    fn name(&self) -> &str {
        self.provider.name()
    }

    fn kind(&self) -> ClientKind {
        ClientKind::OAuth
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
