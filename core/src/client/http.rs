//! Form login, HTTP basic auth and anonymous clients.
//!
//! Unlike the self-contained protocol clients, form and basic auth clients
//! delegate credential checking to a named authenticator resolved from the
//! authenticator registry at assembly time.

use std::any::Any;
use std::sync::Arc;

use crate::authenticator::Authenticator;
use crate::client::{Client, ClientKind};

/// One configured login form client.
#[derive(Clone)]
pub struct FormClient {
    name: String,
    pub login_url: String,
    pub username_parameter: String,
    pub password_parameter: String,
    authenticator: Arc<dyn Authenticator>,
}

impl FormClient {
    /// Creates a client named `form{index}` with the default `username` /
    /// `password` form parameters.
    pub fn new(index: usize, login_url: impl Into<String>, authenticator: Arc<dyn Authenticator>) -> Self {
        FormClient {
            name: format!("form{}", index),
            login_url: login_url.into(),
            username_parameter: "username".to_string(),
            password_parameter: "password".to_string(),
            authenticator,
        }
    }

    /// Sets the form parameter carrying the username.
    pub fn username_parameter(mut self, parameter: impl Into<String>) -> Self {
        self.username_parameter = parameter.into();
        self
    }

    /// Sets the form parameter carrying the password.
    pub fn password_parameter(mut self, parameter: impl Into<String>) -> Self {
        self.password_parameter = parameter.into();
        self
    }

    /// The authenticator validating submitted credentials.
    pub fn authenticator(&self) -> &Arc<dyn Authenticator> {
        &self.authenticator
    }
}

impl Client for FormClient {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ClientKind {
        ClientKind::Form
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Challenge-based HTTP basic auth client (redirecting flow).
#[derive(Clone)]
pub struct IndirectBasicAuthClient {
    name: String,
    pub realm_name: String,
    authenticator: Arc<dyn Authenticator>,
}

impl IndirectBasicAuthClient {
    /// Creates a client named `indirectbasic{index}`.
    pub fn new(index: usize, authenticator: Arc<dyn Authenticator>) -> Self {
        IndirectBasicAuthClient {
            name: format!("indirectbasic{}", index),
            realm_name: "authentication required".to_string(),
            authenticator,
        }
    }

    /// Sets the realm sent in the `WWW-Authenticate` challenge.
    pub fn realm_name(mut self, realm: impl Into<String>) -> Self {
        self.realm_name = realm.into();
        self
    }

    /// The authenticator validating submitted credentials.
    pub fn authenticator(&self) -> &Arc<dyn Authenticator> {
        &self.authenticator
    }
}

impl Client for IndirectBasicAuthClient {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ClientKind {
        ClientKind::IndirectBasicAuth
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Header-only HTTP basic auth client (no challenge, for APIs).
#[derive(Clone)]
pub struct DirectBasicAuthClient {
    name: String,
    authenticator: Arc<dyn Authenticator>,
}

impl DirectBasicAuthClient {
    /// Creates a client named `directbasic{index}`.
    pub fn new(index: usize, authenticator: Arc<dyn Authenticator>) -> Self {
        DirectBasicAuthClient {
            name: format!("directbasic{}", index),
            authenticator,
        }
    }

    /// The authenticator validating submitted credentials.
    pub fn authenticator(&self) -> &Arc<dyn Authenticator> {
        &self.authenticator
    }
}

impl Client for DirectBasicAuthClient {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ClientKind {
        ClientKind::DirectBasicAuth
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Client granting an anonymous identity to every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnonymousClient;

impl Client for AnonymousClient {
    fn name(&self) -> &str {
        "anonymous"
    }

    fn kind(&self) -> ClientKind {
        ClientKind::Anonymous
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
