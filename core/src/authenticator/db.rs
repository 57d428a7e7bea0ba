//! Relational database authenticator definitions.

use std::any::Any;
use std::sync::Arc;

use crate::authenticator::{Authenticator, AuthenticatorKind};
use crate::crypto::PasswordEncoder;

/// One configured database-backed authenticator.
///
/// Either a datasource class name or a JDBC-style URL identifies the
/// database. When a password encoder is referenced by name, it is resolved
/// against the encoder registry while the configuration is assembled, so a
/// dangling reference fails the build instead of the first login.
#[derive(Clone)]
pub struct DbAuthenticator {
    name: String,
    pub data_source_class_name: Option<String>,
    pub jdbc_url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub users_table: String,
    /// Extra columns loaded into the user profile.
    pub attributes: Vec<String>,
    password_encoder: Option<Arc<dyn PasswordEncoder>>,
}

impl DbAuthenticator {
    /// Creates a definition named `db{index}` reading from the `users`
    /// table.
    pub fn new(index: usize) -> Self {
        DbAuthenticator {
            name: format!("db{}", index),
            data_source_class_name: None,
            jdbc_url: None,
            username: None,
            password: None,
            users_table: "users".to_string(),
            attributes: Vec::new(),
            password_encoder: None,
        }
    }

    /// Registry name of this definition.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the resolved password encoder.
    pub fn with_password_encoder(mut self, encoder: Arc<dyn PasswordEncoder>) -> Self {
        self.password_encoder = Some(encoder);
        self
    }

    /// The resolved password encoder, when one was referenced.
    pub fn password_encoder(&self) -> Option<&Arc<dyn PasswordEncoder>> {
        self.password_encoder.as_ref()
    }
}

impl Authenticator for DbAuthenticator {
    fn kind(&self) -> AuthenticatorKind {
        AuthenticatorKind::Db
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
