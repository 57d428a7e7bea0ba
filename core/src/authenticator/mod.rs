//! Authenticator definitions.
//!
//! An authenticator validates raw credentials against a backing store (LDAP
//! directory, database, REST endpoint). This crate assembles *definitions* -
//! validated connection settings plus resolved encoder references - and
//! registers them by name; wiring a definition to its live backend is the
//! runtime's job.
//!
//! - `ldap` - LDAP / Active Directory definitions
//! - `db` - relational database definitions
//! - `rest` - REST endpoint definitions

use std::any::Any;

use derive_more::Display;
use serde::{Deserialize, Serialize};

pub use db::DbAuthenticator;
pub use ldap::{LdapAuthenticator, LdapConnectionType};
pub use rest::RestAuthenticator;

pub mod db;
pub mod ldap;
pub mod rest;

/// A named credential validator definition.
pub trait Authenticator: Send + Sync {
    /// The backing-store family of this authenticator.
    fn kind(&self) -> AuthenticatorKind;

    /// Downcast seam so consumers can recover the concrete definition.
    fn as_any(&self) -> &dyn Any;
}

/// Backing-store family of an authenticator.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthenticatorKind {
    #[display("ldap")]
    Ldap,
    #[display("db")]
    Db,
    #[display("rest")]
    Rest,
    #[display("test")]
    Test,
}

/// Development-only authenticator accepting any username equal to its
/// password.
///
/// Client properties referencing the reserved name `testUsernamePassword`
/// resolve to this authenticator instead of a registry entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleTestAuthenticator;

impl Authenticator for SimpleTestAuthenticator {
    fn kind(&self) -> AuthenticatorKind {
        AuthenticatorKind::Test
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
