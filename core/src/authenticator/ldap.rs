//! LDAP / Active Directory authenticator definitions.

use std::any::Any;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::authenticator::{Authenticator, AuthenticatorKind};

/// How the directory connection authenticates users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LdapConnectionType {
    /// Bind directly as the user via a DN pattern.
    Direct,
    /// Active Directory semantics (userPrincipalName bind).
    ActiveDirectory,
    /// Search for the user entry first, then bind.
    Search,
}

impl LdapConnectionType {
    /// Parses the type property value ("direct", "ad", "search").
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "direct" => Some(LdapConnectionType::Direct),
            "ad" => Some(LdapConnectionType::ActiveDirectory),
            "search" => Some(LdapConnectionType::Search),
            _ => None,
        }
    }
}

/// One configured directory connection.
#[derive(Debug, Clone)]
pub struct LdapAuthenticator {
    name: String,
    pub connection_type: LdapConnectionType,
    /// Server URL, e.g. "ldap://localhost:389" or "ldaps://localhost:636".
    pub url: String,
    /// Base DN for searches, e.g. "dc=example,dc=com".
    pub base_dn: String,
    /// User search base, relative to the base DN.
    pub user_search_base: String,
    /// User search filter; `{0}` is replaced by the username.
    pub user_search_filter: String,
    /// DN pattern for direct binds; `{0}` is replaced by the username.
    pub user_dn_pattern: Option<String>,
    /// Bind DN for search connections.
    pub bind_dn: Option<String>,
    pub bind_password: Option<String>,
    pub username_attribute: String,
    pub connect_timeout: Duration,
    pub operation_timeout: Duration,
    pub use_starttls: bool,
}

impl LdapAuthenticator {
    /// Creates a definition named `ldap{index}` with search defaults.
    pub fn new(index: usize, connection_type: LdapConnectionType, url: impl Into<String>) -> Self {
        LdapAuthenticator {
            name: format!("ldap{}", index),
            connection_type,
            url: url.into(),
            base_dn: String::new(),
            user_search_base: "ou=users".to_string(),
            user_search_filter: "(uid={0})".to_string(),
            user_dn_pattern: None,
            bind_dn: None,
            bind_password: None,
            username_attribute: "uid".to_string(),
            connect_timeout: Duration::from_millis(5_000),
            operation_timeout: Duration::from_millis(10_000),
            use_starttls: false,
        }
    }

    /// Registry name of this definition.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Authenticator for LdapAuthenticator {
    fn kind(&self) -> AuthenticatorKind {
        AuthenticatorKind::Ldap
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
