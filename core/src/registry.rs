//! Accumulator collections shared across build stages.
//!
//! The registries are plain owned maps, mutated only while one build runs.
//! Later stages read what earlier stages registered (the database
//! authenticator resolves encoders, HTTP clients resolve authenticators),
//! which is why the stage order is load-bearing. A second registration under
//! an existing name replaces the first; the replacement is logged.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::warn;

use crate::authenticator::Authenticator;
use crate::client::Client;
use crate::crypto::PasswordEncoder;

/// Password encoders keyed by name.
#[derive(Clone, Default)]
pub struct EncoderRegistry {
    entries: HashMap<String, Arc<dyn PasswordEncoder>>,
}

impl EncoderRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        EncoderRegistry {
            entries: HashMap::new(),
        }
    }

    /// Registers an encoder, replacing any previous entry of the same name.
    pub fn register(&mut self, name: impl Into<String>, encoder: Arc<dyn PasswordEncoder>) {
        let name = name.into();
        if self.entries.insert(name.clone(), encoder).is_some() {
            warn!("password encoder {} replaced", name);
        }
    }

    /// Looks up an encoder by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn PasswordEncoder>> {
        self.entries.get(name).cloned()
    }

    /// True when an encoder of that name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of registered encoders.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for EncoderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.entries.keys()).finish()
    }
}

/// Authenticator definitions keyed by name.
#[derive(Clone, Default)]
pub struct AuthenticatorRegistry {
    entries: HashMap<String, Arc<dyn Authenticator>>,
}

impl AuthenticatorRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        AuthenticatorRegistry {
            entries: HashMap::new(),
        }
    }

    /// Registers an authenticator, replacing any previous entry of the same
    /// name.
    pub fn register(&mut self, name: impl Into<String>, authenticator: Arc<dyn Authenticator>) {
        let name = name.into();
        if self.entries.insert(name.clone(), authenticator).is_some() {
            warn!("authenticator {} replaced", name);
        }
    }

    /// Looks up an authenticator by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Authenticator>> {
        self.entries.get(name).cloned()
    }

    /// True when an authenticator of that name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of registered authenticators.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for AuthenticatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.entries.keys()).finish()
    }
}

/// Ordered list of assembled clients.
///
/// Order is the stage order of the build, then the emission order of the
/// builder within a stage (increasing index).
#[derive(Default)]
pub struct ClientList {
    clients: Vec<Box<dyn Client>>,
}

impl ClientList {
    /// Creates an empty list.
    pub fn new() -> Self {
        ClientList {
            clients: Vec::new(),
        }
    }

    /// Appends a client.
    pub fn push(&mut self, client: Box<dyn Client>) {
        self.clients.push(client);
    }

    /// Iterates the clients in assembly order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Client> {
        self.clients.iter().map(Box::as_ref)
    }

    /// Finds a client by name.
    pub fn find(&self, name: &str) -> Option<&dyn Client> {
        self.iter().find(|c| c.name() == name)
    }

    /// Number of clients.
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    /// True when no client was assembled.
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

impl fmt::Debug for ClientList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|c| c.name()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::NoOpPasswordEncoder;

    #[test]
    fn test_later_registration_wins() {
        let mut registry = EncoderRegistry::new();
        registry.register("enc", Arc::new(NoOpPasswordEncoder));
        registry.register("enc", Arc::new(NoOpPasswordEncoder));

        assert_eq!(registry.len(), 1);
        assert!(registry.contains("enc"));
    }

    #[test]
    fn test_client_list_preserves_order() {
        use crate::client::{AnonymousClient, CasClient};

        let mut clients = ClientList::new();
        clients.push(Box::new(CasClient::new(0, "https://cas.example.org/login")));
        clients.push(Box::new(AnonymousClient));

        let names: Vec<&str> = clients.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["cas0", "anonymous"]);
        assert!(clients.find("anonymous").is_some());
        assert!(clients.find("cas1").is_none());
    }
}
