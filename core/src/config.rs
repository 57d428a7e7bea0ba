//! The assembled configuration.

use crate::client::Client;
use crate::registry::{AuthenticatorRegistry, ClientList, EncoderRegistry};

/// Immutable result of one build: the optional callback URL, the ordered
/// client list and read-only views of both registries.
///
/// A `Config` is created once, never mutated afterwards, and safe to share
/// read-only across threads.
#[derive(Debug)]
pub struct Config {
    callback_url: Option<String>,
    clients: ClientList,
    authenticators: AuthenticatorRegistry,
    encoders: EncoderRegistry,
}

impl Config {
    /// Wraps the accumulated collections.
    pub fn new(
        callback_url: Option<String>,
        clients: ClientList,
        authenticators: AuthenticatorRegistry,
        encoders: EncoderRegistry,
    ) -> Self {
        Config {
            callback_url,
            clients,
            authenticators,
            encoders,
        }
    }

    /// The callback URL indirect clients redirect back to.
    pub fn callback_url(&self) -> Option<&str> {
        self.callback_url.as_deref()
    }

    /// The assembled clients, in build order.
    pub fn clients(&self) -> &ClientList {
        &self.clients
    }

    /// Looks up a client by name.
    pub fn client(&self, name: &str) -> Option<&dyn Client> {
        self.clients.find(name)
    }

    /// The registered authenticator definitions.
    pub fn authenticators(&self) -> &AuthenticatorRegistry {
        &self.authenticators
    }

    /// The registered password encoders.
    pub fn encoders(&self) -> &EncoderRegistry {
        &self.encoders
    }
}
