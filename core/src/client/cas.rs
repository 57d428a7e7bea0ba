//! CAS clients.

use std::any::Any;

use serde::{Deserialize, Serialize};

use crate::client::{Client, ClientKind};

/// CAS protocol version spoken with the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CasProtocol {
    Cas10,
    Cas20,
    Cas30,
    Saml,
}

impl CasProtocol {
    /// Parses the protocol property value ("CAS10", "CAS20", "CAS30",
    /// "SAML").
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "CAS10" => Some(CasProtocol::Cas10),
            "CAS20" => Some(CasProtocol::Cas20),
            "CAS30" => Some(CasProtocol::Cas30),
            "SAML" => Some(CasProtocol::Saml),
            _ => None,
        }
    }
}

/// One configured CAS client.
#[derive(Debug, Clone)]
pub struct CasClient {
    name: String,
    pub login_url: String,
    pub protocol: CasProtocol,
}

impl CasClient {
    /// Creates a client named `cas{index}` speaking CAS 3.0.
    pub fn new(index: usize, login_url: impl Into<String>) -> Self {
        CasClient {
            name: format!("cas{}", index),
            login_url: login_url.into(),
            protocol: CasProtocol::Cas30,
        }
    }

    /// Sets the protocol version.
    pub fn protocol(mut self, protocol: CasProtocol) -> Self {
        self.protocol = protocol;
        self
    }
}

impl Client for CasClient {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ClientKind {
        ClientKind::Cas
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
