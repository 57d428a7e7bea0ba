//! CAS client builder.

use tracing::debug;

use crate::builder::ClientBuilder;
use crate::client::{CasClient, CasProtocol};
use crate::error::ConfigError;
use crate::keys;
use crate::properties::Properties;
use crate::registry::ClientList;

/// Appends one client per index setting `cas.loginUrl`; the protocol
/// defaults to CAS 3.0.
#[derive(Debug, Clone, Copy, Default)]
pub struct CasClientBuilder;

impl ClientBuilder for CasClientBuilder {
    fn try_create_clients(
        &self,
        properties: &Properties,
        clients: &mut ClientList,
    ) -> Result<(), ConfigError> {
        for i in 0..=keys::MAX_NUM_CLIENTS {
            let login_url = match properties.get_at(keys::CAS_LOGIN_URL, i) {
                Some(url) if !url.trim().is_empty() => url,
                _ => continue,
            };

            let mut client = CasClient::new(i, login_url);
            if let Some(protocol) = properties.get_at(keys::CAS_PROTOCOL, i) {
                if !protocol.trim().is_empty() {
                    let parsed = CasProtocol::parse(protocol.trim())
                        .ok_or_else(|| ConfigError::invalid(keys::CAS_PROTOCOL, i, protocol))?;
                    client = client.protocol(parsed);
                }
            }

            debug!("created cas client cas{}", i);
            clients.push(Box::new(client));
        }
        Ok(())
    }
}
