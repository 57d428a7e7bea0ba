//! HTTP family builder: REST authenticators, form login, basic auth and
//! anonymous clients.

use std::sync::Arc;

use tracing::debug;

use crate::authenticator::{Authenticator, RestAuthenticator, SimpleTestAuthenticator};
use crate::builder::HttpClientBuilder;
use crate::client::{AnonymousClient, DirectBasicAuthClient, FormClient, IndirectBasicAuthClient};
use crate::error::ConfigError;
use crate::keys;
use crate::properties::Properties;
use crate::registry::{AuthenticatorRegistry, ClientList};

/// Builds the whole HTTP family in one stage.
///
/// REST authenticators are registered first so the client groups that follow
/// can reference them by name (`rest{i}`); form clients, indirect basic auth
/// clients, the anonymous client and direct basic auth clients are appended
/// in that order.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpClientsBuilder;

impl HttpClientsBuilder {
    fn try_build_rest_authenticators(
        &self,
        properties: &Properties,
        authenticators: &mut AuthenticatorRegistry,
    ) {
        for i in 0..=keys::MAX_NUM_AUTHENTICATORS {
            let url = match properties.get_at(keys::REST_URL, i) {
                Some(url) if !url.trim().is_empty() => url,
                _ => continue,
            };
            let authenticator = RestAuthenticator::new(i, url);
            let name = authenticator.name().to_string();
            debug!("registering authenticator {}", name);
            authenticators.register(name, Arc::new(authenticator));
        }
    }

    fn try_create_form_clients(
        &self,
        properties: &Properties,
        authenticators: &AuthenticatorRegistry,
        clients: &mut ClientList,
    ) -> Result<(), ConfigError> {
        for i in 0..=keys::MAX_NUM_CLIENTS {
            if !properties.is_set_at(keys::FORMCLIENT_LOGIN_URL, i)
                || !properties.is_set_at(keys::FORMCLIENT_AUTHENTICATOR, i)
            {
                continue;
            }
            let authenticator = resolve_authenticator(
                properties
                    .get_at(keys::FORMCLIENT_AUTHENTICATOR, i)
                    .unwrap_or_default(),
                authenticators,
            )?;
            let mut client = FormClient::new(
                i,
                properties
                    .get_at(keys::FORMCLIENT_LOGIN_URL, i)
                    .unwrap_or_default(),
                authenticator,
            );
            if let Some(parameter) = properties.get_at(keys::FORMCLIENT_USERNAME_PARAMETER, i) {
                if !parameter.trim().is_empty() {
                    client = client.username_parameter(parameter);
                }
            }
            if let Some(parameter) = properties.get_at(keys::FORMCLIENT_PASSWORD_PARAMETER, i) {
                if !parameter.trim().is_empty() {
                    client = client.password_parameter(parameter);
                }
            }
            debug!("created form client form{}", i);
            clients.push(Box::new(client));
        }
        Ok(())
    }

    fn try_create_indirect_basic_auth_clients(
        &self,
        properties: &Properties,
        authenticators: &AuthenticatorRegistry,
        clients: &mut ClientList,
    ) -> Result<(), ConfigError> {
        for i in 0..=keys::MAX_NUM_CLIENTS {
            if !properties.is_set_at(keys::INDIRECTBASICAUTH_AUTHENTICATOR, i) {
                continue;
            }
            let authenticator = resolve_authenticator(
                properties
                    .get_at(keys::INDIRECTBASICAUTH_AUTHENTICATOR, i)
                    .unwrap_or_default(),
                authenticators,
            )?;
            let mut client = IndirectBasicAuthClient::new(i, authenticator);
            if let Some(realm) = properties.get_at(keys::INDIRECTBASICAUTH_REALM_NAME, i) {
                if !realm.trim().is_empty() {
                    client = client.realm_name(realm);
                }
            }
            debug!("created indirect basic auth client indirectbasic{}", i);
            clients.push(Box::new(client));
        }
        Ok(())
    }

    fn try_create_anonymous_client(&self, properties: &Properties, clients: &mut ClientList) {
        if properties.is_set(keys::ANONYMOUS) {
            debug!("created anonymous client");
            clients.push(Box::new(AnonymousClient));
        }
    }

    fn try_create_direct_basic_auth_clients(
        &self,
        properties: &Properties,
        authenticators: &AuthenticatorRegistry,
        clients: &mut ClientList,
    ) -> Result<(), ConfigError> {
        for i in 0..=keys::MAX_NUM_CLIENTS {
            if !properties.is_set_at(keys::DIRECTBASICAUTH_AUTHENTICATOR, i) {
                continue;
            }
            let authenticator = resolve_authenticator(
                properties
                    .get_at(keys::DIRECTBASICAUTH_AUTHENTICATOR, i)
                    .unwrap_or_default(),
                authenticators,
            )?;
            debug!("created direct basic auth client directbasic{}", i);
            clients.push(Box::new(DirectBasicAuthClient::new(i, authenticator)));
        }
        Ok(())
    }
}

impl HttpClientBuilder for HttpClientsBuilder {
    fn try_create_authenticators_and_clients(
        &self,
        properties: &Properties,
        authenticators: &mut AuthenticatorRegistry,
        clients: &mut ClientList,
    ) -> Result<(), ConfigError> {
        self.try_build_rest_authenticators(properties, authenticators);
        self.try_create_form_clients(properties, authenticators, clients)?;
        self.try_create_indirect_basic_auth_clients(properties, authenticators, clients)?;
        self.try_create_anonymous_client(properties, clients);
        self.try_create_direct_basic_auth_clients(properties, authenticators, clients)?;
        Ok(())
    }
}

/// Resolves an authenticator reference; the reserved name
/// `testUsernamePassword` bypasses the registry.
fn resolve_authenticator(
    name: &str,
    authenticators: &AuthenticatorRegistry,
) -> Result<Arc<dyn Authenticator>, ConfigError> {
    let name = name.trim();
    if name == keys::TEST_USERNAME_PASSWORD {
        return Ok(Arc::new(SimpleTestAuthenticator));
    }
    authenticators
        .get(name)
        .ok_or_else(|| ConfigError::UnknownAuthenticator {
            name: name.to_string(),
        })
}
