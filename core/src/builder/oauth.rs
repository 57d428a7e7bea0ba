//! OAuth client builder.

use tracing::debug;

use crate::builder::ClientBuilder;
use crate::client::{OAuthClient, OAuthProvider};
use crate::error::ConfigError;
use crate::keys;
use crate::properties::Properties;
use crate::registry::ClientList;

/// Appends one client per fully configured provider, in the fixed emission
/// order facebook, twitter, dropbox, github, yahoo, google, foursquare,
/// windowslive, linkedin, then the generic OAuth 2.0 client.
#[derive(Debug, Clone, Copy, Default)]
pub struct OAuthBuilder;

impl OAuthBuilder {
    fn try_provider(
        &self,
        properties: &Properties,
        clients: &mut ClientList,
        provider: OAuthProvider,
        id_key: &str,
        secret_key: &str,
        scope_key: Option<&str>,
    ) {
        if !properties.is_set(id_key) || !properties.is_set(secret_key) {
            return;
        }
        let mut client = OAuthClient::new(
            provider,
            properties.get(id_key).unwrap_or_default(),
            properties.get(secret_key).unwrap_or_default(),
        );
        if let Some(scope_key) = scope_key {
            if let Some(scope) = properties.get(scope_key) {
                if !scope.trim().is_empty() {
                    client = client.scope(scope);
                }
            }
        }
        if provider == OAuthProvider::Facebook {
            if let Some(fields) = properties.get(keys::FACEBOOK_FIELDS) {
                if !fields.trim().is_empty() {
                    client = client.fields(fields);
                }
            }
        }
        debug!("created oauth client {}", provider.name());
        clients.push(Box::new(client));
    }

    fn try_generic(&self, properties: &Properties, clients: &mut ClientList) {
        let configured = properties.is_set(keys::OAUTH2_ID)
            && properties.is_set(keys::OAUTH2_SECRET)
            && properties.is_set(keys::OAUTH2_AUTH_URL)
            && properties.is_set(keys::OAUTH2_TOKEN_URL);
        if !configured {
            return;
        }
        let mut client = OAuthClient::generic(
            properties.get(keys::OAUTH2_ID).unwrap_or_default(),
            properties.get(keys::OAUTH2_SECRET).unwrap_or_default(),
            properties.get(keys::OAUTH2_AUTH_URL).unwrap_or_default(),
            properties.get(keys::OAUTH2_TOKEN_URL).unwrap_or_default(),
        );
        if let Some(scope) = properties.get(keys::OAUTH2_SCOPE) {
            if !scope.trim().is_empty() {
                client = client.scope(scope);
            }
        }
        if let Some(profile_url) = properties.get(keys::OAUTH2_PROFILE_URL) {
            if !profile_url.trim().is_empty() {
                client = client.profile_url(profile_url);
            }
        }
        debug!("created generic oauth2 client");
        clients.push(Box::new(client));
    }
}

impl ClientBuilder for OAuthBuilder {
    fn try_create_clients(
        &self,
        properties: &Properties,
        clients: &mut ClientList,
    ) -> Result<(), ConfigError> {
        self.try_provider(
            properties,
            clients,
            OAuthProvider::Facebook,
            keys::FACEBOOK_ID,
            keys::FACEBOOK_SECRET,
            Some(keys::FACEBOOK_SCOPE),
        );
        self.try_provider(
            properties,
            clients,
            OAuthProvider::Twitter,
            keys::TWITTER_ID,
            keys::TWITTER_SECRET,
            None,
        );
        self.try_provider(
            properties,
            clients,
            OAuthProvider::Dropbox,
            keys::DROPBOX_ID,
            keys::DROPBOX_SECRET,
            None,
        );
        self.try_provider(
            properties,
            clients,
            OAuthProvider::Github,
            keys::GITHUB_ID,
            keys::GITHUB_SECRET,
            Some(keys::GITHUB_SCOPE),
        );
        self.try_provider(
            properties,
            clients,
            OAuthProvider::Yahoo,
            keys::YAHOO_ID,
            keys::YAHOO_SECRET,
            None,
        );
        self.try_provider(
            properties,
            clients,
            OAuthProvider::Google,
            keys::GOOGLE_ID,
            keys::GOOGLE_SECRET,
            Some(keys::GOOGLE_SCOPE),
        );
        self.try_provider(
            properties,
            clients,
            OAuthProvider::Foursquare,
            keys::FOURSQUARE_ID,
            keys::FOURSQUARE_SECRET,
            None,
        );
        self.try_provider(
            properties,
            clients,
            OAuthProvider::WindowsLive,
            keys::WINDOWSLIVE_ID,
            keys::WINDOWSLIVE_SECRET,
            None,
        );
        self.try_provider(
            properties,
            clients,
            OAuthProvider::LinkedIn,
            keys::LINKEDIN_ID,
            keys::LINKEDIN_SECRET,
            Some(keys::LINKEDIN_SCOPE),
        );
        self.try_generic(properties, clients);
        Ok(())
    }
}
