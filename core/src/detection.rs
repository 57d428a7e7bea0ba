//! Detection predicates.
//!
//! One pure boolean function per protocol family, deciding whether the
//! family is configured at all. A predicate returns true on the first index
//! (or provider) satisfying the family's required-field rule; it does not
//! guarantee that every index up to that point is valid - construction
//! re-validates each index on its own. Blank values count as absent;
//! detection never fails.

use derive_more::Display;

use crate::keys;
use crate::properties::Properties;

/// True when any encoder index sets the spring encoder type.
pub fn has_spring_encoder(props: &Properties) -> bool {
    (0..=keys::MAX_NUM_ENCODERS).any(|i| props.is_set_at(keys::SPRING_ENCODER_TYPE, i))
}

/// True when any encoder index sets the shiro group key or merely mentions
/// one of its sub-keys (presence counts, the value does not).
pub fn has_shiro_encoder(props: &Properties) -> bool {
    (0..=keys::MAX_NUM_ENCODERS).any(|i| {
        props.is_set_at(keys::SHIRO_ENCODER, i)
            || props.contains_at(keys::SHIRO_ENCODER_GENERATE_PUBLIC_SALT, i)
            || props.contains_at(keys::SHIRO_ENCODER_HASH_ALGORITHM_NAME, i)
            || props.contains_at(keys::SHIRO_ENCODER_HASH_ITERATIONS, i)
            || props.contains_at(keys::SHIRO_ENCODER_PRIVATE_SALT, i)
    })
}

/// True when any authenticator index sets the LDAP connection type.
pub fn has_ldap_authenticator(props: &Properties) -> bool {
    (0..=keys::MAX_NUM_AUTHENTICATORS).any(|i| props.is_set_at(keys::LDAP_TYPE, i))
}

/// True when any authenticator index identifies a database.
pub fn has_db_authenticator(props: &Properties) -> bool {
    (0..=keys::MAX_NUM_AUTHENTICATORS).any(|i| {
        props.is_set_at(keys::DB_DATASOURCE_CLASS_NAME, i) || props.is_set_at(keys::DB_JDBC_URL, i)
    })
}

/// Scalar id/secret pairs checked for OAuth detection.
const OAUTH_PROVIDER_KEYS: [(&str, &str); 9] = [
    (keys::LINKEDIN_ID, keys::LINKEDIN_SECRET),
    (keys::FACEBOOK_ID, keys::FACEBOOK_SECRET),
    (keys::WINDOWSLIVE_ID, keys::WINDOWSLIVE_SECRET),
    (keys::FOURSQUARE_ID, keys::FOURSQUARE_SECRET),
    (keys::GOOGLE_ID, keys::GOOGLE_SECRET),
    (keys::YAHOO_ID, keys::YAHOO_SECRET),
    (keys::DROPBOX_ID, keys::DROPBOX_SECRET),
    (keys::GITHUB_ID, keys::GITHUB_SECRET),
    (keys::TWITTER_ID, keys::TWITTER_SECRET),
];

/// True when any well-known provider has id and secret, or the generic
/// OAuth 2.0 group is fully specified. Scalar keys only, no index scan.
pub fn has_oauth_clients(props: &Properties) -> bool {
    if OAUTH_PROVIDER_KEYS
        .iter()
        .any(|(id, secret)| props.is_set(id) && props.is_set(secret))
    {
        return true;
    }
    props.is_set(keys::OAUTH2_ID)
        && props.is_set(keys::OAUTH2_SECRET)
        && props.is_set(keys::OAUTH2_AUTH_URL)
        && props.is_set(keys::OAUTH2_TOKEN_URL)
}

/// True when any client index carries the full SAML keystore/metadata
/// quadruple.
pub fn has_saml_clients(props: &Properties) -> bool {
    (0..=keys::MAX_NUM_CLIENTS).any(|i| {
        props.is_set_at(keys::SAML_KEYSTORE_PASSWORD, i)
            && props.is_set_at(keys::SAML_PRIVATE_KEY_PASSWORD, i)
            && props.is_set_at(keys::SAML_KEYSTORE_PATH, i)
            && props.is_set_at(keys::SAML_IDENTITY_PROVIDER_METADATA_PATH, i)
    })
}

/// True when any client index sets the CAS login URL.
pub fn has_cas_clients(props: &Properties) -> bool {
    (0..=keys::MAX_NUM_CLIENTS).any(|i| props.is_set_at(keys::CAS_LOGIN_URL, i))
}

/// True when any client index sets both OIDC id and secret.
pub fn has_oidc_clients(props: &Properties) -> bool {
    (0..=keys::MAX_NUM_CLIENTS)
        .any(|i| props.is_set_at(keys::OIDC_ID, i) && props.is_set_at(keys::OIDC_SECRET, i))
}

/// True when the anonymous marker, a REST authenticator, or any form/basic
/// auth client group is configured.
pub fn has_http_authenticators_or_clients(props: &Properties) -> bool {
    if props.is_set(keys::ANONYMOUS) {
        return true;
    }
    if (0..=keys::MAX_NUM_AUTHENTICATORS).any(|i| props.is_set_at(keys::REST_URL, i)) {
        return true;
    }
    (0..=keys::MAX_NUM_CLIENTS).any(|i| {
        (props.is_set_at(keys::FORMCLIENT_LOGIN_URL, i)
            && props.is_set_at(keys::FORMCLIENT_AUTHENTICATOR, i))
            || props.is_set_at(keys::INDIRECTBASICAUTH_AUTHENTICATOR, i)
            || props.is_set_at(keys::DIRECTBASICAUTH_AUTHENTICATOR, i)
    })
}

/// The protocol families the engine knows about.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProtocolFamily {
    #[display("spring-encoder")]
    SpringEncoder,
    #[display("shiro-encoder")]
    ShiroEncoder,
    #[display("ldap-authenticator")]
    LdapAuthenticator,
    #[display("db-authenticator")]
    DbAuthenticator,
    #[display("oauth")]
    OAuth,
    #[display("saml")]
    Saml,
    #[display("cas")]
    Cas,
    #[display("oidc")]
    Oidc,
    #[display("http")]
    Http,
}

impl ProtocolFamily {
    /// The fixed build order.
    ///
    /// Encoder stages run before the database authenticator stage, which
    /// resolves encoders by name; every authenticator stage runs before the
    /// HTTP client stage, which resolves authenticators by name. The
    /// self-contained client families in between are ordered for grouping
    /// only.
    pub const BUILD_ORDER: [ProtocolFamily; 9] = [
        ProtocolFamily::SpringEncoder,
        ProtocolFamily::ShiroEncoder,
        ProtocolFamily::LdapAuthenticator,
        ProtocolFamily::DbAuthenticator,
        ProtocolFamily::OAuth,
        ProtocolFamily::Saml,
        ProtocolFamily::Cas,
        ProtocolFamily::Oidc,
        ProtocolFamily::Http,
    ];

    /// Runs this family's detection predicate.
    pub fn is_configured(self, props: &Properties) -> bool {
        match self {
            ProtocolFamily::SpringEncoder => has_spring_encoder(props),
            ProtocolFamily::ShiroEncoder => has_shiro_encoder(props),
            ProtocolFamily::LdapAuthenticator => has_ldap_authenticator(props),
            ProtocolFamily::DbAuthenticator => has_db_authenticator(props),
            ProtocolFamily::OAuth => has_oauth_clients(props),
            ProtocolFamily::Saml => has_saml_clients(props),
            ProtocolFamily::Cas => has_cas_clients(props),
            ProtocolFamily::Oidc => has_oidc_clients(props),
            ProtocolFamily::Http => has_http_authenticators_or_clients(props),
        }
    }
}
