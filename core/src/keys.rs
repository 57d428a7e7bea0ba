//! Property key constants and scan ceilings.
//!
//! Every configurable item lives in a flat string-to-string property map.
//! Scalar keys are plain (`"anonymous"`); multi-instance keys carry a
//! numeric suffix (`"cas.loginUrl.0"`, `"cas.loginUrl.1"`, ...). The three
//! `MAX_NUM_*` constants bound the index scan per category; they are
//! independent and must not be assumed equal.

/// Highest encoder index scanned (inclusive).
pub const MAX_NUM_ENCODERS: usize = 10;
/// Highest authenticator index scanned (inclusive).
pub const MAX_NUM_AUTHENTICATORS: usize = 10;
/// Highest client index scanned (inclusive).
pub const MAX_NUM_CLIENTS: usize = 100;

// ============================================================================
// Password encoders
// ============================================================================

pub const SPRING_ENCODER_TYPE: &str = "encoder.spring.type";
pub const SPRING_ENCODER_BCRYPT_LENGTH: &str = "encoder.spring.bcrypt.length";

/// The shiro encoder group key is itself a marker: `encoder.shiro.0` with any
/// non-blank value enables the group even when no sub-key is set.
pub const SHIRO_ENCODER: &str = "encoder.shiro";
pub const SHIRO_ENCODER_GENERATE_PUBLIC_SALT: &str = "encoder.shiro.generatePublicSalt";
pub const SHIRO_ENCODER_HASH_ALGORITHM_NAME: &str = "encoder.shiro.hashAlgorithmName";
pub const SHIRO_ENCODER_HASH_ITERATIONS: &str = "encoder.shiro.hashIterations";
pub const SHIRO_ENCODER_PRIVATE_SALT: &str = "encoder.shiro.privateSalt";

// ============================================================================
// LDAP authenticators
// ============================================================================

pub const LDAP_TYPE: &str = "ldap.type";
pub const LDAP_URL: &str = "ldap.url";
pub const LDAP_BASE_DN: &str = "ldap.baseDn";
pub const LDAP_USER_SEARCH_BASE: &str = "ldap.userSearchBase";
pub const LDAP_USER_SEARCH_FILTER: &str = "ldap.userSearchFilter";
pub const LDAP_USER_DN_PATTERN: &str = "ldap.userDnPattern";
pub const LDAP_BIND_DN: &str = "ldap.bindDn";
pub const LDAP_BIND_PASSWORD: &str = "ldap.bindPassword";
pub const LDAP_USERNAME_ATTRIBUTE: &str = "ldap.usernameAttribute";
pub const LDAP_CONNECT_TIMEOUT: &str = "ldap.connectTimeout";
pub const LDAP_OPERATION_TIMEOUT: &str = "ldap.operationTimeout";
pub const LDAP_USE_START_TLS: &str = "ldap.useStartTls";

// ============================================================================
// Database authenticators
// ============================================================================

pub const DB_DATASOURCE_CLASS_NAME: &str = "db.dataSourceClassName";
pub const DB_JDBC_URL: &str = "db.jdbcUrl";
pub const DB_USERNAME: &str = "db.username";
pub const DB_PASSWORD: &str = "db.password";
pub const DB_USERS_TABLE: &str = "db.usersTable";
/// Comma-separated list of extra columns loaded into the user profile.
pub const DB_ATTRIBUTES: &str = "db.attributes";
/// Name of a previously registered password encoder.
pub const DB_PASSWORD_ENCODER: &str = "db.passwordEncoder";

// ============================================================================
// OAuth clients (scalar, one group per provider)
// ============================================================================

pub const LINKEDIN_ID: &str = "linkedin.id";
pub const LINKEDIN_SECRET: &str = "linkedin.secret";
pub const LINKEDIN_SCOPE: &str = "linkedin.scope";
pub const FACEBOOK_ID: &str = "facebook.id";
pub const FACEBOOK_SECRET: &str = "facebook.secret";
pub const FACEBOOK_SCOPE: &str = "facebook.scope";
pub const FACEBOOK_FIELDS: &str = "facebook.fields";
pub const WINDOWSLIVE_ID: &str = "windowslive.id";
pub const WINDOWSLIVE_SECRET: &str = "windowslive.secret";
pub const FOURSQUARE_ID: &str = "foursquare.id";
pub const FOURSQUARE_SECRET: &str = "foursquare.secret";
pub const GOOGLE_ID: &str = "google.id";
pub const GOOGLE_SECRET: &str = "google.secret";
pub const GOOGLE_SCOPE: &str = "google.scope";
pub const YAHOO_ID: &str = "yahoo.id";
pub const YAHOO_SECRET: &str = "yahoo.secret";
pub const DROPBOX_ID: &str = "dropbox.id";
pub const DROPBOX_SECRET: &str = "dropbox.secret";
pub const GITHUB_ID: &str = "github.id";
pub const GITHUB_SECRET: &str = "github.secret";
pub const GITHUB_SCOPE: &str = "github.scope";
pub const TWITTER_ID: &str = "twitter.id";
pub const TWITTER_SECRET: &str = "twitter.secret";

/// Generic OAuth 2.0 provider; all four of id/secret/authUrl/tokenUrl are
/// required for the group to count as configured.
pub const OAUTH2_ID: &str = "oauth2.id";
pub const OAUTH2_SECRET: &str = "oauth2.secret";
pub const OAUTH2_AUTH_URL: &str = "oauth2.authUrl";
pub const OAUTH2_TOKEN_URL: &str = "oauth2.tokenUrl";
pub const OAUTH2_SCOPE: &str = "oauth2.scope";
pub const OAUTH2_PROFILE_URL: &str = "oauth2.profileUrl";

// ============================================================================
// SAML clients
// ============================================================================

pub const SAML_KEYSTORE_PASSWORD: &str = "saml.keystorePassword";
pub const SAML_PRIVATE_KEY_PASSWORD: &str = "saml.privateKeyPassword";
pub const SAML_KEYSTORE_PATH: &str = "saml.keystorePath";
pub const SAML_IDENTITY_PROVIDER_METADATA_PATH: &str = "saml.identityProviderMetadataPath";
pub const SAML_SERVICE_PROVIDER_ENTITY_ID: &str = "saml.serviceProviderEntityId";
pub const SAML_SERVICE_PROVIDER_METADATA_PATH: &str = "saml.serviceProviderMetadataPath";
pub const SAML_MAXIMUM_AUTHENTICATION_LIFETIME: &str = "saml.maximumAuthenticationLifetime";

// ============================================================================
// CAS clients
// ============================================================================

pub const CAS_LOGIN_URL: &str = "cas.loginUrl";
pub const CAS_PROTOCOL: &str = "cas.protocol";

// ============================================================================
// OIDC clients
// ============================================================================

pub const OIDC_TYPE: &str = "oidc.type";
pub const OIDC_ID: &str = "oidc.id";
pub const OIDC_SECRET: &str = "oidc.secret";
pub const OIDC_DISCOVERY_URI: &str = "oidc.discoveryUri";
pub const OIDC_SCOPE: &str = "oidc.scope";
pub const OIDC_USE_NONCE: &str = "oidc.useNonce";
pub const OIDC_PREFERRED_JWS_ALGORITHM: &str = "oidc.preferredJwsAlgorithm";
pub const OIDC_MAX_CLOCK_SKEW: &str = "oidc.maxClockSkew";

// ============================================================================
// HTTP authenticators and clients
// ============================================================================

/// Scalar marker; any non-blank value enables the anonymous client.
pub const ANONYMOUS: &str = "anonymous";
pub const REST_URL: &str = "rest.url";
pub const FORMCLIENT_LOGIN_URL: &str = "formClient.loginUrl";
pub const FORMCLIENT_AUTHENTICATOR: &str = "formClient.authenticator";
pub const FORMCLIENT_USERNAME_PARAMETER: &str = "formClient.usernameParameter";
pub const FORMCLIENT_PASSWORD_PARAMETER: &str = "formClient.passwordParameter";
pub const INDIRECTBASICAUTH_AUTHENTICATOR: &str = "indirectBasicAuth.authenticator";
pub const INDIRECTBASICAUTH_REALM_NAME: &str = "indirectBasicAuth.realmName";
pub const DIRECTBASICAUTH_AUTHENTICATOR: &str = "directBasicAuth.authenticator";

/// Reserved authenticator reference resolving to the built-in
/// username-equals-password test authenticator.
pub const TEST_USERNAME_PASSWORD: &str = "testUsernamePassword";
