//! Common test utilities.

use props_security_core::Properties;

/// A property set enabling one instance of every protocol family, with the
/// cross-references (encoder, authenticator) wired up.
pub fn full_properties() -> Properties {
    Properties::new()
        .with("encoder.spring.type.0", "noop")
        .with("encoder.shiro.hashIterations.0", "10")
        .with("ldap.type.0", "direct")
        .with("ldap.url.0", "ldap://localhost:389")
        .with("db.jdbcUrl.0", "jdbc:postgresql://localhost/app")
        .with("db.passwordEncoder.0", "springencoder0")
        .with("github.id", "github-id")
        .with("github.secret", "github-secret")
        .with("saml.keystorePassword.0", "kspwd")
        .with("saml.privateKeyPassword.0", "pkpwd")
        .with("saml.keystorePath.0", "/keystore.jks")
        .with("saml.identityProviderMetadataPath.0", "/idp-metadata.xml")
        .with("cas.loginUrl.0", "https://cas.example.org/login")
        .with("oidc.id.0", "oidc-id")
        .with("oidc.secret.0", "oidc-secret")
        .with("rest.url.0", "https://auth.example.org/check")
        .with("formClient.loginUrl.0", "/login")
        .with("formClient.authenticator.0", "ldap0")
        .with("indirectBasicAuth.authenticator.0", "db0")
        .with("directBasicAuth.authenticator.0", "rest0")
        .with("anonymous", "true")
}
