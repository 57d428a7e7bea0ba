//! Configuration factory tests.
//!
//! End-to-end checks of detection, ordering and assembly.

mod common;

use props_security_core::authenticator::DbAuthenticator;
use props_security_core::client::{CasClient, ClientKind, FormClient, OidcClient};
use props_security_core::{BuilderSet, ConfigError, Properties, PropertiesConfigFactory};

#[test]
fn test_empty_properties_yield_empty_config() {
    let config = PropertiesConfigFactory::new(Properties::new()).build().unwrap();

    assert!(config.clients().is_empty());
    assert!(config.authenticators().is_empty());
    assert!(config.encoders().is_empty());
}

#[test]
fn test_cas_only_scenario() {
    let props = Properties::new().with("cas.loginUrl.0", "https://cas.example.org/login");
    let config = PropertiesConfigFactory::new(props).build().unwrap();

    assert_eq!(config.clients().len(), 1);
    let client = config.client("cas0").unwrap();
    assert_eq!(client.kind(), ClientKind::Cas);
    let cas = client.as_any().downcast_ref::<CasClient>().unwrap();
    assert_eq!(cas.login_url, "https://cas.example.org/login");
    assert!(config.authenticators().is_empty());
    assert!(config.encoders().is_empty());
}

#[test]
fn test_anonymous_marker_alone_enables_http_family() {
    let props = Properties::new().with("anonymous", "true");
    let config = PropertiesConfigFactory::new(props).build().unwrap();

    assert_eq!(config.clients().len(), 1);
    assert_eq!(config.clients().iter().next().unwrap().kind(), ClientKind::Anonymous);
}

#[test]
fn test_oidc_client_per_configured_index() {
    let props = Properties::new()
        .with("oidc.id.0", "first")
        .with("oidc.secret.0", "first-secret")
        .with("oidc.id.4", "second")
        .with("oidc.secret.4", "second-secret")
        // unpaired index yields nothing
        .with("oidc.id.7", "dangling");
    let config = PropertiesConfigFactory::new(props).build().unwrap();

    assert_eq!(config.clients().len(), 2);
    let first = config.client("oidc0").unwrap();
    let first = first.as_any().downcast_ref::<OidcClient>().unwrap();
    assert_eq!(first.client_id, "first");
    assert!(config.client("oidc4").is_some());
    assert!(config.client("oidc7").is_none());
}

#[test]
fn test_db_objects_go_to_registry_and_oauth_precedes_cas() {
    let props = Properties::new()
        .with("db.jdbcUrl.0", "jdbc:postgresql://localhost/app")
        .with("linkedin.id", "lk-id")
        .with("linkedin.secret", "lk-secret")
        .with("cas.loginUrl.0", "https://cas.example.org/login");
    let config = PropertiesConfigFactory::new(props).build().unwrap();

    // the database authenticator lands in the registry, not the client list
    assert!(config.authenticators().contains("db0"));
    let names: Vec<&str> = config.clients().iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["linkedin", "cas0"]);
}

#[test]
fn test_db_authenticator_sees_previously_built_encoder() {
    let props = Properties::new()
        .with("encoder.spring.type.0", "bcrypt")
        .with("db.jdbcUrl.0", "jdbc:postgresql://localhost/app")
        .with("db.passwordEncoder.0", "springencoder0");
    let config = PropertiesConfigFactory::new(props).build().unwrap();

    let db = config.authenticators().get("db0").unwrap();
    let db = db.as_any().downcast_ref::<DbAuthenticator>().unwrap();
    assert!(db.password_encoder().is_some());
}

#[test]
fn test_dangling_encoder_reference_aborts_build() {
    let props = Properties::new()
        .with("db.jdbcUrl.0", "jdbc:postgresql://localhost/app")
        .with("db.passwordEncoder.0", "springencoder0");
    let err = PropertiesConfigFactory::new(props).build().unwrap_err();

    assert!(matches!(err, ConfigError::UnknownEncoder { .. }));
}

#[test]
fn test_http_clients_resolve_registered_authenticators() {
    let props = Properties::new()
        .with("ldap.type.0", "direct")
        .with("ldap.url.0", "ldap://localhost:389")
        .with("formClient.loginUrl.0", "/login")
        .with("formClient.authenticator.0", "ldap0");
    let config = PropertiesConfigFactory::new(props).build().unwrap();

    let form = config.client("form0").unwrap();
    let form = form.as_any().downcast_ref::<FormClient>().unwrap();
    assert_eq!(
        form.authenticator().kind(),
        props_security_core::AuthenticatorKind::Ldap
    );
}

#[test]
fn test_full_configuration_order_and_contents() {
    let config = PropertiesConfigFactory::new(common::full_properties())
        .with_callback_url("https://app.example.org/callback")
        .build()
        .unwrap();

    assert_eq!(config.callback_url(), Some("https://app.example.org/callback"));

    let kinds: Vec<ClientKind> = config.clients().iter().map(|c| c.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            ClientKind::OAuth,
            ClientKind::Saml,
            ClientKind::Cas,
            ClientKind::Oidc,
            ClientKind::Form,
            ClientKind::IndirectBasicAuth,
            ClientKind::Anonymous,
            ClientKind::DirectBasicAuth,
        ]
    );

    for name in ["ldap0", "db0", "rest0"].iter() {
        assert!(config.authenticators().contains(name), "{} missing", name);
    }
    for name in ["springencoder0", "shiroencoder0"].iter() {
        assert!(config.encoders().contains(name), "{} missing", name);
    }
}

#[test]
fn test_build_is_idempotent() {
    let factory = PropertiesConfigFactory::new(common::full_properties());

    let first = factory.build().unwrap();
    let second = factory.build().unwrap();

    assert_eq!(first.clients().len(), second.clients().len());
    let first_names: Vec<&str> = first.clients().iter().map(|c| c.name()).collect();
    let second_names: Vec<&str> = second.clients().iter().map(|c| c.name()).collect();
    assert_eq!(first_names, second_names);
    assert_eq!(first.authenticators().len(), second.authenticators().len());
    assert_eq!(first.encoders().len(), second.encoders().len());
}

#[test]
fn test_detected_family_without_installed_builder_is_skipped() {
    let props = Properties::new()
        .with("cas.loginUrl.0", "https://cas.example.org/login")
        .with("anonymous", "true");
    let config = PropertiesConfigFactory::new(props)
        .with_builders(BuilderSet::empty().cas(props_security_core::builder::CasClientBuilder))
        .build()
        .unwrap();

    // only the CAS builder is installed; the detected HTTP family is skipped
    assert_eq!(config.clients().len(), 1);
    assert_eq!(config.clients().iter().next().unwrap().kind(), ClientKind::Cas);
}
