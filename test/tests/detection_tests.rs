//! Detection predicate tests.
//!
//! Checks the per-family required-field rules and the fixed build order.

mod common;

use props_security_core::detection::{self, ProtocolFamily};
use props_security_core::{BuilderSet, Properties};

#[test]
fn test_every_family_detected_on_full_properties() {
    let props = common::full_properties();
    for family in ProtocolFamily::BUILD_ORDER {
        assert!(family.is_configured(&props), "{} not detected", family);
    }
}

#[test]
fn test_no_family_detected_on_empty_properties() {
    let props = Properties::new();
    for family in ProtocolFamily::BUILD_ORDER {
        assert!(!family.is_configured(&props), "{} detected", family);
    }
}

#[test]
fn test_build_order_is_encoders_authenticators_then_clients() {
    assert_eq!(
        ProtocolFamily::BUILD_ORDER.to_vec(),
        vec![
            ProtocolFamily::SpringEncoder,
            ProtocolFamily::ShiroEncoder,
            ProtocolFamily::LdapAuthenticator,
            ProtocolFamily::DbAuthenticator,
            ProtocolFamily::OAuth,
            ProtocolFamily::Saml,
            ProtocolFamily::Cas,
            ProtocolFamily::Oidc,
            ProtocolFamily::Http,
        ]
    );
}

#[test]
fn test_standard_builder_set_enumerates_all_stages_in_order() {
    let builders = BuilderSet::standard();
    let families: Vec<ProtocolFamily> = builders.stages().iter().map(|(f, _)| *f).collect();
    assert_eq!(families, ProtocolFamily::BUILD_ORDER.to_vec());
}

#[test]
fn test_single_family_detection_is_isolated() {
    let props = Properties::new().with("cas.loginUrl.0", "https://cas.example.org/login");

    assert!(detection::has_cas_clients(&props));
    assert!(!detection::has_oauth_clients(&props));
    assert!(!detection::has_saml_clients(&props));
    assert!(!detection::has_oidc_clients(&props));
    assert!(!detection::has_http_authenticators_or_clients(&props));
    assert!(!detection::has_spring_encoder(&props));
    assert!(!detection::has_shiro_encoder(&props));
    assert!(!detection::has_ldap_authenticator(&props));
    assert!(!detection::has_db_authenticator(&props));
}

#[test]
fn test_blank_values_do_not_enable_a_family() {
    let props = Properties::new()
        .with("cas.loginUrl.0", "  ")
        .with("oidc.id.0", "")
        .with("oidc.secret.0", "secret");

    assert!(!detection::has_cas_clients(&props));
    assert!(!detection::has_oidc_clients(&props));
}

#[test]
fn test_shiro_sub_key_presence_is_enough() {
    // the sub-key is present with an empty value: still detected
    let props = Properties::new().with("encoder.shiro.privateSalt.0", "");
    assert!(detection::has_shiro_encoder(&props));
}
