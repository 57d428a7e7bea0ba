//! Password encoder tests.
//!
//! Covers the encoders the property-driven builders can produce, including
//! encoders assembled end-to-end through the factory.

use props_security_core::crypto::{HashAlgorithm, ShiroHashEncoder};
use props_security_core::{
    Argon2PasswordEncoder, BCryptPasswordEncoder, PasswordEncoder, Properties,
    PropertiesConfigFactory,
};

#[test]
fn test_argon2_password_encoder() {
    let encoder = Argon2PasswordEncoder::new();
    let password = "test_password_123";

    let hash = encoder.encode(password);

    // Hash should not equal plain password
    assert_ne!(hash, password);

    // Should verify correctly
    assert!(encoder.matches(password, &hash));
    assert!(!encoder.matches("wrong_password", &hash));
}

#[test]
fn test_password_hashes_are_different() {
    let encoder = Argon2PasswordEncoder::new();
    let password = "same_password";

    let hash1 = encoder.encode(password);
    let hash2 = encoder.encode(password);

    // Different salts should produce different hashes
    assert_ne!(hash1, hash2);

    // Both should still verify
    assert!(encoder.matches(password, &hash1));
    assert!(encoder.matches(password, &hash2));
}

#[test]
fn test_bcrypt_password_encoder() {
    let encoder = BCryptPasswordEncoder::with_cost(4);

    let hash = encoder.encode("secret");
    assert!(encoder.matches("secret", &hash));
    assert!(!encoder.matches("other", &hash));
}

#[test]
fn test_shiro_hash_encoder_formats() {
    let encoder = ShiroHashEncoder::new()
        .algorithm(HashAlgorithm::Sha512)
        .iterations(100)
        .generate_public_salt(true);

    let hash = encoder.encode("secret");
    assert!(hash.starts_with("$shiro1$SHA-512$100$"));
    assert!(encoder.matches("secret", &hash));

    // a salted re-encode of the same password differs
    assert_ne!(hash, encoder.encode("secret"));
}

#[test]
fn test_factory_builds_usable_encoders() {
    let props = Properties::new()
        .with("encoder.spring.type.0", "bcrypt")
        .with("encoder.spring.bcrypt.length.0", "4")
        .with("encoder.shiro.hashIterations.1", "10")
        .with("encoder.shiro.privateSalt.1", "pepper");
    let config = PropertiesConfigFactory::new(props).build().unwrap();

    let bcrypt = config.encoders().get("springencoder0").unwrap();
    let hash = bcrypt.encode("secret");
    assert!(bcrypt.matches("secret", &hash));

    let shiro = config.encoders().get("shiroencoder1").unwrap();
    let hash = shiro.encode("secret");
    assert!(hash.starts_with("$shiro1$SHA-256$10$"));
    assert!(shiro.matches("secret", &hash));
    assert!(!shiro.matches("wrong", &hash));
}
