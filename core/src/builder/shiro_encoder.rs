//! Shiro-style salted hash encoder builder.

use std::sync::Arc;

use tracing::debug;

use crate::builder::{parse_bool, parse_u32, EncoderBuilder};
use crate::crypto::{HashAlgorithm, ShiroHashEncoder};
use crate::error::ConfigError;
use crate::keys;
use crate::properties::Properties;
use crate::registry::EncoderRegistry;

/// Registers one encoder per index mentioning the shiro group, under the
/// name `shiroencoder{index}`.
///
/// The group is enabled by the `encoder.shiro` key itself or by the mere
/// presence of any sub-key; every sub-key is optional and falls back to the
/// encoder defaults (SHA-256, 500000 iterations, no salts).
#[derive(Debug, Clone, Copy, Default)]
pub struct ShiroEncoderBuilder;

impl ShiroEncoderBuilder {
    fn group_present(properties: &Properties, index: usize) -> bool {
        properties.is_set_at(keys::SHIRO_ENCODER, index)
            || properties.contains_at(keys::SHIRO_ENCODER_GENERATE_PUBLIC_SALT, index)
            || properties.contains_at(keys::SHIRO_ENCODER_HASH_ALGORITHM_NAME, index)
            || properties.contains_at(keys::SHIRO_ENCODER_HASH_ITERATIONS, index)
            || properties.contains_at(keys::SHIRO_ENCODER_PRIVATE_SALT, index)
    }
}

impl EncoderBuilder for ShiroEncoderBuilder {
    fn try_create_password_encoder(
        &self,
        properties: &Properties,
        encoders: &mut EncoderRegistry,
    ) -> Result<(), ConfigError> {
        for i in 0..=keys::MAX_NUM_ENCODERS {
            if !Self::group_present(properties, i) {
                continue;
            }

            let mut encoder = ShiroHashEncoder::new();
            if let Some(algorithm) = properties.get_at(keys::SHIRO_ENCODER_HASH_ALGORITHM_NAME, i) {
                if !algorithm.trim().is_empty() {
                    let parsed = HashAlgorithm::parse(algorithm.trim()).ok_or_else(|| {
                        ConfigError::UnsupportedAlgorithm {
                            algorithm: algorithm.trim().to_string(),
                        }
                    })?;
                    encoder = encoder.algorithm(parsed);
                }
            }
            if let Some(iterations) = properties.get_at(keys::SHIRO_ENCODER_HASH_ITERATIONS, i) {
                if !iterations.trim().is_empty() {
                    encoder = encoder
                        .iterations(parse_u32(keys::SHIRO_ENCODER_HASH_ITERATIONS, i, iterations)?);
                }
            }
            if let Some(generate) = properties.get_at(keys::SHIRO_ENCODER_GENERATE_PUBLIC_SALT, i) {
                if !generate.trim().is_empty() {
                    encoder = encoder.generate_public_salt(parse_bool(
                        keys::SHIRO_ENCODER_GENERATE_PUBLIC_SALT,
                        i,
                        generate,
                    )?);
                }
            }
            if let Some(salt) = properties.get_at(keys::SHIRO_ENCODER_PRIVATE_SALT, i) {
                if !salt.trim().is_empty() {
                    encoder = encoder.private_salt(salt);
                }
            }

            let name = format!("shiroencoder{}", i);
            debug!("registering password encoder {}", name);
            encoders.register(name, Arc::new(encoder));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::PasswordEncoder;

    #[test]
    fn test_marker_key_alone_registers_encoder() {
        let props = Properties::new().with("encoder.shiro.0", "default");
        let mut encoders = EncoderRegistry::new();

        ShiroEncoderBuilder
            .try_create_password_encoder(&props, &mut encoders)
            .unwrap();
        assert!(encoders.contains("shiroencoder0"));
    }

    #[test]
    fn test_configured_encoder_roundtrips() {
        let props = Properties::new()
            .with("encoder.shiro.hashAlgorithmName.1", "SHA-512")
            .with("encoder.shiro.hashIterations.1", "10")
            .with("encoder.shiro.generatePublicSalt.1", "true")
            .with("encoder.shiro.privateSalt.1", "pepper");
        let mut encoders = EncoderRegistry::new();

        ShiroEncoderBuilder
            .try_create_password_encoder(&props, &mut encoders)
            .unwrap();

        let encoder = encoders.get("shiroencoder1").unwrap();
        let hash = encoder.encode("secret");
        assert!(hash.starts_with("$shiro1$SHA-512$10$"));
        assert!(encoder.matches("secret", &hash));
    }

    #[test]
    fn test_bad_algorithm_fails() {
        let props = Properties::new().with("encoder.shiro.hashAlgorithmName.0", "MD5");
        let mut encoders = EncoderRegistry::new();

        let err = ShiroEncoderBuilder
            .try_create_password_encoder(&props, &mut encoders)
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedAlgorithm { .. }));
    }

    #[test]
    fn test_bad_iteration_count_fails() {
        let props = Properties::new().with("encoder.shiro.hashIterations.0", "many");
        let mut encoders = EncoderRegistry::new();

        let err = ShiroEncoderBuilder
            .try_create_password_encoder(&props, &mut encoders)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPropertyValue { .. }));
    }
}
