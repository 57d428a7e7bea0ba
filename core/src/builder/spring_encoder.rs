//! Spring-style password encoder builder.
//!
//! # Feature Flags
//! The `argon2` and `bcrypt` features decide which encoder types this
//! builder can construct; a type whose feature is disabled fails the build
//! instead of silently degrading.

use std::sync::Arc;

use tracing::debug;

#[cfg(feature = "argon2")]
use crate::crypto::Argon2PasswordEncoder;
#[cfg(feature = "bcrypt")]
use crate::crypto::BCryptPasswordEncoder;
use crate::builder::EncoderBuilder;
use crate::crypto::{NoOpPasswordEncoder, PasswordEncoder};
use crate::error::ConfigError;
use crate::keys;
use crate::properties::Properties;
use crate::registry::EncoderRegistry;

/// Registers one encoder per index setting `encoder.spring.type`, under the
/// name `springencoder{index}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpringEncoderBuilder;

impl EncoderBuilder for SpringEncoderBuilder {
    fn try_create_password_encoder(
        &self,
        properties: &Properties,
        encoders: &mut EncoderRegistry,
    ) -> Result<(), ConfigError> {
        for i in 0..=keys::MAX_NUM_ENCODERS {
            let encoder_type = match properties.get_at(keys::SPRING_ENCODER_TYPE, i) {
                Some(t) if !t.trim().is_empty() => t.trim(),
                _ => continue,
            };
            let encoder = build_encoder(properties, i, encoder_type)?;
            let name = format!("springencoder{}", i);
            debug!("registering password encoder {} ({})", name, encoder_type);
            encoders.register(name, encoder);
        }
        Ok(())
    }
}

fn build_encoder(
    properties: &Properties,
    index: usize,
    encoder_type: &str,
) -> Result<Arc<dyn PasswordEncoder>, ConfigError> {
    match encoder_type.to_ascii_lowercase().as_str() {
        "noop" => Ok(Arc::new(NoOpPasswordEncoder)),
        #[cfg(feature = "argon2")]
        "argon2" => Ok(Arc::new(Argon2PasswordEncoder::new())),
        #[cfg(feature = "bcrypt")]
        "bcrypt" => {
            let encoder = match properties.get_at(keys::SPRING_ENCODER_BCRYPT_LENGTH, index) {
                Some(length) if !length.trim().is_empty() => {
                    let cost =
                        crate::builder::parse_u32(keys::SPRING_ENCODER_BCRYPT_LENGTH, index, length)?;
                    BCryptPasswordEncoder::with_cost(cost)
                }
                _ => BCryptPasswordEncoder::new(),
            };
            Ok(Arc::new(encoder))
        }
        other => Err(ConfigError::UnsupportedEncoderType {
            encoder_type: other.to_string(),
        }),
    }
}
