//! Configuration errors.
//!
//! Detection never fails; errors only surface when a detected property group
//! turns out to be unusable during construction (bad value, unknown
//! reference, unsupported algorithm). Any such error aborts the whole build,
//! no partial configuration is returned.

use derive_more::{Display, Error};

/// Error raised while turning properties into a configuration.
#[derive(Debug, Display, Error)]
pub enum ConfigError {
    /// A property group is enabled but a required key is blank or absent.
    #[display("missing required property: {key}")]
    MissingProperty {
        /// Fully formatted key, index suffix included.
        key: String,
    },

    /// A property value failed to parse or names an unknown variant.
    #[display("invalid value for {key}: {value}")]
    InvalidPropertyValue { key: String, value: String },

    /// The requested password encoder type is unknown or its feature is
    /// disabled.
    #[display("unsupported password encoder type: {encoder_type}")]
    UnsupportedEncoderType { encoder_type: String },

    /// The requested hash algorithm is not supported.
    #[display("unsupported hash algorithm: {algorithm}")]
    UnsupportedAlgorithm { algorithm: String },

    /// A property references a password encoder that was never registered.
    #[display("no password encoder named {name}")]
    UnknownEncoder { name: String },

    /// A property references an authenticator that was never registered.
    #[display("no authenticator named {name}")]
    UnknownAuthenticator { name: String },

    /// An exclusion pattern is not an anchored regular expression.
    #[display("invalid exclusion pattern: {pattern}")]
    InvalidPattern { pattern: String },
}

impl ConfigError {
    /// Shorthand for a missing indexed property.
    pub(crate) fn missing(key: &str, index: usize) -> Self {
        ConfigError::MissingProperty {
            key: crate::properties::indexed_key(key, index),
        }
    }

    /// Shorthand for an invalid indexed property value.
    pub(crate) fn invalid(key: &str, index: usize, value: &str) -> Self {
        ConfigError::InvalidPropertyValue {
            key: crate::properties::indexed_key(key, index),
            value: value.to_string(),
        }
    }
}
