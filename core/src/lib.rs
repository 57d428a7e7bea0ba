//! # Props Security
//!
//! Property-driven security configuration: scan a flat map of string
//! properties, detect which authentication protocol families are configured,
//! and assemble them - in a fixed, dependency-respecting order - into one
//! immutable [`Config`].
//!
//! The engine decides *whether* a protocol family builder runs and *in what
//! order* results are merged. Everything protocol-specific (token exchange,
//! directory binds, signature handling) lives behind the builder traits and
//! is out of scope here.
//!
//! # Module Structure
//!
//! - `properties` - lookup over the flat property map
//! - `keys` - property key constants and scan ceilings
//! - `detection` - one pure predicate per protocol family
//! - `builder` - builder traits, the per-family builder registry and the
//!   default builder suite
//! - `client` - client descriptors (OAuth, SAML, CAS, OIDC, HTTP)
//! - `authenticator` - authenticator definitions (LDAP, database, REST)
//! - `crypto` - password encoders (Argon2, BCrypt, NoOp, Shiro-style hash)
//! - `registry` - name-keyed accumulator collections
//! - `factory` - the ordered detection-and-assembly pass
//! - `config` - the immutable result
//! - `matcher` - path exclusion matching
//!
//! # Feature Flags
//! - `argon2`: Enables `Argon2PasswordEncoder` (enabled by default)
//! - `bcrypt`: Enables `BCryptPasswordEncoder`
//!
//! # Quick Start
//!
//! ```rust
//! use props_security_core::{Properties, PropertiesConfigFactory};
//!
//! let props = Properties::new()
//!     .with("encoder.spring.type.0", "noop")
//!     .with("db.jdbcUrl.0", "jdbc:postgresql://localhost/app")
//!     .with("db.passwordEncoder.0", "springencoder0")
//!     .with("github.id", "client-id")
//!     .with("github.secret", "client-secret");
//!
//! let config = PropertiesConfigFactory::new(props)
//!     .with_callback_url("https://app.example.org/callback")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.clients().len(), 1);
//! assert!(config.authenticators().contains("db0"));
//! ```

// Re-exports for convenience
pub use authenticator::{Authenticator, AuthenticatorKind};
pub use builder::BuilderSet;
pub use client::{Client, ClientKind};
pub use config::Config;
pub use crypto::{NoOpPasswordEncoder, PasswordEncoder, ShiroHashEncoder};
#[cfg(feature = "argon2")]
pub use crypto::Argon2PasswordEncoder;
#[cfg(feature = "bcrypt")]
pub use crypto::BCryptPasswordEncoder;
pub use detection::ProtocolFamily;
pub use error::ConfigError;
pub use factory::PropertiesConfigFactory;
pub use matcher::PathMatcher;
pub use properties::Properties;

pub mod authenticator;
pub mod builder;
pub mod client;
pub mod config;
pub mod crypto;
pub mod detection;
pub mod error;
pub mod factory;
pub mod keys;
pub mod matcher;
pub mod properties;
pub mod registry;
