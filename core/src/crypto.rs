//! Password encoding utilities.
//!
//! # Spring Security Equivalent
//! `org.springframework.security.crypto.password.PasswordEncoder`
//!
//! # Feature Flags
//! - `argon2`: Enables `Argon2PasswordEncoder` (recommended, default)
//! - `bcrypt`: Enables `BCryptPasswordEncoder` (widely compatible)
//!
//! `ShiroHashEncoder` is always available; it produces and verifies the
//! `$shiro1$<algorithm>$<iterations>$<salt-b64>$<hash-b64>` storage format
//! used by Shiro-compatible stores.

#[cfg(feature = "argon2")]
use argon2::password_hash::rand_core::OsRng;
#[cfg(feature = "argon2")]
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
#[cfg(feature = "argon2")]
use argon2::Argon2;

use base64::prelude::*;
use rand::{thread_rng, Rng};
use sha2::{Digest, Sha256, Sha512};

/// Trait for encoding and verifying passwords.
///
/// # Spring Security Equivalent
/// `PasswordEncoder` interface
pub trait PasswordEncoder: Send + Sync {
    /// Encode the raw password.
    fn encode(&self, raw_password: &str) -> String;

    /// Verify a raw password against an encoded password.
    fn matches(&self, raw_password: &str, encoded_password: &str) -> bool;

    /// Returns true if the encoded password should be upgraded for better
    /// security.
    fn upgrade_encoding(&self, _encoded_password: &str) -> bool {
        false
    }
}

/// Argon2 password encoder - the recommended encoder for new applications.
///
/// # Feature Flag
/// Requires the `argon2` feature (enabled by default).
///
/// # Example
/// ```
/// use props_security_core::crypto::{PasswordEncoder, Argon2PasswordEncoder};
///
/// let encoder = Argon2PasswordEncoder::new();
/// let hash = encoder.encode("secret_password");
///
/// assert!(encoder.matches("secret_password", &hash));
/// assert!(!encoder.matches("wrong_password", &hash));
/// ```
#[cfg(feature = "argon2")]
#[derive(Clone)]
pub struct Argon2PasswordEncoder {
    argon2: Argon2<'static>,
}

#[cfg(feature = "argon2")]
impl Argon2PasswordEncoder {
    /// Creates a new Argon2 password encoder with default settings.
    pub fn new() -> Self {
        Argon2PasswordEncoder {
            argon2: Argon2::default(),
        }
    }
}

#[cfg(feature = "argon2")]
impl Default for Argon2PasswordEncoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "argon2")]
impl PasswordEncoder for Argon2PasswordEncoder {
    fn encode(&self, raw_password: &str) -> String {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(raw_password.as_bytes(), &salt)
            .expect("Failed to hash password")
            .to_string()
    }

    fn matches(&self, raw_password: &str, encoded_password: &str) -> bool {
        match PasswordHash::new(encoded_password) {
            Ok(parsed_hash) => self
                .argon2
                .verify_password(raw_password.as_bytes(), &parsed_hash)
                .is_ok(),
            Err(_) => false,
        }
    }
}

/// BCrypt password encoder - widely compatible with other frameworks.
///
/// # Feature Flag
/// Requires the `bcrypt` feature.
#[cfg(feature = "bcrypt")]
#[derive(Clone)]
pub struct BCryptPasswordEncoder {
    cost: u32,
}

#[cfg(feature = "bcrypt")]
impl BCryptPasswordEncoder {
    /// Creates a new BCrypt password encoder with default cost (12).
    pub fn new() -> Self {
        Self { cost: 12 }
    }

    /// Creates a new BCrypt password encoder with custom cost.
    ///
    /// Cost should be between 4 and 31. Higher values are more secure
    /// but slower. Default is 12.
    pub fn with_cost(cost: u32) -> Self {
        let cost = cost.clamp(4, 31);
        Self { cost }
    }
}

#[cfg(feature = "bcrypt")]
impl Default for BCryptPasswordEncoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "bcrypt")]
impl PasswordEncoder for BCryptPasswordEncoder {
    fn encode(&self, raw_password: &str) -> String {
        bcrypt::hash(raw_password, self.cost).expect("Failed to hash password with bcrypt")
    }

    fn matches(&self, raw_password: &str, encoded_password: &str) -> bool {
        bcrypt::verify(raw_password, encoded_password).unwrap_or(false)
    }

    fn upgrade_encoding(&self, encoded_password: &str) -> bool {
        // BCrypt hashes start with $2a$, $2b$, or $2y$ followed by the cost
        if encoded_password.starts_with("$2") && encoded_password.len() > 7 {
            if let Some(cost_str) = encoded_password.get(4..6) {
                if let Ok(hash_cost) = cost_str.parse::<u32>() {
                    return hash_cost < self.cost;
                }
            }
        }
        true
    }
}

/// No-op password encoder that stores passwords in plain text.
///
/// # Warning
/// **NEVER use this in production!** This is only for testing/development.
#[derive(Clone, Copy, Default)]
pub struct NoOpPasswordEncoder;

impl PasswordEncoder for NoOpPasswordEncoder {
    fn encode(&self, raw_password: &str) -> String {
        raw_password.to_string()
    }

    fn matches(&self, raw_password: &str, encoded_password: &str) -> bool {
        raw_password == encoded_password
    }
}

/// Digest algorithm for [`ShiroHashEncoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    Sha256,
    Sha512,
}

impl HashAlgorithm {
    /// Parses an algorithm name as it appears in properties and stored
    /// hashes ("SHA-256", "SHA-512").
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "SHA-256" => Some(HashAlgorithm::Sha256),
            "SHA-512" => Some(HashAlgorithm::Sha512),
            _ => None,
        }
    }

    /// Canonical algorithm name.
    pub fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha512 => "SHA-512",
        }
    }
}

const SHIRO_PREFIX: &str = "$shiro1$";
const PUBLIC_SALT_LEN: usize = 16;

/// Salted, iterated hash encoder compatible with Shiro-style stores.
///
/// The encoded format is
/// `$shiro1$<algorithm>$<iterations>$<public-salt-b64>$<hash-b64>`.
/// The private salt never appears in the stored value; it is prepended to
/// the public salt when hashing, so two deployments sharing a store must
/// share the private salt.
///
/// # Example
/// ```
/// use props_security_core::crypto::{PasswordEncoder, ShiroHashEncoder};
///
/// let encoder = ShiroHashEncoder::new()
///     .iterations(1_000)
///     .generate_public_salt(true);
///
/// let hash = encoder.encode("secret");
/// assert!(hash.starts_with("$shiro1$SHA-256$1000$"));
/// assert!(encoder.matches("secret", &hash));
/// assert!(!encoder.matches("other", &hash));
/// ```
#[derive(Debug, Clone)]
pub struct ShiroHashEncoder {
    algorithm: HashAlgorithm,
    iterations: u32,
    private_salt: Option<Vec<u8>>,
    generate_public_salt: bool,
}

impl ShiroHashEncoder {
    /// Creates an encoder with SHA-256, 500000 iterations, no private salt
    /// and no generated public salt.
    pub fn new() -> Self {
        ShiroHashEncoder {
            algorithm: HashAlgorithm::Sha256,
            iterations: 500_000,
            private_salt: None,
            generate_public_salt: false,
        }
    }

    /// Sets the digest algorithm.
    pub fn algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets the iteration count (values below 1 are treated as 1).
    pub fn iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations.max(1);
        self
    }

    /// Sets the secret private salt.
    pub fn private_salt(mut self, salt: impl Into<String>) -> Self {
        self.private_salt = Some(salt.into().into_bytes());
        self
    }

    /// Enables generation of a random public salt per encoded password.
    pub fn generate_public_salt(mut self, generate: bool) -> Self {
        self.generate_public_salt = generate;
        self
    }

    fn digest(&self, algorithm: HashAlgorithm, iterations: u32, raw_password: &str, public_salt: &[u8]) -> Vec<u8> {
        let mut salt = self.private_salt.clone().unwrap_or_default();
        salt.extend_from_slice(public_salt);
        match algorithm {
            HashAlgorithm::Sha256 => iterate::<Sha256>(raw_password.as_bytes(), &salt, iterations),
            HashAlgorithm::Sha512 => iterate::<Sha512>(raw_password.as_bytes(), &salt, iterations),
        }
    }
}

fn iterate<D: Digest>(password: &[u8], salt: &[u8], iterations: u32) -> Vec<u8> {
    let mut hasher = D::new();
    hasher.update(salt);
    hasher.update(password);
    let mut hashed = hasher.finalize();
    for _ in 1..iterations {
        let mut hasher = D::new();
        hasher.update(&hashed);
        hashed = hasher.finalize();
    }
    hashed.to_vec()
}

impl Default for ShiroHashEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordEncoder for ShiroHashEncoder {
    fn encode(&self, raw_password: &str) -> String {
        let public_salt: Vec<u8> = if self.generate_public_salt {
            let mut salt = [0u8; PUBLIC_SALT_LEN];
            thread_rng().fill(&mut salt);
            salt.to_vec()
        } else {
            Vec::new()
        };
        let hash = self.digest(self.algorithm, self.iterations, raw_password, &public_salt);
        format!(
            "{}{}${}${}${}",
            SHIRO_PREFIX,
            self.algorithm.name(),
            self.iterations,
            BASE64_STANDARD.encode(&public_salt),
            BASE64_STANDARD.encode(&hash)
        )
    }

    fn matches(&self, raw_password: &str, encoded_password: &str) -> bool {
        let rest = match encoded_password.strip_prefix(SHIRO_PREFIX) {
            Some(rest) => rest,
            None => return false,
        };
        let parts: Vec<&str> = rest.split('$').collect();
        if parts.len() != 4 {
            return false;
        }
        let algorithm = match HashAlgorithm::parse(parts[0]) {
            Some(a) => a,
            None => return false,
        };
        let iterations = match parts[1].parse::<u32>() {
            Ok(i) if i >= 1 => i,
            _ => return false,
        };
        let public_salt = match BASE64_STANDARD.decode(parts[2]) {
            Ok(s) => s,
            Err(_) => return false,
        };
        let stored_hash = match BASE64_STANDARD.decode(parts[3]) {
            Ok(h) => h,
            Err(_) => return false,
        };
        self.digest(algorithm, iterations, raw_password, &public_salt) == stored_hash
    }

    fn upgrade_encoding(&self, encoded_password: &str) -> bool {
        // Recommend re-encoding when the stored iteration count lags behind
        // the configured one.
        encoded_password
            .strip_prefix(SHIRO_PREFIX)
            .and_then(|rest| rest.split('$').nth(1))
            .and_then(|i| i.parse::<u32>().ok())
            .map(|stored| stored < self.iterations)
            .unwrap_or(false)
    }
}
