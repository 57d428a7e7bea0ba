//! Path exclusion matching.
//!
//! Decides whether a request path takes part in the security flow at all.
//! A path "matches" when it is NOT excluded; excluded paths bypass the
//! configured clients entirely.
//!
//! # Example
//! ```
//! use props_security_core::matcher::PathMatcher;
//!
//! let matcher = PathMatcher::new()
//!     .exclude_branch("/static")
//!     .unwrap()
//!     .exclude_regex("^/health$")
//!     .unwrap();
//!
//! assert!(matcher.matches("/login"));
//! assert!(!matcher.matches("/static/app.css"));
//! assert!(!matcher.matches("/health"));
//! ```

use regex::Regex;

use crate::error::ConfigError;

/// Matches request paths against a set of exclusions.
#[derive(Debug, Clone, Default)]
pub struct PathMatcher {
    excluded_paths: Vec<String>,
    excluded_patterns: Vec<Regex>,
}

impl PathMatcher {
    /// Creates a matcher with no exclusions; every path matches.
    pub fn new() -> Self {
        PathMatcher {
            excluded_paths: Vec::new(),
            excluded_patterns: Vec::new(),
        }
    }

    /// Excludes one exact path.
    pub fn exclude_path(mut self, path: impl Into<String>) -> Self {
        self.excluded_paths.push(path.into());
        self
    }

    /// Excludes a whole branch: the path itself and everything below it.
    pub fn exclude_branch(self, branch: &str) -> Result<Self, ConfigError> {
        let pattern = format!("^{}(/.*)?$", regex::escape(branch));
        self.exclude_regex(&pattern)
    }

    /// Excludes every path matching the given regular expression.
    ///
    /// The pattern must be anchored (`^...$`); unanchored patterns silently
    /// exclude more than intended, so they are rejected.
    pub fn exclude_regex(mut self, pattern: &str) -> Result<Self, ConfigError> {
        if !pattern.starts_with('^') || !pattern.ends_with('$') {
            return Err(ConfigError::InvalidPattern {
                pattern: pattern.to_string(),
            });
        }
        let regex = Regex::new(pattern).map_err(|_| ConfigError::InvalidPattern {
            pattern: pattern.to_string(),
        })?;
        self.excluded_patterns.push(regex);
        Ok(self)
    }

    /// Number of configured exclusions.
    pub fn exclusion_count(&self) -> usize {
        self.excluded_paths.len() + self.excluded_patterns.len()
    }

    /// True when the path is not excluded.
    pub fn matches(&self, path: &str) -> bool {
        if self.excluded_paths.iter().any(|p| p == path) {
            return false;
        }
        !self.excluded_patterns.iter().any(|r| r.is_match(path))
    }
}

/// Single-exclusion matcher kept for compatibility with older configs.
#[deprecated(note = "use `PathMatcher` instead")]
pub struct ExcludedPathMatcher {
    exclude_pattern: String,
    inner: PathMatcher,
}

#[allow(deprecated)]
impl ExcludedPathMatcher {
    /// Creates a matcher excluding paths matching one anchored regex.
    pub fn new(exclude_pattern: &str) -> Result<Self, ConfigError> {
        Ok(ExcludedPathMatcher {
            exclude_pattern: exclude_pattern.to_string(),
            inner: PathMatcher::new().exclude_regex(exclude_pattern)?,
        })
    }

    /// The exclusion pattern this matcher was built with.
    pub fn exclude_pattern(&self) -> &str {
        &self.exclude_pattern
    }

    /// True when the path is not excluded.
    pub fn matches(&self, path: &str) -> bool {
        self.inner.matches(path)
    }
}
