//! Read-only accessor over the flat property map.
//!
//! All configuration enters through a string-to-string map. Lookups never
//! fail: an absent key and a blank value are both reported as "not set",
//! they are ordinary results rather than errors.

use std::collections::HashMap;
use std::iter::FromIterator;

use serde::{Deserialize, Serialize};

/// Formats an indexed property key (`"cas.loginUrl"` + `2` ->
/// `"cas.loginUrl.2"`).
pub fn indexed_key(key: &str, index: usize) -> String {
    format!("{}.{}", key, index)
}

/// Immutable view over the configuration properties.
///
/// # Example
/// ```
/// use props_security_core::Properties;
///
/// let props = Properties::new()
///     .with("cas.loginUrl.0", "https://cas.example.org/login")
///     .with("anonymous", "true");
///
/// assert_eq!(props.get_at("cas.loginUrl", 0), Some("https://cas.example.org/login"));
/// assert!(props.is_set("anonymous"));
/// assert!(!props.is_set_at("cas.loginUrl", 1));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties {
    values: HashMap<String, String>,
}

impl Properties {
    /// Creates an empty property set.
    pub fn new() -> Self {
        Properties {
            values: HashMap::new(),
        }
    }

    /// Adds a property, replacing any previous value for the key.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Looks up a scalar key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Looks up an indexed key.
    pub fn get_at(&self, key: &str, index: usize) -> Option<&str> {
        self.values.get(&indexed_key(key, index)).map(String::as_str)
    }

    /// True when the indexed key is present, regardless of its value.
    pub fn contains_at(&self, key: &str, index: usize) -> bool {
        self.values.contains_key(&indexed_key(key, index))
    }

    /// True when the scalar key carries a non-blank value.
    pub fn is_set(&self, key: &str) -> bool {
        is_not_blank(self.get(key))
    }

    /// True when the indexed key carries a non-blank value.
    pub fn is_set_at(&self, key: &str, index: usize) -> bool {
        is_not_blank(self.get_at(key, index))
    }

    /// Number of stored properties.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no property is stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn is_not_blank(value: Option<&str>) -> bool {
    match value {
        Some(v) => !v.trim().is_empty(),
        None => false,
    }
}

impl From<HashMap<String, String>> for Properties {
    fn from(values: HashMap<String, String>) -> Self {
        Properties { values }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Properties {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexed_lookup() {
        let props = Properties::new().with("oidc.id.3", "client-3");

        assert_eq!(props.get_at("oidc.id", 3), Some("client-3"));
        assert_eq!(props.get_at("oidc.id", 0), None);
        assert_eq!(props.get("oidc.id"), None);
    }

    #[test]
    fn test_blank_values_are_not_set() {
        let props = Properties::new()
            .with("ldap.type.0", "   ")
            .with("ldap.type.1", "");

        assert!(props.contains_at("ldap.type", 0));
        assert!(props.contains_at("ldap.type", 1));
        assert!(!props.is_set_at("ldap.type", 0));
        assert!(!props.is_set_at("ldap.type", 1));
        assert!(!props.is_set_at("ldap.type", 2));
    }

    #[test]
    fn test_from_iterator() {
        let props: Properties = vec![("anonymous", "true")].into_iter().collect();
        assert!(props.is_set("anonymous"));
        assert_eq!(props.len(), 1);
    }
}
