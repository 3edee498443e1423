//! core::model
//!
//! The config model: an order-independent mapping of environment variable
//! names to values.
//!
//! # Types
//!
//! - [`Config`] - Key/value mapping with deterministic, key-ordered iteration
//! - [`Var`] - A borrowed (key, value) pair from a [`Config`]
//! - [`ConfigDiff`] - Key-level difference between two configs
//!
//! # Ordering
//!
//! Keys are compared bytewise. Two configs holding the same pairs are equal
//! no matter the order they were built in, and [`Config::ordered`] always
//! yields the same sequence for them.
//!
//! # Example
//!
//! ```
//! use herofig::core::model::Config;
//!
//! let mut a = Config::new();
//! a.insert("B", "2");
//! a.insert("A", "1");
//!
//! let b: Config = [("A", "1"), ("B", "2")].into_iter().collect();
//! assert_eq!(a, b);
//!
//! let keys: Vec<_> = a.ordered().iter().map(|v| v.key).collect();
//! assert_eq!(keys, ["A", "B"]);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A set of environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Config {
    vars: BTreeMap<String, String>,
}

/// A single variable borrowed from a [`Config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Var<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

impl std::fmt::Display for Var<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

impl Config {
    /// Create an empty config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, returning the previous value if there was one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.vars.insert(key.into(), value.into())
    }

    /// Look up the value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.vars.remove(key)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// All variables sorted by key in ascending byte order.
    ///
    /// This is the canonical order used for display, serialization and
    /// fingerprinting.
    pub fn ordered(&self) -> Vec<Var<'_>> {
        self.iter().collect()
    }

    /// Iterate variables in canonical order without collecting.
    pub fn iter(&self) -> impl Iterator<Item = Var<'_>> {
        self.vars.iter().map(|(key, value)| Var { key, value })
    }

    /// Iterate keys in canonical order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }

    /// Compare this (local) config against `remote`.
    ///
    /// `added` holds keys only present here, `removed` keys only present in
    /// `remote`, and `changed` keys present in both with different values.
    pub fn diff(&self, remote: &Config) -> ConfigDiff {
        let mut diff = ConfigDiff::default();

        for var in self.iter() {
            match remote.get(var.key) {
                None => diff.added.push((var.key.to_string(), var.value.to_string())),
                Some(old) if old != var.value => diff.changed.push(Change {
                    key: var.key.to_string(),
                    old: old.to_string(),
                    new: var.value.to_string(),
                }),
                Some(_) => {}
            }
        }

        for var in remote.iter() {
            if !self.contains_key(var.key) {
                diff.removed
                    .push((var.key.to_string(), var.value.to_string()));
            }
        }

        diff
    }
}

impl<K, V> FromIterator<(K, V)> for Config
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut config = Config::new();
        config.extend(iter);
        config
    }
}

impl<K, V> Extend<(K, V)> for Config
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for Config {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars.into_iter()
    }
}

/// A value that differs between local and remote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub key: String,
    /// Value currently held by the remote.
    pub old: String,
    /// Value held locally.
    pub new: String,
}

/// Key-level difference between a local and a remote config.
///
/// Every list is sorted by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDiff {
    /// Present locally, missing remotely.
    pub added: Vec<(String, String)>,
    /// Present remotely, missing locally.
    pub removed: Vec<(String, String)>,
    /// Present on both sides with different values.
    pub changed: Vec<Change>,
}

impl ConfigDiff {
    /// True when both sides hold exactly the same pairs.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(pairs: &[(&str, &str)]) -> Config {
        pairs.iter().copied().collect()
    }

    #[test]
    fn ordered_sorts_by_key() {
        let cfg = config(&[("C", "value"), ("A", "value"), ("B", "value")]);

        assert_eq!(
            cfg.ordered(),
            vec![
                Var { key: "A", value: "value" },
                Var { key: "B", value: "value" },
                Var { key: "C", value: "value" },
            ]
        );
    }

    #[test]
    fn ordered_is_bytewise() {
        // Uppercase sorts before lowercase, '_' sorts after uppercase letters.
        let cfg = config(&[("a", "1"), ("B", "2"), ("A_B", "3"), ("A", "4")]);
        let keys: Vec<_> = cfg.keys().collect();
        assert_eq!(keys, ["A", "A_B", "B", "a"]);
    }

    #[test]
    fn equality_ignores_construction_order() {
        let mut forward = Config::new();
        forward.insert("A", "1");
        forward.insert("B", "2");

        let mut backward = Config::new();
        backward.insert("B", "2");
        backward.insert("A", "1");

        assert_eq!(forward, backward);
    }

    #[test]
    fn equality_checks_values() {
        assert_ne!(config(&[("A", "1")]), config(&[("A", "2")]));
        assert_ne!(config(&[("A", "1")]), config(&[("A", "1"), ("B", "1")]));
    }

    #[test]
    fn insert_overwrites() {
        let mut cfg = Config::new();
        assert_eq!(cfg.insert("KEY", "1"), None);
        assert_eq!(cfg.insert("KEY", "2"), Some("1".to_string()));
        assert_eq!(cfg.get("KEY"), Some("2"));
        assert_eq!(cfg.len(), 1);
    }

    #[test]
    fn var_display() {
        let var = Var {
            key: "URL",
            value: "a=b",
        };
        assert_eq!(var.to_string(), "URL=a=b");
    }

    #[test]
    fn diff_in_sync() {
        let cfg = config(&[("A", "1"), ("B", "2")]);
        assert!(cfg.diff(&cfg.clone()).is_empty());
    }

    #[test]
    fn diff_reports_each_kind() {
        let local = config(&[("A", "1"), ("B", "3"), ("D", "4")]);
        let remote = config(&[("A", "1"), ("B", "2"), ("C", "9")]);

        let diff = local.diff(&remote);

        assert_eq!(diff.added, vec![("D".to_string(), "4".to_string())]);
        assert_eq!(diff.removed, vec![("C".to_string(), "9".to_string())]);
        assert_eq!(
            diff.changed,
            vec![Change {
                key: "B".to_string(),
                old: "2".to_string(),
                new: "3".to_string(),
            }]
        );
        assert!(!diff.is_empty());
    }

    #[test]
    fn deserializes_from_json_object() {
        let cfg: Config = serde_json::from_str(r#"{"B":"2","A":"1"}"#).unwrap();
        assert_eq!(cfg, config(&[("A", "1"), ("B", "2")]));
    }
}
