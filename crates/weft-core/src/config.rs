/*
 * config.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Key-path access to host configuration.
 */

//! Key-path access to host configuration.
//!
//! The host owns a single settings tree; engines read the few keys that
//! concern them through dot-separated key paths, e.g.
//! `engines.handlebars.paths`. The tree is read-only from an engine's
//! perspective.

use serde_json::Value;

/// Read-only view over the host's settings tree.
///
/// Lookup walks nested objects one dot-separated segment at a time. A
/// missing segment, or a segment applied to a non-object, resolves to
/// `None` rather than an error: absence of configuration is an ordinary
/// state engines must handle.
#[derive(Debug, Clone, Default)]
pub struct Config {
    root: Value,
}

impl Config {
    /// Wrap a settings tree.
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// Look up a value by dot-separated key path.
    pub fn get(&self, key_path: &str) -> Option<&Value> {
        let mut current = &self.root;
        for segment in key_path.split('.') {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// Look up a string value by dot-separated key path.
    ///
    /// Returns `None` if the key is absent or the value is not a string.
    pub fn get_str(&self, key_path: &str) -> Option<&str> {
        self.get(key_path)?.as_str()
    }

    /// Whether any configuration was supplied at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_null()
    }
}

impl From<Value> for Config {
    fn from(root: Value) -> Self {
        Self::new(root)
    }
}
