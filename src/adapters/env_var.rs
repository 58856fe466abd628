// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable property source.
//!
//! This module provides a property source that snapshots the process
//! environment at construction time, with optional prefix filtering.

use crate::ports::PropertySource;
use std::collections::HashMap;
use std::env;

/// A property source backed by a snapshot of the process environment.
///
/// The environment is read once when the source is constructed; later changes
/// to the process environment are not observed. When a prefix is configured,
/// only variables starting with it are included and the prefix is stripped
/// from the key.
///
/// # Examples
///
/// ```rust
/// use optcfg::adapters::EnvVarSource;
///
/// // Snapshot the whole environment
/// let source = EnvVarSource::new();
///
/// // Only variables starting with "APP_", keyed without the prefix
/// let source = EnvVarSource::with_prefix("APP_");
/// ```
#[derive(Clone, Debug)]
pub struct EnvVarSource {
    values: HashMap<String, String>,
}

impl EnvVarSource {
    /// Snapshots all environment variables available to the process.
    pub fn new() -> Self {
        Self::snapshot(None)
    }

    /// Snapshots environment variables starting with the given prefix.
    ///
    /// The prefix is stripped from keys, so `APP_HOSTNAME` becomes `HOSTNAME`
    /// under the prefix `APP_`.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self::snapshot(Some(prefix.into()))
    }

    fn snapshot(prefix: Option<String>) -> Self {
        let mut values = HashMap::new();

        for (key, value) in env::vars() {
            let key = match &prefix {
                Some(prefix) => match key.strip_prefix(prefix.as_str()) {
                    Some(stripped) => stripped.to_string(),
                    None => continue,
                },
                None => key,
            };
            values.insert(key, value);
        }

        tracing::debug!(
            "Snapshotted {} environment variables (prefix={:?})",
            values.len(),
            prefix
        );

        Self { values }
    }
}

impl Default for EnvVarSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertySource for EnvVarSource {
    fn name(&self) -> &str {
        "env"
    }

    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    fn keys(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }
}
