// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property source trait definition.
//!
//! This module defines the `PropertySource` trait, the port through which the
//! registry observes configuration data. From the registry's perspective a
//! source is just a flat `name -> string | absent` mapping; variable expansion,
//! file loading, and property merging all happen upstream of this boundary.

/// A flat, immutable mapping from string keys to string values.
///
/// Implementations are built once and never mutated afterwards, so every
/// lookup over the lifetime of a registry observes the same data. Values are
/// already expanded: a source never hands back `${env:VAR}`-style placeholders.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; a registry holding a source may be
/// shared across threads because resolution never mutates it.
///
/// # Examples
///
/// ```rust
/// use optcfg::ports::PropertySource;
///
/// struct OneValue;
///
/// impl PropertySource for OneValue {
///     fn name(&self) -> &str {
///         "one-value"
///     }
///
///     fn get(&self, key: &str) -> Option<String> {
///         (key == "NAME").then(|| "V1".to_string())
///     }
///
///     fn keys(&self) -> Vec<String> {
///         vec!["NAME".to_string()]
///     }
/// }
///
/// let source = OneValue;
/// assert_eq!(source.get("NAME").as_deref(), Some("V1"));
/// assert!(source.contains("NAME"));
/// assert!(!source.contains("OTHER"));
/// ```
pub trait PropertySource: Send + Sync {
    /// Returns the name of this source, used for logging and error messages.
    fn name(&self) -> &str;

    /// Retrieves the raw string value for the given key, if present.
    fn get(&self, key: &str) -> Option<String>;

    /// Checks whether the source has an entry for the given key.
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns all keys available in this source.
    ///
    /// Useful for debugging and for diagnostics when resolution fails.
    fn keys(&self) -> Vec<String>;
}
