// SPDX-License-Identifier: MIT OR Apache-2.0

//! Identity key newtype for option declarations.
//!
//! This module provides the `OptionKey` type, a value-type key derived from an
//! option declaration's identity. The same option reached through different
//! holder paths always produces equal keys, which is what external binding
//! layers and discovery deduplication rely on.

use crate::domain::declaration::OptionDecl;
use serde::Serialize;
use std::fmt;

/// A structurally comparable key derived from an option declaration's identity.
///
/// Two keys compare equal and hash identically iff they were built from
/// declarations with the same identity, regardless of which discovery path
/// produced them. A key is a pure lookup artifact: it never implies ownership
/// of the resolved value.
///
/// # Examples
///
/// ```
/// use optcfg::domain::{OptionDecl, OptionKey};
///
/// static HOSTNAME: OptionDecl = OptionDecl::string("HOSTNAME");
///
/// let key = OptionKey::of(&HOSTNAME);
/// assert_eq!(key, HOSTNAME.key());
/// assert_eq!(key.as_str(), "HOSTNAME");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct OptionKey(&'static str);

impl OptionKey {
    /// Derives the key for an option declaration.
    ///
    /// # Examples
    ///
    /// ```
    /// use optcfg::domain::{OptionDecl, OptionKey};
    ///
    /// static PORT: OptionDecl = OptionDecl::integer("PORT");
    ///
    /// let key = OptionKey::of(&PORT);
    /// assert_eq!(key.as_str(), "PORT");
    /// ```
    pub fn of(decl: &OptionDecl) -> Self {
        OptionKey(decl.name())
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl From<&OptionDecl> for OptionKey {
    fn from(decl: &OptionDecl) -> Self {
        OptionKey::of(decl)
    }
}

impl AsRef<str> for OptionKey {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    static NAME: OptionDecl = OptionDecl::string("NAME");
    static OTHER: OptionDecl = OptionDecl::string("OTHER");
    static NAME_AGAIN: OptionDecl = OptionDecl::boolean("NAME");

    #[test]
    fn test_key_equality_follows_identity() {
        assert_eq!(OptionKey::of(&NAME), OptionKey::of(&NAME));
        assert_ne!(OptionKey::of(&NAME), OptionKey::of(&OTHER));
    }

    #[test]
    fn test_same_identity_different_declaration_sites() {
        // Identity is the declared name, not the declaration address or kind.
        assert_eq!(OptionKey::of(&NAME), OptionKey::of(&NAME_AGAIN));
    }

    #[test]
    fn test_key_hash_lookup() {
        let mut map = HashMap::new();
        map.insert(OptionKey::of(&NAME), "value");

        assert_eq!(map.get(&NAME.key()), Some(&"value"));
        assert_eq!(map.get(&OTHER.key()), None);
    }

    #[test]
    fn test_key_display() {
        assert_eq!(format!("{}", OptionKey::of(&NAME)), "NAME");
    }

    #[test]
    fn test_key_from_decl_ref() {
        let key: OptionKey = (&NAME).into();
        assert_eq!(key.as_str(), "NAME");
    }

    #[test]
    fn test_key_ordering() {
        let mut keys = vec![OptionKey::of(&OTHER), OptionKey::of(&NAME)];
        keys.sort();
        assert_eq!(keys[0].as_str(), "NAME");
    }
}
