// SPDX-License-Identifier: MIT OR Apache-2.0

//! Option declarations and the holder graph they live in.
//!
//! An [`OptionDecl`] is a zero-state marker identifying one named, typed
//! configuration entry. Declarations are grouped into [`OptionGroup`]s, which
//! list their options and any nested groups explicitly; discovery walks this
//! static graph instead of introspecting types at runtime. Entry points into
//! the graph are [`Holder`] values, which may be a plain declaration or a
//! group.

use crate::domain::errors::Result;
use crate::domain::option_key::OptionKey;
use crate::domain::option_value::{OptionValue, ValueType};
use crate::ports::PropertySource;

/// A pure conversion function from an option name and property source to a
/// typed value.
pub type ConvertFn = fn(&str, &dyn PropertySource) -> Result<OptionValue>;

/// A caller-supplied conversion attached directly to a declaration.
///
/// Custom converters bypass the strategy table entirely: resolution dispatches
/// to the declaration's own function, with full access to the option name and
/// the property source. The converter also declares the static type of the
/// value it produces, for consumption at the binding boundary.
#[derive(Clone, Copy, Debug)]
pub struct CustomConverter {
    /// The static type of the converter's output.
    pub value_type: ValueType,
    /// The conversion function.
    pub convert: ConvertFn,
}

/// The semantic value-type tag of an option declaration.
///
/// Built-in kinds resolve through the strategy table; `Custom` carries its own
/// converter and resolves by direct dispatch.
#[derive(Clone, Copy, Debug)]
pub enum OptionKind {
    /// Raw string value.
    String,
    /// Comma-delimited string sequence.
    StringList,
    /// 32-bit integer with the `-1` sentinel on absence or parse failure.
    Integer,
    /// Case-insensitive truthy boolean.
    Boolean,
    /// Parsed URL.
    Url,
    /// 64-bit integer; parse failure propagates.
    Long,
    /// Declaration-supplied converter.
    Custom(CustomConverter),
}

impl OptionKind {
    /// Strategy-table tag for built-in kinds.
    ///
    /// Custom kinds have no table entry; they dispatch to their own converter.
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            OptionKind::String => Some("string"),
            OptionKind::StringList => Some("string-list"),
            OptionKind::Integer => Some("integer"),
            OptionKind::Boolean => Some("boolean"),
            OptionKind::Url => Some("url"),
            OptionKind::Long => Some("long"),
            OptionKind::Custom(_) => None,
        }
    }
}

/// A zero-state marker identifying one named, typed configuration entry.
///
/// The declaration's name is both its identity and the lookup key into the
/// property source. Declarations are intended to be `static` items so that the
/// holder graph can reference them from `static` groups.
///
/// Option names must be unique within a single property source; collisions are
/// not detected and silently pick the first binding found.
///
/// # Examples
///
/// ```
/// use optcfg::domain::OptionDecl;
///
/// static HOSTNAME: OptionDecl = OptionDecl::string("HOSTNAME");
/// static PORT: OptionDecl = OptionDecl::integer("PORT");
///
/// assert_eq!(HOSTNAME.name(), "HOSTNAME");
/// assert_eq!(PORT.key().as_str(), "PORT");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct OptionDecl {
    name: &'static str,
    kind: OptionKind,
}

impl OptionDecl {
    /// Declares a string option.
    pub const fn string(name: &'static str) -> Self {
        Self {
            name,
            kind: OptionKind::String,
        }
    }

    /// Declares a comma-delimited string-list option.
    pub const fn string_list(name: &'static str) -> Self {
        Self {
            name,
            kind: OptionKind::StringList,
        }
    }

    /// Declares a 32-bit integer option.
    pub const fn integer(name: &'static str) -> Self {
        Self {
            name,
            kind: OptionKind::Integer,
        }
    }

    /// Declares a boolean option.
    pub const fn boolean(name: &'static str) -> Self {
        Self {
            name,
            kind: OptionKind::Boolean,
        }
    }

    /// Declares a URL option.
    pub const fn url(name: &'static str) -> Self {
        Self {
            name,
            kind: OptionKind::Url,
        }
    }

    /// Declares a 64-bit integer option.
    pub const fn long(name: &'static str) -> Self {
        Self {
            name,
            kind: OptionKind::Long,
        }
    }

    /// Declares an option with a caller-supplied converter.
    ///
    /// # Examples
    ///
    /// ```
    /// use optcfg::domain::{ConfigError, OptionDecl, OptionValue, ValueType};
    /// use optcfg::ports::PropertySource;
    ///
    /// static SHOUTED: OptionDecl = OptionDecl::custom(
    ///     "SHOUTED",
    ///     ValueType::Custom("upper-case"),
    ///     |name, source| {
    ///         let raw = source.get(name).ok_or_else(|| ConfigError::NotFound {
    ///             name: name.to_string(),
    ///         })?;
    ///         Ok(OptionValue::Str(raw.to_uppercase()))
    ///     },
    /// );
    /// ```
    pub const fn custom(
        name: &'static str,
        value_type: ValueType,
        convert: ConvertFn,
    ) -> Self {
        Self {
            name,
            kind: OptionKind::Custom(CustomConverter {
                value_type,
                convert,
            }),
        }
    }

    /// The declaration's name: its identity and its property-source key.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The declaration's kind.
    pub fn kind(&self) -> &OptionKind {
        &self.kind
    }

    /// Derives the identity key for this declaration.
    pub fn key(&self) -> OptionKey {
        OptionKey::of(self)
    }
}

/// A named grouping of option declarations and nested groups.
///
/// Groups form the explicit declaration graph that discovery walks. A group's
/// `options` are its directly-contained declarations; its `includes` are
/// shared groups whose options are reachable through it, the way options
/// declared in a common interface are reachable through every type that
/// implements it. Groups are declared as `static` struct literals, so the
/// whole graph is registered at compile time.
///
/// # Examples
///
/// ```
/// use optcfg::domain::{OptionDecl, OptionGroup};
///
/// static NAME: OptionDecl = OptionDecl::string("NAME");
/// static HOSTNAME: OptionDecl = OptionDecl::string("HOSTNAME");
///
/// static SHARED: OptionGroup = OptionGroup {
///     name: "shared",
///     options: &[&HOSTNAME],
///     includes: &[],
/// };
///
/// static SERVER: OptionGroup = OptionGroup {
///     name: "server",
///     options: &[&NAME],
///     includes: &[&SHARED],
/// };
///
/// assert_eq!(SERVER.options.len(), 1);
/// assert_eq!(SERVER.includes.len(), 1);
/// ```
#[derive(Debug)]
pub struct OptionGroup {
    /// The group's name, for diagnostics.
    pub name: &'static str,
    /// The group's directly-contained declarations.
    pub options: &'static [&'static OptionDecl],
    /// The nested groups reachable through this group.
    pub includes: &'static [&'static OptionGroup],
}

/// An entry point for option discovery.
///
/// An entry point may itself be a plain declaration, or a group containing
/// declarations and further groups.
#[derive(Clone, Copy, Debug)]
pub enum Holder {
    /// A single declaration; discovery adds it and stops descending.
    Option(&'static OptionDecl),
    /// A group; discovery collects its options and recurses into its includes.
    Group(&'static OptionGroup),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConfigError;

    static NAME: OptionDecl = OptionDecl::string("NAME");
    static OPTIONS: OptionDecl = OptionDecl::string_list("OPTIONS");
    static PORT: OptionDecl = OptionDecl::integer("PORT");
    static FLAG: OptionDecl = OptionDecl::boolean("FLAG");
    static TARGET: OptionDecl = OptionDecl::url("TARGET");
    static SIZE: OptionDecl = OptionDecl::long("SIZE");

    #[test]
    fn test_builtin_kind_tags() {
        assert_eq!(NAME.kind().tag(), Some("string"));
        assert_eq!(OPTIONS.kind().tag(), Some("string-list"));
        assert_eq!(PORT.kind().tag(), Some("integer"));
        assert_eq!(FLAG.kind().tag(), Some("boolean"));
        assert_eq!(TARGET.kind().tag(), Some("url"));
        assert_eq!(SIZE.kind().tag(), Some("long"));
    }

    #[test]
    fn test_custom_kind_has_no_tag() {
        static CUSTOM: OptionDecl = OptionDecl::custom(
            "CUSTOM",
            ValueType::Custom("raw"),
            |name, source| {
                source
                    .get(name)
                    .map(OptionValue::Str)
                    .ok_or_else(|| ConfigError::NotFound {
                        name: name.to_string(),
                    })
            },
        );
        assert!(CUSTOM.kind().tag().is_none());
    }

    #[test]
    fn test_declaration_name_is_identity() {
        assert_eq!(NAME.name(), "NAME");
        assert_eq!(NAME.key().as_str(), "NAME");
    }

    #[test]
    fn test_group_construction() {
        static INNER: OptionGroup = OptionGroup {
            name: "inner",
            options: &[&PORT],
            includes: &[],
        };
        static OUTER: OptionGroup = OptionGroup {
            name: "outer",
            options: &[&NAME, &FLAG],
            includes: &[&INNER],
        };

        assert_eq!(OUTER.name, "outer");
        assert_eq!(OUTER.options.len(), 2);
        assert_eq!(OUTER.includes.len(), 1);
        assert_eq!(OUTER.includes[0].options[0].name(), "PORT");
    }

    #[test]
    fn test_empty_group() {
        static EMPTY: OptionGroup = OptionGroup {
            name: "empty",
            options: &[],
            includes: &[],
        };
        assert!(EMPTY.options.is_empty());
        assert!(EMPTY.includes.is_empty());
    }
}
