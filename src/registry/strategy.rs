// SPDX-License-Identifier: MIT OR Apache-2.0

//! The conversion strategy table.
//!
//! This module maps option kind tags to conversion strategies. Each strategy
//! pairs a pure conversion function with the static type of the value it
//! produces. The built-in table covers the string, string-list, integer,
//! boolean, url, and long kinds; callers extend a table by registering new
//! entries, never by modifying existing ones.

use crate::domain::{ConfigError, ConvertFn, OptionValue, Result, ValueType};
use crate::ports::PropertySource;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use url::Url;

/// One entry in the strategy table: a kind tag, the static output type, and
/// the conversion function.
///
/// # Examples
///
/// ```
/// use optcfg::domain::{ConfigError, OptionValue, ValueType};
/// use optcfg::registry::ConversionStrategy;
///
/// let strategy = ConversionStrategy::new("shouted", ValueType::Custom("shouted"), |name, source| {
///     let raw = source.get(name).ok_or_else(|| ConfigError::NotFound {
///         name: name.to_string(),
///     })?;
///     Ok(OptionValue::Str(raw.to_uppercase()))
/// });
/// assert_eq!(strategy.kind(), "shouted");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ConversionStrategy {
    kind: &'static str,
    value_type: ValueType,
    convert: ConvertFn,
}

impl ConversionStrategy {
    /// Creates a strategy for the given kind tag.
    pub const fn new(kind: &'static str, value_type: ValueType, convert: ConvertFn) -> Self {
        Self {
            kind,
            value_type,
            convert,
        }
    }

    /// The kind tag this strategy is registered under.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// The static type of the values this strategy produces.
    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// Applies the conversion to the named property.
    pub fn resolve(&self, name: &str, source: &dyn PropertySource) -> Result<OptionValue> {
        (self.convert)(name, source)
    }
}

/// A table of conversion strategies keyed by kind tag.
///
/// The table is populated once, when a registry is constructed, and read-only
/// afterwards. Cloning is cheap (strategies are plain function pointers), so a
/// process-wide built-in table can seed per-registry tables without sharing
/// mutable state.
///
/// # Examples
///
/// ```
/// use optcfg::domain::ValueType;
/// use optcfg::registry::StrategyTable;
///
/// let table = StrategyTable::builtin();
/// assert_eq!(table.value_type("boolean"), Some(ValueType::Boolean));
/// assert_eq!(table.value_type("nonesuch"), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct StrategyTable {
    entries: HashMap<&'static str, ConversionStrategy>,
}

static BUILTINS: Lazy<StrategyTable> = Lazy::new(|| {
    let mut table = StrategyTable::empty();
    table.register(ConversionStrategy::new(
        "string",
        ValueType::String,
        convert_string,
    ));
    table.register(ConversionStrategy::new(
        "string-list",
        ValueType::StringList,
        convert_string_list,
    ));
    table.register(ConversionStrategy::new(
        "integer",
        ValueType::Integer,
        convert_integer,
    ));
    table.register(ConversionStrategy::new(
        "boolean",
        ValueType::Boolean,
        convert_boolean,
    ));
    table.register(ConversionStrategy::new("url", ValueType::Url, convert_url));
    table.register(ConversionStrategy::new(
        "long",
        ValueType::Long,
        convert_long,
    ));
    table
});

impl StrategyTable {
    /// Creates an empty table with no registered kinds.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Creates a table holding the six built-in kinds.
    pub fn builtin() -> Self {
        BUILTINS.clone()
    }

    /// Registers a strategy under its kind tag.
    ///
    /// Returns the previously registered strategy if the tag was already
    /// taken. Extending a table is always additive; built-in entries are only
    /// displaced when a caller explicitly re-registers their tag.
    pub fn register(&mut self, strategy: ConversionStrategy) -> Option<ConversionStrategy> {
        self.entries.insert(strategy.kind(), strategy)
    }

    /// Looks up the strategy for a kind tag.
    pub fn get(&self, kind: &str) -> Option<&ConversionStrategy> {
        self.entries.get(kind)
    }

    /// The static output type for a kind tag, if registered.
    pub fn value_type(&self, kind: &str) -> Option<ValueType> {
        self.entries.get(kind).map(ConversionStrategy::value_type)
    }

    /// Resolves the named property through the strategy registered for `kind`.
    ///
    /// Fails with [`ConfigError::TypeNotFound`] when no strategy is registered
    /// under the tag.
    pub fn resolve(&self, kind: &str, name: &str, source: &dyn PropertySource) -> Result<OptionValue> {
        match self.entries.get(kind) {
            Some(strategy) => strategy.resolve(name, source),
            None => {
                tracing::warn!("No configuration type found for '{}'", name);
                Err(ConfigError::TypeNotFound {
                    name: name.to_string(),
                })
            }
        }
    }

    /// The number of registered kinds.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no kinds are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn require(name: &str, source: &dyn PropertySource) -> Result<String> {
    source.get(name).ok_or_else(|| {
        tracing::warn!("No configuration property found for '{}'", name);
        ConfigError::NotFound {
            name: name.to_string(),
        }
    })
}

fn convert_string(name: &str, source: &dyn PropertySource) -> Result<OptionValue> {
    require(name, source).map(OptionValue::Str)
}

fn convert_string_list(name: &str, source: &dyn PropertySource) -> Result<OptionValue> {
    let raw = require(name, source)?;
    let items = if raw.is_empty() {
        Vec::new()
    } else {
        raw.split(',').map(str::to_string).collect()
    };
    Ok(OptionValue::StrList(items))
}

fn convert_integer(name: &str, source: &dyn PropertySource) -> Result<OptionValue> {
    // Absence and parse failure both yield the documented -1 sentinel.
    let value = source
        .get(name)
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(-1);
    Ok(OptionValue::Int(value))
}

fn convert_boolean(name: &str, source: &dyn PropertySource) -> Result<OptionValue> {
    let raw = require(name, source)?;
    Ok(OptionValue::Bool(raw.eq_ignore_ascii_case("true")))
}

fn convert_url(name: &str, source: &dyn PropertySource) -> Result<OptionValue> {
    let raw = require(name, source)?;
    let url = Url::parse(&raw).map_err(|e| ConfigError::InvalidValue {
        name: name.to_string(),
        kind: "url",
        source: Box::new(e),
    })?;
    Ok(OptionValue::Url(url))
}

fn convert_long(name: &str, source: &dyn PropertySource) -> Result<OptionValue> {
    let raw = require(name, source)?;
    let value = raw.parse::<i64>().map_err(|e| ConfigError::InvalidValue {
        name: name.to_string(),
        kind: "long",
        source: Box::new(e),
    })?;
    Ok(OptionValue::Long(value))
}
