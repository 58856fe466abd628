// SPDX-License-Identifier: MIT OR Apache-2.0

//! The option registry: discovery plus identity-keyed resolution.
//!
//! This module provides `OptionRegistry`, which owns a property source and the
//! set of option declarations discovered from its entry points, and resolves
//! each declaration to a typed value through the strategy table. It also
//! provides `Binding`, the per-option export consumed by external binding
//! layers.

use crate::domain::{
    ConfigError, Holder, OptionDecl, OptionKey, OptionKind, OptionValue, Result, ValueType,
};
use crate::ports::PropertySource;
use crate::registry::discovery::discover;
use crate::registry::strategy::StrategyTable;
use std::collections::HashMap;

/// A typed registry of configuration options backed by one property source.
///
/// Construction runs discovery once over the given entry points and freezes
/// the resulting declaration set. Resolution is recomputed on every call;
/// nothing is cached, so each call observes exactly what the immutable source
/// holds.
///
/// # Examples
///
/// ```
/// use optcfg::prelude::*;
///
/// static HOSTNAME: OptionDecl = OptionDecl::string("HOSTNAME");
/// static PORT: OptionDecl = OptionDecl::integer("PORT");
///
/// static SERVER: OptionGroup = OptionGroup {
///     name: "server",
///     options: &[&HOSTNAME, &PORT],
///     includes: &[],
/// };
///
/// # fn main() -> optcfg::domain::Result<()> {
/// let source = MapSource::from_pairs([("HOSTNAME", "IF!"), ("PORT", "42")]);
/// let registry = OptionRegistry::new(Box::new(source), &[Holder::Group(&SERVER)]);
///
/// let values = registry.resolve_all()?;
/// assert_eq!(values[&HOSTNAME.key()].as_str()?, "IF!");
/// assert_eq!(values[&PORT.key()].as_int()?, 42);
/// # Ok(())
/// # }
/// ```
pub struct OptionRegistry {
    source: Box<dyn PropertySource>,
    options: Vec<&'static OptionDecl>,
    strategies: StrategyTable,
}

impl OptionRegistry {
    /// Creates a registry with the built-in strategy table.
    ///
    /// Discovery runs once, here; the declaration set never changes afterwards.
    pub fn new(source: Box<dyn PropertySource>, entry_points: &[Holder]) -> Self {
        Self::with_strategies(source, entry_points, StrategyTable::builtin())
    }

    /// Creates a registry with a caller-supplied strategy table.
    ///
    /// Use this to add kinds beyond the built-ins, or to restrict the
    /// registry to a subset of kinds.
    pub fn with_strategies(
        source: Box<dyn PropertySource>,
        entry_points: &[Holder],
        strategies: StrategyTable,
    ) -> Self {
        let options = discover(entry_points);
        tracing::debug!(
            "Discovered {} configuration options from source '{}'",
            options.len(),
            source.name()
        );

        Self {
            source,
            options,
            strategies,
        }
    }

    /// The discovered declarations, in first-encounter order.
    pub fn options(&self) -> &[&'static OptionDecl] {
        &self.options
    }

    /// The registry's strategy table.
    pub fn strategies(&self) -> &StrategyTable {
        &self.strategies
    }

    /// The registry's property source.
    pub fn source(&self) -> &dyn PropertySource {
        self.source.as_ref()
    }

    /// Resolves every discovered declaration, keyed by identity.
    ///
    /// Fails on the first declaration whose key is missing, whose value is
    /// malformed (integer sentinel excepted), or whose kind has no registered
    /// strategy; a partial result is never returned.
    pub fn resolve_all(&self) -> Result<HashMap<OptionKey, OptionValue>> {
        let mut values = HashMap::with_capacity(self.options.len());
        for decl in &self.options {
            values.insert(decl.key(), self.resolve(decl)?);
        }
        Ok(values)
    }

    /// Resolves a single declaration.
    ///
    /// The declaration does not need to have been discovered: any declaration
    /// can be resolved ad hoc against this registry's source and strategies.
    pub fn resolve(&self, decl: &OptionDecl) -> Result<OptionValue> {
        match decl.kind() {
            OptionKind::Custom(converter) => {
                if !self.source.contains(decl.name()) {
                    tracing::warn!("No configuration property found for '{}'", decl.name());
                    return Err(ConfigError::NotFound {
                        name: decl.name().to_string(),
                    });
                }
                (converter.convert)(decl.name(), self.source.as_ref())
            }
            builtin => match builtin.tag() {
                Some(tag) => self.strategies.resolve(tag, decl.name(), self.source.as_ref()),
                None => Err(ConfigError::TypeNotFound {
                    name: decl.name().to_string(),
                }),
            },
        }
    }

    /// Resolves the declaration's name through the string strategy.
    ///
    /// A convenience accessor for callers needing one value ad hoc, without a
    /// discovery pass. The declaration's own kind is ignored.
    pub fn get_string(&self, decl: &OptionDecl) -> Result<String> {
        self.strategies
            .resolve("string", decl.name(), self.source.as_ref())?
            .into_string()
    }

    /// Resolves the declaration's name through the boolean strategy.
    ///
    /// The boolean counterpart of [`OptionRegistry::get_string`].
    pub fn get_boolean(&self, decl: &OptionDecl) -> Result<bool> {
        self.strategies
            .resolve("boolean", decl.name(), self.source.as_ref())?
            .as_bool()
    }

    /// The static type a declaration's resolution will produce.
    pub fn value_type_of(&self, decl: &OptionDecl) -> Result<ValueType> {
        match decl.kind() {
            OptionKind::Custom(converter) => Ok(converter.value_type),
            builtin => builtin
                .tag()
                .and_then(|tag| self.strategies.value_type(tag))
                .ok_or_else(|| ConfigError::TypeNotFound {
                    name: decl.name().to_string(),
                }),
        }
    }

    /// Exports one binding per discovered declaration.
    ///
    /// Each binding carries the declaration's identity key, the static type
    /// of its value, and a zero-argument provider that performs resolution on
    /// demand. Fails with [`ConfigError::TypeNotFound`] if any declaration's
    /// kind has no registered strategy; a binding set is all-or-nothing.
    pub fn bindings(&self) -> Result<Vec<Binding<'_>>> {
        let mut bindings = Vec::with_capacity(self.options.len());
        for &decl in &self.options {
            let value_type = self.value_type_of(decl)?;
            tracing::debug!(
                "Binding configuration named '{}' to type '{}'",
                decl.name(),
                value_type
            );
            bindings.push(Binding {
                key: decl.key(),
                value_type,
                provider: Box::new(move || self.resolve(decl)),
            });
        }
        Ok(bindings)
    }
}

/// The per-option export consumed at the binding boundary.
///
/// A binding identifies one discovered option by its identity key, declares
/// the static type of its value, and supplies a zero-argument provider that
/// resolves the value on demand. The external binding layer decides when and
/// how often the provider runs; each run is an independent resolution.
pub struct Binding<'r> {
    key: OptionKey,
    value_type: ValueType,
    provider: Box<dyn Fn() -> Result<OptionValue> + 'r>,
}

impl Binding<'_> {
    /// The identity key of the bound option.
    pub fn key(&self) -> OptionKey {
        self.key
    }

    /// The static type the provider's value will have.
    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// Resolves the bound option's value.
    pub fn provide(&self) -> Result<OptionValue> {
        (self.provider)()
    }
}

impl std::fmt::Debug for Binding<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binding")
            .field("key", &self.key)
            .field("value_type", &self.value_type)
            .finish_non_exhaustive()
    }
}
