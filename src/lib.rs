// SPDX-License-Identifier: MIT OR Apache-2.0

//! A typed configuration-option registry.
//!
//! This crate maps a flat, string-keyed property source onto a set of typed
//! option declarations. Each declaration is a zero-state marker naming one
//! configuration entry and its value kind; the registry discovers every
//! declaration reachable from a set of holder groups, converts the raw string
//! value with a kind-appropriate strategy, and exposes the converted value
//! under a stable per-option identity key.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`OptionDecl`, `OptionKey`, `OptionValue`, errors)
//! - **Ports**: The `PropertySource` trait, the opaque key/value lookup boundary
//! - **Adapters**: Property source implementations (in-memory map, environment)
//! - **Registry**: Discovery, the conversion strategy table, and the resolver
//!
//! # Features
//!
//! - **Explicit Discovery**: Holder groups declare their options and nested
//!   groups statically; discovery walks the graph and deduplicates by identity
//! - **Typed Conversion**: Built-in string, string-list, integer, boolean, URL,
//!   and long kinds, plus caller-supplied custom converters
//! - **Identity Keys**: Two subsystems resolving the same option observe equal,
//!   hashable keys suitable for external binding and deduplication
//! - **Fail-Fast Resolution**: Missing keys and unknown kinds surface as typed
//!   errors; nothing is silently defaulted
//!
//! # Feature Flags
//!
//! - `env`: Enable the environment-variable property source (default)
//!
//! # Quick Start
//!
//! ```rust
//! use optcfg::prelude::*;
//!
//! static NAME: OptionDecl = OptionDecl::string("NAME");
//! static FLAG: OptionDecl = OptionDecl::boolean("FLAG");
//!
//! static SETTINGS: OptionGroup = OptionGroup {
//!     name: "settings",
//!     options: &[&NAME, &FLAG],
//!     includes: &[],
//! };
//!
//! # fn main() -> optcfg::domain::Result<()> {
//! let source = MapSource::from_pairs([("NAME", "V1"), ("FLAG", "true")]);
//! let registry = OptionRegistry::new(Box::new(source), &[Holder::Group(&SETTINGS)]);
//!
//! let values = registry.resolve_all()?;
//! assert_eq!(values[&NAME.key()].as_str()?, "V1");
//! assert!(values[&FLAG.key()].as_bool()?);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod registry;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        ConfigError, CustomConverter, Holder, OptionDecl, OptionGroup, OptionKey, OptionKind,
        OptionValue, Result, ValueType,
    };
    pub use crate::ports::PropertySource;
    pub use crate::registry::{discover, Binding, ConversionStrategy, OptionRegistry, StrategyTable};

    pub use crate::adapters::MapSource;
    #[cfg(feature = "env")]
    pub use crate::adapters::EnvVarSource;
}
