// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core business logic and types.
//!
//! This module contains the core domain types for the option registry: the
//! declaration and holder-graph types, identity keys, resolved values, and the
//! error taxonomy. It is independent of any concrete property-source concern.

pub mod declaration;
pub mod errors;
pub mod option_key;
pub mod option_value;

// Re-export commonly used types
pub use declaration::{ConvertFn, CustomConverter, Holder, OptionDecl, OptionGroup, OptionKind};
pub use errors::{ConfigError, Result};
pub use option_key::OptionKey;
pub use option_value::{OptionValue, ValueType};
