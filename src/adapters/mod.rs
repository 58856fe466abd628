// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing property source implementations.
//!
//! This module contains concrete implementations of the `PropertySource`
//! trait defined in the ports layer.

#[cfg(feature = "env")]
pub mod env_var;
pub mod map_source;

// Re-export adapters based on feature flags
#[cfg(feature = "env")]
pub use env_var::EnvVarSource;
pub use map_source::MapSource;
