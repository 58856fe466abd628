// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) that decouple the
//! registry from concrete configuration storage. Implementations live in the
//! adapters layer.

pub mod source;

// Re-export commonly used types
pub use source::PropertySource;
