// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared fixtures for integration tests.
//!
//! The declaration graph here mirrors a typical consumer: one group of
//! options declared at the component level, one shared group included the way
//! a common interface would be, and a couple of stray declarations used by
//! failure-path tests.

#![allow(dead_code)]

use optcfg::adapters::MapSource;
use optcfg::domain::{ConfigError, OptionDecl, OptionGroup, OptionValue, ValueType};
use std::sync::Once;

static TRACING: Once = Once::new();

/// Installs a test subscriber so registry logging shows up in failing runs.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

pub static NAME: OptionDecl = OptionDecl::string("NAME");
pub static OPTIONS: OptionDecl = OptionDecl::string_list("OPTIONS");
pub static TARGET_URL: OptionDecl = OptionDecl::url("TARGET_URL");
pub static DISABLE_CONNECT: OptionDecl = OptionDecl::boolean("DISABLE_CONNECT");
pub static MAX_FILE_SIZE: OptionDecl = OptionDecl::long("MAX_FILE_SIZE");

pub static HOSTNAME: OptionDecl = OptionDecl::string("HOSTNAME");
pub static PORT: OptionDecl = OptionDecl::integer("PORT");

pub static MISSING: OptionDecl = OptionDecl::string("MISSING");

pub static CUSTOM_OPTION: OptionDecl = OptionDecl::custom(
    "CUSTOM_OPTION",
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

/// Options shared between components, reachable through every group that
/// includes this one.
pub static INTERFACE_LEVEL: OptionGroup = OptionGroup {
    name: "interface-level",
    options: &[&HOSTNAME, &PORT],
    includes: &[],
};

/// Component-level options, with the shared group nested the way a class
/// implements an interface.
pub static CLASS_LEVEL: OptionGroup = OptionGroup {
    name: "class-level",
    options: &[
        &NAME,
        &OPTIONS,
        &TARGET_URL,
        &DISABLE_CONNECT,
        &MAX_FILE_SIZE,
    ],
    includes: &[&INTERFACE_LEVEL],
};

/// A property source holding a value for every fixture declaration except
/// `MISSING` and `CUSTOM_OPTION`.
pub fn sample_source() -> MapSource {
    MapSource::from_pairs([
        ("NAME", "V1"),
        ("OPTIONS", "V1,V2"),
        ("TARGET_URL", "http://www.gimp.org"),
        ("DISABLE_CONNECT", "true"),
        ("MAX_FILE_SIZE", "1001"),
        ("HOSTNAME", "IF!"),
        ("PORT", "42"),
    ])
}
