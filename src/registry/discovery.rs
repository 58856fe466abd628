// SPDX-License-Identifier: MIT OR Apache-2.0

//! Option discovery over the holder graph.
//!
//! This module walks a set of holder entry points and enumerates every
//! reachable option declaration exactly once. Discovery never fails: holders
//! with no reachable declarations simply contribute nothing.

use crate::domain::{Holder, OptionDecl, OptionGroup, OptionKey};
use std::collections::HashSet;

/// Enumerates every option declaration reachable from the given entry points.
///
/// An entry point that is itself a declaration is added directly. A group
/// contributes its directly-listed options, then the walk recurses into each
/// included group, so options declared in a shared group are found through
/// every holder that includes it. The result is deduplicated by declaration
/// identity and ordered by first encounter.
///
/// # Examples
///
/// ```
/// use optcfg::domain::{Holder, OptionDecl, OptionGroup};
/// use optcfg::registry::discover;
///
/// static NAME: OptionDecl = OptionDecl::string("NAME");
/// static SHARED: OptionGroup = OptionGroup {
///     name: "shared",
///     options: &[&NAME],
///     includes: &[],
/// };
/// static H1: OptionGroup = OptionGroup {
///     name: "h1",
///     options: &[],
///     includes: &[&SHARED],
/// };
/// static H2: OptionGroup = OptionGroup {
///     name: "h2",
///     options: &[],
///     includes: &[&SHARED],
/// };
///
/// // NAME is reachable through both holders but discovered once.
/// let options = discover(&[Holder::Group(&H1), Holder::Group(&H2)]);
/// assert_eq!(options.len(), 1);
/// assert_eq!(options[0].name(), "NAME");
/// ```
pub fn discover(entry_points: &[Holder]) -> Vec<&'static OptionDecl> {
    let mut walker = Walker::default();

    for holder in entry_points {
        match holder {
            Holder::Option(decl) => walker.register(decl),
            Holder::Group(group) => walker.walk(group),
        }
    }

    walker.found
}

#[derive(Default)]
struct Walker {
    seen: HashSet<OptionKey>,
    visited: HashSet<*const OptionGroup>,
    found: Vec<&'static OptionDecl>,
}

impl Walker {
    fn walk(&mut self, group: &'static OptionGroup) {
        // A group can sit on several paths; each is walked once.
        if !self.visited.insert(group as *const OptionGroup) {
            return;
        }

        for decl in group.options {
            self.register(decl);
        }

        for nested in group.includes {
            self.walk(nested);
        }
    }

    fn register(&mut self, decl: &'static OptionDecl) {
        if self.seen.insert(decl.key()) {
            tracing::debug!("Registering configuration option '{}'", decl.name());
            self.found.push(decl);
        }
    }
}
