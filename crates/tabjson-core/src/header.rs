//! Column-name deduplication.
//!
//! Repeated header names are suffixed with a per-name occurrence counter:
//! `["A", "B", "A", "A"]` becomes `["A", "B", "A_1", "A_2"]`. Empty names are
//! treated like any other name, so `["", ""]` becomes `["", "_1"]`.

use std::collections::{HashMap, HashSet};

/// Per-table bookkeeping for [`dedupe_headers`].
#[derive(Debug, Default)]
struct HeaderRegistry {
    /// Suffix counter per base name.
    counters: HashMap<String, usize>,
    /// Every name handed out so far.
    emitted: HashSet<String>,
}

impl HeaderRegistry {
    fn assign(&mut self, base: &str) -> String {
        let name = if self.emitted.contains(base) {
            let counter = self.counters.entry(base.to_string()).or_insert(0);
            loop {
                *counter += 1;
                let candidate = format!("{base}_{counter}");
                if !self.emitted.contains(&candidate) {
                    break candidate;
                }
            }
        } else {
            base.to_string()
        };
        self.emitted.insert(name.clone());
        name
    }
}

/// Make every header name unique while preserving order and length.
///
/// The first occurrence of a name is kept unchanged; the n-th repeat gets the
/// suffix `_n`. If a suffixed name is already taken (for instance the input
/// literally contains `A_1`), the counter keeps advancing until the name is
/// free, so the output never contains duplicates.
pub fn dedupe_headers<S: AsRef<str>>(headers: &[S]) -> Vec<String> {
    let mut registry = HeaderRegistry::default();
    headers
        .iter()
        .map(|header| registry.assign(header.as_ref()))
        .collect()
}
