//! Finding previously generated components by name.
//!
//! Host containers decorate names (prefixes, `:1` occurrence suffixes), so a
//! name is matched with a regex rather than compared for equality:
//!
//! - row-qualified names must start the candidate or follow an `_`
//! - row-less names must start the candidate or follow a non-digit, so that
//!   `2_25U` never matches inside `12_25U`
//! - both must end the candidate or be followed by a `:`

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use super::format::{SizeName, ROW_MARKER};

/// Compiles the search pattern for `name`.
///
/// The whole token is escaped, labels may contain any regex metacharacter.
#[must_use]
pub fn search_pattern(name: &SizeName) -> Regex {
    let token = name.to_string();
    let escaped = regex::escape(&token);
    let pattern = if token.starts_with(ROW_MARKER) {
        format!(r"(?:_|\A){escaped}(?:\z|:)")
    } else {
        format!(r"(?:[^\d]|\A){escaped}(?:\z|:)")
    };
    Regex::new(&pattern).expect("escaped name forms a valid pattern")
}

/// Returns the first candidate matching `name` exactly at its own specificity.
///
/// Anything after a `:` is ignored, so a lookup for label `A` also matches a
/// candidate labeled `A:B`; labels containing `:` cannot be told apart.
pub fn find_name<'a, S: AsRef<str>>(name: &SizeName, candidates: &'a [S]) -> Option<&'a str> {
    let pattern = search_pattern(name);
    candidates
        .iter()
        .map(|candidate| candidate.as_ref())
        .find(|candidate: &&str| pattern.is_match(candidate))
}

/// Lookup keys for `name`, most specific first.
///
/// (row, label), then (label), then (row), then the bare size. Levels that
/// collapse onto an earlier one are dropped.
#[must_use]
pub fn specificity_chain(name: &SizeName) -> Vec<SizeName> {
    let levels = [
        name.clone(),
        name.without_row(),
        name.without_label(),
        name.without_row().without_label(),
    ];

    let mut chain: Vec<SizeName> = Vec::with_capacity(levels.len());
    for level in levels {
        if !chain.contains(&level) {
            chain.push(level);
        }
    }
    chain
}

/// A successful lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution<'a> {
    /// The matching candidate name
    pub candidate: &'a str,
    /// The specificity level that matched
    pub matched: SizeName,
}

/// Resolves `name` against `candidates`, falling back to less specific keys.
///
/// Returns `None` when no level matches; callers collect such misses.
pub fn resolve<'a, S: AsRef<str>>(name: &SizeName, candidates: &'a [S]) -> Option<Resolution<'a>> {
    specificity_chain(name).into_iter().find_map(|level| {
        let found = find_name(&level, candidates);
        debug!("Lookup {level}: {}", found.unwrap_or("-"));
        found.map(|candidate| Resolution {
            candidate,
            matched: level,
        })
    })
}

/// Resolves a `(size, row, label)` key to the best matching candidate.
pub fn resolve_name<'a, S: AsRef<str>>(
    size: u32,
    row: Option<&str>,
    label: Option<&str>,
    candidates: &'a [S],
) -> Option<&'a str> {
    resolve(&SizeName::from_parts(size, row, label), candidates).map(|r| r.candidate)
}
