// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Mockwire Contributors

//! Structural input matching.
//!
//! Patterns and inputs are `serde_json::Value` trees. Partial mode checks
//! only the keys the pattern names; strict mode requires exact structural
//! equality. Arrays compare deep and order-sensitive in both modes.

use serde_json::Value;

/// How a stored pattern is compared against a call's input
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Keys absent from the pattern are ignored; nested objects recurse
    #[default]
    Partial,
    /// Pattern and input must be structurally identical
    Strict,
}

impl std::fmt::Display for MatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchMode::Partial => write!(f, "partial"),
            MatchMode::Strict => write!(f, "strict"),
        }
    }
}

/// Outcome of scanning a kind's entry list for a call's input.
///
/// The two not-found states stay separate so diagnostics can tell
/// "nothing registered" apart from "nothing matched".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Index of the oldest entry whose predicate accepted the input
    Matched(usize),
    /// Entries exist for the kind, but none accepted the input
    NoneMatched,
    /// No entries are registered for the kind at all
    NoEntries,
}

/// Compare a pattern against an input under the given mode
pub fn value_matches(pattern: &Value, input: &Value, mode: MatchMode) -> bool {
    match mode {
        // Value equality is already deep, exact on key sets, and
        // order-sensitive for arrays
        MatchMode::Strict => pattern == input,
        MatchMode::Partial => partial_matches(pattern, input),
    }
}

fn partial_matches(pattern: &Value, input: &Value) -> bool {
    match (pattern, input) {
        (Value::Object(pattern), Value::Object(input)) => pattern
            .iter()
            .all(|(key, expected)| input.get(key).is_some_and(|got| partial_matches(expected, got))),
        // Arrays and primitives require full structural equality,
        // element-wise and order-sensitive for arrays
        _ => pattern == input,
    }
}

/// True when an entry's optional pattern accepts the input
pub fn entry_matches(pattern: Option<&Value>, input: &Value, mode: MatchMode) -> bool {
    match pattern {
        None => true,
        Some(pattern) => value_matches(pattern, input, mode),
    }
}

/// Scan entries oldest-first and report the first whose rule accepts the
/// input. Earlier registration wins over later, never "most specific".
pub fn scan<T, F>(entries: &[T], input: &Value, rule_of: F) -> Selection
where
    F: Fn(&T) -> (Option<&Value>, MatchMode),
{
    if entries.is_empty() {
        return Selection::NoEntries;
    }
    for (index, entry) in entries.iter().enumerate() {
        let (pattern, mode) = rule_of(entry);
        if entry_matches(pattern, input, mode) {
            return Selection::Matched(index);
        }
    }
    Selection::NoneMatched
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
