// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Mockwire Contributors

//! Ordered handler queues, one per command kind.
//!
//! Ordering invariants: entries stay in registration order, except that
//! every once-entry precedes every permanent entry no matter how the
//! registrations interleave. Selection is oldest-first, first match wins,
//! and selecting a once-entry removes it in the same critical section.

use crate::intercept::{CommandCall, DispatchFuture};
use crate::matcher::{self, MatchMode, Selection};
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Scripted reaction invoked for a matched call
pub type Handler = Arc<dyn Fn(CommandCall) -> DispatchFuture + Send + Sync>;

/// One configured response rule
pub struct MockEntry {
    pub matcher: Option<Value>,
    pub mode: MatchMode,
    pub once: bool,
    /// Short reaction name ("resolves", "rejects", ...) for diagnostics
    pub reaction: &'static str,
    pub handler: Handler,
}

impl MockEntry {
    /// One-line description used in traces and unmatched diagnostics
    pub fn describe(&self) -> String {
        let lifetime = if self.once { "once" } else { "permanent" };
        let matcher = match &self.matcher {
            Some(pattern) => pattern.to_string(),
            None => "<any>".to_string(),
        };
        format!(
            "{} {} match {} -> {}",
            lifetime, self.mode, matcher, self.reaction
        )
    }
}

impl std::fmt::Debug for MockEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockEntry")
            .field("matcher", &self.matcher)
            .field("mode", &self.mode)
            .field("once", &self.once)
            .field("reaction", &self.reaction)
            .finish_non_exhaustive()
    }
}

/// What a dispatch got out of the registry
pub enum Selected {
    /// A handler was chosen; once-entries are already consumed
    Handler {
        handler: Handler,
        index: usize,
        candidates: usize,
        consumed_once: bool,
    },
    /// Nothing registered for the kind
    NoEntries,
    /// Entries exist but none accepted the input
    NoneMatched { matchers: Vec<String> },
}

/// Per-kind ordered entry lists behind one lock
#[derive(Default)]
pub struct MockRegistry {
    queues: Mutex<HashMap<String, Vec<MockEntry>>>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a once-entry: after all queued once-entries, strictly before
    /// the first permanent entry
    pub fn register_once(&self, kind: &str, entry: MockEntry) {
        let mut queues = self.queues.lock();
        let queue = queues.entry(kind.to_string()).or_default();
        let position = queue
            .iter()
            .position(|existing| !existing.once)
            .unwrap_or(queue.len());
        queue.insert(position, entry);
    }

    /// Append a permanent entry, superseding any permanent entry whose
    /// matcher is deep-equal under the same mode; once-entries untouched
    pub fn register_permanent(&self, kind: &str, entry: MockEntry) {
        let mut queues = self.queues.lock();
        let queue = queues.entry(kind.to_string()).or_default();
        queue.retain(|existing| {
            existing.once || existing.matcher != entry.matcher || existing.mode != entry.mode
        });
        queue.push(entry);
    }

    /// Select the first matching entry and, if it is a once-entry, remove
    /// it — one indivisible step under the registry lock, so concurrent
    /// identical calls can never both consume the same once-entry.
    pub fn select_and_consume(&self, kind: &str, input: &Value) -> Selected {
        let mut queues = self.queues.lock();
        let Some(queue) = queues.get_mut(kind) else {
            return Selected::NoEntries;
        };
        match matcher::scan(queue, input, |entry| (entry.matcher.as_ref(), entry.mode)) {
            Selection::NoEntries => Selected::NoEntries,
            Selection::NoneMatched => Selected::NoneMatched {
                matchers: queue.iter().map(MockEntry::describe).collect(),
            },
            Selection::Matched(index) => {
                let candidates = queue.len();
                if queue[index].once {
                    let entry = queue.remove(index);
                    Selected::Handler {
                        handler: entry.handler,
                        index,
                        candidates,
                        consumed_once: true,
                    }
                } else {
                    Selected::Handler {
                        handler: Arc::clone(&queue[index].handler),
                        index,
                        candidates,
                        consumed_once: false,
                    }
                }
            }
        }
    }

    /// Descriptions of every entry configured for a kind, in queue order
    pub fn descriptions(&self, kind: &str) -> Vec<String> {
        self.queues
            .lock()
            .get(kind)
            .map(|queue| queue.iter().map(MockEntry::describe).collect())
            .unwrap_or_default()
    }

    /// Number of entries currently queued for a kind
    pub fn entry_count(&self, kind: &str) -> usize {
        self.queues.lock().get(kind).map_or(0, Vec::len)
    }

    /// Drop every configured entry for every kind
    pub fn clear(&self) {
        self.queues.lock().clear();
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
