// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Mockwire Contributors

//! Trace output for stub activity.
//!
//! Visibility combines a shared default with an optional per-stub
//! override; the override is sticky for the stub's lifetime, including
//! across `reset()`. Emission is a side effect only and never influences
//! matching or selection.

use parking_lot::Mutex;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

/// ANSI escape helpers for trace styling
pub mod style {
    /// Dim
    pub const DIM: &str = "\x1b[2m";

    /// Bold
    pub const BOLD: &str = "\x1b[1m";

    /// Reset all attributes
    pub const RESET: &str = "\x1b[0m";
}

/// Shared default visibility for stubs without an explicit override.
///
/// Cloning shares the flag. One process-wide instance exists; tests that
/// need isolation construct their own with [`DebugDefault::new`].
#[derive(Clone)]
pub struct DebugDefault {
    enabled: Arc<AtomicBool>,
}

impl DebugDefault {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: Arc::new(AtomicBool::new(enabled)),
        }
    }

    /// The process-wide default instance
    pub fn process() -> Self {
        static PROCESS: OnceLock<DebugDefault> = OnceLock::new();
        PROCESS.get_or_init(|| DebugDefault::new(false)).clone()
    }

    pub fn set(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }

    pub fn get(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }
}

/// Toggle the default debug visibility for every stub lacking an
/// explicit override
pub fn set_global_debug_default(enabled: bool) {
    DebugDefault::process().set(enabled);
}

/// Per-stub trace channel
pub struct DebugChannel {
    label: String,
    default: DebugDefault,
    explicit: Mutex<Option<bool>>,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl DebugChannel {
    /// Channel reading the process-wide default, writing to stderr
    pub fn new(label: &str) -> Self {
        Self::with_default(label, DebugDefault::process())
    }

    /// Channel reading an explicit default, writing to stderr
    pub fn with_default(label: &str, default: DebugDefault) -> Self {
        Self {
            label: label.to_string(),
            default,
            explicit: Mutex::new(None),
            sink: Mutex::new(Box::new(std::io::stderr())),
        }
    }

    /// Redirect trace output, e.g. into a buffer under test
    pub fn set_sink(&self, sink: Box<dyn Write + Send>) {
        *self.sink.lock() = sink;
    }

    /// Force traces on for this stub, regardless of the default
    pub fn enable(&self) {
        *self.explicit.lock() = Some(true);
    }

    /// Force traces off for this stub, regardless of the default
    pub fn disable(&self) {
        *self.explicit.lock() = Some(false);
    }

    /// Effective visibility: the explicit override when set, the shared
    /// default otherwise
    pub fn is_on(&self) -> bool {
        (*self.explicit.lock()).unwrap_or_else(|| self.default.get())
    }

    /// Emit one trace line when visible
    pub fn trace(&self, message: &str) {
        if !self.is_on() {
            return;
        }
        let mut sink = self.sink.lock();
        let _ = writeln!(
            sink,
            "{}mockwire[{}] {}{}",
            style::DIM,
            self.label,
            message,
            style::RESET
        );
        let _ = sink.flush();
    }
}

#[cfg(test)]
#[path = "debug_tests.rs"]
mod tests;
