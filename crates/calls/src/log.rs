// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Mockwire Contributors

//! Call log implementation.

use crate::record::CallRecord;
use parking_lot::Mutex;
use serde_json::Value;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::sync::Arc;
use std::time::{Instant, SystemTime};

/// Ordered log of intercepted calls.
///
/// Cloning shares the underlying storage, so the interception layer and
/// the test body observe the same history.
pub struct CallLog {
    start: Instant,
    records: Arc<Mutex<Vec<CallRecord>>>,
    file_writer: Option<Arc<Mutex<BufWriter<File>>>>,
}

impl CallLog {
    /// Create a new in-memory call log
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            records: Arc::new(Mutex::new(Vec::new())),
            file_writer: None,
        }
    }

    /// Create a call log that also writes each record to a file (JSONL format)
    pub fn with_file(path: &Path) -> std::io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            start: Instant::now(),
            records: Arc::new(Mutex::new(Vec::new())),
            file_writer: Some(Arc::new(Mutex::new(BufWriter::new(file)))),
        })
    }

    /// Append one call record
    pub fn record(&self, kind: &str, input: Value) {
        let mut records = self.records.lock();
        let seq = records.len() as u64;
        let record = CallRecord {
            seq,
            timestamp: SystemTime::now(),
            elapsed: self.start.elapsed(),
            kind: kind.to_string(),
            input,
        };

        records.push(record.clone());

        // Write to file if configured
        if let Some(ref writer) = self.file_writer {
            use std::io::Write;
            let mut w = writer.lock();
            if let Ok(json) = serde_json::to_string(&record) {
                let _ = writeln!(w, "{}", json);
                let _ = w.flush();
            }
        }
    }

    /// Get all recorded calls in invocation order
    pub fn calls(&self) -> Vec<CallRecord> {
        self.records.lock().clone()
    }

    /// Get the last N calls
    pub fn last(&self, n: usize) -> Vec<CallRecord> {
        let all = self.records.lock();
        all.iter().rev().take(n).rev().cloned().collect()
    }

    /// Count calls matching a predicate
    pub fn count<F: Fn(&CallRecord) -> bool>(&self, pred: F) -> usize {
        self.records.lock().iter().filter(|r| pred(r)).count()
    }

    /// Find calls for one command kind
    pub fn find_by_kind(&self, kind: &str) -> Vec<CallRecord> {
        self.records
            .lock()
            .iter()
            .filter(|r| r.kind == kind)
            .cloned()
            .collect()
    }

    /// Get the total number of recorded calls
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Clear all recorded calls
    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Default for CallLog {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CallLog {
    fn clone(&self) -> Self {
        Self {
            start: self.start,
            records: Arc::clone(&self.records),
            file_writer: self.file_writer.as_ref().map(Arc::clone),
        }
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
