// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Mockwire Contributors

//! Call record data type.

use crate::duration_serde;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::{Duration, SystemTime};

/// One intercepted dispatch, in invocation order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CallRecord {
    /// Sequence number within the log
    pub seq: u64,

    /// Wall-clock timestamp
    pub timestamp: SystemTime,

    /// Elapsed time since the log was created
    #[serde(with = "duration_serde")]
    pub elapsed: Duration,

    /// Command kind that was dispatched
    pub kind: String,

    /// Structured input the command carried
    pub input: Value,
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
