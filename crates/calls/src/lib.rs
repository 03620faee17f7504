// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Mockwire Contributors

//! Call history recording for stub assertions.
//!
//! This crate provides the ordered call record list backing mockwire
//! stubs: every intercepted dispatch appends one record here, and test
//! assertions query the log afterwards.

mod duration_serde;
mod log;
mod record;

pub use log::CallLog;
pub use record::CallRecord;
