// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Mockwire Contributors

//! Scripted-response mock engine for command-dispatch clients.
//!
//! Mockwire swaps a client's outbound dispatch for a scripted double:
//! every call is recorded, matched against configured response rules, and
//! answered with a canned result, a structured rejection, or a loud
//! diagnostic failure — rehearsing a remote dependency without a live
//! backend.
//!
//! ```no_run
//! use mockwire::Stub;
//! use serde_json::json;
//!
//! # fn target() -> mockwire::Target { unimplemented!() }
//! let stub = Stub::attach_target(target());
//! stub.on_kind("GetWidget")
//!     .matching(json!({"id": 1}))
//!     .resolves_once(json!({"name": "first"}))
//!     .resolves(json!({"name": "fallback"}));
//! ```

pub mod debug;
pub mod error;
pub mod fixture;
pub mod intercept;
pub mod matcher;
pub mod paginate;
pub mod registry;
pub mod reply;
pub mod stream;
pub mod stub;

/// Re-exported call history types from the mockwire-calls crate.
pub mod calls {
    pub use mockwire_calls::{CallLog, CallRecord};
}

pub use debug::{set_global_debug_default, DebugChannel, DebugDefault};
pub use error::{DispatchError, Rejection, ServiceError};
pub use intercept::{
    ClientContext, Command, CommandCall, DispatchFuture, DispatchSlot, Dispatcher, Interceptable,
    Target,
};
pub use matcher::{value_matches, MatchMode};
pub use paginate::{PageOptions, PaginationPlan};
pub use registry::{Handler, MockRegistry};
pub use reply::Reply;
pub use stream::StreamBody;
pub use stub::{CommandStub, Stub};
