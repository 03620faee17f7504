// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Mockwire Contributors

//! Stub handle and fluent registration surface.
//!
//! `Stub::attach` (or `attach_type`) swaps the target's dispatch seam for
//! a scripted dispatcher that records every call, consults the registry,
//! and replies with the configured reaction. `on::<C>()` opens a fluent
//! builder for one command kind; every registration method hands the
//! builder back so reactions chain.

use crate::debug::{DebugChannel, DebugDefault};
use crate::error::{DispatchError, Rejection, ServiceError};
use crate::fixture;
use crate::intercept::{Command, CommandCall, DispatchFuture, Dispatcher, Interceptable, Target};
use crate::matcher::{self, MatchMode};
use crate::paginate::{PageOptions, PaginationPlan};
use crate::registry::{Handler, MockEntry, MockRegistry, Selected};
use crate::reply::Reply;
use crate::stream::StreamBody;
use futures::future;
use mockwire_calls::{CallLog, CallRecord};
use parking_lot::Mutex;
use serde::Serialize;
use serde_json::Value;
use std::future::Future;
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Scripted dispatcher installed into the target's seam
struct MockDispatcher {
    registry: Arc<MockRegistry>,
    calls: CallLog,
    debug: Arc<DebugChannel>,
}

impl Dispatcher for MockDispatcher {
    fn dispatch(&self, call: CommandCall) -> DispatchFuture {
        // Exactly one record per invocation, appended before selection
        self.calls.record(&call.kind, call.input.clone());
        self.debug
            .trace(&format!("{} received input {}", call.kind, call.input));

        match self.registry.select_and_consume(&call.kind, &call.input) {
            Selected::Handler {
                handler,
                index,
                candidates,
                consumed_once,
            } => {
                let consumed = if consumed_once {
                    ", once-entry consumed"
                } else {
                    ""
                };
                self.debug.trace(&format!(
                    "{} matched entry {} of {}{}",
                    call.kind, index, candidates, consumed
                ));
                handler(call)
            }
            Selected::NoEntries => {
                self.debug
                    .trace(&format!("{} failed: no handlers registered", call.kind));
                Box::pin(future::ready(Err(DispatchError::Unconfigured {
                    kind: call.kind,
                    input: call.input,
                })))
            }
            Selected::NoneMatched { matchers } => {
                self.debug.trace(&format!(
                    "{} failed: no matcher accepted the input ({} configured)",
                    call.kind,
                    matchers.len()
                ));
                Box::pin(future::ready(Err(DispatchError::Unmatched {
                    kind: call.kind,
                    matchers,
                    input: call.input,
                })))
            }
        }
    }
}

/// Handle controlling one intercepted target
pub struct Stub {
    registry: Arc<MockRegistry>,
    target: Target,
    original: Mutex<Option<Arc<dyn Dispatcher>>>,
    restored: AtomicBool,
    calls: CallLog,
    debug: Arc<DebugChannel>,
}

impl Stub {
    /// Intercept every instance of a client type
    pub fn attach_type<T: Interceptable>() -> Self {
        Self::attach_target(Target::ByType {
            name: T::client_name(),
            slot: T::type_slot(),
        })
    }

    /// Intercept one client instance only
    pub fn attach<T: Interceptable>(client: &T) -> Self {
        Self::attach_target(Target::ByInstance {
            name: format!("{} (instance)", T::client_name()),
            slot: client.instance_slot(),
        })
    }

    /// Intercept an explicit target, reading the process-wide debug default
    pub fn attach_target(target: Target) -> Self {
        Self::attach_configured(target, DebugDefault::process())
    }

    /// Intercept an explicit target with an explicit debug default
    pub fn attach_configured(target: Target, debug_default: DebugDefault) -> Self {
        let registry = Arc::new(MockRegistry::new());
        let calls = CallLog::new();
        let debug = Arc::new(DebugChannel::with_default(target.name(), debug_default));
        let dispatcher: Arc<dyn Dispatcher> = Arc::new(MockDispatcher {
            registry: Arc::clone(&registry),
            calls: calls.clone(),
            debug: Arc::clone(&debug),
        });
        let original = target.slot().install(Some(dispatcher));
        debug.trace("attached");
        Self {
            registry,
            target,
            original: Mutex::new(original),
            restored: AtomicBool::new(false),
            calls,
            debug,
        }
    }

    /// Open the fluent builder for one command kind
    pub fn on<C: Command>(&self) -> CommandStub<'_> {
        self.on_kind(C::KIND)
    }

    /// Open the fluent builder for a kind named at runtime
    pub fn on_kind(&self, kind: &str) -> CommandStub<'_> {
        CommandStub {
            stub: self,
            kind: kind.to_string(),
            matcher: None,
            mode: MatchMode::Partial,
        }
    }

    /// All recorded calls, in invocation order
    pub fn calls(&self) -> Vec<CallRecord> {
        self.calls.calls()
    }

    /// Recorded calls for one command kind
    pub fn calls_of(&self, kind: &str) -> Vec<CallRecord> {
        self.calls.find_by_kind(kind)
    }

    /// Whether any recorded call of the kind partially matches the pattern
    pub fn received(&self, kind: &str, pattern: Value) -> bool {
        self.calls
            .find_by_kind(kind)
            .iter()
            .any(|record| matcher::value_matches(&pattern, &record.input, MatchMode::Partial))
    }

    /// Entries currently queued for a kind (unconsumed once + permanent)
    pub fn registered(&self, kind: &str) -> usize {
        self.registry.entry_count(kind)
    }

    /// Clear call history; configured entries, including unconsumed
    /// once-entries, stay untouched. Idempotent.
    pub fn reset(&self) {
        self.calls.clear();
        self.debug.trace("reset: call history cleared");
    }

    /// Reinstate the pre-attach dispatcher and drop every configured
    /// entry. Idempotent; never fails.
    pub fn restore(&self) {
        if self.restored.swap(true, Ordering::SeqCst) {
            return;
        }
        let original = self.original.lock().take();
        self.target.slot().install(original);
        self.registry.clear();
        self.debug.trace("restore: interception detached");
    }

    /// Force traces on for this stub, overriding the global default
    pub fn enable_debug(&self) {
        self.debug.enable();
    }

    /// Force traces off for this stub, overriding the global default
    pub fn disable_debug(&self) {
        self.debug.disable();
    }

    /// Redirect this stub's trace output
    pub fn set_debug_sink(&self, sink: Box<dyn Write + Send>) {
        self.debug.set_sink(sink);
    }
}

/// Fluent per-kind registration builder.
///
/// Each reaction method registers one entry and returns the builder, so
/// `on::<C>().resolves_once(a).resolves_once(b).resolves(c)` queues three
/// entries sharing the builder's matcher and mode.
pub struct CommandStub<'a> {
    stub: &'a Stub,
    kind: String,
    matcher: Option<Value>,
    mode: MatchMode,
}

impl CommandStub<'_> {
    /// Restrict subsequent registrations to inputs matching the pattern
    pub fn matching(mut self, pattern: Value) -> Self {
        self.matcher = Some(pattern);
        self
    }

    /// Compare the pattern strictly (exact key sets) instead of partially
    pub fn strict(mut self) -> Self {
        self.mode = MatchMode::Strict;
        self
    }

    fn add(self, once: bool, reaction: &'static str, handler: Handler) -> Self {
        let entry = MockEntry {
            matcher: self.matcher.clone(),
            mode: self.mode,
            once,
            reaction,
            handler,
        };
        self.stub
            .debug
            .trace(&format!("configure {}: {}", self.kind, entry.describe()));
        if once {
            self.stub.registry.register_once(&self.kind, entry);
        } else {
            self.stub.registry.register_permanent(&self.kind, entry);
        }
        self
    }

    /// Permanently resolve matching calls with the output
    pub fn resolves(self, output: impl Serialize) -> Self {
        let handler = canned_output(output);
        self.add(false, "resolves", handler)
    }

    /// Resolve the next matching call with the output, then retire
    pub fn resolves_once(self, output: impl Serialize) -> Self {
        let handler = canned_output(output);
        self.add(true, "resolves", handler)
    }

    /// Permanently reject matching calls
    pub fn rejects(self, rejection: impl Into<Rejection>) -> Self {
        let handler = canned_rejection(rejection.into());
        self.add(false, "rejects", handler)
    }

    /// Reject the next matching call, then retire
    pub fn rejects_once(self, rejection: impl Into<Rejection>) -> Self {
        let handler = canned_rejection(rejection.into());
        self.add(true, "rejects", handler)
    }

    /// Permanently reject with a structured domain error
    pub fn rejects_service(self, error: ServiceError) -> Self {
        self.rejects(error)
    }

    /// Permanently delegate matching calls to a fake handler
    pub fn calls_fake<F, Fut>(self, fake: F) -> Self
    where
        F: Fn(CommandCall) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Reply, DispatchError>> + Send + 'static,
    {
        let handler: Handler = Arc::new(move |call| Box::pin(fake(call)));
        self.add(false, "calls_fake", handler)
    }

    /// Delegate the next matching call to a fake handler, then retire
    pub fn calls_fake_once<F, Fut>(self, fake: F) -> Self
    where
        F: Fn(CommandCall) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Reply, DispatchError>> + Send + 'static,
    {
        let handler: Handler = Arc::new(move |call| Box::pin(fake(call)));
        self.add(true, "calls_fake", handler)
    }

    /// Permanently resolve after an artificial delay; the delay never
    /// blocks other in-flight calls
    pub fn resolves_delayed(self, output: impl Serialize, delay: Duration) -> Self {
        let base = canned_output(output);
        let handler: Handler = Arc::new(move |call| {
            let base = Arc::clone(&base);
            Box::pin(async move {
                tokio::time::sleep(delay).await;
                base(call).await
            })
        });
        self.add(false, "resolves_delayed", handler)
    }

    /// Permanently resolve with a byte stream body; each call gets a
    /// fresh, unconsumed stream
    pub fn resolves_stream(self, body: StreamBody) -> Self {
        let handler = canned_reply(Reply::with_body(Value::Null, body));
        self.add(false, "resolves_stream", handler)
    }

    /// Resolve the next matching call with a stream body, then retire
    pub fn resolves_stream_once(self, body: StreamBody) -> Self {
        let handler = canned_reply(Reply::with_body(Value::Null, body));
        self.add(true, "resolves_stream", handler)
    }

    /// Permanently serve cursor-based pages windowed from the item list
    pub fn resolves_paginated(self, items: Vec<Value>, options: PageOptions) -> Self {
        let plan = Arc::new(PaginationPlan::new(items, options));
        let handler: Handler = Arc::new(move |call| {
            let page = plan.resolve(&call.input);
            Box::pin(future::ready(Ok(Reply::from_value(page))))
        });
        self.add(false, "resolves_paginated", handler)
    }

    /// Permanently resolve with a file fixture, read lazily per call so
    /// read and parse failures surface as rejections
    pub fn resolves_fixture(self, path: impl Into<PathBuf>) -> Self {
        let path: PathBuf = path.into();
        let handler: Handler = Arc::new(move |_call| {
            let loaded = fixture::load(&path);
            Box::pin(future::ready(loaded.map(Reply::from_value)))
        });
        self.add(false, "resolves_fixture", handler)
    }
}

/// Handler replying with a pre-built reply on every call
fn canned_reply(reply: Reply) -> Handler {
    Arc::new(move |_call| {
        let reply = reply.clone();
        Box::pin(future::ready(Ok(reply)))
    })
}

/// Handler replying with a serialized output; a serialization failure
/// becomes a per-call rejection instead of a registration failure
fn canned_output(output: impl Serialize) -> Handler {
    match serde_json::to_value(output) {
        Ok(value) => canned_reply(Reply::from_value(value)),
        Err(error) => {
            canned_rejection(Rejection::Message(format!(
                "canned output failed to serialize: {error}"
            )))
        }
    }
}

/// Handler rejecting with a replayable error on every call
fn canned_rejection(rejection: Rejection) -> Handler {
    Arc::new(move |_call| Box::pin(future::ready(Err(rejection.to_error()))))
}

#[cfg(test)]
#[path = "stub_tests.rs"]
mod tests;
