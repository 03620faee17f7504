// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Mockwire Contributors

//! Dispatch interception.
//!
//! A client's outbound path runs through a [`DispatchSlot`], a swappable
//! seam holding the current [`Dispatcher`]. Attaching a stub installs the
//! scripted dispatcher into the slot and keeps whatever was there before,
//! so `restore()` can put it back exactly.

use crate::error::DispatchError;
use crate::reply::Reply;
use futures::future::BoxFuture;
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Future every dispatch resolves through
pub type DispatchFuture = BoxFuture<'static, Result<Reply, DispatchError>>;

/// A command type sent through an interceptable client
pub trait Command: Serialize {
    /// Type identity of the request; the registry's inner key
    const KIND: &'static str;

    /// Output shape the caller decodes replies into
    type Output: DeserializeOwned + Send;
}

/// Client configuration made visible to fake handlers
#[derive(Clone, Debug, Default)]
pub struct ClientContext {
    /// Name of the originating client type
    pub client: String,
    /// Arbitrary client configuration (region, endpoint, credentials, ...)
    pub config: Arc<Value>,
}

impl ClientContext {
    pub fn new(client: &str, config: Value) -> Self {
        Self {
            client: client.to_string(),
            config: Arc::new(config),
        }
    }
}

/// One outbound call as the interception layer sees it
#[derive(Clone, Debug)]
pub struct CommandCall {
    pub kind: String,
    pub input: Value,
    pub context: ClientContext,
}

/// Anything that can resolve an outbound call
pub trait Dispatcher: Send + Sync {
    fn dispatch(&self, call: CommandCall) -> DispatchFuture;
}

/// Swappable dispatch seam owned by a client type or instance.
///
/// Cloning shares the seam; installing through any clone is visible to
/// every holder.
#[derive(Clone, Default)]
pub struct DispatchSlot {
    current: Arc<RwLock<Option<Arc<dyn Dispatcher>>>>,
}

impl DispatchSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a dispatcher (or none), returning the previous occupant
    pub fn install(&self, dispatcher: Option<Arc<dyn Dispatcher>>) -> Option<Arc<dyn Dispatcher>> {
        std::mem::replace(&mut *self.current.write(), dispatcher)
    }

    /// Whether any dispatcher currently occupies the seam
    pub fn is_installed(&self) -> bool {
        self.current.read().is_some()
    }

    /// Forward a call to the installed dispatcher; an empty seam rejects
    /// as unconfigured
    pub fn dispatch(&self, call: CommandCall) -> DispatchFuture {
        let dispatcher = self.current.read().clone();
        match dispatcher {
            Some(dispatcher) => dispatcher.dispatch(call),
            None => Box::pin(futures::future::ready(Err(DispatchError::Unconfigured {
                kind: call.kind,
                input: call.input,
            }))),
        }
    }
}

/// Which dispatch seam a stub is bound to
#[derive(Clone)]
pub enum Target {
    /// The seam shared by every instance of a client type
    ByType {
        name: &'static str,
        slot: DispatchSlot,
    },
    /// One client instance's own seam
    ByInstance { name: String, slot: DispatchSlot },
}

impl Target {
    pub fn slot(&self) -> &DispatchSlot {
        match self {
            Target::ByType { slot, .. } => slot,
            Target::ByInstance { slot, .. } => slot,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Target::ByType { name, .. } => name,
            Target::ByInstance { name, .. } => name,
        }
    }
}

/// A client whose outbound dispatch can be intercepted.
///
/// Implementors expose two seams sharing one contract: the type-wide slot
/// (every instance) and the instance slot (one object). `send` prefers the
/// instance seam when something is installed there.
pub trait Interceptable {
    /// Client type name used in diagnostics and trace output
    fn client_name() -> &'static str;

    /// Dispatch seam shared by every instance of this client type
    fn type_slot() -> DispatchSlot;

    /// This instance's own dispatch seam
    fn instance_slot(&self) -> DispatchSlot;

    /// Configuration handed to fake handlers alongside each call
    fn context(&self) -> ClientContext {
        ClientContext::new(Self::client_name(), Value::Null)
    }

    /// Serialize the command and dispatch it through the active seam
    fn send<C: Command>(&self, command: C) -> DispatchFuture {
        let input = match serde_json::to_value(&command) {
            Ok(input) => input,
            Err(error) => {
                return Box::pin(futures::future::ready(Err(DispatchError::Json(error))))
            }
        };
        let call = CommandCall {
            kind: C::KIND.to_string(),
            input,
            context: self.context(),
        };
        let instance = self.instance_slot();
        let slot = if instance.is_installed() {
            instance
        } else {
            Self::type_slot()
        };
        slot.dispatch(call)
    }
}

#[cfg(test)]
#[path = "intercept_tests.rs"]
mod tests;
