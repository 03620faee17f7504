// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Mockwire Contributors

//! Dispatch result type.

use crate::error::DispatchError;
use crate::intercept::Command;
use crate::stream::StreamBody;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// What a handler resolves with: a structured output value plus an
/// optional byte stream body.
#[derive(Clone, Debug)]
pub struct Reply {
    output: Value,
    body: Option<StreamBody>,
}

impl Reply {
    /// Reply carrying only a structured output
    pub fn from_value(output: Value) -> Self {
        Self { output, body: None }
    }

    /// Reply carrying a structured output and a stream body
    pub fn with_body(output: Value, body: StreamBody) -> Self {
        Self {
            output,
            body: Some(body),
        }
    }

    /// The raw output value
    pub fn raw(&self) -> &Value {
        &self.output
    }

    /// Decode the output into a concrete type
    pub fn output<T: DeserializeOwned>(&self) -> Result<T, DispatchError> {
        serde_json::from_value(self.output.clone()).map_err(DispatchError::Json)
    }

    /// Decode the output as a command's declared output type
    pub fn output_of<C: Command>(&self) -> Result<C::Output, DispatchError> {
        self.output::<C::Output>()
    }

    /// The stream body, if one was configured
    pub fn body(&self) -> Option<&StreamBody> {
        self.body.as_ref()
    }
}

#[cfg(test)]
#[path = "reply_tests.rs"]
mod tests;
