// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Mockwire Contributors

//! Error taxonomy for dispatched calls.
//!
//! Unconfigured and unmatched failures are synthesized by the engine
//! itself and enumerate everything that was configured; handler and
//! fixture failures pass through to the caller untouched.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced to the caller of an intercepted dispatch
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("no handlers registered for command '{kind}'; received input: {input}")]
    Unconfigured { kind: String, input: Value },

    #[error(
        "no handler matched command '{kind}'; configured: [{}]; received input: {input}",
        .matchers.join("; ")
    )]
    Unmatched {
        kind: String,
        matchers: Vec<String>,
        input: Value,
    },

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("{0}")]
    Handler(String),

    #[error("failed to read fixture '{}': {source}", .path.display())]
    Fixture {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON conversion failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Structured domain error a handler can reject with
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{code}: {message} (status {status}, retryable: {retryable})")]
pub struct ServiceError {
    pub code: String,
    pub message: String,
    pub status: u16,
    pub retryable: bool,
}

impl ServiceError {
    /// Start a service error with the given code
    pub fn new(code: &str) -> Self {
        Self {
            code: code.to_string(),
            message: String::new(),
            status: 400,
            retryable: false,
        }
    }

    pub fn message(mut self, message: &str) -> Self {
        self.message = message.to_string();
        self
    }

    pub fn status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn retryable(mut self, retryable: bool) -> Self {
        self.retryable = retryable;
        self
    }

    /// Canned throttling error
    pub fn throttling() -> Self {
        Self::new("ThrottlingException")
            .message("Rate exceeded")
            .status(429)
            .retryable(true)
    }

    /// Canned missing-resource error
    pub fn not_found() -> Self {
        Self::new("ResourceNotFoundException")
            .message("Requested resource not found")
            .status(404)
    }

    /// Canned authentication error
    pub fn unauthorized() -> Self {
        Self::new("UnrecognizedClientException")
            .message("The security token included in the request is invalid")
            .status(403)
    }

    /// Canned transient server fault
    pub fn service_unavailable() -> Self {
        Self::new("ServiceUnavailable")
            .message("Service is unable to handle the request")
            .status(503)
            .retryable(true)
    }
}

/// What a configured rejection reproduces on every matching call.
///
/// Rejections replay once per call, so unlike [`DispatchError`] they must
/// be cloneable: a bare message or a structured [`ServiceError`].
#[derive(Clone, Debug)]
pub enum Rejection {
    Message(String),
    Service(ServiceError),
}

impl Rejection {
    /// Materialize the error handed to the caller
    pub fn to_error(&self) -> DispatchError {
        match self {
            Rejection::Message(message) => DispatchError::Handler(message.clone()),
            Rejection::Service(error) => DispatchError::Service(error.clone()),
        }
    }
}

impl From<&str> for Rejection {
    fn from(message: &str) -> Self {
        Rejection::Message(message.to_string())
    }
}

impl From<String> for Rejection {
    fn from(message: String) -> Self {
        Rejection::Message(message)
    }
}

impl From<ServiceError> for Rejection {
    fn from(error: ServiceError) -> Self {
        Rejection::Service(error)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
