// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Mockwire Contributors

//! Byte stream bodies for canned responses.

use futures::stream::BoxStream;
use futures::TryStreamExt;
use std::sync::Arc;

/// Factory for response body streams.
///
/// Holds the configured chunks; every [`open`](Self::open) builds a fresh,
/// unconsumed stream, so two calls served by the same entry never share an
/// exhausted body.
#[derive(Clone)]
pub struct StreamBody {
    chunks: Arc<Vec<Vec<u8>>>,
}

impl StreamBody {
    /// Body made of the given chunks, delivered in order
    pub fn from_chunks(chunks: Vec<Vec<u8>>) -> Self {
        Self {
            chunks: Arc::new(chunks),
        }
    }

    /// Single-chunk body from raw bytes
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::from_chunks(vec![bytes.into()])
    }

    /// Single-chunk body from UTF-8 text
    pub fn from_text(text: &str) -> Self {
        Self::from_bytes(text.as_bytes().to_vec())
    }

    /// Open a fresh stream over the configured chunks
    pub fn open(&self) -> BoxStream<'static, std::io::Result<Vec<u8>>> {
        let chunks: Vec<Vec<u8>> = self.chunks.as_ref().clone();
        Box::pin(futures::stream::iter(chunks.into_iter().map(Ok)))
    }

    /// Drain a fresh stream into one buffer
    pub async fn collect(&self) -> std::io::Result<Vec<u8>> {
        let mut stream = self.open();
        let mut out = Vec::new();
        while let Some(chunk) = stream.try_next().await? {
            out.extend_from_slice(&chunk);
        }
        Ok(out)
    }

    /// Total number of configured bytes
    pub fn len(&self) -> usize {
        self.chunks.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for StreamBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamBody")
            .field("chunks", &self.chunks.len())
            .field("bytes", &self.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "stream_tests.rs"]
mod tests;
