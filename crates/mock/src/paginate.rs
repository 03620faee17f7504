// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Mockwire Contributors

//! Cursor-based pagination synthesizer.
//!
//! Pages are precomputed once at registration. Every page but the last
//! carries a continuation token equal to that page's last item, so
//! object-shaped cursors (composite keys) work, not just opaque strings.
//! Which page a call receives is derived from the call's own input token,
//! never from a shared counter, so a retried request with the same token
//! reproduces the same page.

use serde_json::{Map, Value};

/// Windowing options for a paginated response
#[derive(Clone, Debug)]
pub struct PageOptions {
    /// Items per page; clamped to at least 1
    pub page_size: usize,
    /// Output field carrying the page's items
    pub items_field: String,
    /// Output field carrying the continuation token
    pub output_token_field: String,
    /// Input field the caller supplies a token through
    pub input_token_field: String,
}

impl PageOptions {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            items_field: "items".to_string(),
            output_token_field: "next_token".to_string(),
            input_token_field: "next_token".to_string(),
        }
    }

    pub fn items_field(mut self, field: &str) -> Self {
        self.items_field = field.to_string();
        self
    }

    pub fn output_token_field(mut self, field: &str) -> Self {
        self.output_token_field = field.to_string();
        self
    }

    pub fn input_token_field(mut self, field: &str) -> Self {
        self.input_token_field = field.to_string();
        self
    }
}

#[derive(Clone, Debug)]
struct Page {
    items: Vec<Value>,
    token: Option<Value>,
}

/// Precomputed page list plus the per-call token resolver
#[derive(Clone, Debug)]
pub struct PaginationPlan {
    options: PageOptions,
    pages: Vec<Page>,
}

impl PaginationPlan {
    /// Window the item list once. An empty list yields exactly one page
    /// with no items and no token.
    pub fn new(items: Vec<Value>, options: PageOptions) -> Self {
        let size = options.page_size.max(1);
        let mut pages: Vec<Page> = items
            .chunks(size)
            .map(|chunk| Page {
                items: chunk.to_vec(),
                token: chunk.last().cloned(),
            })
            .collect();
        if pages.is_empty() {
            pages.push(Page {
                items: Vec::new(),
                token: None,
            });
        }
        if let Some(last) = pages.last_mut() {
            last.token = None;
        }
        Self { options, pages }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Build the page a call gets, from the token in its input.
    ///
    /// No token restarts at page 0; a token structurally equal to some
    /// page's token yields the following page; an unrecognized token
    /// restarts at page 0 like an absent one.
    pub fn resolve(&self, input: &Value) -> Value {
        let index = match input.get(self.options.input_token_field.as_str()) {
            None | Some(Value::Null) => 0,
            Some(token) => self
                .pages
                .iter()
                .position(|page| page.token.as_ref() == Some(token))
                .map_or(0, |found| found + 1),
        };
        match self.pages.get(index).or_else(|| self.pages.first()) {
            Some(page) => self.render(page),
            None => Value::Object(Map::new()),
        }
    }

    fn render(&self, page: &Page) -> Value {
        let mut output = Map::new();
        output.insert(
            self.options.items_field.clone(),
            Value::Array(page.items.clone()),
        );
        if let Some(token) = &page.token {
            output.insert(self.options.output_token_field.clone(), token.clone());
        }
        Value::Object(output)
    }
}

#[cfg(test)]
#[path = "paginate_tests.rs"]
mod tests;
