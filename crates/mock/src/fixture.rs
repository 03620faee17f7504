// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Mockwire Contributors

//! File-backed fixture loading.
//!
//! `.json` fixtures parse as JSON; anything else loads as a raw string.
//! Objects of the form `{"$file": "relative/path"}` inside a JSON fixture
//! are replaced by the referenced file's content, resolved against the
//! fixture's own directory.

use crate::error::DispatchError;
use serde_json::Value;
use std::path::Path;

/// Load one fixture file, resolving nested `$file` references
pub fn load(path: &Path) -> Result<Value, DispatchError> {
    let content = std::fs::read_to_string(path).map_err(|source| DispatchError::Fixture {
        path: path.to_path_buf(),
        source,
    })?;

    if path.extension().is_some_and(|ext| ext == "json") {
        let value: Value = serde_json::from_str(&content)?;
        let base_dir = path.parent().unwrap_or(Path::new("."));
        resolve_refs(value, base_dir)
    } else {
        Ok(Value::String(content))
    }
}

/// Replace `$file` reference objects throughout a value tree
pub fn resolve_refs(value: Value, base_dir: &Path) -> Result<Value, DispatchError> {
    match value {
        Value::Object(mut map) => {
            // The whole object is a reference when it carries `$file`
            if let Some(file_path) = map.get("$file").and_then(|v| v.as_str()) {
                return load(&base_dir.join(file_path));
            }
            for entry in map.values_mut() {
                *entry = resolve_refs(entry.take(), base_dir)?;
            }
            Ok(Value::Object(map))
        }
        Value::Array(items) => {
            let resolved: Result<Vec<_>, _> = items
                .into_iter()
                .map(|item| resolve_refs(item, base_dir))
                .collect();
            Ok(Value::Array(resolved?))
        }
        // Primitives pass through unchanged
        other => Ok(other),
    }
}

#[cfg(test)]
#[path = "fixture_tests.rs"]
mod tests;
