//! Response-envelope unwrapping.
//!
//! The backend is not consistent about list shapes: `data` may be a bare
//! array, or an object carrying the list under the resource name next to
//! an optional pagination block, or (from older endpoints) an object with
//! the list nested under another `data` key. All of that inconsistency is
//! absorbed here, in one place, with a fixed priority order. Slices and
//! resource modules never sniff shapes themselves.

use std::collections::BTreeMap;

use anyhow::Result;
use schedulix_core::models::Pagination;
use schedulix_core::SchedulixError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Top-level `message`, if the body carries one.
pub fn message(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(|m| m.as_str())
        .map(|m| m.to_string())
}

/// Field-keyed validation failures from a 422-class body:
/// `{ errors: [{ path|param, msg }, ...] }`. Entries without a usable
/// field name or message are skipped.
pub fn validation_errors(body: &Value) -> Option<BTreeMap<String, String>> {
    let entries = body.get("errors")?.as_array()?;

    let mut fields = BTreeMap::new();
    for entry in entries {
        let field = entry
            .get("path")
            .or_else(|| entry.get("param"))
            .and_then(|f| f.as_str());
        let msg = entry.get("msg").and_then(|m| m.as_str());
        if let (Some(field), Some(msg)) = (field, msg) {
            fields.insert(field.to_string(), msg.to_string());
        }
    }

    if fields.is_empty() {
        None
    } else {
        Some(fields)
    }
}

fn data(body: &Value) -> Result<&Value> {
    body.get("data")
        .ok_or_else(|| SchedulixError::general_error("Response carried no data").into_anyhow())
}

/// Deserialize the envelope's `data` payload as a single record.
pub fn unwrap_one<T: DeserializeOwned>(body: &Value) -> Result<T> {
    let payload = data(body)?;
    serde_json::from_value(payload.clone()).map_err(|e| {
        SchedulixError::general_error(format!("Unexpected response shape: {e}"))
            .with_source(e.into())
            .into_anyhow()
    })
}

/// Deserialize a list payload, trying shapes in a fixed order:
///
/// 1. `data` is a bare array;
/// 2. `data.<resource>` is an array (pagination read from `data.pagination`);
/// 3. `data.data` is an array (older endpoints), pagination likewise.
///
/// Anything else is an error: the caller named the resource it expected,
/// so a mismatch means the contract changed.
pub fn unwrap_list<T: DeserializeOwned>(
    body: &Value,
    resource: &str,
) -> Result<(Vec<T>, Option<Pagination>)> {
    let payload = data(body)?;

    if payload.is_array() {
        return Ok((parse_items(payload)?, None));
    }

    for key in [resource, "data"] {
        if let Some(items) = payload.get(key).filter(|v| v.is_array()) {
            let pagination = payload
                .get("pagination")
                .and_then(|p| serde_json::from_value(p.clone()).ok());
            return Ok((parse_items(items)?, pagination));
        }
    }

    Err(
        SchedulixError::general_error(format!("Unexpected list shape for '{resource}'"))
            .into_anyhow(),
    )
}

fn parse_items<T: DeserializeOwned>(items: &Value) -> Result<Vec<T>> {
    serde_json::from_value(items.clone()).map_err(|e| {
        SchedulixError::general_error(format!("Unexpected list item shape: {e}"))
            .with_source(e.into())
            .into_anyhow()
    })
}
