// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Numeric extraction utilities for JSON values.
//!
//! Node payloads carry amounts either as JSON numbers or as decimal strings
//! (large amounts never fit a JSON number).

use serde_json::Value;

/// Extract an unsigned integer from a JSON number or a decimal string.
///
/// Strings must be plain ASCII digits: signs, whitespace and radix prefixes
/// are rejected. Returns None for negative, fractional, non-numeric or
/// overflowing values. JSON numbers must fit a u64.
pub fn extract_u128(value: &Value) -> Option<u128> {
    match value {
        Value::Number(n) => n.as_u64().map(u128::from),
        Value::String(s) => {
            if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            s.parse().ok()
        }
        _ => {
            tracing::trace!("Unexpected JSON type for numeric extraction: {:?}", value);
            None
        }
    }
}

pub fn extract_u32(value: &Value) -> Option<u32> {
    extract_u128(value).and_then(|n| u32::try_from(n).ok())
}

/// Render a scalar JSON value as the string the node would have sent.
///
/// Strings are returned as-is, numbers and booleans in their JSON form.
/// Null, arrays and objects are not scalar and yield None.
pub fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
