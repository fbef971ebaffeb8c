// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Test fixtures and helpers for building transaction results.
//!
//! Results are built from `serde_json::json!` values so that tests exercise
//! the same deserialization path as payloads coming from the node.

use crate::types::{GenericResponse, TxResultResponse};
use serde_json::{Value, json};

/// Default test block height.
pub const TEST_HEIGHT: u64 = 100;

/// Default test transaction hash.
pub const TEST_TXHASH: &str = "H1";

/// Deserialize a result from raw JSON.
pub fn result_from(value: Value) -> TxResultResponse {
    serde_json::from_value(value).expect("fixture must be a valid transaction result")
}

/// A result at [`TEST_HEIGHT`] / [`TEST_TXHASH`] with one `token/MsgTransfer`
/// message holding `msg_value` and one log holding `events`.
pub fn tx_result(msg_value: Value, events: Vec<Value>) -> TxResultResponse {
    typed_tx_result("token/MsgTransfer", msg_value, events)
}

/// Like [`tx_result`] with an explicit message type.
pub fn typed_tx_result(msg_type: &str, msg_value: Value, events: Vec<Value>) -> TxResultResponse {
    result_from(json!({
        "height": TEST_HEIGHT,
        "txhash": TEST_TXHASH,
        "code": 0,
        "logs": [{ "msgIndex": 0, "log": "", "events": events }],
        "tx": {
            "type": "cosmos-sdk/StdTx",
            "value": {
                "msg": [{ "type": msg_type, "value": msg_value }],
                "memo": ""
            }
        }
    }))
}

/// A `message` event carrying `sender`.
pub fn sender_event(sender: &str) -> Value {
    json!({
        "type": "message",
        "attributes": [
            { "key": "action", "value": "transfer" },
            { "key": "sender", "value": sender }
        ]
    })
}

/// Wrap a result in the node API envelope.
pub fn envelope(result: TxResultResponse) -> GenericResponse<TxResultResponse> {
    GenericResponse {
        response_time: 1_585_467_711_877,
        status_code: 1000,
        status_message: "Success".to_string(),
        response_data: result,
    }
}
