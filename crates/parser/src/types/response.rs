// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Transaction result payloads as returned by the node API.
//!
//! Only the fields the extractor reads are typed strictly; everything else is
//! optional so that results from older or newer node versions still decode.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::MessageType;

/// Envelope the node API wraps every response in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericResponse<T> {
    #[serde(default)]
    pub response_time: u64,
    #[serde(default)]
    pub status_code: i32,
    #[serde(default)]
    pub status_message: String,
    pub response_data: T,
}

/// The node's record of an executed transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxResultResponse {
    pub height: u64,
    pub txhash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_log: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_wanted: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_used: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
    #[serde(default)]
    pub logs: Vec<TxLog>,
    #[serde(default)]
    pub tx: Tx,
}

impl TxResultResponse {
    /// A missing code means the node did not report a failure.
    pub fn is_success(&self) -> bool {
        self.code.unwrap_or(0) == 0
    }

    /// Kind of the first message in the signed transaction, when it is a known kind.
    pub fn message_type(&self) -> Option<MessageType> {
        self.first_message_type()?.parse().ok()
    }

    /// Raw type string of the first message in the signed transaction.
    pub fn first_message_type(&self) -> Option<&str> {
        self.tx
            .value
            .msg
            .first()
            .map(|msg| msg.msg_type.as_str())
    }

    /// Iterates the `value` objects of every message, in order.
    pub fn message_values(&self) -> impl Iterator<Item = &Map<String, Value>> {
        self.tx.value.msg.iter().map(|msg| &msg.value)
    }

    /// Iterates every event of every log, in order.
    pub fn events(&self) -> impl Iterator<Item = &TxEvent> {
        self.logs.iter().flat_map(|log| log.events.iter())
    }
}

/// Per-message execution log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxLog {
    #[serde(default)]
    pub msg_index: u32,
    #[serde(default)]
    pub log: String,
    #[serde(default)]
    pub events: Vec<TxEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TxEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub attributes: Vec<EventAttribute>,
}

impl TxEvent {
    /// Value of the first attribute named `key`.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.key == key)
            .map(|attr| attr.value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventAttribute {
    pub key: String,
    #[serde(default)]
    pub value: String,
}

/// The signed transaction as submitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tx {
    #[serde(rename = "type", default)]
    pub tx_type: String,
    #[serde(default)]
    pub value: TxValue,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TxValue {
    #[serde(default)]
    pub msg: Vec<TxMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signatures: Option<Value>,
}

/// One message of the signed transaction; `value` holds the request data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TxMessage {
    #[serde(rename = "type")]
    pub msg_type: String,
    #[serde(default)]
    pub value: Map<String, Value>,
}
