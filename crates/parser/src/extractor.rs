// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Field lookups over a transaction result.
//!
//! Every function reads one value from a [`TxResultResponse`] and fails with
//! [`ExtractError::NotFound`] when the result does not carry it. Values come
//! from two places:
//!
//! - response data: the `value` object of each message of the signed
//!   transaction, keyed in camelCase (`contractId`)
//! - log events: the attributes of the events the node emitted while
//!   executing it, keyed in snake_case (`contract_id`)
//!
//! Wallet addresses of the request (`owner`, `from`, `to`, `proxy`) are only
//! read from response data and `sender` is only read from log events. Token
//! metadata prefers response data and falls back to log events.

use serde_json::Value;
use thiserror::Error;

use crate::consts::{DETACH_EVENT_TYPES, MESSAGE_EVENT_TYPE};
use crate::token::{self, TokenIdError};
use crate::types::{MintedFungibleToken, TokenChanges, TxResultResponse};
use crate::utils::{extract_u32, extract_u128, value_to_string};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("Field '{field}' not found in transaction result")]
    NotFound { field: &'static str },

    #[error("Field '{field}' has an unexpected value: {value}")]
    InvalidValue { field: &'static str, value: String },

    #[error("Invalid token id: {0}")]
    InvalidTokenId(#[from] TokenIdError),
}

impl ExtractError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ExtractError::NotFound { .. })
    }
}

// ================================================================================================
// Lookup primitives
// ================================================================================================

/// First non-null value stored under `key` in any message of the transaction.
fn message_value<'a>(result: &'a TxResultResponse, key: &str) -> Option<&'a Value> {
    result
        .message_values()
        .find_map(|value| value.get(key).filter(|v| !v.is_null()))
}

/// First attribute `key` among events of `preferred` types, then among all events.
fn event_attribute<'a>(
    result: &'a TxResultResponse,
    preferred: &[&str],
    key: &str,
) -> Option<&'a str> {
    result
        .events()
        .filter(|event| preferred.contains(&event.event_type.as_str()))
        .find_map(|event| event.attribute(key))
        .or_else(|| result.events().find_map(|event| event.attribute(key)))
}

fn not_found(field: &'static str) -> ExtractError {
    tracing::trace!(field, "field missing from transaction result");
    ExtractError::NotFound { field }
}

fn invalid(field: &'static str, value: &Value) -> ExtractError {
    ExtractError::InvalidValue {
        field,
        value: value.to_string(),
    }
}

/// A scalar from response data rendered as a string.
fn message_string(
    result: &TxResultResponse,
    field: &'static str,
) -> Option<Result<String, ExtractError>> {
    message_value(result, field)
        .map(|value| value_to_string(value).ok_or_else(|| invalid(field, value)))
}

fn find_message_string(
    result: &TxResultResponse,
    field: &'static str,
) -> Result<String, ExtractError> {
    message_string(result, field).unwrap_or_else(|| Err(not_found(field)))
}

/// Response data `message_key`, falling back to event attribute `event_key`.
fn find_message_or_event_string(
    result: &TxResultResponse,
    message_key: &'static str,
    event_key: &str,
) -> Result<String, ExtractError> {
    if let Some(value) = message_string(result, message_key) {
        return value;
    }
    event_attribute(result, &[], event_key)
        .map(str::to_string)
        .ok_or_else(|| not_found(message_key))
}

fn find_event_string(
    result: &TxResultResponse,
    preferred: &[&str],
    field: &'static str,
) -> Result<String, ExtractError> {
    event_attribute(result, preferred, field)
        .map(str::to_string)
        .ok_or_else(|| not_found(field))
}

/// An unsigned integer from response data `message_key` or event attribute `event_key`.
fn find_unsigned<T>(
    result: &TxResultResponse,
    message_key: &'static str,
    event_key: &str,
    convert: impl Fn(&Value) -> Option<T>,
) -> Result<T, ExtractError> {
    if let Some(value) = message_value(result, message_key) {
        return convert(value).ok_or_else(|| invalid(message_key, value));
    }
    let raw = event_attribute(result, &[], event_key).ok_or_else(|| not_found(message_key))?;
    let value = Value::String(raw.to_string());
    convert(&value).ok_or_else(|| invalid(message_key, &value))
}

// ================================================================================================
// Direct result fields
// ================================================================================================

pub fn height(result: &TxResultResponse) -> u64 {
    result.height
}

pub fn txhash(result: &TxResultResponse) -> &str {
    &result.txhash
}

// ================================================================================================
// Wallet addresses
// ================================================================================================

/// The account that signed the transaction, as reported by the `message` event.
pub fn find_sender_from_log_events(result: &TxResultResponse) -> Result<String, ExtractError> {
    find_event_string(result, &[MESSAGE_EVENT_TYPE], "sender")
}

pub fn find_owner_wallet_address(result: &TxResultResponse) -> Result<String, ExtractError> {
    find_message_string(result, "owner")
}

pub fn find_from_wallet_address(result: &TxResultResponse) -> Result<String, ExtractError> {
    find_message_string(result, "from")
}

pub fn find_to_wallet_address(result: &TxResultResponse) -> Result<String, ExtractError> {
    find_message_string(result, "to")
}

pub fn find_proxy_wallet_address(result: &TxResultResponse) -> Result<String, ExtractError> {
    find_message_string(result, "proxy")
}

// ================================================================================================
// Token metadata
// ================================================================================================

pub fn find_contract_id(result: &TxResultResponse) -> Result<String, ExtractError> {
    find_message_or_event_string(result, "contractId", "contract_id")
}

pub fn find_amount(result: &TxResultResponse) -> Result<u128, ExtractError> {
    find_unsigned(result, "amount", "amount", extract_u128)
}

pub fn find_token_name(result: &TxResultResponse) -> Result<String, ExtractError> {
    find_message_or_event_string(result, "name", "name")
}

pub fn find_token_meta(result: &TxResultResponse) -> Result<String, ExtractError> {
    find_message_or_event_string(result, "meta", "meta")
}

pub fn find_token_decimals(result: &TxResultResponse) -> Result<u32, ExtractError> {
    find_unsigned(result, "decimals", "decimals", extract_u32)
}

/// Token type from response data or events, otherwise the type part of the token id.
pub fn find_token_type(result: &TxResultResponse) -> Result<String, ExtractError> {
    match find_message_or_event_string(result, "tokenType", "token_type") {
        Err(ExtractError::NotFound { .. }) => {
            let token_id = find_token_id(result)?;
            Ok(token::token_type_from(&token_id)?.to_string())
        }
        other => other,
    }
}

/// Token index from response data or events, otherwise the index part of the token id.
pub fn find_token_index(result: &TxResultResponse) -> Result<String, ExtractError> {
    match find_message_or_event_string(result, "tokenIndex", "token_index") {
        Err(ExtractError::NotFound { .. }) => {
            let token_id = find_token_id(result)?;
            Ok(token::token_index_from(&token_id)?.to_string())
        }
        other => other,
    }
}

/// Token id from response data, composed from its type and index when the
/// request names them separately, otherwise from the events.
pub fn find_token_id(result: &TxResultResponse) -> Result<String, ExtractError> {
    if let Some(token_id) = message_string(result, "tokenId") {
        return token_id;
    }
    if let (Some(token_type), Some(token_index)) = (
        message_string(result, "tokenType"),
        message_string(result, "tokenIndex"),
    ) {
        return Ok(token::compose_token_id(&token_type?, &token_index?));
    }
    event_attribute(result, &[], "token_id")
        .map(str::to_string)
        .ok_or_else(|| not_found("tokenId"))
}

/// Token id the node assigned while executing the transaction (issue/mint).
pub fn find_token_id_from_events(result: &TxResultResponse) -> Result<String, ExtractError> {
    find_event_string(result, &[], "token_id")
}

/// Token the child is attached to, as named in the attach request.
pub fn find_parent_token_id(result: &TxResultResponse) -> Result<String, ExtractError> {
    find_message_or_event_string(result, "toTokenId", "to_token_id")
}

/// Token the child was detached from. Detach requests do not name it, so
/// only the detach events carry it.
pub fn find_parent_token_id_from_detach(
    result: &TxResultResponse,
) -> Result<String, ExtractError> {
    find_event_string(result, DETACH_EVENT_TYPES, "from_token_id")
}

// ================================================================================================
// Composite fields
// ================================================================================================

/// Attribute changes of a modify request, `[{ "field": .., "value": .. }]`.
pub fn find_changes(result: &TxResultResponse) -> Result<TokenChanges, ExtractError> {
    const FIELD: &str = "changes";

    let value = message_value(result, FIELD).ok_or_else(|| not_found(FIELD))?;
    let entries = value.as_array().ok_or_else(|| invalid(FIELD, value))?;

    entries
        .iter()
        .map(|entry| {
            let field = entry.get("field").and_then(value_to_string);
            let new_value = entry.get("value").and_then(value_to_string);
            match (field, new_value) {
                (Some(field), Some(new_value)) => Ok((field, new_value)),
                _ => Err(invalid(FIELD, entry)),
            }
        })
        .collect()
}

/// Fungible tokens minted by a mint request, `amount: [{ "tokenId": .., "amount": .. }]`,
/// in request order.
pub fn find_minted_fungible_tokens(
    result: &TxResultResponse,
) -> Result<Vec<MintedFungibleToken>, ExtractError> {
    const FIELD: &str = "amount";

    let contract_id = find_contract_id(result)?;
    let value = message_value(result, FIELD).ok_or_else(|| not_found(FIELD))?;
    let entries = value.as_array().ok_or_else(|| invalid(FIELD, value))?;

    entries
        .iter()
        .map(|entry| -> Result<MintedFungibleToken, ExtractError> {
            let token_id = entry
                .get("tokenId")
                .and_then(Value::as_str)
                .ok_or_else(|| invalid(FIELD, entry))?;
            let amount = entry
                .get("amount")
                .and_then(extract_u128)
                .ok_or_else(|| invalid(FIELD, entry))?;
            Ok(MintedFungibleToken {
                contract_id: contract_id.clone(),
                token_type: token::token_type_from(token_id)?.to_string(),
                amount,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{result_from, tx_result};
    use serde_json::json;

    #[test]
    fn test_direct_fields() {
        let result = tx_result(json!({}), vec![]);
        assert_eq!(height(&result), 100);
        assert_eq!(txhash(&result), "H1");
    }

    #[test]
    fn test_sender_only_from_events() {
        let result = tx_result(json!({ "sender": "tlink1request" }), vec![]);
        assert_eq!(
            find_sender_from_log_events(&result),
            Err(ExtractError::NotFound { field: "sender" })
        );

        let result = tx_result(
            json!({}),
            vec![
                json!({ "type": "transfer", "attributes": [{ "key": "sender", "value": "tlink1other" }] }),
                json!({ "type": "message", "attributes": [{ "key": "sender", "value": "tlink1signer" }] }),
            ],
        );
        assert_eq!(find_sender_from_log_events(&result).unwrap(), "tlink1signer");
    }

    #[test]
    fn test_sender_falls_back_to_any_event() {
        let result = tx_result(
            json!({}),
            vec![json!({ "type": "transfer", "attributes": [{ "key": "sender", "value": "tlink1other" }] })],
        );
        assert_eq!(find_sender_from_log_events(&result).unwrap(), "tlink1other");
    }

    #[test]
    fn test_addresses_only_from_response_data() {
        let events = vec![json!({
            "type": "message",
            "attributes": [
                { "key": "owner", "value": "tlink1event" },
                { "key": "to", "value": "tlink1event" }
            ]
        })];
        let result = tx_result(json!({ "owner": "tlink1owner", "from": "tlink1from" }), events);

        assert_eq!(find_owner_wallet_address(&result).unwrap(), "tlink1owner");
        assert_eq!(find_from_wallet_address(&result).unwrap(), "tlink1from");
        assert_eq!(
            find_to_wallet_address(&result),
            Err(ExtractError::NotFound { field: "to" })
        );
        assert_eq!(
            find_proxy_wallet_address(&result),
            Err(ExtractError::NotFound { field: "proxy" })
        );
    }

    #[test]
    fn test_null_counts_as_missing() {
        let result = tx_result(json!({ "owner": null }), vec![]);
        assert!(find_owner_wallet_address(&result).unwrap_err().is_not_found());
    }

    #[test]
    fn test_non_scalar_address_is_invalid() {
        let result = tx_result(json!({ "owner": ["a"] }), vec![]);
        assert_eq!(
            find_owner_wallet_address(&result),
            Err(ExtractError::InvalidValue {
                field: "owner",
                value: "[\"a\"]".to_string()
            })
        );
    }

    #[test]
    fn test_later_message_is_searched() {
        let result = result_from(json!({
            "height": 5,
            "txhash": "H5",
            "tx": { "value": { "msg": [
                { "type": "token/MsgTransfer", "value": { "from": "tlink1a" } },
                { "type": "token/MsgTransfer", "value": { "from": "tlink1b", "proxy": "tlink1p" } }
            ] } }
        }));
        assert_eq!(find_from_wallet_address(&result).unwrap(), "tlink1a");
        assert_eq!(find_proxy_wallet_address(&result).unwrap(), "tlink1p");
    }

    #[test]
    fn test_contract_id_prefers_response_data() {
        let events = vec![json!({ "type": "transfer", "attributes": [{ "key": "contract_id", "value": "event0001" }] })];
        let result = tx_result(json!({ "contractId": "9636a07e" }), events.clone());
        assert_eq!(find_contract_id(&result).unwrap(), "9636a07e");

        let result = tx_result(json!({}), events);
        assert_eq!(find_contract_id(&result).unwrap(), "event0001");
    }

    #[test]
    fn test_amount_from_string_number_or_event() {
        let result = tx_result(json!({ "amount": "50" }), vec![]);
        assert_eq!(find_amount(&result).unwrap(), 50);

        let result = tx_result(json!({ "amount": 75 }), vec![]);
        assert_eq!(find_amount(&result).unwrap(), 75);

        let events = vec![json!({ "type": "burn", "attributes": [{ "key": "amount", "value": "12" }] })];
        let result = tx_result(json!({}), events);
        assert_eq!(find_amount(&result).unwrap(), 12);
    }

    #[test]
    fn test_amount_invalid() {
        let result = tx_result(json!({ "amount": "lots" }), vec![]);
        assert_eq!(
            find_amount(&result),
            Err(ExtractError::InvalidValue {
                field: "amount",
                value: "\"lots\"".to_string()
            })
        );

        for raw in ["0x10", "+5", " 7 "] {
            let result = tx_result(json!({ "amount": raw }), vec![]);
            assert!(matches!(
                find_amount(&result),
                Err(ExtractError::InvalidValue { field: "amount", .. })
            ));
        }
    }

    #[test]
    fn test_token_metadata() {
        let result = tx_result(
            json!({ "name": "Gold", "meta": "", "decimals": "6" }),
            vec![],
        );
        assert_eq!(find_token_name(&result).unwrap(), "Gold");
        assert_eq!(find_token_meta(&result).unwrap(), "");
        assert_eq!(find_token_decimals(&result).unwrap(), 6);
    }

    #[test]
    fn test_token_id_sources() {
        let result = tx_result(json!({ "tokenId": "1000000100000003" }), vec![]);
        assert_eq!(find_token_id(&result).unwrap(), "1000000100000003");
        assert_eq!(find_token_type(&result).unwrap(), "10000001");
        assert_eq!(find_token_index(&result).unwrap(), "00000003");

        let result = tx_result(
            json!({ "tokenType": "10000001", "tokenIndex": "00000004" }),
            vec![],
        );
        assert_eq!(find_token_id(&result).unwrap(), "1000000100000004");

        let events = vec![json!({ "type": "mint_nft", "attributes": [{ "key": "token_id", "value": "1000000200000001" }] })];
        let result = tx_result(json!({}), events);
        assert_eq!(find_token_id(&result).unwrap(), "1000000200000001");
        assert_eq!(find_token_type(&result).unwrap(), "10000002");
    }

    #[test]
    fn test_token_type_missing_everywhere() {
        let result = tx_result(json!({}), vec![]);
        assert_eq!(
            find_token_type(&result),
            Err(ExtractError::NotFound { field: "tokenId" })
        );
    }

    #[test]
    fn test_token_type_from_short_id() {
        let result = tx_result(json!({ "tokenId": "1000" }), vec![]);
        assert!(matches!(
            find_token_type(&result),
            Err(ExtractError::InvalidTokenId(_))
        ));
    }

    #[test]
    fn test_token_id_from_events_ignores_response_data() {
        let result = tx_result(json!({ "tokenId": "0000000100000000" }), vec![]);
        assert_eq!(
            find_token_id_from_events(&result),
            Err(ExtractError::NotFound { field: "token_id" })
        );
    }

    #[test]
    fn test_parent_token_ids() {
        let result = tx_result(json!({ "toTokenId": "1000000100000001" }), vec![]);
        assert_eq!(find_parent_token_id(&result).unwrap(), "1000000100000001");

        let events = vec![
            json!({ "type": "transfer_nft", "attributes": [{ "key": "from_token_id", "value": "wrong" }] }),
            json!({ "type": "detach", "attributes": [{ "key": "from_token_id", "value": "1000000100000001" }] }),
        ];
        let result = tx_result(json!({}), events);
        assert_eq!(
            find_parent_token_id_from_detach(&result).unwrap(),
            "1000000100000001"
        );

        let events = vec![
            json!({ "type": "attach", "attributes": [{ "key": "to_token_id", "value": "1000000100000002" }] }),
        ];
        let result = tx_result(json!({}), events);
        assert_eq!(find_parent_token_id(&result).unwrap(), "1000000100000002");

        let events = vec![
            json!({ "type": "operation_root_changed", "attributes": [{ "key": "from_token_id", "value": "1000000100000003" }] }),
        ];
        let result = tx_result(json!({}), events);
        assert_eq!(
            find_parent_token_id_from_detach(&result).unwrap(),
            "1000000100000003"
        );
    }

    #[test]
    fn test_changes_preserve_every_entry() {
        let result = tx_result(
            json!({ "changes": [
                { "field": "name", "value": "Silver" },
                { "field": "meta", "value": "{\"rarity\":1}" }
            ] }),
            vec![],
        );
        let changes = find_changes(&result).unwrap();
        assert_eq!(changes.len(), 2);
        assert_eq!(changes["name"], "Silver");
        assert_eq!(changes["meta"], "{\"rarity\":1}");
    }

    #[test]
    fn test_changes_malformed() {
        let result = tx_result(json!({ "changes": [{ "field": "name" }] }), vec![]);
        assert!(matches!(
            find_changes(&result),
            Err(ExtractError::InvalidValue { field: "changes", .. })
        ));

        let result = tx_result(json!({ "changes": "name" }), vec![]);
        assert!(matches!(
            find_changes(&result),
            Err(ExtractError::InvalidValue { field: "changes", .. })
        ));
    }

    #[test]
    fn test_minted_fungible_tokens_keep_order() {
        let result = tx_result(
            json!({
                "contractId": "61e14383",
                "amount": [
                    { "tokenId": "0000000200000000", "amount": "30" },
                    { "tokenId": "0000000100000000", "amount": 10 }
                ]
            }),
            vec![],
        );
        let minted = find_minted_fungible_tokens(&result).unwrap();
        assert_eq!(
            minted,
            vec![
                MintedFungibleToken {
                    contract_id: "61e14383".to_string(),
                    token_type: "00000002".to_string(),
                    amount: 30,
                },
                MintedFungibleToken {
                    contract_id: "61e14383".to_string(),
                    token_type: "00000001".to_string(),
                    amount: 10,
                },
            ]
        );
    }

    #[test]
    fn test_minted_fungible_tokens_need_contract_id() {
        let result = tx_result(
            json!({ "amount": [{ "tokenId": "0000000100000000", "amount": "1" }] }),
            vec![],
        );
        assert_eq!(
            find_minted_fungible_tokens(&result),
            Err(ExtractError::NotFound { field: "contractId" })
        );
    }
}
