// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed messages produced from transaction results.
//!
//! Every message records the block height and transaction hash it came from,
//! the wallet addresses involved and a kind-specific payload. Amounts are
//! serialized as decimal strings so that u128 values survive JSON consumers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::MessageType;

/// Attribute name to new value, as submitted in a modify message.
pub type TokenChanges = BTreeMap<String, String>;

/// Serializes a u128 as a decimal string.
mod amount_string {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &u128, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u128, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ================================================================================================
// Token value objects
// ================================================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NonFungibleToken {
    pub contract_id: String,
    pub token_type: String,
    pub token_index: String,
}

impl NonFungibleToken {
    pub fn new(
        contract_id: impl Into<String>,
        token_type: impl Into<String>,
        token_index: impl Into<String>,
    ) -> Self {
        Self {
            contract_id: contract_id.into(),
            token_type: token_type.into(),
            token_index: token_index.into(),
        }
    }

    pub fn token_id(&self) -> String {
        crate::token::compose_token_id(&self.token_type, &self.token_index)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuedFungibleToken {
    pub contract_id: String,
    pub token_type: String,
    pub name: String,
    pub meta: String,
    pub decimals: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MintedFungibleToken {
    pub contract_id: String,
    pub token_type: String,
    #[serde(with = "amount_string")]
    pub amount: u128,
}

// ================================================================================================
// Service token messages
// ================================================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTokenModifyMessage {
    pub height: u64,
    pub txhash: String,
    pub sender: String,
    pub owner: String,
    pub contract_id: String,
    pub changes: TokenChanges,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTokenMintMessage {
    pub height: u64,
    pub txhash: String,
    pub from: String,
    pub owner: String,
    pub to: String,
    pub contract_id: String,
    #[serde(with = "amount_string")]
    pub amount: u128,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTokenBurnMessage {
    pub height: u64,
    pub txhash: String,
    pub from: String,
    pub owner: String,
    pub contract_id: String,
    #[serde(with = "amount_string")]
    pub amount: u128,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTokenTransferMessage {
    pub height: u64,
    pub txhash: String,
    pub from: String,
    pub owner: String,
    pub contract_id: String,
    pub to: String,
    #[serde(with = "amount_string")]
    pub amount: u128,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTokenTransferFromMessage {
    pub height: u64,
    pub txhash: String,
    pub from: String,
    pub proxy: String,
    pub owner: String,
    pub contract_id: String,
    pub to: String,
    #[serde(with = "amount_string")]
    pub amount: u128,
}

// ================================================================================================
// Item token messages
// ================================================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemTokenModifyMessage {
    pub height: u64,
    pub txhash: String,
    pub from: String,
    pub sender: String,
    pub owner: String,
    pub contract_id: String,
    pub token_type: String,
    pub token_index: String,
    pub token_id: String,
    pub changes: TokenChanges,
    pub is_fungible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NonFungibleTokenAttachMessage {
    pub height: u64,
    pub txhash: String,
    pub from: String,
    pub sender: String,
    pub parent_token: NonFungibleToken,
    pub child_token: NonFungibleToken,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NonFungibleTokenAttachFromMessage {
    pub height: u64,
    pub txhash: String,
    pub from: String,
    pub proxy: String,
    pub sender: String,
    pub parent_token: NonFungibleToken,
    pub child_token: NonFungibleToken,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NonFungibleTokenDetachMessage {
    pub height: u64,
    pub txhash: String,
    pub from: String,
    pub sender: String,
    pub parent_token: NonFungibleToken,
    pub child_token: NonFungibleToken,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NonFungibleTokenDetachFromMessage {
    pub height: u64,
    pub txhash: String,
    pub from: String,
    pub sender: String,
    pub proxy: String,
    pub parent_token: NonFungibleToken,
    pub child_token: NonFungibleToken,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FungibleTokenIssueMessage {
    pub height: u64,
    pub txhash: String,
    pub sender: String,
    pub owner: String,
    pub to: String,
    pub token: IssuedFungibleToken,
    #[serde(with = "amount_string")]
    pub amount: u128,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FungibleTokenMintMessage {
    pub height: u64,
    pub txhash: String,
    pub from: String,
    pub sender: String,
    pub to: String,
    pub minted_tokens: Vec<MintedFungibleToken>,
}

// ================================================================================================
// Message union
// ================================================================================================

/// One message parsed from a transaction result.
///
/// Serialized with a `messageType` tag holding the wire type string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "messageType")]
pub enum TxResultMessage {
    #[serde(rename = "token/MsgModify")]
    ServiceTokenModify(ServiceTokenModifyMessage),
    #[serde(rename = "token/MsgMint")]
    ServiceTokenMint(ServiceTokenMintMessage),
    #[serde(rename = "token/MsgBurn")]
    ServiceTokenBurn(ServiceTokenBurnMessage),
    #[serde(rename = "token/MsgTransfer")]
    ServiceTokenTransfer(ServiceTokenTransferMessage),
    #[serde(rename = "token/MsgTransferFrom")]
    ServiceTokenTransferFrom(ServiceTokenTransferFromMessage),
    #[serde(rename = "collection/MsgModify")]
    ItemTokenModify(ItemTokenModifyMessage),
    #[serde(rename = "collection/MsgAttach")]
    ItemTokenAttach(NonFungibleTokenAttachMessage),
    #[serde(rename = "collection/MsgAttachFrom")]
    ItemTokenAttachFrom(NonFungibleTokenAttachFromMessage),
    #[serde(rename = "collection/MsgDetach")]
    ItemTokenDetach(NonFungibleTokenDetachMessage),
    #[serde(rename = "collection/MsgDetachFrom")]
    ItemTokenDetachFrom(NonFungibleTokenDetachFromMessage),
    #[serde(rename = "collection/MsgIssueFT")]
    ItemTokenIssueFt(FungibleTokenIssueMessage),
    #[serde(rename = "collection/MsgMintFT")]
    ItemTokenMintFt(FungibleTokenMintMessage),
}

impl TxResultMessage {
    pub fn message_type(&self) -> MessageType {
        match self {
            Self::ServiceTokenModify(_) => MessageType::ServiceTokenModify,
            Self::ServiceTokenMint(_) => MessageType::ServiceTokenMint,
            Self::ServiceTokenBurn(_) => MessageType::ServiceTokenBurn,
            Self::ServiceTokenTransfer(_) => MessageType::ServiceTokenTransfer,
            Self::ServiceTokenTransferFrom(_) => MessageType::ServiceTokenTransferFrom,
            Self::ItemTokenModify(_) => MessageType::ItemTokenModify,
            Self::ItemTokenAttach(_) => MessageType::ItemTokenAttach,
            Self::ItemTokenAttachFrom(_) => MessageType::ItemTokenAttachFrom,
            Self::ItemTokenDetach(_) => MessageType::ItemTokenDetach,
            Self::ItemTokenDetachFrom(_) => MessageType::ItemTokenDetachFrom,
            Self::ItemTokenIssueFt(_) => MessageType::ItemTokenIssueFt,
            Self::ItemTokenMintFt(_) => MessageType::ItemTokenMintFt,
        }
    }

    pub fn height(&self) -> u64 {
        match self {
            Self::ServiceTokenModify(m) => m.height,
            Self::ServiceTokenMint(m) => m.height,
            Self::ServiceTokenBurn(m) => m.height,
            Self::ServiceTokenTransfer(m) => m.height,
            Self::ServiceTokenTransferFrom(m) => m.height,
            Self::ItemTokenModify(m) => m.height,
            Self::ItemTokenAttach(m) => m.height,
            Self::ItemTokenAttachFrom(m) => m.height,
            Self::ItemTokenDetach(m) => m.height,
            Self::ItemTokenDetachFrom(m) => m.height,
            Self::ItemTokenIssueFt(m) => m.height,
            Self::ItemTokenMintFt(m) => m.height,
        }
    }

    pub fn txhash(&self) -> &str {
        match self {
            Self::ServiceTokenModify(m) => &m.txhash,
            Self::ServiceTokenMint(m) => &m.txhash,
            Self::ServiceTokenBurn(m) => &m.txhash,
            Self::ServiceTokenTransfer(m) => &m.txhash,
            Self::ServiceTokenTransferFrom(m) => &m.txhash,
            Self::ItemTokenModify(m) => &m.txhash,
            Self::ItemTokenAttach(m) => &m.txhash,
            Self::ItemTokenAttachFrom(m) => &m.txhash,
            Self::ItemTokenDetach(m) => &m.txhash,
            Self::ItemTokenDetachFrom(m) => &m.txhash,
            Self::ItemTokenIssueFt(m) => &m.txhash,
            Self::ItemTokenMintFt(m) => &m.txhash,
        }
    }
}
