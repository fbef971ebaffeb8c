// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Message kinds carried in the `type` field of transaction messages.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown message type: {0}")]
pub struct UnknownMessageType(pub String);

/// Declares `MessageType` with the wire string of every variant.
///
/// Usage:
/// ```ignore
/// message_types! {
///     ServiceTokenMint => "token/MsgMint",
/// }
/// ```
macro_rules! message_types {
    ($($variant:ident => $wire:literal),+ $(,)?) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum MessageType {
            $($variant,)+
        }

        impl MessageType {
            /// Every known message type, in declaration order.
            pub const ALL: &'static [MessageType] = &[$(MessageType::$variant,)+];

            /// The string used for this type in transaction payloads.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(MessageType::$variant => $wire,)+
                }
            }
        }

        impl FromStr for MessageType {
            type Err = UnknownMessageType;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(MessageType::$variant),)+
                    other => Err(UnknownMessageType(other.to_string())),
                }
            }
        }
    };
}

message_types! {
    // Service tokens
    ServiceTokenIssue => "token/MsgIssue",
    ServiceTokenModify => "token/MsgModify",
    ServiceTokenMint => "token/MsgMint",
    ServiceTokenBurn => "token/MsgBurn",
    ServiceTokenBurnFrom => "token/MsgBurnFrom",
    ServiceTokenTransfer => "token/MsgTransfer",
    ServiceTokenTransferFrom => "token/MsgTransferFrom",
    ServiceTokenGrantPermission => "token/MsgGrantPermission",
    ServiceTokenRevokePermission => "token/MsgRevokePermission",
    ServiceTokenApprove => "token/MsgApprove",

    // Item tokens
    ItemTokenCreate => "collection/MsgCreate",
    ItemTokenModify => "collection/MsgModify",
    ItemTokenIssueFt => "collection/MsgIssueFT",
    ItemTokenMintFt => "collection/MsgMintFT",
    ItemTokenBurnFt => "collection/MsgBurnFT",
    ItemTokenBurnFtFrom => "collection/MsgBurnFTFrom",
    ItemTokenTransferFt => "collection/MsgTransferFT",
    ItemTokenTransferFtFrom => "collection/MsgTransferFTFrom",
    ItemTokenIssueNft => "collection/MsgIssueNFT",
    ItemTokenMintNft => "collection/MsgMintNFT",
    ItemTokenBurnNft => "collection/MsgBurnNFT",
    ItemTokenBurnNftFrom => "collection/MsgBurnNFTFrom",
    ItemTokenTransferNft => "collection/MsgTransferNFT",
    ItemTokenTransferNftFrom => "collection/MsgTransferNFTFrom",
    ItemTokenAttach => "collection/MsgAttach",
    ItemTokenAttachFrom => "collection/MsgAttachFrom",
    ItemTokenDetach => "collection/MsgDetach",
    ItemTokenDetachFrom => "collection/MsgDetachFrom",
    ItemTokenApprove => "collection/MsgApprove",
    ItemTokenDisapprove => "collection/MsgDisapprove",

    // Base coin and account
    BaseCoinTransfer => "cosmos-sdk/MsgSend",
    AccountEmpty => "account/MsgEmpty",
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for MessageType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MessageType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_strings_round_trip() {
        for message_type in MessageType::ALL {
            let parsed: MessageType = message_type.as_str().parse().unwrap();
            assert_eq!(&parsed, message_type);
        }
    }

    #[test]
    fn test_wire_strings_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for message_type in MessageType::ALL {
            assert!(seen.insert(message_type.as_str()), "{message_type} repeated");
        }
    }

    #[test]
    fn test_unknown_string() {
        let err = "token/MsgSwap".parse::<MessageType>().unwrap_err();
        assert_eq!(err, UnknownMessageType("token/MsgSwap".to_string()));
        assert_eq!(err.to_string(), "Unknown message type: token/MsgSwap");
    }

    #[test]
    fn test_serde_uses_wire_string() {
        let json = serde_json::to_string(&MessageType::ItemTokenMintFt).unwrap();
        assert_eq!(json, "\"collection/MsgMintFT\"");

        let back: MessageType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, MessageType::ItemTokenMintFt);

        assert!(serde_json::from_str::<MessageType>("\"nope\"").is_err());
    }
}
