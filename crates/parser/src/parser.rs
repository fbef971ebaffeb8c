// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Message parsers.
//!
//! Each supported [`MessageType`] maps to one extraction recipe that pulls the
//! fields of its message out of a transaction result. A recipe either resolves
//! every field or fails with the first [`ExtractError`]; no message is built
//! from partial data.
//!
//! [`MessageParser::for_type`] is the factory: it returns `None` for message
//! types that have no recipe. [`TxResultParser`] sits on top of it, detects the
//! type from the transaction and applies the configured policy for results it
//! cannot parse.

use thiserror::Error;
use tx_message_parser_config::ParserConfig;

use crate::extractor::{self, ExtractError};
use crate::token;
use crate::types::{
    FungibleTokenIssueMessage, FungibleTokenMintMessage, GenericResponse, IssuedFungibleToken,
    ItemTokenModifyMessage, MessageType, NonFungibleToken, NonFungibleTokenAttachFromMessage,
    NonFungibleTokenAttachMessage, NonFungibleTokenDetachFromMessage,
    NonFungibleTokenDetachMessage, ServiceTokenBurnMessage, ServiceTokenMintMessage,
    ServiceTokenModifyMessage, ServiceTokenTransferFromMessage, ServiceTokenTransferMessage,
    TxResultMessage, TxResultResponse,
};

type Recipe = fn(&TxResultResponse) -> Result<TxResultMessage, ExtractError>;

/// Parser for one message type.
#[derive(Clone, Copy)]
pub struct MessageParser {
    message_type: MessageType,
    recipe: Recipe,
}

impl MessageParser {
    /// Message types that have a parser.
    pub const SUPPORTED: &'static [MessageType] = &[
        MessageType::ServiceTokenModify,
        MessageType::ServiceTokenMint,
        MessageType::ServiceTokenBurn,
        MessageType::ServiceTokenTransfer,
        MessageType::ServiceTokenTransferFrom,
        MessageType::ItemTokenModify,
        MessageType::ItemTokenAttach,
        MessageType::ItemTokenAttachFrom,
        MessageType::ItemTokenDetach,
        MessageType::ItemTokenDetachFrom,
        MessageType::ItemTokenIssueFt,
        MessageType::ItemTokenMintFt,
    ];

    /// Returns the parser for `message_type`, or `None` when the type has none.
    pub fn for_type(message_type: MessageType) -> Option<Self> {
        let recipe: Recipe = match message_type {
            MessageType::ServiceTokenModify => service_token_modify,
            MessageType::ServiceTokenMint => service_token_mint,
            MessageType::ServiceTokenBurn => service_token_burn,
            MessageType::ServiceTokenTransfer => service_token_transfer,
            MessageType::ServiceTokenTransferFrom => service_token_transfer_from,
            MessageType::ItemTokenModify => item_token_modify,
            MessageType::ItemTokenAttach => item_token_attach,
            MessageType::ItemTokenAttachFrom => item_token_attach_from,
            MessageType::ItemTokenDetach => item_token_detach,
            MessageType::ItemTokenDetachFrom => item_token_detach_from,
            MessageType::ItemTokenIssueFt => item_token_issue_ft,
            MessageType::ItemTokenMintFt => item_token_mint_ft,

            // No parser yet; callers receive `None`.
            MessageType::ServiceTokenIssue
            | MessageType::ServiceTokenBurnFrom
            | MessageType::ServiceTokenGrantPermission
            | MessageType::ServiceTokenRevokePermission
            | MessageType::ServiceTokenApprove
            | MessageType::ItemTokenCreate
            | MessageType::ItemTokenBurnFt
            | MessageType::ItemTokenBurnFtFrom
            | MessageType::ItemTokenTransferFt
            | MessageType::ItemTokenTransferFtFrom
            | MessageType::ItemTokenIssueNft
            | MessageType::ItemTokenMintNft
            | MessageType::ItemTokenBurnNft
            | MessageType::ItemTokenBurnNftFrom
            | MessageType::ItemTokenTransferNft
            | MessageType::ItemTokenTransferNftFrom
            | MessageType::ItemTokenApprove
            | MessageType::ItemTokenDisapprove
            | MessageType::BaseCoinTransfer
            | MessageType::AccountEmpty => {
                tracing::debug!(%message_type, "no parser for message type");
                return None;
            }
        };

        Some(Self {
            message_type,
            recipe,
        })
    }

    /// Like [`MessageParser::for_type`] for a wire type string; unknown strings yield `None`.
    pub fn for_type_str(message_type: &str) -> Option<Self> {
        message_type.parse().ok().and_then(Self::for_type)
    }

    pub fn message_type(&self) -> MessageType {
        self.message_type
    }

    pub fn parse(&self, result: &TxResultResponse) -> Result<TxResultMessage, ExtractError> {
        tracing::trace!(
            message_type = %self.message_type,
            txhash = %result.txhash,
            "parsing transaction result"
        );
        (self.recipe)(result)
    }

    /// Parses the result carried in a node API envelope.
    pub fn parse_generic_tx_result_response(
        &self,
        response: &GenericResponse<TxResultResponse>,
    ) -> Result<TxResultMessage, ExtractError> {
        self.parse(&response.response_data)
    }
}

impl PartialEq for MessageParser {
    fn eq(&self, other: &Self) -> bool {
        self.message_type == other.message_type
    }
}

impl Eq for MessageParser {}

impl std::fmt::Debug for MessageParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageParser")
            .field("message_type", &self.message_type)
            .finish()
    }
}

// ================================================================================================
// Recipes
// ================================================================================================

fn service_token_modify(result: &TxResultResponse) -> Result<TxResultMessage, ExtractError> {
    Ok(TxResultMessage::ServiceTokenModify(
        ServiceTokenModifyMessage {
            height: result.height,
            txhash: result.txhash.clone(),
            sender: extractor::find_sender_from_log_events(result)?,
            owner: extractor::find_owner_wallet_address(result)?,
            contract_id: extractor::find_contract_id(result)?,
            changes: extractor::find_changes(result)?,
        },
    ))
}

fn service_token_mint(result: &TxResultResponse) -> Result<TxResultMessage, ExtractError> {
    Ok(TxResultMessage::ServiceTokenMint(ServiceTokenMintMessage {
        height: result.height,
        txhash: result.txhash.clone(),
        from: extractor::find_from_wallet_address(result)?,
        owner: extractor::find_owner_wallet_address(result)?,
        to: extractor::find_to_wallet_address(result)?,
        contract_id: extractor::find_contract_id(result)?,
        amount: extractor::find_amount(result)?,
    }))
}

fn service_token_burn(result: &TxResultResponse) -> Result<TxResultMessage, ExtractError> {
    Ok(TxResultMessage::ServiceTokenBurn(ServiceTokenBurnMessage {
        height: result.height,
        txhash: result.txhash.clone(),
        from: extractor::find_from_wallet_address(result)?,
        owner: extractor::find_owner_wallet_address(result)?,
        contract_id: extractor::find_contract_id(result)?,
        amount: extractor::find_amount(result)?,
    }))
}

fn service_token_transfer(result: &TxResultResponse) -> Result<TxResultMessage, ExtractError> {
    Ok(TxResultMessage::ServiceTokenTransfer(
        ServiceTokenTransferMessage {
            height: result.height,
            txhash: result.txhash.clone(),
            from: extractor::find_from_wallet_address(result)?,
            owner: extractor::find_owner_wallet_address(result)?,
            contract_id: extractor::find_contract_id(result)?,
            to: extractor::find_to_wallet_address(result)?,
            amount: extractor::find_amount(result)?,
        },
    ))
}

fn service_token_transfer_from(
    result: &TxResultResponse,
) -> Result<TxResultMessage, ExtractError> {
    Ok(TxResultMessage::ServiceTokenTransferFrom(
        ServiceTokenTransferFromMessage {
            height: result.height,
            txhash: result.txhash.clone(),
            from: extractor::find_from_wallet_address(result)?,
            proxy: extractor::find_proxy_wallet_address(result)?,
            owner: extractor::find_owner_wallet_address(result)?,
            contract_id: extractor::find_contract_id(result)?,
            to: extractor::find_to_wallet_address(result)?,
            amount: extractor::find_amount(result)?,
        },
    ))
}

fn item_token_modify(result: &TxResultResponse) -> Result<TxResultMessage, ExtractError> {
    let token_type = extractor::find_token_type(result)?;
    let is_fungible = token::is_fungible(&token_type);

    Ok(TxResultMessage::ItemTokenModify(ItemTokenModifyMessage {
        height: result.height,
        txhash: result.txhash.clone(),
        from: extractor::find_from_wallet_address(result)?,
        sender: extractor::find_sender_from_log_events(result)?,
        owner: extractor::find_owner_wallet_address(result)?,
        contract_id: extractor::find_contract_id(result)?,
        token_type,
        token_index: extractor::find_token_index(result)?,
        token_id: extractor::find_token_id(result)?,
        changes: extractor::find_changes(result)?,
        is_fungible,
    }))
}

/// Parent and child tokens of an attach/detach. Both share the contract and
/// the parent's token type; `parent_token_id` names the parent and the
/// request's token id names the child.
fn token_pair(
    result: &TxResultResponse,
    parent_token_id: &str,
) -> Result<(NonFungibleToken, NonFungibleToken), ExtractError> {
    let contract_id = extractor::find_contract_id(result)?;
    let (token_type, parent_token_index) = token::split_token_id(parent_token_id)?;
    let token_id = extractor::find_token_id(result)?;
    let token_index = token::token_index_from(&token_id)?;

    Ok((
        NonFungibleToken::new(&contract_id, token_type, parent_token_index),
        NonFungibleToken::new(contract_id, token_type, token_index),
    ))
}

fn item_token_attach(result: &TxResultResponse) -> Result<TxResultMessage, ExtractError> {
    let parent_token_id = extractor::find_parent_token_id(result)?;
    let (parent_token, child_token) = token_pair(result, &parent_token_id)?;

    Ok(TxResultMessage::ItemTokenAttach(
        NonFungibleTokenAttachMessage {
            height: result.height,
            txhash: result.txhash.clone(),
            from: extractor::find_from_wallet_address(result)?,
            sender: extractor::find_sender_from_log_events(result)?,
            parent_token,
            child_token,
        },
    ))
}

fn item_token_attach_from(result: &TxResultResponse) -> Result<TxResultMessage, ExtractError> {
    let parent_token_id = extractor::find_parent_token_id(result)?;
    let (parent_token, child_token) = token_pair(result, &parent_token_id)?;

    Ok(TxResultMessage::ItemTokenAttachFrom(
        NonFungibleTokenAttachFromMessage {
            height: result.height,
            txhash: result.txhash.clone(),
            from: extractor::find_from_wallet_address(result)?,
            proxy: extractor::find_proxy_wallet_address(result)?,
            sender: extractor::find_sender_from_log_events(result)?,
            parent_token,
            child_token,
        },
    ))
}

fn item_token_detach(result: &TxResultResponse) -> Result<TxResultMessage, ExtractError> {
    let parent_token_id = extractor::find_parent_token_id_from_detach(result)?;
    let (parent_token, child_token) = token_pair(result, &parent_token_id)?;

    Ok(TxResultMessage::ItemTokenDetach(
        NonFungibleTokenDetachMessage {
            height: result.height,
            txhash: result.txhash.clone(),
            from: extractor::find_from_wallet_address(result)?,
            sender: extractor::find_sender_from_log_events(result)?,
            parent_token,
            child_token,
        },
    ))
}

fn item_token_detach_from(result: &TxResultResponse) -> Result<TxResultMessage, ExtractError> {
    let parent_token_id = extractor::find_parent_token_id_from_detach(result)?;
    let (parent_token, child_token) = token_pair(result, &parent_token_id)?;

    Ok(TxResultMessage::ItemTokenDetachFrom(
        NonFungibleTokenDetachFromMessage {
            height: result.height,
            txhash: result.txhash.clone(),
            from: extractor::find_from_wallet_address(result)?,
            sender: extractor::find_sender_from_log_events(result)?,
            proxy: extractor::find_proxy_wallet_address(result)?,
            parent_token,
            child_token,
        },
    ))
}

fn item_token_issue_ft(result: &TxResultResponse) -> Result<TxResultMessage, ExtractError> {
    // The node assigns the token id; the request only names the contract.
    let token_id = extractor::find_token_id_from_events(result)?;
    let token_type = token::token_type_from(&token_id)?.to_string();

    Ok(TxResultMessage::ItemTokenIssueFt(FungibleTokenIssueMessage {
        height: result.height,
        txhash: result.txhash.clone(),
        sender: extractor::find_sender_from_log_events(result)?,
        owner: extractor::find_owner_wallet_address(result)?,
        to: extractor::find_to_wallet_address(result)?,
        token: IssuedFungibleToken {
            contract_id: extractor::find_contract_id(result)?,
            token_type,
            name: extractor::find_token_name(result)?,
            meta: extractor::find_token_meta(result)?,
            decimals: extractor::find_token_decimals(result)?,
        },
        amount: extractor::find_amount(result)?,
    }))
}

fn item_token_mint_ft(result: &TxResultResponse) -> Result<TxResultMessage, ExtractError> {
    // Each minted token carries its own type; the event id only has to be valid.
    let token_id = extractor::find_token_id_from_events(result)?;
    token::token_type_from(&token_id)?;

    Ok(TxResultMessage::ItemTokenMintFt(FungibleTokenMintMessage {
        height: result.height,
        txhash: result.txhash.clone(),
        from: extractor::find_from_wallet_address(result)?,
        sender: extractor::find_sender_from_log_events(result)?,
        to: extractor::find_to_wallet_address(result)?,
        minted_tokens: extractor::find_minted_fungible_tokens(result)?,
    }))
}

// ================================================================================================
// Configured front end
// ================================================================================================

#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error("No parser for message type '{0}'")]
    UnsupportedMessageType(String),

    #[error("Transaction failed with code {code} in codespace '{codespace}'")]
    FailedTransaction { code: i64, codespace: String },

    #[error("Failed to decode transaction result: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parses transaction results, detecting the message type from the
/// transaction's first message.
///
/// Results without a parser yield `Ok(None)`, or
/// [`ParseError::UnsupportedMessageType`] with `strict_message_types`.
#[derive(Debug, Clone, Default)]
pub struct TxResultParser {
    config: ParserConfig,
}

impl TxResultParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn parse(&self, result: &TxResultResponse) -> Result<Option<TxResultMessage>, ParseError> {
        let raw_type = result.first_message_type().unwrap_or_default();
        match raw_type.parse::<MessageType>() {
            Ok(message_type) => self.parse_as(message_type, result),
            Err(_) => self.unsupported(raw_type),
        }
    }

    pub fn parse_as(
        &self,
        message_type: MessageType,
        result: &TxResultResponse,
    ) -> Result<Option<TxResultMessage>, ParseError> {
        let Some(parser) = MessageParser::for_type(message_type) else {
            return self.unsupported(message_type.as_str());
        };
        self.check_success(result)?;
        Ok(Some(parser.parse(result)?))
    }

    pub fn parse_generic(
        &self,
        response: &GenericResponse<TxResultResponse>,
    ) -> Result<Option<TxResultMessage>, ParseError> {
        self.parse(&response.response_data)
    }

    /// Decodes a bare transaction result from JSON and parses it.
    pub fn parse_json(&self, json: &str) -> Result<Option<TxResultMessage>, ParseError> {
        let result: TxResultResponse = serde_json::from_str(json)?;
        self.parse(&result)
    }

    /// Decodes an enveloped transaction result from JSON and parses it.
    pub fn parse_generic_json(&self, json: &str) -> Result<Option<TxResultMessage>, ParseError> {
        let response: GenericResponse<TxResultResponse> = serde_json::from_str(json)?;
        self.parse_generic(&response)
    }

    fn check_success(&self, result: &TxResultResponse) -> Result<(), ParseError> {
        if self.config.require_success && !result.is_success() {
            return Err(ParseError::FailedTransaction {
                code: result.code.unwrap_or_default(),
                codespace: result.codespace.clone().unwrap_or_default(),
            });
        }
        Ok(())
    }

    fn unsupported(&self, message_type: &str) -> Result<Option<TxResultMessage>, ParseError> {
        if self.config.strict_message_types {
            return Err(ParseError::UnsupportedMessageType(message_type.to_string()));
        }
        tracing::debug!(message_type, "skipping transaction result without parser");
        Ok(None)
    }
}
