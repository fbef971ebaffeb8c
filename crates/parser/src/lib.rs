// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed messages from blockchain transaction results.
//!
//! ```
//! use tx_message_parser::{MessageParser, MessageType, TxResultResponse};
//!
//! let result: TxResultResponse = serde_json::from_str(r#"{
//!     "height": 100,
//!     "txhash": "H1",
//!     "tx": { "value": { "msg": [{
//!         "type": "token/MsgBurn",
//!         "value": { "from": "tlink1a", "owner": "tlink1b", "contractId": "9636a07e", "amount": "5" }
//!     }] } }
//! }"#)?;
//!
//! let parser = MessageParser::for_type(MessageType::ServiceTokenBurn).expect("burn has a parser");
//! let message = parser.parse(&result)?;
//! assert_eq!(message.height(), 100);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod consts;
pub mod extractor;
pub mod logging;
pub mod parser;
pub mod token;
pub mod types;
pub mod utils;

#[cfg(test)]
pub mod test_fixtures;

pub use extractor::ExtractError;
pub use parser::{MessageParser, ParseError, TxResultParser};
pub use token::TokenIdError;
pub use tx_message_parser_config::ParserConfig;
pub use types::{GenericResponse, MessageType, TxResultMessage, TxResultResponse};
