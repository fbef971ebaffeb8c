// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod message_type;
pub mod messages;
pub mod response;

pub use message_type::{MessageType, UnknownMessageType};
pub use messages::*;
pub use response::{
    EventAttribute, GenericResponse, Tx, TxEvent, TxLog, TxMessage, TxResultResponse, TxValue,
};
