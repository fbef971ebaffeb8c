// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

/// Number of characters of a token id that encode the token type.
pub const TOKEN_TYPE_LEN: usize = 8;

/// Number of characters of a token id that encode the token index.
pub const TOKEN_INDEX_LEN: usize = 8;

/// Full length of a composed token id.
pub const TOKEN_ID_LEN: usize = TOKEN_TYPE_LEN + TOKEN_INDEX_LEN;

/// Token types of fungible item tokens start with this character; non-fungible ones with `1`.
pub const FUNGIBLE_TOKEN_TYPE_PREFIX: char = '0';

/// Event type carrying the transaction `sender` attribute.
pub const MESSAGE_EVENT_TYPE: &str = "message";

/// Event types emitted by detach messages; they carry `from_token_id`.
pub const DETACH_EVENT_TYPES: &[&str] = &["detach", "detach_from"];
