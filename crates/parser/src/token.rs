// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Token id helpers.
//!
//! An item token id is the token type followed by the token index, each a
//! fixed-width string:
//!
//! ```text
//! 10000001 0000000a
//! └ type ┘ └index ┘
//! ```

use crate::consts::{FUNGIBLE_TOKEN_TYPE_PREFIX, TOKEN_ID_LEN, TOKEN_TYPE_LEN};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenIdError {
    #[error("Token id '{token_id}' does not start with a {}-character type and index", TOKEN_ID_LEN)]
    InvalidLength { token_id: String },
}

/// Splits a token id into `(token_type, token_index)`.
pub fn split_token_id(token_id: &str) -> Result<(&str, &str), TokenIdError> {
    let invalid = || TokenIdError::InvalidLength {
        token_id: token_id.to_string(),
    };

    if token_id.len() < TOKEN_ID_LEN || !token_id.is_char_boundary(TOKEN_TYPE_LEN) {
        return Err(invalid());
    }
    let index_end = TOKEN_ID_LEN;
    if !token_id.is_char_boundary(index_end) {
        return Err(invalid());
    }

    Ok((&token_id[..TOKEN_TYPE_LEN], &token_id[TOKEN_TYPE_LEN..index_end]))
}

pub fn token_type_from(token_id: &str) -> Result<&str, TokenIdError> {
    split_token_id(token_id).map(|(token_type, _)| token_type)
}

pub fn token_index_from(token_id: &str) -> Result<&str, TokenIdError> {
    split_token_id(token_id).map(|(_, token_index)| token_index)
}

pub fn compose_token_id(token_type: &str, token_index: &str) -> String {
    format!("{token_type}{token_index}")
}

pub fn is_fungible(token_type: &str) -> bool {
    token_type.starts_with(FUNGIBLE_TOKEN_TYPE_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_token_id() {
        assert_eq!(
            split_token_id("1000000100000001").unwrap(),
            ("10000001", "00000001")
        );
        assert_eq!(token_type_from("0000000100000000").unwrap(), "00000001");
        assert_eq!(token_index_from("100000010000000a").unwrap(), "0000000a");
    }

    #[test]
    fn test_compose_then_split_returns_parts() {
        for (token_type, token_index) in [
            ("10000001", "00000001"),
            ("0000000f", "00000000"),
            ("1000ffff", "7fffffff"),
        ] {
            let token_id = compose_token_id(token_type, token_index);
            assert_eq!(split_token_id(&token_id).unwrap(), (token_type, token_index));
        }
    }

    #[test]
    fn test_split_ignores_trailing_characters() {
        assert_eq!(
            split_token_id("1000000100000001ff").unwrap(),
            ("10000001", "00000001")
        );
    }

    #[test]
    fn test_split_short_id_fails() {
        let err = split_token_id("10000001").unwrap_err();
        assert_eq!(
            err,
            TokenIdError::InvalidLength {
                token_id: "10000001".to_string()
            }
        );
        assert!(token_type_from("").is_err());
    }

    #[test]
    fn test_split_rejects_multibyte_boundary() {
        assert!(split_token_id("1000000é00000001").is_err());
    }

    #[test]
    fn test_is_fungible() {
        assert!(is_fungible("00000001"));
        assert!(!is_fungible("10000001"));
        assert!(!is_fungible(""));
    }
}
