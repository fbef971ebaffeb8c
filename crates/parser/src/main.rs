// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use anyhow::Context;
use std::io::Read;
use tx_message_parser::{GenericResponse, MessageType, TxResultParser, TxResultResponse, logging};
use tx_message_parser_config::{Args, TxMessageConfig};

fn main() -> anyhow::Result<()> {
    let args = Args::parse_args();
    let config = TxMessageConfig::from_env_file(&args.env_file)?;
    logging::init_with_config((&config.log).into())?;

    tracing::debug!("Log level: {}", config.log.level);
    tracing::debug!(
        "Strict message types: {}",
        config.parser.strict_message_types
    );

    let input = read_input(&args)?;
    let parser = TxResultParser::new(config.parser);

    let message = match &args.message_type {
        Some(message_type) => {
            let message_type: MessageType = message_type.parse()?;
            let result = decode_result(&input, args.envelope)?;
            parser.parse_as(message_type, &result)?
        }
        None if args.envelope => parser.parse_generic_json(&input)?,
        None => parser.parse_json(&input)?,
    };

    match message {
        Some(message) => {
            tracing::info!(
                message_type = %message.message_type(),
                txhash = message.txhash(),
                "parsed transaction result"
            );
            println!("{}", serde_json::to_string_pretty(&message)?);
        }
        None => tracing::warn!("Transaction result has no supported message type"),
    }

    Ok(())
}

fn read_input(args: &Args) -> anyhow::Result<String> {
    match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            Ok(input)
        }
    }
}

fn decode_result(input: &str, envelope: bool) -> anyhow::Result<TxResultResponse> {
    let result = if envelope {
        serde_json::from_str::<GenericResponse<TxResultResponse>>(input)
            .map(|response| response.response_data)
    } else {
        serde_json::from_str::<TxResultResponse>(input)
    };
    result.context("Failed to decode transaction result")
}
