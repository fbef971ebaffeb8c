// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod numeric;

pub use numeric::{extract_u128, extract_u32, value_to_string};
