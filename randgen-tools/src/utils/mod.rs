// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! General purpose utilities.

use alloy::primitives::{utils::format_ether, U256};
use color::Color;

pub mod color;
pub mod testing;

/// Pretty-prints an amount of gas.
pub fn format_gas(gas: u64) -> String {
    let text = format!("{gas} gas");
    if gas <= 3_000_000 {
        text.mint()
    } else if gas <= 7_000_000 {
        text.yellow()
    } else {
        text.pink()
    }
}

/// Pretty-prints the cost of `gas` units at `gas_price` wei each.
pub fn format_gas_cost(gas: u64, gas_price: u128) -> String {
    let cost = U256::from(gas) * U256::from(gas_price);
    format!("{} ETH", format_ether(cost))
}
