// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! General purpose utilities.

use color::{Color, GREY, MINT, RESET, YELLOW};

pub mod color;

#[cfg(test)]
pub(crate) mod testing;

/// Pretty-prints a gas amount, colored by how expensive the deployment was.
pub fn format_gas(gas: u64) -> String {
    let text = format!("{gas} gas");
    if gas <= 3_000_000 {
        text.mint()
    } else if gas <= 7_000_000 {
        text.yellow()
    } else {
        text.red()
    }
}

/// Pretty-prints a list of tags.
pub fn format_tags(tags: &[&str]) -> String {
    if tags.is_empty() {
        return format!("{GREY}(untagged){RESET}");
    }
    tags.iter()
        .map(|tag| format!("{MINT}{tag}{GREY}"))
        .collect::<Vec<_>>()
        .join(&format!("{YELLOW},{GREY} "))
}
