// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use farm_tools::scripts::ScriptRegistry;

use crate::{error::CargoFarmResult, utils::TAG};

#[derive(Debug, clap::Args)]
pub struct Args {}

pub fn exec(_args: Args) -> CargoFarmResult {
    let registry = ScriptRegistry::builtin();
    for script in registry.scripts() {
        let tags = script
            .tags()
            .iter()
            .map(|tag| format!("{TAG}{tag}{TAG:#}"))
            .collect::<Vec<_>>()
            .join(", ");
        println!("{}: {}", script.name(), tags);
    }
    Ok(())
}
