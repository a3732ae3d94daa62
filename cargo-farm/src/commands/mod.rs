// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::error::CargoFarmResult;

mod deploy;
mod tags;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Run the deploy scripts selected by tag
    #[clap(visible_alias = "d")]
    Deploy(deploy::Args),
    /// List deploy scripts and their tags
    Tags(tags::Args),
}

pub async fn exec(cmd: Command) -> CargoFarmResult {
    match cmd {
        Command::Deploy(args) => deploy::exec(args).await,
        Command::Tags(args) => tags::exec(args),
    }
}
