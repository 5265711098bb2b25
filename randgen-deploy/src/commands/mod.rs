// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use crate::error::RandgenDeployResult;

mod deploy;
mod params;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Deploy the RandomGenerator contract
    #[clap(visible_alias = "d")]
    Deploy(deploy::Args),
    /// Print the constructor parameters resolved from the environment
    #[clap(visible_alias = "p")]
    Params(params::Args),
}

pub async fn exec(cmd: Command, env_file: Option<PathBuf>) -> RandgenDeployResult {
    match cmd {
        Command::Deploy(args) => deploy::exec(args, env_file).await,
        Command::Params(args) => params::exec(args, env_file),
    }
}
