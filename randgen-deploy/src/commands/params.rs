// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use randgen_tools::ops;

use crate::error::RandgenDeployResult;

#[derive(Debug, clap::Args)]
pub struct Args {}

pub fn exec(_args: Args, env_file: Option<PathBuf>) -> RandgenDeployResult {
    let params = ops::resolve_parameters(env_file.as_deref())?;
    println!("{params}");
    Ok(())
}
