// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Deployment parameter resolution.

use std::path::Path;

use crate::{
    core::config::{load_env_file, DeploymentParameters},
    Result,
};

/// Loads the env file, then reads the deployment parameters from the environment.
pub fn resolve_parameters(env_file: Option<&Path>) -> Result<DeploymentParameters> {
    match load_env_file(env_file)? {
        Some(path) => debug!(@grey, "loaded env file {}", path.display()),
        None => debug!(@grey, "no env file found"),
    }
    Ok(DeploymentParameters::from_env())
}
