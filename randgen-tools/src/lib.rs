// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Tools for deploying the `RandomGenerator` contract.
//!
//! The [`DeploymentStep`](core::step::DeploymentStep) reads its constructor arguments from an
//! explicit [`DeploymentParameters`](core::config::DeploymentParameters) object and hands them to
//! an injected [`DeployerHandle`](core::deployment::DeployerHandle). The
//! [`ProviderDeployer`](core::deployment::ProviderDeployer) is the JSON-RPC backed handle used by
//! the `randgen-deploy` CLI.

#[macro_use]
mod macros;

pub mod core;
pub(crate) mod error;
pub mod ops;
pub mod utils;

pub use error::{Error, Result};
