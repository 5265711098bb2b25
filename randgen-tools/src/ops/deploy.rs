// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Contract deployment.

use alloy::providers::{Provider, WalletProvider};

use crate::{
    core::{
        artifact::ArtifactRegistry,
        config::DeploymentParameters,
        deployment::{DeploymentConfig, DeploymentOutcome, ProviderDeployer},
        step::DeploymentStep,
    },
    Result,
};

/// Deploys `RandomGenerator` with `params` through `provider`.
///
/// Missing parameters are reported but still forwarded, so the deployment fails when they are
/// bound to the constructor.
pub async fn deploy(
    params: DeploymentParameters,
    registry: ArtifactRegistry,
    config: DeploymentConfig,
    provider: &(impl Provider + WalletProvider),
) -> Result<DeploymentOutcome> {
    for name in params.missing() {
        warn!(@yellow, "{name} is not set");
    }

    let step = DeploymentStep::new(params);
    info!(@grey, "deploying {} from {}", step.artifact(), registry.build_dir().display());

    let mut deployer = ProviderDeployer::new(provider, registry, config);
    Ok(step.run(&mut deployer).await?)
}
