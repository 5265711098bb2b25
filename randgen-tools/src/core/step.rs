// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! The `RandomGenerator` deployment step.

use crate::core::{
    artifact::ArtifactRef,
    config::DeploymentParameters,
    deployment::DeployerHandle,
};

/// Deploys `RandomGenerator` with `(seed, owner)` as constructor arguments.
///
/// The step performs exactly one deploy call per [`run`](Self::run) and keeps no state between
/// runs. It does not validate the parameters; the deployer's result, success or error, is
/// returned unchanged.
#[derive(Clone, Debug)]
pub struct DeploymentStep {
    artifact: ArtifactRef,
    params: DeploymentParameters,
}

impl DeploymentStep {
    pub fn new(params: DeploymentParameters) -> Self {
        Self {
            artifact: ArtifactRef::random_generator(),
            params,
        }
    }

    pub fn artifact(&self) -> &ArtifactRef {
        &self.artifact
    }

    pub async fn run<D: DeployerHandle>(&self, deployer: &mut D) -> Result<D::Output, D::Error> {
        deployer
            .deploy(&self.artifact, self.params.constructor_args())
            .await
    }
}
