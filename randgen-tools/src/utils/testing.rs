// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Test doubles for code that drives a [`DeployerHandle`].

use crate::core::{artifact::ArtifactRef, deployment::DeployerHandle};

/// Arguments of one [`DeployerHandle::deploy`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeployCall {
    pub artifact: ArtifactRef,
    pub args: Vec<Option<String>>,
}

/// Deployer that records every call instead of touching a chain.
#[derive(Debug, Default)]
pub struct RecordingDeployer {
    calls: Vec<DeployCall>,
    failure: Option<String>,
}

impl RecordingDeployer {
    /// A deployer whose every call fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            calls: Vec::new(),
            failure: Some(message.into()),
        }
    }

    pub fn calls(&self) -> &[DeployCall] {
        &self.calls
    }
}

impl DeployerHandle for RecordingDeployer {
    type Output = usize;
    type Error = String;

    /// Returns the number of calls made so far, including this one.
    async fn deploy(
        &mut self,
        artifact: &ArtifactRef,
        args: Vec<Option<String>>,
    ) -> Result<usize, String> {
        self.calls.push(DeployCall {
            artifact: artifact.clone(),
            args,
        });
        match &self.failure {
            Some(message) => Err(message.clone()),
            None => Ok(self.calls.len()),
        }
    }
}
