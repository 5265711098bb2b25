// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Contract deployment.
//!
//! [`DeployerHandle`] is the capability a deployment step is given to create a contract from a
//! named artifact. [`ProviderDeployer`] implements it on top of a JSON-RPC provider with a
//! signing wallet.

use alloy::{
    primitives::{Address, TxHash, U256},
    providers::{Provider, WalletProvider},
    rpc::types::TransactionReceipt,
};

use crate::{
    core::artifact::{ArtifactError, ArtifactRef, ArtifactRegistry},
    utils::{
        color::{Color, DebugColor},
        format_gas, format_gas_cost,
    },
};
use request::DeploymentRequest;

pub mod constructor;
pub mod request;

/// Deploys artifacts with constructor arguments.
///
/// Arguments are passed through unvalidated; `None` marks a value that was never provided.
/// Binding them to the artifact's constructor is up to the implementation.
pub trait DeployerHandle {
    type Output;
    type Error;

    #[allow(async_fn_in_trait)]
    async fn deploy(
        &mut self,
        artifact: &ArtifactRef,
        args: Vec<Option<String>>,
    ) -> Result<Self::Output, Self::Error>;
}

#[derive(Debug, Default)]
pub struct DeploymentConfig {
    pub max_fee_per_gas_wei: Option<u128>,
    pub estimate_gas: bool,
    /// Wei sent to the constructor.
    pub value: U256,
}

/// A contract that made it on chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deployment {
    pub contract_name: String,
    pub address: Address,
    pub tx_hash: TxHash,
    pub gas_used: u64,
}

impl Deployment {
    /// Reads the result of a contract creation out of its receipt.
    pub fn from_receipt(
        contract_name: impl Into<String>,
        receipt: &TransactionReceipt,
    ) -> Result<Self, DeploymentError> {
        let tx_hash = receipt.transaction_hash;
        if !receipt.status() {
            return Err(DeploymentError::Reverted { tx_hash });
        }
        let address = receipt
            .contract_address
            .ok_or(DeploymentError::NoContractAddress("in receipt".to_string()))?;
        Ok(Self {
            contract_name: contract_name.into(),
            address,
            tx_hash,
            gas_used: receipt.gas_used,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeploymentOutcome {
    /// Only gas estimation was requested.
    Estimated { gas: u64, gas_price: u128 },
    Deployed(Deployment),
}

#[derive(Debug, thiserror::Error)]
pub enum DeploymentError {
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),
    #[error("{0}")]
    Artifact(#[from] ArtifactError),
    #[error("abi encoding error: {0}")]
    Encode(#[from] alloy::dyn_abi::Error),

    #[error("tx failed to complete")]
    FailedToComplete,
    #[error("deploy tx reverted {}", .tx_hash.debug_red())]
    Reverted { tx_hash: TxHash },
    #[error("missing address: {0}")]
    NoContractAddress(String),
    #[error("no value given for constructor argument {} ({ty})", .name.red())]
    MissingConstructorArg { name: String, ty: String },
    #[error("could not parse constructor argument {name} ({ty}) from {arg:?}: {reason}")]
    InvalidConstructorArg {
        name: String,
        ty: String,
        arg: String,
        reason: String,
    },
    #[error("invalid constructor: {0}")]
    InvalidConstructor(String),
}

/// [`DeployerHandle`] that sends contract creation transactions through `provider`.
pub struct ProviderDeployer<'a, P> {
    provider: &'a P,
    registry: ArtifactRegistry,
    config: DeploymentConfig,
}

impl<'a, P> ProviderDeployer<'a, P>
where
    P: Provider + WalletProvider,
{
    pub fn new(provider: &'a P, registry: ArtifactRegistry, config: DeploymentConfig) -> Self {
        Self {
            provider,
            registry,
            config,
        }
    }
}

impl<P> DeployerHandle for ProviderDeployer<'_, P>
where
    P: Provider + WalletProvider,
{
    type Output = DeploymentOutcome;
    type Error = DeploymentError;

    async fn deploy(
        &mut self,
        artifact: &ArtifactRef,
        args: Vec<Option<String>>,
    ) -> Result<DeploymentOutcome, DeploymentError> {
        let artifact = self.registry.require(artifact)?;
        let init_code = constructor::init_code(&artifact, &args, self.config.value)?;

        let from_address = self.provider.default_signer_address();
        debug!(@grey, "sender address: {}", from_address.debug_lavender());

        let req = DeploymentRequest::new(
            from_address,
            init_code,
            self.config.value,
            self.config.max_fee_per_gas_wei,
        );

        if self.config.estimate_gas {
            let gas = req.estimate_gas(self.provider).await?;
            let gas_price = req.fee_per_gas(self.provider).await?;
            info!(@grey, "estimated deployment gas: {}", format_gas(gas));
            info!(@grey, "estimated deployment cost: {}", format_gas_cost(gas, gas_price).mint());
            return Ok(DeploymentOutcome::Estimated { gas, gas_price });
        }

        let receipt = req.exec(self.provider).await?;
        let deployment = Deployment::from_receipt(artifact.contract_name, &receipt)?;

        info!(@grey, "deployed {} at address: {}", deployment.contract_name, deployment.address.debug_lavender());
        debug!(@grey, "gas used: {}", format_gas(deployment.gas_used));
        info!(@grey, "deployment tx hash: {}", deployment.tx_hash.debug_lavender());

        Ok(DeploymentOutcome::Deployed(deployment))
    }
}
