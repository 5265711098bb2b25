// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use randgen_tools::{core::deployment::DeploymentOutcome, ops, utils::format_gas_cost};

use crate::{
    common_args::{ArtifactArgs, AuthArgs, DeployArgs, ProviderArgs},
    error::RandgenDeployResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    deploy: DeployArgs,
    #[command(flatten)]
    artifacts: ArtifactArgs,
    /// Wallet source to use.
    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args, env_file: Option<PathBuf>) -> RandgenDeployResult {
    let params = ops::resolve_parameters(env_file.as_deref())?;
    let config = args.deploy.config(&args.auth)?;
    let provider = args.provider.build_provider_with_wallet(&args.auth).await?;

    match ops::deploy(params, args.artifacts.registry(), config, &provider).await? {
        DeploymentOutcome::Estimated { gas, gas_price } => {
            println!("estimated gas: {gas}");
            println!("estimated cost: {}", format_gas_cost(gas, gas_price));
        }
        DeploymentOutcome::Deployed(deployment) => {
            println!("{} deployed at: {}", deployment.contract_name, deployment.address);
            println!("tx hash: {}", deployment.tx_hash);
            println!("gas used: {}", deployment.gas_used);
        }
    }
    Ok(())
}
