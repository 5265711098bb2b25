// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fs, path::PathBuf};

use alloy::{
    network::EthereumWallet,
    primitives::{utils::parse_ether, FixedBytes, U256},
    providers::{Provider, ProviderBuilder, WalletProvider},
    signers::{
        local::{LocalSigner, PrivateKeySigner},
        Signer,
    },
};
use eyre::{eyre, Context};
use randgen_tools::core::{
    artifact::{ArtifactRegistry, DEFAULT_BUILD_DIR},
    deployment::DeploymentConfig,
};

use crate::{
    constants::DEFAULT_ENDPOINT,
    utils::{convert_gwei_to_wei, decode0x},
};

#[derive(Debug, clap::Args)]
pub struct ArtifactArgs {
    /// Directory holding the compiled contract artifacts
    #[arg(long, default_value = DEFAULT_BUILD_DIR)]
    build_dir: PathBuf,
}

impl ArtifactArgs {
    pub fn registry(&self) -> ArtifactRegistry {
        ArtifactRegistry::new(&self.build_dir)
    }
}

#[derive(Debug, clap::Args)]
pub struct AuthArgs {
    /// File path to a text file containing a hex-encoded private key
    #[arg(long)]
    private_key_path: Option<PathBuf>,
    /// Private key as a hex string. Warning: this exposes your key to shell history
    #[arg(long)]
    private_key: Option<String>,
    /// Path to an Ethereum wallet keystore file (e.g. clef)
    #[arg(long)]
    keystore_path: Option<String>,
    /// Keystore password file
    #[arg(long)]
    keystore_password_path: Option<PathBuf>,
    /// Optional max fee per gas in gwei units.
    #[arg(long)]
    max_fee_per_gas_gwei: Option<String>,
}

impl AuthArgs {
    fn build_wallet(&self, chain_id: u64) -> eyre::Result<EthereumWallet> {
        if let Some(key) = &self.private_key {
            if key.is_empty() {
                return Err(eyre!("empty private key"));
            }
            return wallet_from_hex(key, chain_id);
        }

        if let Some(file) = &self.private_key_path {
            let key = fs::read_to_string(file).wrap_err("could not open private key file")?;
            return wallet_from_hex(&key, chain_id);
        }

        let keystore = self
            .keystore_path
            .as_ref()
            .ok_or(eyre!("no wallet given: use --private-key, --private-key-path or --keystore-path"))?;
        let password = self
            .keystore_password_path
            .as_ref()
            .map(fs::read_to_string)
            .unwrap_or(Ok("".into()))?;

        let signer =
            LocalSigner::decrypt_keystore(keystore, password)?.with_chain_id(Some(chain_id));
        Ok(EthereumWallet::new(signer))
    }

    pub fn get_max_fee_per_gas_wei(&self) -> eyre::Result<Option<u128>> {
        self.max_fee_per_gas_gwei
            .as_ref()
            .map(|fee_str| convert_gwei_to_wei(fee_str))
            .transpose()
    }
}

fn wallet_from_hex(key: &str, chain_id: u64) -> eyre::Result<EthereumWallet> {
    let key = decode0x(key)?;
    if key.len() != 32 {
        return Err(eyre!("private key must be 32 bytes, got {}", key.len()));
    }
    let priv_key_bytes: FixedBytes<32> = FixedBytes::from_slice(&key);
    let signer = PrivateKeySigner::from_bytes(&priv_key_bytes)?.with_chain_id(Some(chain_id));
    Ok(EthereumWallet::new(signer))
}

#[derive(Debug, clap::Args)]
pub struct DeployArgs {
    /// Only perform gas estimation.
    #[arg(long)]
    estimate_gas: bool,
    /// The amount of Ether sent to the contract through the constructor.
    #[arg(long, value_parser = parse_ether, default_value = "0")]
    value: U256,
}

impl DeployArgs {
    pub fn config(&self, auth: &AuthArgs) -> eyre::Result<DeploymentConfig> {
        Ok(DeploymentConfig {
            max_fee_per_gas_wei: auth.get_max_fee_per_gas_wei()?,
            estimate_gas: self.estimate_gas,
            value: self.value,
        })
    }
}

#[derive(Debug, clap::Args)]
pub struct ProviderArgs {
    /// Ethereum RPC endpoint
    #[arg(short, long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,
}

impl ProviderArgs {
    pub async fn build_provider(&self) -> eyre::Result<impl Provider> {
        let provider = ProviderBuilder::new().connect(&self.endpoint).await?;
        Ok(provider)
    }

    pub async fn build_provider_with_wallet(
        &self,
        auth: &AuthArgs,
    ) -> eyre::Result<impl Provider + WalletProvider> {
        let provider = self.build_provider().await?;
        let chain_id = provider
            .get_chain_id()
            .await
            .wrap_err_with(|| format!("could not reach {}", self.endpoint))?;
        let wallet = auth.build_wallet(chain_id)?;
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect(&self.endpoint)
            .await?;
        Ok(provider)
    }
}
