// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Contract creation transaction

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, U256},
    providers::Provider,
    rpc::types::{TransactionReceipt, TransactionRequest},
};

use super::DeploymentError;
use crate::utils::color::DebugColor;

/// Contract creation transaction request
#[derive(Debug)]
pub struct DeploymentRequest {
    tx: TransactionRequest,
    max_fee_per_gas_wei: Option<u128>,
}

impl DeploymentRequest {
    pub fn new(
        sender: Address,
        init_code: Vec<u8>,
        value: U256,
        max_fee_per_gas_wei: Option<u128>,
    ) -> Self {
        Self {
            tx: TransactionRequest::default()
                .with_from(sender)
                .with_value(value)
                .with_deploy_code(init_code),
            max_fee_per_gas_wei,
        }
    }

    pub async fn estimate_gas(&self, provider: &impl Provider) -> Result<u64, DeploymentError> {
        Ok(provider.estimate_gas(self.tx.clone()).await?)
    }

    /// Max fee per gas: the configured value, or the node's current gas price.
    pub async fn fee_per_gas(&self, provider: &impl Provider) -> Result<u128, DeploymentError> {
        match self.max_fee_per_gas_wei {
            Some(wei) => Ok(wei),
            None => Ok(provider.get_gas_price().await?),
        }
    }

    pub async fn exec(
        self,
        provider: &impl Provider,
    ) -> Result<TransactionReceipt, DeploymentError> {
        let gas = self.estimate_gas(provider).await?;
        let max_fee_per_gas = self.fee_per_gas(provider).await?;

        let mut tx = self.tx;
        tx.gas = Some(gas);
        tx.max_fee_per_gas = Some(max_fee_per_gas);
        tx.max_priority_fee_per_gas = Some(0);

        let tx = provider.send_transaction(tx).await?;
        debug!(@grey, "sent deploy tx: {}", tx.tx_hash().debug_lavender());

        tx.get_receipt()
            .await
            .or(Err(DeploymentError::FailedToComplete))
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{address, TxKind};

    use super::*;

    #[test]
    fn creation_tx_carries_init_code() {
        let sender = address!("3f1Eae7D46d88F08fc2F8ed27FCb2AB183EB2d0E");
        let init_code = vec![0x60, 0x80, 0x60, 0x40, 0x52];
        let req = DeploymentRequest::new(sender, init_code.clone(), U256::from(5), Some(7));

        assert_eq!(req.tx.from, Some(sender));
        assert_eq!(req.tx.to, Some(TxKind::Create));
        assert_eq!(req.tx.value, Some(U256::from(5)));
        assert_eq!(
            req.tx.input.input().map(|code| code.to_vec()),
            Some(init_code)
        );
        assert_eq!(req.max_fee_per_gas_wei, Some(7));
    }
}
