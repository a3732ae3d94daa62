// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Deployments backed by a JSON-RPC node.

use alloy::providers::Provider;
use async_trait::async_trait;
use typed_builder::TypedBuilder;

use super::{
    request::DeploymentRequest, DeployOptions, DeployResult, Deployments, DeploymentError,
};
use crate::{
    core::artifact::ArtifactStore,
    utils::{color::DebugColor, format_gas},
};

/// Deploys compiled artifacts by sending contract creation transactions through `provider`.
///
/// The provider must be able to send from the requested account: either its wallet holds the
/// key or the node manages the account (as local development nodes do).
#[derive(TypedBuilder)]
pub struct RpcDeployments<P> {
    provider: P,
    artifacts: ArtifactStore,
    #[builder(default, setter(into))]
    max_fee_per_gas_wei: Option<u128>,
}

#[async_trait]
impl<P: Provider> Deployments for RpcDeployments<P> {
    async fn deploy(
        &self,
        name: &str,
        options: DeployOptions,
    ) -> Result<DeployResult, DeploymentError> {
        let artifact = self.artifacts.load(name)?;
        let initcode = artifact
            .initcode(&options.args)
            .map_err(|err| DeploymentError::InvalidConstructor(err.to_string()))?;
        debug!(@grey, "sender address: {}", options.from.debug_lavender());

        let req = DeploymentRequest::new(options.from, initcode, self.max_fee_per_gas_wei);
        let receipt = req.exec(&self.provider).await?;
        let transaction_hash = receipt.transaction_hash;
        let address = receipt
            .contract_address
            .ok_or(DeploymentError::NoContractAddress { tx_hash: transaction_hash })?;

        if options.log {
            info!(@grey, "deployed \"{}\" at address: {}", name, address.debug_lavender());
            info!(@grey, "deployment tx hash: {}", transaction_hash.debug_lavender());
            info!(@grey, "gas used: {}", format_gas(receipt.gas_used));
        }

        Ok(DeployResult {
            address,
            transaction_hash,
            gas_used: receipt.gas_used,
        })
    }
}
