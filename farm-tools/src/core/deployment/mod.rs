// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Contract deployment.

use alloy::primitives::{Address, TxHash};
use async_trait::async_trait;

use crate::{core::artifact::ArtifactError, utils::color::DebugColor};

pub use rpc::RpcDeployments;

pub mod request;
pub mod rpc;

/// Options for a single contract deployment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeployOptions {
    /// Account that sends the creation transaction.
    pub from: Address,
    /// Whether the deployment reports its outcome.
    pub log: bool,
    /// Constructor arguments, encoded against the artifact's constructor.
    pub args: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeployResult {
    pub address: Address,
    pub transaction_hash: TxHash,
    pub gas_used: u64,
}

/// Capability for deploying a named contract.
#[async_trait]
pub trait Deployments: Send + Sync {
    async fn deploy(
        &self,
        name: &str,
        options: DeployOptions,
    ) -> Result<DeployResult, DeploymentError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DeploymentError {
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),
    #[error("{0}")]
    PendingTransaction(#[from] alloy::providers::PendingTransactionError),
    #[error("{0}")]
    Artifact(#[from] ArtifactError),

    #[error("invalid constructor: {0}")]
    InvalidConstructor(String),
    #[error("deploy tx reverted {}", .tx_hash.debug_red())]
    Reverted { tx_hash: TxHash },
    #[error("missing contract address in receipt of {}", .tx_hash.debug_red())]
    NoContractAddress { tx_hash: TxHash },
}
