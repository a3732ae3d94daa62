// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::providers::Provider;
use serde::{Deserialize, Serialize};

/// Chain id reserved for local development nodes (Hardhat Network, Anvil).
pub const LOCAL_CHAIN_ID: u64 = 31337;

/// The endpoint a local development node listens on by default.
pub const LOCAL_ENDPOINT: &str = "http://127.0.0.1:8545";

/// Name of the network used when none is configured.
pub const LOCAL_NETWORK_NAME: &str = "localhost";

pub fn is_local(chain_id: u64) -> bool {
    chain_id == LOCAL_CHAIN_ID
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkConfig {
    pub url: String,
    /// When set, the node must report this chain id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
}

impl NetworkConfig {
    pub fn localhost() -> Self {
        Self {
            url: LOCAL_ENDPOINT.to_owned(),
            chain_id: Some(LOCAL_CHAIN_ID),
        }
    }

    /// Asks the node for its chain id, checking it against the configured one if any.
    pub async fn chain_id(&self, provider: &impl Provider) -> Result<u64, NetworkError> {
        let actual = provider.get_chain_id().await?;
        debug!(@grey, "node at {} reports chain id {}", self.url, actual);
        match self.chain_id {
            Some(configured) if configured != actual => {
                Err(NetworkError::ChainIdMismatch { configured, actual })
            }
            _ => Ok(actual),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("failed to query chain id: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),
    #[error("network is configured with chain id {configured} but the node reports {actual}")]
    ChainIdMismatch { configured: u64, actual: u64 },
}
