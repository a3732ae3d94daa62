// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Recording capabilities for exercising deploy scripts without a node.

use std::sync::{Arc, Mutex};

use alloy::primitives::{Address, TxHash};
use async_trait::async_trait;

use crate::core::{
    deployment::{DeployOptions, DeployResult, Deployments, DeploymentError},
    log::DeployLog,
};

/// Address every successful recorded deployment lands at.
pub const DEPLOYED_ADDRESS: Address = Address::repeat_byte(0x42);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Deploy { name: String, options: DeployOptions },
    Log(String),
}

/// Shared, ordered record of every capability call.
#[derive(Clone, Debug, Default)]
pub struct Journal(Arc<Mutex<Vec<Event>>>);

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, event: Event) {
        self.0.lock().unwrap().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.lock().unwrap().clone()
    }

    pub fn deploys(&self) -> Vec<(String, DeployOptions)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Deploy { name, options } => Some((name, options)),
                Event::Log(_) => None,
            })
            .collect()
    }

    pub fn logs(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Log(message) => Some(message),
                Event::Deploy { .. } => None,
            })
            .collect()
    }

    pub fn deployments(&self) -> RecordingDeployments {
        RecordingDeployments {
            journal: self.clone(),
            fail: false,
        }
    }

    /// Deployments that record the call and then revert.
    pub fn failing_deployments(&self) -> RecordingDeployments {
        RecordingDeployments {
            journal: self.clone(),
            fail: true,
        }
    }

    pub fn log(&self) -> RecordingLog {
        RecordingLog {
            journal: self.clone(),
        }
    }
}

pub struct RecordingDeployments {
    journal: Journal,
    fail: bool,
}

#[async_trait]
impl Deployments for RecordingDeployments {
    async fn deploy(
        &self,
        name: &str,
        options: DeployOptions,
    ) -> Result<DeployResult, DeploymentError> {
        self.journal.push(Event::Deploy {
            name: name.to_owned(),
            options,
        });
        tokio::task::yield_now().await;
        if self.fail {
            return Err(DeploymentError::Reverted {
                tx_hash: TxHash::repeat_byte(0xee),
            });
        }
        Ok(DeployResult {
            address: DEPLOYED_ADDRESS,
            transaction_hash: TxHash::repeat_byte(0x01),
            gas_used: 21_000,
        })
    }
}

pub struct RecordingLog {
    journal: Journal,
}

impl DeployLog for RecordingLog {
    fn log(&self, message: &str) {
        self.journal.push(Event::Log(message.to_owned()));
    }
}
