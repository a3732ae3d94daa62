// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Named accounts.
//!
//! Deploy scripts refer to accounts by role ("deployer") instead of by address. The project
//! config maps each role either to a fixed account or to a table keyed by chain id or network
//! name, with an optional `default` entry:
//!
//! ```toml
//! [named_accounts]
//! deployer = 0
//!
//! [named_accounts.treasury]
//! default = 1
//! 11155111 = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8"
//! ```
//!
//! Integer entries index into the accounts available to the runner (signer addresses, or the
//! node's unlocked accounts). String entries are literal addresses.

use std::collections::BTreeMap;

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

/// Key for the fallback entry of a per-network table.
pub const DEFAULT_KEY: &str = "default";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum AccountSpec {
    Index(usize),
    Address(Address),
}

impl AccountSpec {
    fn resolve(&self, role: &str, accounts: &[Address]) -> Result<Address, AccountError> {
        match *self {
            Self::Address(address) => Ok(address),
            Self::Index(index) => {
                accounts
                    .get(index)
                    .copied()
                    .ok_or_else(|| AccountError::IndexOutOfRange {
                        role: role.to_owned(),
                        index,
                        available: accounts.len(),
                    })
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum NamedAccount {
    Fixed(AccountSpec),
    PerNetwork(BTreeMap<String, AccountSpec>),
}

impl NamedAccount {
    fn spec(&self, chain_id: u64, network: &str) -> Option<&AccountSpec> {
        match self {
            Self::Fixed(spec) => Some(spec),
            Self::PerNetwork(table) => table
                .get(&chain_id.to_string())
                .or_else(|| table.get(network))
                .or_else(|| table.get(DEFAULT_KEY)),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct NamedAccounts(BTreeMap<String, NamedAccount>);

impl NamedAccounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, role: impl Into<String>, account: NamedAccount) {
        self.0.insert(role.into(), account);
    }

    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Resolves the address of `role` on the given network.
    ///
    /// Per-network tables are consulted by chain id first, then by network name, then for the
    /// `default` entry.
    pub fn resolve(
        &self,
        role: &str,
        chain_id: u64,
        network: &str,
        accounts: &[Address],
    ) -> Result<Address, AccountError> {
        let account = self
            .0
            .get(role)
            .ok_or_else(|| AccountError::UnknownRole(role.to_owned()))?;
        let spec = account
            .spec(chain_id, network)
            .ok_or_else(|| AccountError::NoEntry {
                role: role.to_owned(),
                network: network.to_owned(),
                chain_id,
            })?;
        spec.resolve(role, accounts)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("no named account \"{0}\" is configured")]
    UnknownRole(String),
    #[error("named account \"{role}\" has no entry for network {network} (chain id {chain_id})")]
    NoEntry {
        role: String,
        network: String,
        chain_id: u64,
    },
    #[error("named account \"{role}\" refers to account #{index}, but only {available} accounts are available")]
    IndexOutOfRange {
        role: String,
        index: usize,
        available: usize,
    },
}
