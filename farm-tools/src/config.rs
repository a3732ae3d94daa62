// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Project configuration, read from `Farm.toml`.
//!
//! ```toml
//! default_network = "localhost"
//! artifacts = "artifacts"
//!
//! [networks.localhost]
//! url = "http://127.0.0.1:8545"
//! chain_id = 31337
//!
//! [networks.sepolia]
//! url = "https://rpc.sepolia.org"
//!
//! [named_accounts]
//! deployer = 0
//! ```

use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::core::{
    accounts::{AccountSpec, NamedAccount, NamedAccounts},
    context::DEPLOYER_ROLE,
    network::{NetworkConfig, LOCAL_NETWORK_NAME},
};

pub const CONFIG_FILE: &str = "Farm.toml";
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    #[serde(default = "default_network")]
    pub default_network: String,
    /// Artifact directory, relative to the config file.
    #[serde(default = "default_artifacts")]
    pub artifacts: PathBuf,
    #[serde(default)]
    pub networks: BTreeMap<String, NetworkConfig>,
    #[serde(default = "default_named_accounts")]
    pub named_accounts: NamedAccounts,
}

fn default_network() -> String {
    LOCAL_NETWORK_NAME.to_owned()
}

fn default_artifacts() -> PathBuf {
    PathBuf::from(DEFAULT_ARTIFACTS_DIR)
}

fn default_named_accounts() -> NamedAccounts {
    let mut named = NamedAccounts::new();
    named.insert(DEPLOYER_ROLE, NamedAccount::Fixed(AccountSpec::Index(0)));
    named
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            default_network: default_network(),
            artifacts: default_artifacts(),
            networks: BTreeMap::new(),
            named_accounts: default_named_accounts(),
        }
    }
}

impl ProjectConfig {
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads a config file, resolving the artifact directory against the file's location.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        let mut config = Self::parse(&text)?;
        if let Some(dir) = path.parent() {
            config.artifacts = dir.join(&config.artifacts);
        }
        Ok(config)
    }

    /// Like [`ProjectConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match Self::load(path) {
            Err(ConfigError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                debug!(@grey, "no config at {}, using defaults", path.display());
                let mut config = Self::default();
                if let Some(dir) = path.parent() {
                    config.artifacts = dir.join(&config.artifacts);
                }
                Ok(config)
            }
            result => result,
        }
    }

    /// Looks up a network by name. `localhost` is always available.
    pub fn network(&self, name: &str) -> Result<NetworkConfig, ConfigError> {
        match self.networks.get(name) {
            Some(network) => Ok(network.clone()),
            None if name == LOCAL_NETWORK_NAME => Ok(NetworkConfig::localhost()),
            None => Err(ConfigError::UnknownNetwork {
                name: name.to_owned(),
                known: self.network_names(),
            }),
        }
    }

    pub fn network_names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.networks.keys().cloned().collect();
        if !self.networks.contains_key(LOCAL_NETWORK_NAME) {
            names.push(LOCAL_NETWORK_NAME.to_owned());
            names.sort();
        }
        names
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unknown network \"{name}\" (known networks: {})", .known.join(", "))]
    UnknownNetwork { name: String, known: Vec<String> },
}
