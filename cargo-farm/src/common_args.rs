// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fs, path::PathBuf};

use alloy::{
    network::EthereumWallet,
    primitives::FixedBytes,
    providers::{Provider, ProviderBuilder, WalletProvider},
    signers::{
        local::{LocalSigner, PrivateKeySigner},
        Signer,
    },
};
use eyre::{eyre, Context};
use farm_tools::config::{ProjectConfig, CONFIG_FILE};

use crate::utils::{convert_gwei_to_wei, decode0x};

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
    /// Whether a signing key was supplied. Without one, transactions are sent from accounts the
    /// node manages itself.
    pub fn has_wallet(&self) -> bool {
        self.private_key.is_some() || self.private_key_path.is_some() || self.keystore_path.is_some()
    }

    fn build_wallet(&self, chain_id: u64) -> eyre::Result<EthereumWallet> {
        if let Some(key) = &self.private_key {
            if key.is_empty() {
                return Err(eyre!("empty private key"));
            }
            let priv_key_bytes = parse_private_key(key)?;
            let signer =
                PrivateKeySigner::from_bytes(&priv_key_bytes)?.with_chain_id(Some(chain_id));
            return Ok(EthereumWallet::new(signer));
        }

        if let Some(file) = &self.private_key_path {
            let key = fs::read_to_string(file).wrap_err("could not open private key file")?;
            let priv_key_bytes = parse_private_key(key)?;
            let signer =
                PrivateKeySigner::from_bytes(&priv_key_bytes)?.with_chain_id(Some(chain_id));
            return Ok(EthereumWallet::new(signer));
        }

        let keystore = self.keystore_path.as_ref().ok_or(eyre!("no keystore"))?;
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

fn parse_private_key(key: impl AsRef<str>) -> eyre::Result<FixedBytes<32>> {
    let bytes = decode0x(key)?;
    FixedBytes::try_from(bytes.as_slice())
        .map_err(|_| eyre!("private key must be 32 bytes, got {}", bytes.len()))
}

#[derive(Debug, clap::Args)]
pub struct ProjectArgs {
    /// Path to the project config file
    #[arg(long, default_value = CONFIG_FILE)]
    config: PathBuf,
    /// Network to run against (defaults to the config's `default_network`)
    #[arg(short, long)]
    pub network: Option<String>,
}

impl ProjectArgs {
    pub fn config(&self) -> eyre::Result<ProjectConfig> {
        ProjectConfig::load_or_default(&self.config)
            .wrap_err_with(|| format!("could not load {}", self.config.display()))
    }

    pub fn network_name(&self, config: &ProjectConfig) -> String {
        self.network
            .clone()
            .unwrap_or_else(|| config.default_network.clone())
    }
}

#[derive(Debug, clap::Args)]
pub struct ProviderArgs {
    /// RPC endpoint, overriding the network's configured url
    #[arg(short, long)]
    pub endpoint: Option<String>,
}

impl ProviderArgs {
    pub fn endpoint(&self, configured: &str) -> String {
        self.endpoint
            .clone()
            .unwrap_or_else(|| configured.to_owned())
    }

    pub async fn build_provider(&self, endpoint: &str) -> eyre::Result<impl Provider> {
        let provider = ProviderBuilder::new().connect(endpoint).await?;
        Ok(provider)
    }

    pub async fn build_provider_with_wallet(
        &self,
        endpoint: &str,
        auth: &AuthArgs,
    ) -> eyre::Result<impl Provider + WalletProvider> {
        let provider = self.build_provider(endpoint).await?;
        let chain_id = provider.get_chain_id().await?;
        let wallet = auth.build_wallet(chain_id)?;
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect(endpoint)
            .await?;
        Ok(provider)
    }
}
