// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::{
    primitives::Address,
    providers::{Provider, WalletProvider},
};
use farm_tools::{
    config::ProjectConfig,
    core::{artifact::ArtifactStore, deployment::RpcDeployments, log::ConsoleLog},
    ops,
    scripts::ScriptRegistry,
};

use crate::{
    common_args::{AuthArgs, ProjectArgs, ProviderArgs},
    error::CargoFarmResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Only run scripts carrying one of these tags (all scripts when omitted).
    #[arg(long, value_delimiter = ',')]
    tags: Vec<String>,

    #[command(flatten)]
    project: ProjectArgs,
    /// Wallet source to use.
    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> CargoFarmResult {
    let config = args.project.config()?;
    let network = args.project.network_name(&config);
    let endpoint = args.provider.endpoint(&config.network(&network)?.url);
    log::debug!("connecting to {network} at {endpoint}");

    if args.auth.has_wallet() {
        let provider = args
            .provider
            .build_provider_with_wallet(&endpoint, &args.auth)
            .await?;
        let accounts: Vec<Address> = provider.signer_addresses().collect();
        run(&args, &config, &network, provider, accounts).await
    } else {
        let provider = args.provider.build_provider(&endpoint).await?;
        let accounts = ops::node_accounts(&provider).await?;
        run(&args, &config, &network, provider, accounts).await
    }
}

async fn run(
    args: &Args,
    config: &ProjectConfig,
    network: &str,
    provider: impl Provider,
    accounts: Vec<Address>,
) -> CargoFarmResult {
    let context = ops::resolve_context(config, network, &accounts, &provider).await?;
    let deployments = RpcDeployments::builder()
        .provider(provider)
        .artifacts(ArtifactStore::new(&config.artifacts))
        .max_fee_per_gas_wei(args.auth.get_max_fee_per_gas_wei()?)
        .build();

    let ran = ops::deploy(
        &ScriptRegistry::builtin(),
        args.tags.as_slice(),
        &context,
        &deployments,
        &ConsoleLog,
    )
    .await?;
    log::debug!("ran {} script(s): {}", ran.len(), ran.join(", "));
    Ok(())
}
