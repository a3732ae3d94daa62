// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Running deploy scripts.

use alloy::{primitives::Address, providers::Provider};

use crate::{
    config::ProjectConfig,
    core::{context::DeploymentContext, deployment::Deployments, log::DeployLog},
    scripts::ScriptRegistry,
    utils::{color::DebugColor, format_tags},
    Error, Result,
};

/// Builds the context scripts see when running against the named network.
///
/// The deployer account is resolved up front, so a missing `deployer` fails the run on every
/// network, local or not.
pub async fn resolve_context(
    config: &ProjectConfig,
    network: &str,
    accounts: &[Address],
    provider: &impl Provider,
) -> Result<DeploymentContext> {
    let network_id = config.network(network)?.chain_id(provider).await?;
    let context =
        DeploymentContext::resolve(network, network_id, &config.named_accounts, accounts)?;
    debug!(
        @grey,
        "network {} (chain id {}), deployer {}",
        network,
        network_id,
        context.deployer.debug_lavender()
    );
    Ok(context)
}

/// Accounts managed by the node itself, as local development nodes provide.
pub async fn node_accounts(provider: &impl Provider) -> Result<Vec<Address>> {
    Ok(provider.get_accounts().await?)
}

/// Runs the scripts selected by `tags` one after another, stopping at the first failure.
///
/// Returns the names of the scripts that ran.
pub async fn deploy<S: AsRef<str>>(
    registry: &ScriptRegistry,
    tags: &[S],
    context: &DeploymentContext,
    deployments: &dyn Deployments,
    log: &dyn DeployLog,
) -> Result<Vec<&'static str>> {
    let scripts = registry.select(tags);
    if scripts.is_empty() {
        return Err(Error::NoScripts(
            tags.iter().map(|tag| tag.as_ref().to_owned()).collect(),
        ));
    }

    let mut ran = Vec::with_capacity(scripts.len());
    for script in scripts {
        debug!(@grey, "running {} [{}]", script.name(), format_tags(script.tags()));
        script.run(context, deployments, log).await?;
        ran.push(script.name());
    }
    Ok(ran)
}

#[cfg(test)]
mod tests {
    use alloy::{
        primitives::{address, U64},
        providers::ProviderBuilder,
        transports::mock::Asserter,
    };
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        core::{deployment::DeployOptions, network::NetworkError},
        scripts::{DeployScript, ScriptError, YieldFarming},
        utils::testing::Journal,
    };

    const DEPLOYER: Address = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

    /// Deploys unconditionally, to observe ordering against the built-in script.
    struct Always(&'static str);

    #[async_trait]
    impl DeployScript for Always {
        fn name(&self) -> &'static str {
            self.0
        }

        fn tags(&self) -> &'static [&'static str] {
            &["Always"]
        }

        async fn run(
            &self,
            context: &DeploymentContext,
            deployments: &dyn Deployments,
            _log: &dyn DeployLog,
        ) -> Result<(), ScriptError> {
            let options = DeployOptions {
                from: context.deployer,
                log: false,
                args: Vec::new(),
            };
            deployments.deploy(self.0, options).await?;
            Ok(())
        }
    }

    #[tokio::test]
    async fn runs_selected_scripts_in_order() {
        let mut registry = ScriptRegistry::new();
        registry.register(Always("First"));
        registry.register(YieldFarming);
        registry.register(Always("Last"));

        let journal = Journal::new();
        let context = DeploymentContext::new(31337, DEPLOYER);
        let none: [&str; 0] = [];
        let ran = deploy(
            &registry,
            &none,
            &context,
            &journal.deployments(),
            &journal.log(),
        )
        .await
        .unwrap();

        assert_eq!(ran, vec!["First", "yield-farming", "Last"]);
        let deployed: Vec<_> = journal.deploys().into_iter().map(|(name, _)| name).collect();
        assert_eq!(deployed, vec!["First", "YieldFarming", "Last"]);
    }

    #[tokio::test]
    async fn tag_filter() {
        let mut registry = ScriptRegistry::builtin();
        registry.register(Always("Other"));

        let journal = Journal::new();
        let context = DeploymentContext::new(31337, DEPLOYER);
        let ran = deploy(
            &registry,
            &["YieldFarming"],
            &context,
            &journal.deployments(),
            &journal.log(),
        )
        .await
        .unwrap();

        assert_eq!(ran, vec!["yield-farming"]);
        assert_eq!(journal.deploys().len(), 1);
    }

    #[tokio::test]
    async fn non_local_network_runs_but_deploys_nothing() {
        let registry = ScriptRegistry::builtin();
        let journal = Journal::new();
        let context = DeploymentContext::new(1, DEPLOYER);
        let ran = deploy(
            &registry,
            &["YieldFarming"],
            &context,
            &journal.deployments(),
            &journal.log(),
        )
        .await
        .unwrap();

        assert_eq!(ran, vec!["yield-farming"]);
        assert!(journal.events().is_empty());
    }

    #[tokio::test]
    async fn unknown_tag() {
        let registry = ScriptRegistry::builtin();
        let journal = Journal::new();
        let context = DeploymentContext::new(31337, DEPLOYER);
        let err = deploy(
            &registry,
            &["Staking"],
            &context,
            &journal.deployments(),
            &journal.log(),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, Error::NoScripts(tags) if tags == vec!["Staking"]));
        assert!(journal.events().is_empty());
    }

    #[tokio::test]
    async fn first_failure_stops_the_run() {
        let mut registry = ScriptRegistry::builtin();
        registry.register(Always("Never"));

        let journal = Journal::new();
        let context = DeploymentContext::new(31337, DEPLOYER);
        let none: [&str; 0] = [];
        let err = deploy(
            &registry,
            &none,
            &context,
            &journal.failing_deployments(),
            &journal.log(),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, Error::Script(_)));
        // only the YieldFarming deployment was attempted
        assert_eq!(journal.deploys().len(), 1);
    }

    fn node_reporting(chain_id: u64) -> impl Provider {
        let asserter = Asserter::new();
        asserter.push_success(&U64::from(chain_id));
        ProviderBuilder::new().connect_mocked_client(asserter)
    }

    #[tokio::test]
    async fn context_takes_chain_id_from_node() {
        let config = ProjectConfig::default();

        let context = resolve_context(&config, "localhost", &[DEPLOYER], &node_reporting(31337))
            .await
            .unwrap();
        assert_eq!(context, DeploymentContext::new(31337, DEPLOYER));

        let err = resolve_context(&config, "localhost", &[], &node_reporting(31337))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Account(_)));

        let err = resolve_context(&config, "mainnet", &[DEPLOYER], &node_reporting(1))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[tokio::test]
    async fn localhost_pointed_at_another_chain_is_rejected() {
        let config = ProjectConfig::default();
        let err = resolve_context(&config, "localhost", &[DEPLOYER], &node_reporting(1))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Network(NetworkError::ChainIdMismatch {
                configured: 31337,
                actual: 1
            })
        ));
    }
}
