// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Deploys `YieldFarming` on local development networks.

use async_trait::async_trait;

use super::{DeployScript, ScriptError};
use crate::core::{
    context::DeploymentContext,
    deployment::{DeployOptions, Deployments},
    log::DeployLog,
};

pub const CONTRACT_NAME: &str = "YieldFarming";
pub const TAGS: &[&str] = &["YieldFarming"];

pub const DETECTED_MESSAGE: &str = "Local network detected! Deploying...";
pub const DEPLOYED_MESSAGE: &str = "Contract Deployed!";

#[derive(Clone, Copy, Debug, Default)]
pub struct YieldFarming;

#[async_trait]
impl DeployScript for YieldFarming {
    fn name(&self) -> &'static str {
        "yield-farming"
    }

    fn tags(&self) -> &'static [&'static str] {
        TAGS
    }

    async fn run(
        &self,
        context: &DeploymentContext,
        deployments: &dyn Deployments,
        log: &dyn DeployLog,
    ) -> Result<(), ScriptError> {
        if !context.is_local() {
            return Ok(());
        }

        log.log(DETECTED_MESSAGE);
        let options = DeployOptions {
            from: context.deployer,
            log: true,
            // the contract takes no constructor arguments
            args: Vec::new(),
        };
        deployments.deploy(CONTRACT_NAME, options).await?;
        log.log(DEPLOYED_MESSAGE);

        Ok(())
    }
}
