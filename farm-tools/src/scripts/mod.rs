// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Deploy scripts and the registry that selects them by tag.

use async_trait::async_trait;

use crate::core::{
    context::DeploymentContext,
    deployment::{Deployments, DeploymentError},
    log::DeployLog,
};

pub use yield_farming::YieldFarming;

pub mod yield_farming;

/// A single deployment step.
///
/// Scripts receive everything they act on as arguments and carry static tags so a runner can
/// pick them without executing them.
#[async_trait]
pub trait DeployScript: Send + Sync {
    fn name(&self) -> &'static str;

    fn tags(&self) -> &'static [&'static str];

    async fn run(
        &self,
        context: &DeploymentContext,
        deployments: &dyn Deployments,
        log: &dyn DeployLog,
    ) -> Result<(), ScriptError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error(transparent)]
    Deployment(#[from] DeploymentError),
}

#[derive(Default)]
pub struct ScriptRegistry {
    scripts: Vec<Box<dyn DeployScript>>,
}

impl ScriptRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every script shipped with this crate.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(YieldFarming);
        registry
    }

    pub fn register(&mut self, script: impl DeployScript + 'static) -> &mut Self {
        self.scripts.push(Box::new(script));
        self
    }

    pub fn scripts(&self) -> impl Iterator<Item = &(dyn DeployScript + 'static)> {
        self.scripts.iter().map(AsRef::as_ref)
    }

    /// Scripts carrying at least one of `tags`, in registration order.
    ///
    /// An empty filter selects every script.
    pub fn select<S: AsRef<str>>(&self, tags: &[S]) -> Vec<&(dyn DeployScript + 'static)> {
        self.scripts()
            .filter(|script| {
                tags.is_empty()
                    || script
                        .tags()
                        .iter()
                        .any(|tag| tags.iter().any(|wanted| wanted.as_ref() == *tag))
            })
            .collect()
    }

    /// Every tag known to the registry, sorted.
    pub fn tags(&self) -> Vec<&'static str> {
        let mut tags: Vec<_> = self
            .scripts()
            .flat_map(|script| script.tags().iter().copied())
            .collect();
        tags.sort_unstable();
        tags.dedup();
        tags
    }
}
