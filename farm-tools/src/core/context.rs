// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::Address;

use super::{
    accounts::{AccountError, NamedAccounts},
    network,
};

/// Role of the account that sends deployment transactions.
pub const DEPLOYER_ROLE: &str = "deployer";

/// Everything a deploy script may know about the environment it runs in.
///
/// Built fresh by the runner for every invocation and handed to scripts by reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeploymentContext {
    pub network_id: u64,
    pub deployer: Address,
}

impl DeploymentContext {
    pub fn new(network_id: u64, deployer: Address) -> Self {
        Self {
            network_id,
            deployer,
        }
    }

    /// Builds the context for a network, resolving the `deployer` named account.
    pub fn resolve(
        network: &str,
        network_id: u64,
        named_accounts: &NamedAccounts,
        accounts: &[Address],
    ) -> Result<Self, AccountError> {
        let deployer = named_accounts.resolve(DEPLOYER_ROLE, network_id, network, accounts)?;
        Ok(Self::new(network_id, deployer))
    }

    pub fn is_local(&self) -> bool {
        network::is_local(self.network_id)
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::address;

    use super::*;
    use crate::core::accounts::{AccountSpec, NamedAccount};

    #[test]
    fn resolves_deployer_role() {
        let first = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
        let mut named = NamedAccounts::new();
        named.insert(DEPLOYER_ROLE, NamedAccount::Fixed(AccountSpec::Index(0)));

        let context = DeploymentContext::resolve("localhost", 31337, &named, &[first]).unwrap();
        assert_eq!(context, DeploymentContext::new(31337, first));
        assert!(context.is_local());
    }

    #[test]
    fn missing_deployer_fails_on_any_network() {
        let named = NamedAccounts::new();
        for chain_id in [1, 31337] {
            let err = DeploymentContext::resolve("any", chain_id, &named, &[]).unwrap_err();
            assert!(matches!(err, AccountError::UnknownRole(_)));
        }
    }
}
