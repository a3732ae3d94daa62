// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Tools for running tag-selected, network-conditional contract deployment scripts.
//!
//! A deploy script receives an explicit [`DeploymentContext`](core::context::DeploymentContext)
//! together with a [`Deployments`](core::deployment::Deployments) capability and a
//! [`DeployLog`](core::log::DeployLog) capability. The [`ScriptRegistry`](scripts::ScriptRegistry)
//! holds the available scripts and their tags, and [`ops::deploy`] runs the ones selected by tag.

#[macro_use]
mod macros;

pub mod config;
pub mod core;
pub(crate) mod error;
pub mod ops;
pub mod scripts;
pub mod utils;

#[cfg(feature = "integration-tests")]
pub mod devnet;

pub use error::{Error, Result};
