// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Progress messages emitted by deploy scripts.

/// Sink for human-readable progress messages.
pub trait DeployLog: Send + Sync {
    fn log(&self, message: &str);
}

/// Writes messages through the [`log`] facade at info level.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleLog;

impl DeployLog for ConsoleLog {
    fn log(&self, message: &str) {
        info!(@grey, "{}", message);
    }
}
