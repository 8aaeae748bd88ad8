//! Configuration types for the Campus Credits engine.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants;

/// Tunables for identity generation and gateway calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Bound on identifier regeneration attempts (shared by wallet
    /// addresses and NFT ids) before provisioning fails with
    /// `IdentityExhausted`.
    pub max_identity_attempts: u32,
    /// Deadline for a single on-chain call; exceeding it is treated
    /// like any other gateway failure.
    pub gateway_timeout_ms: u64,
}

impl EngineConfig {
    #[must_use]
    pub fn gateway_timeout(&self) -> Duration {
        Duration::from_millis(self.gateway_timeout_ms)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_identity_attempts: constants::DEFAULT_MAX_IDENTITY_ATTEMPTS,
            gateway_timeout_ms: constants::DEFAULT_GATEWAY_TIMEOUT_MS,
        }
    }
}
