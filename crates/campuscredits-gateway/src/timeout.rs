//! Deadline enforcement for gateway calls.
//!
//! On-chain calls can hang indefinitely (wallet prompts, congested
//! RPC endpoints). `TimedGateway` bounds every call with the configured
//! deadline and reports an elapsed deadline as `GatewayTimeout`, which
//! dependents treat identically to any other gateway failure.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use campuscredits_types::{CreditError, EngineConfig, Result, WalletAddress};

use crate::{ContractGateway, MintReceipt};

/// Decorator adding a per-call deadline to any [`ContractGateway`].
pub struct TimedGateway<G> {
    inner: G,
    deadline: Duration,
}

impl<G: ContractGateway> TimedGateway<G> {
    #[must_use]
    pub fn new(inner: G, deadline: Duration) -> Self {
        Self { inner, deadline }
    }

    /// Use the deadline from an [`EngineConfig`].
    #[must_use]
    pub fn from_config(inner: G, config: &EngineConfig) -> Self {
        Self::new(inner, config.gateway_timeout())
    }

    async fn bounded<T>(&self, fut: impl Future<Output = Result<T>> + Send) -> Result<T> {
        match tokio::time::timeout(self.deadline, fut).await {
            Ok(result) => result,
            Err(_) => Err(CreditError::GatewayTimeout {
                elapsed_ms: self.deadline.as_millis() as u64,
            }),
        }
    }
}

#[async_trait]
impl<G: ContractGateway> ContractGateway for TimedGateway<G> {
    async fn mint(&self, to: &WalletAddress, amount: u64, reason: &str) -> Result<MintReceipt> {
        self.bounded(self.inner.mint(to, amount, reason)).await
    }

    async fn balance_of(&self, address: &WalletAddress) -> Result<u64> {
        self.bounded(self.inner.balance_of(address)).await
    }
}
