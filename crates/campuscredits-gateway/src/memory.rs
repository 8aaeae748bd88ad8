//! In-memory mint-only token ledger.
//!
//! Stands in for the deployed campus token contract in tests and local
//! runs. Keeps per-address balances plus an append-only log of mint
//! receipts (the `CreditsMinted` event surface). An availability switch
//! and an optional response delay let tests drive the outage and
//! timeout paths.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use campuscredits_types::{CreditError, Result, WalletAddress};
use chrono::Utc;
use tokio::sync::RwLock;

use crate::{ContractGateway, MintReceipt};

#[derive(Default)]
struct Chain {
    balances: HashMap<WalletAddress, u64>,
    events: Vec<MintReceipt>,
}

/// In-memory stand-in for the on-chain contract.
#[derive(Default)]
pub struct MemoryLedger {
    chain: RwLock<Chain>,
    unavailable: AtomicBool,
    response_delay_ms: AtomicU64,
}

impl MemoryLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate a chain outage (or restore service). Test hook.
    pub fn set_available(&self, available: bool) {
        self.unavailable.store(!available, Ordering::SeqCst);
    }

    /// Delay every response by `delay`; combined with [`crate::TimedGateway`]
    /// this drives the timeout path. Test hook.
    pub fn set_response_delay(&self, delay: Duration) {
        self.response_delay_ms
            .store(delay.as_millis() as u64, Ordering::SeqCst);
    }

    /// Seed a balance directly, bypassing the mint log. Test hook for
    /// reconciliation scenarios where chain history predates the store.
    pub async fn set_balance(&self, address: &WalletAddress, balance: u64) {
        self.chain
            .write()
            .await
            .balances
            .insert(address.clone(), balance);
    }

    /// Snapshot of the mint event log, oldest first.
    pub async fn mint_events(&self) -> Vec<MintReceipt> {
        self.chain.read().await.events.clone()
    }

    async fn respond(&self) -> Result<()> {
        let delay = self.response_delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(CreditError::GatewayUnavailable {
                reason: "simulated chain outage".into(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ContractGateway for MemoryLedger {
    async fn mint(&self, to: &WalletAddress, amount: u64, reason: &str) -> Result<MintReceipt> {
        self.respond().await?;
        let receipt = MintReceipt {
            to: to.clone(),
            amount,
            reason: reason.to_string(),
            confirmed_at: Utc::now(),
        };
        let mut chain = self.chain.write().await;
        *chain.balances.entry(to.clone()).or_insert(0) += amount;
        chain.events.push(receipt.clone());
        Ok(receipt)
    }

    async fn balance_of(&self, address: &WalletAddress) -> Result<u64> {
        self.respond().await?;
        Ok(self
            .chain
            .read()
            .await
            .balances
            .get(address)
            .copied()
            .unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(seed: u8) -> WalletAddress {
        WalletAddress::from_raw_bytes(&[seed; 20])
    }

    #[tokio::test]
    async fn mint_accumulates_balance() {
        let ledger = MemoryLedger::new();
        let wallet = addr(1);

        ledger.mint(&wallet, 15, "Attend").await.unwrap();
        ledger.mint(&wallet, 10, "Volunteer").await.unwrap();

        assert_eq!(ledger.balance_of(&wallet).await.unwrap(), 25);
        assert_eq!(ledger.balance_of(&addr(2)).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn mint_events_are_append_only_and_complete() {
        let ledger = MemoryLedger::new();
        ledger.mint(&addr(1), 15, "Attend").await.unwrap();
        ledger.mint(&addr(2), 7, "Helpdesk").await.unwrap();

        let events = ledger.mint_events().await;
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].amount, 15);
        assert_eq!(events[0].reason, "Attend");
        assert_eq!(events[1].to, addr(2));
    }

    #[tokio::test]
    async fn outage_fails_both_operations() {
        let ledger = MemoryLedger::new();
        ledger.set_available(false);

        let err = ledger.mint(&addr(1), 5, "x").await.unwrap_err();
        assert!(matches!(err, CreditError::GatewayUnavailable { .. }));
        let err = ledger.balance_of(&addr(1)).await.unwrap_err();
        assert!(matches!(err, CreditError::GatewayUnavailable { .. }));

        // Failed mint must not have touched the ledger.
        ledger.set_available(true);
        assert_eq!(ledger.balance_of(&addr(1)).await.unwrap(), 0);
        assert!(ledger.mint_events().await.is_empty());
    }
}
