//! The `ContractGateway` trait and mint confirmation receipt.

use async_trait::async_trait;
use campuscredits_types::{Result, WalletAddress};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Confirmation that the external ledger durably recorded a mint.
///
/// Mirrors the contract's auditable `CreditsMinted` event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintReceipt {
    pub to: WalletAddress,
    pub amount: u64,
    pub reason: String,
    pub confirmed_at: DateTime<Utc>,
}

/// Port over the external on-chain token ledger.
///
/// Both operations are suspension points: `mint` resolves only once the
/// ledger confirmed the mint (or failed), `balance_of` once the read
/// returned. Callers wanting a deadline wrap the gateway in
/// [`crate::TimedGateway`].
///
/// A confirmed mint is irreversible; there is no cancellation path.
#[async_trait]
pub trait ContractGateway: Send + Sync {
    /// Submit a mint of `amount` credits to `to` and await confirmation.
    ///
    /// # Errors
    /// `GatewayUnavailable` if the ledger rejected or never recorded the
    /// mint, `GatewayTimeout` if a wrapping deadline elapsed. Dependents
    /// must treat either as "proceed without on-chain effect".
    async fn mint(&self, to: &WalletAddress, amount: u64, reason: &str) -> Result<MintReceipt>;

    /// Read the current on-chain balance of `address`.
    ///
    /// # Errors
    /// `GatewayUnavailable` / `GatewayTimeout` as for [`Self::mint`].
    async fn balance_of(&self, address: &WalletAddress) -> Result<u64>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mint_receipt_serde_roundtrip() {
        let receipt = MintReceipt {
            to: WalletAddress::from_raw_bytes(&[3u8; 20]),
            amount: 15,
            reason: "Attend".into(),
            confirmed_at: Utc::now(),
        };
        let json = serde_json::to_string(&receipt).unwrap();
        let back: MintReceipt = serde_json::from_str(&json).unwrap();
        assert_eq!(receipt, back);
    }
}
