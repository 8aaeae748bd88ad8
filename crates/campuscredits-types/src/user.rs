//! User profile record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{NftId, Role, UserId, WalletAddress};

/// A user profile as stored in the record store.
///
/// `nft_id` and `wallet_address` are globally unique across all users at
/// the moment of assignment. For non-admin roles, `credits` equals
/// `baseline(role) + Σ applied transaction amounts` under normal
/// operation; it may diverge from the on-chain balance whenever a mint
/// silently fails. That divergence is an accepted, documented property
/// resolved by reconciliation, not an error state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub nft_id: NftId,
    pub wallet_address: WalletAddress,
    /// Off-chain credit balance. Mutated only by the ledger writer and
    /// the reconciler.
    pub credits: i64,
    /// Whether the dashboard exposes the wallet address on the profile.
    pub show_wallet: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Whether this user may be the target of `apply_transaction`.
    #[must_use]
    pub fn is_creditable(&self) -> bool {
        self.role.is_creditable()
    }
}
