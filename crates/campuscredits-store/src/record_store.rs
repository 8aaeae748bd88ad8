//! The `RecordStore` trait — everything the engine needs from the
//! off-chain document store.
//!
//! Operations map onto a document store's primitives: get-by-id,
//! get-by-equality-predicate (email, role, nft id, wallet address),
//! insert, field-subset update (credits), delete, and
//! delete-all-in-collection.
//!
//! Every method returns `StoreError` on I/O failure; the engine never
//! absorbs these — the off-chain record is authoritative, so a failed
//! write must reach the caller.

use async_trait::async_trait;
use campuscredits_types::{NftId, Result, Role, Transaction, User, UserId, WalletAddress};

/// Port over the off-chain record store.
///
/// Implementations must be safe for concurrent callers. The engine
/// performs read-modify-write sequences without a locking discipline;
/// `adjust_credits` is the one operation implementations should make
/// atomic per call (see the concurrency notes in the engine crate).
#[async_trait]
pub trait RecordStore: Send + Sync {
    // --- users -----------------------------------------------------------

    /// Insert a new user document. Fails with `InvalidOperation` if a
    /// document with the same id already exists.
    async fn insert_user(&self, user: User) -> Result<()>;

    async fn user(&self, id: UserId) -> Result<Option<User>>;

    async fn user_by_email(&self, email: &str) -> Result<Option<User>>;

    async fn all_users(&self) -> Result<Vec<User>>;

    async fn users_by_role(&self, role: Role) -> Result<Vec<User>>;

    /// Equality lookup backing the NFT-id uniqueness check.
    async fn nft_id_in_use(&self, nft_id: &NftId) -> Result<bool>;

    /// Equality lookup backing the wallet-address uniqueness check.
    async fn wallet_address_in_use(&self, address: &WalletAddress) -> Result<bool>;

    /// Overwrite a user's credit balance (field-subset update).
    /// Fails with `UserNotFound` if the user does not exist.
    async fn set_credits(&self, id: UserId, credits: i64) -> Result<()>;

    /// Atomically add `delta` to a user's credits, returning the new
    /// balance. Fails with `UserNotFound` if the user does not exist.
    async fn adjust_credits(&self, id: UserId, delta: i64) -> Result<i64>;

    /// Administrative removal of a user document. Never called by the
    /// engine itself.
    async fn delete_user(&self, id: UserId) -> Result<()>;

    // --- transactions ----------------------------------------------------

    async fn insert_transaction(&self, tx: Transaction) -> Result<()>;

    async fn all_transactions(&self) -> Result<Vec<Transaction>>;

    async fn transactions_for_user(&self, id: UserId) -> Result<Vec<Transaction>>;

    /// Delete every transaction record, returning how many were removed.
    async fn clear_transactions(&self) -> Result<u64>;

    // --- derived queries -------------------------------------------------

    /// Whether at least one admin account exists (used by provisioning
    /// flows to bootstrap the first admin).
    async fn has_any_admin(&self) -> Result<bool> {
        Ok(!self.users_by_role(Role::Admin).await?.is_empty())
    }
}
