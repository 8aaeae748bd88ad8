//! In-memory `RecordStore` implementation.
//!
//! Backs the engine's tests and single-process deployments. All state
//! lives behind one `tokio::sync::RwLock`, which makes each individual
//! operation atomic; cross-operation read-modify-write races are the
//! engine's documented concern, not the store's.
//!
//! A fail-injection switch lets tests exercise the `StoreError`
//! propagation path without a real backing service.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use campuscredits_types::{
    CreditError, NftId, Result, Role, Transaction, User, UserId, WalletAddress,
};
use tokio::sync::RwLock;

use crate::RecordStore;

#[derive(Default)]
struct Collections {
    users: HashMap<UserId, User>,
    transactions: Vec<Transaction>,
}

/// In-memory document store.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
    failing: AtomicBool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation fail with `StoreError` (or
    /// restore normal service). Test hook.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(CreditError::StoreError {
                reason: "injected store outage".into(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn insert_user(&self, user: User) -> Result<()> {
        self.check_available()?;
        let mut inner = self.inner.write().await;
        if inner.users.contains_key(&user.id) {
            return Err(CreditError::InvalidOperation {
                reason: format!("user {} already exists", user.id),
            });
        }
        inner.users.insert(user.id, user);
        Ok(())
    }

    async fn user(&self, id: UserId) -> Result<Option<User>> {
        self.check_available()?;
        Ok(self.inner.read().await.users.get(&id).cloned())
    }

    async fn user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.check_available()?;
        Ok(self
            .inner
            .read()
            .await
            .users
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn all_users(&self) -> Result<Vec<User>> {
        self.check_available()?;
        Ok(self.inner.read().await.users.values().cloned().collect())
    }

    async fn users_by_role(&self, role: Role) -> Result<Vec<User>> {
        self.check_available()?;
        Ok(self
            .inner
            .read()
            .await
            .users
            .values()
            .filter(|u| u.role == role)
            .cloned()
            .collect())
    }

    async fn nft_id_in_use(&self, nft_id: &NftId) -> Result<bool> {
        self.check_available()?;
        Ok(self
            .inner
            .read()
            .await
            .users
            .values()
            .any(|u| u.nft_id == *nft_id))
    }

    async fn wallet_address_in_use(&self, address: &WalletAddress) -> Result<bool> {
        self.check_available()?;
        Ok(self
            .inner
            .read()
            .await
            .users
            .values()
            .any(|u| u.wallet_address == *address))
    }

    async fn set_credits(&self, id: UserId, credits: i64) -> Result<()> {
        self.check_available()?;
        let mut inner = self.inner.write().await;
        let user = inner
            .users
            .get_mut(&id)
            .ok_or(CreditError::UserNotFound(id))?;
        user.credits = credits;
        Ok(())
    }

    async fn adjust_credits(&self, id: UserId, delta: i64) -> Result<i64> {
        self.check_available()?;
        let mut inner = self.inner.write().await;
        let user = inner
            .users
            .get_mut(&id)
            .ok_or(CreditError::UserNotFound(id))?;
        user.credits += delta;
        Ok(user.credits)
    }

    async fn delete_user(&self, id: UserId) -> Result<()> {
        self.check_available()?;
        let mut inner = self.inner.write().await;
        inner
            .users
            .remove(&id)
            .ok_or(CreditError::UserNotFound(id))?;
        Ok(())
    }

    async fn insert_transaction(&self, tx: Transaction) -> Result<()> {
        self.check_available()?;
        self.inner.write().await.transactions.push(tx);
        Ok(())
    }

    async fn all_transactions(&self) -> Result<Vec<Transaction>> {
        self.check_available()?;
        Ok(self.inner.read().await.transactions.clone())
    }

    async fn transactions_for_user(&self, id: UserId) -> Result<Vec<Transaction>> {
        self.check_available()?;
        Ok(self
            .inner
            .read()
            .await
            .transactions
            .iter()
            .filter(|t| t.user_id == id)
            .cloned()
            .collect())
    }

    async fn clear_transactions(&self) -> Result<u64> {
        self.check_available()?;
        let mut inner = self.inner.write().await;
        let removed = inner.transactions.len() as u64;
        inner.transactions.clear();
        Ok(removed)
    }
}
