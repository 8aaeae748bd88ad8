//! Identity issuance: wallet addresses, NFT display ids, and the user
//! provisioning flow.
//!
//! Raw generation draws from a uniform random source and guarantees
//! nothing about uniqueness; the issuance loop enforces it by
//! check-then-act against the shared record store. Both identifier
//! kinds share one configurable attempt bound — exhausting it fails the
//! provisioning flow with `IdentityExhausted` rather than accepting a
//! possibly-colliding value. Concurrent provisioners are safe: each
//! re-verifies both identifiers immediately before commit and
//! regenerates on conflict.

use campuscredits_store::RecordStore;
use campuscredits_types::{
    CreditError, EngineConfig, IdentityKind, NftId, Result, Role, User, UserId, WalletAddress,
};
use chrono::Utc;
use tracing::debug;

/// Issues collision-checked identities and provisions user profiles.
pub struct IdentityGenerator {
    max_attempts: u32,
}

impl IdentityGenerator {
    /// Create a generator with the given attempt bound.
    ///
    /// # Panics
    /// Panics if `max_attempts` is zero.
    #[must_use]
    pub fn new(max_attempts: u32) -> Self {
        assert!(max_attempts > 0, "IdentityGenerator max_attempts must be > 0");
        Self { max_attempts }
    }

    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.max_identity_attempts)
    }

    /// One uniformly random wallet address: `0x` + 40 hex chars.
    /// Uniqueness is NOT guaranteed here — use [`Self::issue_wallet_address`].
    #[must_use]
    pub fn generate_wallet_address() -> WalletAddress {
        WalletAddress::from_raw_bytes(&rand::random::<[u8; 20]>())
    }

    /// One uniformly random NFT display id: `#` + 6 upper-hex chars.
    /// Uniqueness is NOT guaranteed here — use [`Self::issue_nft_id`].
    #[must_use]
    pub fn generate_nft_id() -> NftId {
        NftId::from_raw_bytes(&rand::random::<[u8; 3]>())
    }

    /// Generate wallet addresses until one is not present in the store.
    ///
    /// # Errors
    /// `IdentityExhausted` after `max_attempts` collisions; `StoreError`
    /// if the uniqueness lookup fails.
    pub async fn issue_wallet_address(&self, store: &dyn RecordStore) -> Result<WalletAddress> {
        for attempt in 0..self.max_attempts {
            let candidate = Self::generate_wallet_address();
            if !store.wallet_address_in_use(&candidate).await? {
                return Ok(candidate);
            }
            debug!(attempt, %candidate, "wallet address collision, regenerating");
        }
        Err(CreditError::IdentityExhausted {
            kind: IdentityKind::WalletAddress,
            attempts: self.max_attempts,
        })
    }

    /// Generate NFT ids until one is not present in the store.
    ///
    /// # Errors
    /// `IdentityExhausted` after `max_attempts` collisions; `StoreError`
    /// if the uniqueness lookup fails.
    pub async fn issue_nft_id(&self, store: &dyn RecordStore) -> Result<NftId> {
        for attempt in 0..self.max_attempts {
            let candidate = Self::generate_nft_id();
            if !store.nft_id_in_use(&candidate).await? {
                return Ok(candidate);
            }
            debug!(attempt, %candidate, "nft id collision, regenerating");
        }
        Err(CreditError::IdentityExhausted {
            kind: IdentityKind::NftId,
            attempts: self.max_attempts,
        })
    }

    /// Issue a fresh (wallet address, NFT id) pair.
    pub async fn issue(&self, store: &dyn RecordStore) -> Result<(WalletAddress, NftId)> {
        let wallet = self.issue_wallet_address(store).await?;
        let nft = self.issue_nft_id(store).await?;
        Ok((wallet, nft))
    }

    /// Provision a new user at signup or by an admin: rejects duplicate
    /// emails, issues identities, and inserts the profile with
    /// `baseline(role)` credits (zero for admins).
    ///
    /// # Errors
    /// `InvalidOperation` on duplicate email, `IdentityExhausted` if the
    /// identifier space cannot be claimed within the attempt bound
    /// (operator attention required — no placeholder is ever assigned),
    /// `StoreError` on store I/O failure.
    pub async fn provision_user(
        &self,
        store: &dyn RecordStore,
        email: &str,
        name: &str,
        role: Role,
    ) -> Result<User> {
        if store.user_by_email(email).await?.is_some() {
            return Err(CreditError::InvalidOperation {
                reason: format!("a user with email {email} already exists"),
            });
        }

        let mut last_conflict = IdentityKind::WalletAddress;
        for attempt in 0..self.max_attempts {
            let (wallet, nft) = self.issue(store).await?;

            // Re-verify just before commit: a concurrent provisioner may
            // have claimed either identifier since the issuance check.
            if store.wallet_address_in_use(&wallet).await? {
                last_conflict = IdentityKind::WalletAddress;
                debug!(attempt, "wallet address claimed concurrently, regenerating");
                continue;
            }
            if store.nft_id_in_use(&nft).await? {
                last_conflict = IdentityKind::NftId;
                debug!(attempt, "nft id claimed concurrently, regenerating");
                continue;
            }

            let user = User {
                id: UserId::new(),
                email: email.to_string(),
                name: name.to_string(),
                role,
                nft_id: nft,
                wallet_address: wallet,
                credits: role.baseline().unwrap_or(0),
                show_wallet: false,
                created_at: Utc::now(),
            };
            store.insert_user(user.clone()).await?;
            return Ok(user);
        }
        Err(CreditError::IdentityExhausted {
            kind: last_conflict,
            attempts: self.max_attempts,
        })
    }
}
