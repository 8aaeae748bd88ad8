//! Applying a single credit/debit event across both ledgers.
//!
//! Within one call the steps are causally ordered: on-chain mint
//! attempt, then the mandatory transaction record, then the credit
//! update. The mint is best-effort — any gateway failure is logged and
//! absorbed, and the off-chain write proceeds regardless. Store
//! failures always propagate; after a `StoreError` the caller must
//! treat the balance as unknown. A retry is safe for the balance but
//! can duplicate the transaction record (no idempotency key; the
//! reconciler is the recovery tool).

use std::sync::Arc;

use campuscredits_gateway::ContractGateway;
use campuscredits_store::RecordStore;
use campuscredits_types::{CreditError, Result, Role, Transaction, User};
use tracing::{debug, warn};

/// Stateless operation over the record store and the on-chain gateway.
pub struct LedgerWriter {
    store: Arc<dyn RecordStore>,
    gateway: Arc<dyn ContractGateway>,
}

impl LedgerWriter {
    #[must_use]
    pub fn new(store: Arc<dyn RecordStore>, gateway: Arc<dyn ContractGateway>) -> Self {
        Self { store, gateway }
    }

    /// Apply one signed credit movement from `actor` to `target`.
    ///
    /// Preconditions (checked before any side effect):
    /// - `target` is not an admin;
    /// - `actor` and `target` are different users;
    /// - `amount` is non-zero.
    ///
    /// Positive amounts attempt an on-chain mint first; negative amounts
    /// never touch the chain (the contract is mint-only and cannot
    /// debit).
    ///
    /// # Errors
    /// `InvalidOperation` on a precondition violation (no side effects),
    /// `StoreError` if the record write or credit update fails (the
    /// already-attempted mint, if any, is irreversible).
    pub async fn apply_transaction(
        &self,
        actor: &User,
        target: &User,
        amount: i64,
        reason: &str,
    ) -> Result<Transaction> {
        if target.role == Role::Admin {
            return Err(CreditError::InvalidOperation {
                reason: "admin accounts cannot be credited or debited".into(),
            });
        }
        if actor.id == target.id {
            return Err(CreditError::InvalidOperation {
                reason: "actors cannot apply transactions to themselves".into(),
            });
        }
        // Also rejects amount == 0.
        let tx = Transaction::new(target.id, &target.name, amount, reason, actor.id)?;

        if amount > 0 {
            match self
                .gateway
                .mint(&target.wallet_address, amount.unsigned_abs(), reason)
                .await
            {
                Ok(receipt) => {
                    debug!(user = %target.id, amount, confirmed_at = %receipt.confirmed_at, "on-chain mint confirmed");
                }
                Err(err) if err.is_gateway() => {
                    // Best-effort step: the off-chain record proceeds
                    // regardless of the on-chain outcome.
                    warn!(user = %target.id, amount, error = %err, "on-chain mint failed, continuing off-chain only");
                }
                Err(err) => return Err(err),
            }
        }

        self.store.insert_transaction(tx.clone()).await?;
        self.store.adjust_credits(target.id, amount).await?;
        Ok(tx)
    }
}
