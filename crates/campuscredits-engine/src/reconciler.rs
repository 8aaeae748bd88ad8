//! Bulk reconciliation: discard transaction history and recompute every
//! off-chain balance from on-chain truth.
//!
//! Balance reads fan out concurrently across users; a failed read for
//! one user substitutes an on-chain balance of zero for that user only
//! and never affects the others. The run completes once every read (or
//! its substitution) and every store write has finished. With unchanged
//! on-chain state and no intervening transactions the procedure is a
//! fixed point: re-running it yields identical credit values.

use std::sync::Arc;

use campuscredits_gateway::ContractGateway;
use campuscredits_store::RecordStore;
use campuscredits_types::{
    CreditError, ReconciliationReport, Result, User, UserId,
};
use chrono::Utc;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Stateless bulk operations over the record store and the on-chain
/// gateway.
pub struct Reconciler {
    store: Arc<dyn RecordStore>,
    gateway: Arc<dyn ContractGateway>,
}

/// One fanned-out balance read: the recomputed credit value and whether
/// the gateway read was substituted with zero.
struct UserOutcome {
    user_id: UserId,
    credits: i64,
    gateway_failed: bool,
}

impl Reconciler {
    #[must_use]
    pub fn new(store: Arc<dyn RecordStore>, gateway: Arc<dyn ContractGateway>) -> Self {
        Self { store, gateway }
    }

    /// Delete every transaction record. Deliberately leaves every
    /// user's credits untouched — history deletion is not balance
    /// rollback.
    ///
    /// # Errors
    /// `StoreError` if the deletion fails.
    pub async fn clear_transactions(&self) -> Result<u64> {
        let removed = self.store.clear_transactions().await?;
        info!(removed, "cleared transaction history");
        Ok(removed)
    }

    /// Clear history, then set every non-admin user's credits to
    /// `baseline(role) + on-chain balance`. Admins are left untouched.
    ///
    /// # Errors
    /// `StoreError` if the history deletion, the user load, or any
    /// credit write fails. Gateway read failures never error the run;
    /// they are isolated per user and counted in the report.
    pub async fn reset_and_reconcile(&self) -> Result<ReconciliationReport> {
        let transactions_cleared = self.store.clear_transactions().await?;
        let users = self.store.all_users().await?;

        let mut admins_skipped = 0u64;
        let mut reads: JoinSet<UserOutcome> = JoinSet::new();
        for user in users {
            let Some(baseline) = user.role.baseline() else {
                admins_skipped += 1;
                continue;
            };
            let gateway = Arc::clone(&self.gateway);
            reads.spawn(async move { Self::read_one(gateway.as_ref(), &user, baseline).await });
        }

        let mut users_reconciled = 0u64;
        let mut gateway_failures = 0u64;
        while let Some(joined) = reads.join_next().await {
            let outcome = joined.map_err(|err| CreditError::Internal(err.to_string()))?;
            self.store
                .set_credits(outcome.user_id, outcome.credits)
                .await?;
            users_reconciled += 1;
            if outcome.gateway_failed {
                gateway_failures += 1;
            }
        }

        let report = ReconciliationReport {
            users_reconciled,
            admins_skipped,
            gateway_failures,
            transactions_cleared,
            finished_at: Utc::now(),
        };
        info!(
            users_reconciled,
            admins_skipped, gateway_failures, transactions_cleared, "reconciliation finished"
        );
        Ok(report)
    }

    async fn read_one(gateway: &dyn ContractGateway, user: &User, baseline: i64) -> UserOutcome {
        match gateway.balance_of(&user.wallet_address).await {
            Ok(on_chain) => {
                debug!(user = %user.id, on_chain, "reconciling from on-chain balance");
                // On-chain balances beyond i64 saturate rather than wrap.
                let on_chain = i64::try_from(on_chain).unwrap_or(i64::MAX);
                UserOutcome {
                    user_id: user.id,
                    credits: baseline.saturating_add(on_chain),
                    gateway_failed: false,
                }
            }
            Err(err) => {
                warn!(user = %user.id, error = %err, "balance read failed, treating on-chain balance as 0");
                UserOutcome {
                    user_id: user.id,
                    credits: baseline,
                    gateway_failed: true,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campuscredits_gateway::MemoryLedger;
    use campuscredits_store::MemoryStore;
    use campuscredits_types::Role;

    use crate::{IdentityGenerator, LedgerWriter};

    struct Fixture {
        store: Arc<MemoryStore>,
        ledger: Arc<MemoryLedger>,
        writer: LedgerWriter,
        reconciler: Reconciler,
        admin: User,
        student: User,
        canteen: User,
    }

    async fn fixture() -> Fixture {
        let store = Arc::new(MemoryStore::new());
        let ledger = Arc::new(MemoryLedger::new());
        let generator = IdentityGenerator::new(10);
        let admin = generator
            .provision_user(store.as_ref(), "root@campus.edu", "Root", Role::Admin)
            .await
            .unwrap();
        let student = generator
            .provision_user(store.as_ref(), "alex@campus.edu", "Alex", Role::Student)
            .await
            .unwrap();
        let canteen = generator
            .provision_user(store.as_ref(), "canteen@campus.edu", "Canteen", Role::Canteen)
            .await
            .unwrap();
        let writer = LedgerWriter::new(
            Arc::clone(&store) as Arc<dyn RecordStore>,
            Arc::clone(&ledger) as Arc<dyn ContractGateway>,
        );
        let reconciler = Reconciler::new(
            Arc::clone(&store) as Arc<dyn RecordStore>,
            Arc::clone(&ledger) as Arc<dyn ContractGateway>,
        );
        Fixture {
            store,
            ledger,
            writer,
            reconciler,
            admin,
            student,
            canteen,
        }
    }

    #[tokio::test]
    async fn clear_transactions_leaves_credits_untouched() {
        let fx = fixture().await;
        fx.writer
            .apply_transaction(&fx.admin, &fx.student, 15, "Attend")
            .await
            .unwrap();
        fx.writer
            .apply_transaction(&fx.admin, &fx.student, -5, "Snack")
            .await
            .unwrap();

        let before = fx.store.user(fx.student.id).await.unwrap().unwrap().credits;
        assert_eq!(fx.reconciler.clear_transactions().await.unwrap(), 2);

        assert!(fx.store.all_transactions().await.unwrap().is_empty());
        let after = fx.store.user(fx.student.id).await.unwrap().unwrap().credits;
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn reset_recomputes_from_baseline_plus_chain() {
        let fx = fixture().await;
        fx.ledger.set_balance(&fx.student.wallet_address, 25).await;
        // Off-chain drift the reset must discard.
        fx.store.set_credits(fx.student.id, 999).await.unwrap();
        fx.store.set_credits(fx.admin.id, 1_000_000).await.unwrap();

        let report = fx.reconciler.reset_and_reconcile().await.unwrap();
        assert_eq!(report.users_reconciled, 2);
        assert_eq!(report.admins_skipped, 1);
        assert_eq!(report.gateway_failures, 0);

        let student = fx.store.user(fx.student.id).await.unwrap().unwrap();
        assert_eq!(student.credits, 60 + 25);
        let canteen = fx.store.user(fx.canteen.id).await.unwrap().unwrap();
        assert_eq!(canteen.credits, 100);
        let admin = fx.store.user(fx.admin.id).await.unwrap().unwrap();
        assert_eq!(admin.credits, 1_000_000);
    }

    #[tokio::test]
    async fn reset_clears_history() {
        let fx = fixture().await;
        fx.writer
            .apply_transaction(&fx.admin, &fx.student, 15, "Attend")
            .await
            .unwrap();

        let report = fx.reconciler.reset_and_reconcile().await.unwrap();
        assert_eq!(report.transactions_cleared, 1);
        assert!(fx.store.all_transactions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn reset_is_idempotent_at_fixed_point() {
        let fx = fixture().await;
        fx.ledger.set_balance(&fx.student.wallet_address, 40).await;
        fx.ledger.set_balance(&fx.canteen.wallet_address, 7).await;

        fx.reconciler.reset_and_reconcile().await.unwrap();
        let first: Vec<_> = {
            let mut users = fx.store.all_users().await.unwrap();
            users.sort_by_key(|u| u.id);
            users.into_iter().map(|u| (u.id, u.credits)).collect()
        };

        fx.reconciler.reset_and_reconcile().await.unwrap();
        let second: Vec<_> = {
            let mut users = fx.store.all_users().await.unwrap();
            users.sort_by_key(|u| u.id);
            users.into_iter().map(|u| (u.id, u.credits)).collect()
        };

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn total_outage_reconciles_everyone_to_baseline() {
        let fx = fixture().await;
        fx.ledger.set_balance(&fx.student.wallet_address, 25).await;
        fx.ledger.set_available(false);

        let report = fx.reconciler.reset_and_reconcile().await.unwrap();
        assert_eq!(report.users_reconciled, 2);
        assert_eq!(report.gateway_failures, 2);

        let student = fx.store.user(fx.student.id).await.unwrap().unwrap();
        assert_eq!(student.credits, 60);
        let canteen = fx.store.user(fx.canteen.id).await.unwrap().unwrap();
        assert_eq!(canteen.credits, 100);
    }

    #[tokio::test]
    async fn store_failure_propagates() {
        let fx = fixture().await;
        fx.store.set_failing(true);
        let err = fx.reconciler.reset_and_reconcile().await.unwrap_err();
        assert!(matches!(err, CreditError::StoreError { .. }));
    }
}
