//! Reconciliation run summary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of one `reset_and_reconcile` run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationReport {
    /// Non-admin users whose credits were recomputed.
    pub users_reconciled: u64,
    /// Admin users skipped (their credits are never touched).
    pub admins_skipped: u64,
    /// Users whose on-chain balance read failed and was substituted
    /// with zero. Never aborts the run.
    pub gateway_failures: u64,
    /// Transaction records deleted at the start of the run.
    pub transactions_cleared: u64,
    pub finished_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_roundtrip() {
        let report = ReconciliationReport {
            users_reconciled: 12,
            admins_skipped: 1,
            gateway_failures: 2,
            transactions_cleared: 40,
            finished_at: Utc::now(),
        };
        let json = serde_json::to_string(&report).unwrap();
        let back: ReconciliationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, back);
    }
}
