//! Credit transaction record.
//!
//! Transactions are immutable once created: they are never individually
//! edited or deleted, only bulk-cleared by the reconciler.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{CreditError, Result, TransactionId, UserId};

/// Direction of a credit movement. The sign of the amount always
/// matches the kind: `Earn` iff positive, `Spend` iff negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Earn,
    Spend,
}

impl TransactionKind {
    /// Classify a non-zero amount.
    ///
    /// # Errors
    /// Returns `InvalidOperation` for a zero amount, which carries no
    /// direction.
    pub fn from_amount(amount: i64) -> Result<Self> {
        match amount {
            0 => Err(CreditError::InvalidOperation {
                reason: "transaction amount must be non-zero".into(),
            }),
            a if a > 0 => Ok(Self::Earn),
            _ => Ok(Self::Spend),
        }
    }
}

/// One applied credit movement against a single user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub user_id: UserId,
    /// Denormalized display name, captured at apply time.
    pub user_name: String,
    pub kind: TransactionKind,
    /// Signed amount; invariant: `kind == Earn ⇔ amount > 0`.
    pub amount: i64,
    pub reason: String,
    pub date: DateTime<Utc>,
    /// The authenticated actor who applied this transaction.
    pub created_by: UserId,
}

impl Transaction {
    /// Build a transaction for `amount`, deriving the kind from its sign.
    ///
    /// # Errors
    /// Returns `InvalidOperation` for a zero amount.
    pub fn new(
        user_id: UserId,
        user_name: impl Into<String>,
        amount: i64,
        reason: impl Into<String>,
        created_by: UserId,
    ) -> Result<Self> {
        Ok(Self {
            id: TransactionId::new(),
            user_id,
            user_name: user_name.into(),
            kind: TransactionKind::from_amount(amount)?,
            amount,
            reason: reason.into(),
            date: Utc::now(),
            created_by,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_sign() {
        assert_eq!(TransactionKind::from_amount(15).unwrap(), TransactionKind::Earn);
        assert_eq!(TransactionKind::from_amount(-7).unwrap(), TransactionKind::Spend);
        assert!(TransactionKind::from_amount(0).is_err());
    }

    #[test]
    fn new_derives_kind() {
        let actor = UserId::new();
        let target = UserId::new();
        let tx = Transaction::new(target, "Alex", -7, "Missed", actor).unwrap();
        assert_eq!(tx.kind, TransactionKind::Spend);
        assert_eq!(tx.amount, -7);
        assert_eq!(tx.created_by, actor);
    }

    #[test]
    fn zero_amount_rejected() {
        let err = Transaction::new(UserId::new(), "Alex", 0, "x", UserId::new()).unwrap_err();
        assert!(matches!(err, CreditError::InvalidOperation { .. }));
    }

    #[test]
    fn serde_roundtrip() {
        let tx = Transaction::new(UserId::new(), "Alex", 15, "Attend", UserId::new()).unwrap();
        let json = serde_json::to_string(&tx).unwrap();
        assert!(json.contains("\"earn\""));
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(tx, back);
    }
}
