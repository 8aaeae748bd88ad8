//! User roles and their reconciliation baselines.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants;

/// Closed set of account roles.
///
/// Kept as an enum (not free-form strings) so every branch point —
/// baseline lookup, eligibility checks — handles the full set
/// exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Admin,
    Canteen,
}

impl Role {
    /// The credit value a freshly provisioned or freshly reconciled
    /// account of this role holds before any on-chain balance is added.
    ///
    /// `None` for admins: their credits are conceptually unbounded and
    /// ignored by reconciliation.
    #[must_use]
    pub fn baseline(self) -> Option<i64> {
        match self {
            Self::Student => Some(constants::BASELINE_STUDENT),
            Self::Canteen => Some(constants::BASELINE_CANTEEN),
            Self::Admin => None,
        }
    }

    /// Whether accounts of this role participate in credit transactions
    /// and reconciliation.
    #[must_use]
    pub fn is_creditable(self) -> bool {
        self.baseline().is_some()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Student => f.write_str("student"),
            Self::Admin => f.write_str("admin"),
            Self::Canteen => f.write_str("canteen"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baselines() {
        assert_eq!(Role::Student.baseline(), Some(60));
        assert_eq!(Role::Canteen.baseline(), Some(100));
        assert_eq!(Role::Admin.baseline(), None);
    }

    #[test]
    fn admin_not_creditable() {
        assert!(!Role::Admin.is_creditable());
        assert!(Role::Student.is_creditable());
        assert!(Role::Canteen.is_creditable());
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Role::Student).unwrap(), "\"student\"");
        assert_eq!(serde_json::to_string(&Role::Canteen).unwrap(), "\"canteen\"");
        let back: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(back, Role::Admin);
    }
}
