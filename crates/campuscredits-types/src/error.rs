//! Error types for the Campus Credits engine.
//!
//! All errors use the `CC_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Identity generation errors
//! - 2xx: On-chain gateway errors
//! - 3xx: Operation / validation errors
//! - 4xx: Record store errors
//! - 9xx: General / internal errors
//!
//! Propagation policy: gateway errors (2xx) are always absorbed at the
//! `LedgerWriter` / `Reconciler` boundary — the off-chain record proceeds
//! even when the chain is unreachable. Store errors (4xx) are never
//! absorbed, since the record store is the source of truth for
//! user-visible balances.

use thiserror::Error;

use crate::{IdentityKind, UserId};

/// Central error enum for all Campus Credits operations.
#[derive(Debug, Error)]
pub enum CreditError {
    // =================================================================
    // Identity Errors (1xx)
    // =================================================================
    /// A freshly generated identifier is already assigned to a user.
    /// Recovered locally by regeneration; callers never see this unless
    /// they drive the generation loop themselves.
    #[error("CC_ERR_100: Identity collision: generated {kind} already in use")]
    IdentityCollision { kind: IdentityKind },

    /// Regeneration gave up after the configured attempt bound.
    /// Surfaced as a provisioning failure requiring operator attention.
    #[error("CC_ERR_101: Identity space exhausted for {kind} after {attempts} attempts")]
    IdentityExhausted { kind: IdentityKind, attempts: u32 },

    // =================================================================
    // Gateway Errors (2xx)
    // =================================================================
    /// The on-chain call failed: no wallet connected, network error,
    /// reverted transaction.
    #[error("CC_ERR_200: Gateway unavailable: {reason}")]
    GatewayUnavailable { reason: String },

    /// The on-chain call did not confirm within the configured deadline.
    #[error("CC_ERR_201: Gateway call timed out after {elapsed_ms}ms")]
    GatewayTimeout { elapsed_ms: u64 },

    // =================================================================
    // Operation / Validation Errors (3xx)
    // =================================================================
    /// A precondition was violated (self-credit, admin target, zero
    /// amount). No side effects were performed.
    #[error("CC_ERR_300: Invalid operation: {reason}")]
    InvalidOperation { reason: String },

    /// The referenced user does not exist in the record store.
    #[error("CC_ERR_301: User not found: {0}")]
    UserNotFound(UserId),

    /// No user with the given email exists in the record store.
    #[error("CC_ERR_302: No user with email: {0}")]
    EmailNotFound(String),

    // =================================================================
    // Record Store Errors (4xx)
    // =================================================================
    /// Underlying store I/O failed. The caller must assume indeterminate
    /// state for the in-flight operation.
    #[error("CC_ERR_400: Store error: {reason}")]
    StoreError { reason: String },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error.
    #[error("CC_ERR_900: Internal error: {0}")]
    Internal(String),

    /// Serialization / deserialization error.
    #[error("CC_ERR_901: Serialization error: {0}")]
    Serialization(String),
}

impl CreditError {
    /// Whether this error originated in the on-chain gateway layer.
    ///
    /// Gateway errors are absorbed (logged, operation proceeds
    /// off-chain-only) rather than propagated.
    #[must_use]
    pub fn is_gateway(&self) -> bool {
        matches!(
            self,
            Self::GatewayUnavailable { .. } | Self::GatewayTimeout { .. }
        )
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, CreditError>;

impl From<serde_json::Error> for CreditError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_contains_prefix() {
        let err = CreditError::UserNotFound(UserId::new());
        let msg = format!("{err}");
        assert!(msg.starts_with("CC_ERR_301"), "Got: {msg}");
    }

    #[test]
    fn identity_exhausted_display() {
        let err = CreditError::IdentityExhausted {
            kind: IdentityKind::NftId,
            attempts: 10,
        };
        let msg = format!("{err}");
        assert!(msg.contains("CC_ERR_101"));
        assert!(msg.contains("nft id"));
        assert!(msg.contains("10"));
    }

    #[test]
    fn gateway_errors_are_gateway() {
        assert!(
            CreditError::GatewayUnavailable {
                reason: "no provider".into()
            }
            .is_gateway()
        );
        assert!(CreditError::GatewayTimeout { elapsed_ms: 5000 }.is_gateway());
        assert!(
            !CreditError::StoreError {
                reason: "disk".into()
            }
            .is_gateway()
        );
    }

    #[test]
    fn all_errors_have_cc_err_prefix() {
        let errors: Vec<Box<dyn std::error::Error>> = vec![
            Box::new(CreditError::IdentityCollision {
                kind: IdentityKind::WalletAddress,
            }),
            Box::new(CreditError::GatewayTimeout { elapsed_ms: 1 }),
            Box::new(CreditError::InvalidOperation {
                reason: "test".into(),
            }),
            Box::new(CreditError::StoreError {
                reason: "test".into(),
            }),
            Box::new(CreditError::Internal("test".into())),
        ];
        for err in errors {
            let msg = format!("{err}");
            assert!(
                msg.starts_with("CC_ERR_"),
                "Error missing CC_ERR_ prefix: {msg}"
            );
        }
    }
}
