//! # campuscredits-types
//!
//! Shared types, errors, and configuration for the **Campus Credits**
//! dual-ledger engine.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`UserId`], [`TransactionId`], [`WalletAddress`], [`NftId`]
//! - **User model**: [`User`], [`Role`]
//! - **Transaction model**: [`Transaction`], [`TransactionKind`]
//! - **Reconciliation model**: [`ReconciliationReport`]
//! - **Configuration**: [`EngineConfig`]
//! - **Errors**: [`CreditError`] with `CC_ERR_` prefix codes
//! - **Constants**: role baselines and engine defaults

pub mod config;
pub mod constants;
pub mod error;
pub mod ids;
pub mod report;
pub mod role;
pub mod transaction;
pub mod user;

// Re-export all primary types at crate root for ergonomic imports:
//   use campuscredits_types::{User, Role, Transaction, ...};

pub use config::*;
pub use error::*;
pub use ids::*;
pub use report::*;
pub use role::*;
pub use transaction::*;
pub use user::*;

// Constants are accessed via `campuscredits_types::constants::FOO`
// (not re-exported to avoid name collisions).
