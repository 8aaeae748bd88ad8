//! # campuscredits-engine
//!
//! The dual-ledger credit reconciliation engine. Campus credits are
//! tracked in two places: the off-chain record store (profiles +
//! transaction history, user-visible source of truth) and the on-chain
//! token ledger (mint-only contract, reconciliation source of truth).
//! There is no distributed transaction between them.
//!
//! ## Components
//!
//! - [`IdentityGenerator`]: collision-checked wallet addresses and NFT
//!   display ids, plus the user provisioning flow.
//! - [`LedgerWriter`]: applies one credit/debit event — best-effort
//!   on-chain mint, then the mandatory off-chain record and balance
//!   update.
//! - [`Reconciler`]: bulk history clearing and the reset procedure that
//!   recomputes every off-chain balance from `baseline(role)` plus the
//!   on-chain balance.
//!
//! ## Consistency model
//!
//! The on-chain mint and the off-chain write are a two-step best-effort
//! sequence, not a transaction. Gateway failures are absorbed (the
//! off-chain ledger stays available when the chain is unreachable);
//! store failures always propagate. The resulting divergence window is
//! documented and closed by [`Reconciler::reset_and_reconcile`].
//!
//! ## Concurrency
//!
//! Each operation is an independent async unit of work; no global
//! serialization is imposed. Steps within one `apply_transaction` call
//! are causally ordered, but two concurrent calls against the same user
//! race on the credit read-modify-write. Deployments needing stronger
//! guarantees should serialize per user id in front of the engine.

pub mod identity;
pub mod reconciler;
pub mod writer;

pub use identity::IdentityGenerator;
pub use reconciler::Reconciler;
pub use writer::LedgerWriter;
