//! # campuscredits-store
//!
//! The **record store port**: the document-oriented store holding user
//! profiles and transaction history, which is the user-visible source of
//! truth for credit balances.
//!
//! The engine only ever talks to [`RecordStore`]; [`MemoryStore`] is the
//! in-process reference implementation used by tests and small
//! deployments. A production deployment supplies its own adapter
//! (Firestore, Postgres, ...) behind the same trait.
//!
//! The store performs no schema migrations and no authentication; it
//! assumes the record shapes from `campuscredits-types`.

pub mod memory;
pub mod record_store;

pub use memory::MemoryStore;
pub use record_store::RecordStore;
