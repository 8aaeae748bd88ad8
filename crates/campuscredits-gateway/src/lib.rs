//! # campuscredits-gateway
//!
//! The **on-chain ledger port**: an abstraction over the external campus
//! token contract, which exposes exactly two operations —
//! `mint(to, amount, reason)` and `balanceOf(address)`.
//!
//! The engine treats the contract as an opaque capability reachable only
//! through [`ContractGateway`]. Failure semantics are the load-bearing
//! part of this crate: any gateway failure (no wallet connected, network
//! error, reverted transaction, timeout) is reported as a typed error
//! and is never fatal to dependents — the ledger writer and reconciler
//! both proceed without the on-chain effect.
//!
//! [`TimedGateway`] bounds every call with the caller-configured
//! deadline; [`MemoryLedger`] is the in-process implementation used by
//! tests.

pub mod contract_gateway;
pub mod memory;
pub mod timeout;

pub use contract_gateway::{ContractGateway, MintReceipt};
pub use memory::MemoryLedger;
pub use timeout::TimedGateway;
