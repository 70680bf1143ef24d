// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cellar-storage: atomic persistence for containers and the ledger
//!
//! A [`Store`] hands out [`UnitOfWork`]s that hold per-container locks.
//! Everything staged in a unit is committed as a single checksummed
//! write-ahead log entry, so a commit lands whole or not at all.

mod config;
mod error;
mod local;
mod locks;
mod operation;
mod state;
mod store;
mod traced;
pub mod wal;

#[cfg(test)]
mod test_support;

pub use config::StoreConfig;
pub use error::StoreError;
pub use local::{LocalStore, LocalUnit, WAL_FILE};
pub use locks::{LockSet, LockTable};
pub use operation::Operation;
pub use state::MaterializedState;
pub use store::{Store, UnitOfWork};
pub use traced::{TracedStore, TracedUnit};
pub use wal::{Wal, WalEntry, WalError};
