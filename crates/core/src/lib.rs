// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cellar-core: domain model for bulk spirit inventory
//!
//! This crate provides:
//! - TTB density and temperature-correction tables
//! - Quantity conversions between weight, wine gallons and proof gallons
//! - Containers, container kinds and status derivation
//! - Ledger transactions and ledger queries

pub mod clock;
pub mod id;

pub mod conversion;

pub mod container;
pub mod ledger;
pub mod transaction;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use container::{
    derive_status, Account, Container, ContainerKind, ContainerStatus, ParseEnumError,
};
pub use conversion::{BottleSize, Gallons, Measurement};
pub use id::{
    ContainerId, IdGen, KindId, OwnerId, ProductId, SequentialIdGen, TransactionId, UuidIdGen,
};
pub use ledger::{LedgerQuery, LedgerStats};
pub use transaction::{Transaction, TransactionType};
