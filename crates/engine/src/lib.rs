// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cellar-engine: atomic container operations with an auditable ledger
//!
//! Every operation loads its containers under lock, validates, computes new
//! quantities through `cellar_core::conversion`, then commits the container
//! writes and ledger entries as one unit of work.

mod audit;
mod engine;
mod error;
mod lifecycle;
mod operations;
mod requests;
mod validate;

#[cfg(test)]
mod test_support;

pub use audit::{diff, edit_transaction_type, format_quantity, notes, FieldChange};
pub use engine::OperationEngine;
pub use error::EngineError;
pub use requests::{
    AdjustMethod, AdjustRequest, Applied, BottleRequest, ContainerEdit, CreateContainer,
    RemainderAction, TransferRequest, Transferred,
};
