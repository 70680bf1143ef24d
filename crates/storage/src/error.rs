// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::wal::WalError;
use cellar_core::ContainerId;
use std::time::Duration;
use thiserror::Error;

/// Errors from store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("container {id} is busy: lock not acquired within {timeout:?}")]
    Conflict { id: ContainerId, timeout: Duration },
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
    #[error("WAL error: {0}")]
    Wal(#[from] WalError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    pub fn container_not_found(id: &ContainerId) -> Self {
        StoreError::NotFound {
            kind: "container",
            id: id.to_string(),
        }
    }
}
