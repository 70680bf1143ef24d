// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the operation engine

use cellar_core::ContainerId;
use cellar_storage::StoreError;
use thiserror::Error;

/// Errors an operation reports to its caller. A failed operation leaves
/// containers and ledger exactly as they were.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid input: {0}")]
    Validation(String),
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
    #[error(
        "capacity exceeded for container {container}: \
         {current:.2} + {adding:.2} wine gallons exceeds {capacity:.2}"
    )]
    CapacityExceeded {
        container: ContainerId,
        capacity: f64,
        current: f64,
        adding: f64,
    },
    #[error(
        "cannot proof down container {container} from {current} to {target}: \
         target must be lower"
    )]
    InvalidProofTransition {
        container: ContainerId,
        current: f64,
        target: f64,
    },
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("storage error: {0}")]
    Storage(StoreError),
}

impl EngineError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        EngineError::Validation(message.into())
    }

    pub(crate) fn container_not_found(id: &ContainerId) -> Self {
        EngineError::NotFound {
            kind: "container",
            id: id.to_string(),
        }
    }

    /// Whether the caller may retry the same request unchanged
    pub fn is_retryable(&self) -> bool {
        matches!(self, EngineError::Conflict(_))
    }

    /// Short machine-readable name of the error class
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::Validation(_) => "validation",
            EngineError::NotFound { .. } => "not_found",
            EngineError::CapacityExceeded { .. } => "capacity_exceeded",
            EngineError::InvalidProofTransition { .. } => "invalid_proof_transition",
            EngineError::Conflict(_) => "conflict",
            EngineError::Storage(_) => "storage",
        }
    }
}

impl From<StoreError> for EngineError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Conflict { .. } => EngineError::Conflict(e.to_string()),
            StoreError::NotFound { kind, id } => EngineError::NotFound { kind, id },
            other => EngineError::Storage(other),
        }
    }
}
