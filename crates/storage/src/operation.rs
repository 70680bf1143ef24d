// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Journaled state changes

use cellar_core::{Container, ContainerId, ContainerKind, Transaction};
use serde::{Deserialize, Serialize};

/// One state change. A commit journals a batch of these as a single entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    PutKind { kind: ContainerKind },
    InsertContainer { container: Container },
    UpdateContainer { container: Container },
    DeleteContainer { id: ContainerId },
    AppendTransaction { transaction: Transaction },
}

impl Operation {
    /// Container this operation writes, if any
    pub fn container_id(&self) -> Option<&ContainerId> {
        match self {
            Operation::InsertContainer { container } | Operation::UpdateContainer { container } => {
                Some(&container.id)
            }
            Operation::DeleteContainer { id } => Some(id),
            Operation::PutKind { .. } | Operation::AppendTransaction { .. } => None,
        }
    }
}
