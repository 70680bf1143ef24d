// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Materialized state from WAL replay

use crate::operation::Operation;
use cellar_core::{
    Container, ContainerId, ContainerKind, KindId, LedgerQuery, LedgerStats, OwnerId, Transaction,
};
use std::collections::{BTreeMap, HashMap};

/// Committed containers, kinds and ledger, rebuilt by applying operations in order
#[derive(Debug, Default)]
pub struct MaterializedState {
    kinds: BTreeMap<(OwnerId, KindId), ContainerKind>,
    containers: HashMap<ContainerId, Container>,
    /// Append order; never rewritten
    transactions: Vec<Transaction>,
}

impl MaterializedState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an operation to update the state
    pub fn apply(&mut self, op: &Operation) {
        match op {
            Operation::PutKind { kind } => {
                self.kinds.insert((kind.owner.clone(), kind.id.clone()), kind.clone());
            }
            Operation::InsertContainer { container } | Operation::UpdateContainer { container } => {
                self.containers.insert(container.id.clone(), container.clone());
            }
            Operation::DeleteContainer { id } => {
                self.containers.remove(id);
            }
            Operation::AppendTransaction { transaction } => {
                self.transactions.push(transaction.clone());
            }
        }
    }

    /// A container visible to `owner`
    pub fn container(&self, owner: &OwnerId, id: &ContainerId) -> Option<&Container> {
        self.containers.get(id).filter(|c| &c.owner == owner)
    }

    /// All of an owner's containers, ordered by name then id
    pub fn containers(&self, owner: &OwnerId) -> Vec<Container> {
        let mut list: Vec<Container> =
            self.containers.values().filter(|c| &c.owner == owner).cloned().collect();
        list.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        list
    }

    pub fn kind(&self, owner: &OwnerId, id: &KindId) -> Option<&ContainerKind> {
        self.kinds.get(&(owner.clone(), id.clone()))
    }

    pub fn kinds(&self, owner: &OwnerId) -> Vec<ContainerKind> {
        self.kinds.values().filter(|k| &k.owner == owner).cloned().collect()
    }

    pub fn transactions(&self, owner: &OwnerId, query: &LedgerQuery) -> Vec<Transaction> {
        query.select(self.transactions.iter().filter(|tx| &tx.owner == owner))
    }

    pub fn ledger_stats(&self, owner: &OwnerId) -> LedgerStats {
        self.transactions.iter().filter(|tx| &tx.owner == owner).collect()
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
