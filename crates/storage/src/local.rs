// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-process store, optionally journaled to a WAL file

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::locks::{LockSet, LockTable};
use crate::operation::Operation;
use crate::state::MaterializedState;
use crate::store::{Store, UnitOfWork};
use crate::wal::Wal;
use async_trait::async_trait;
use cellar_core::{
    Container, ContainerId, ContainerKind, KindId, LedgerQuery, LedgerStats, OwnerId, Transaction,
};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

pub const WAL_FILE: &str = "wal.jsonl";

struct Inner {
    state: MaterializedState,
    wal: Option<Wal>,
}

impl Inner {
    /// Journal then apply; state is untouched if the journal write fails
    fn commit(&mut self, operations: Vec<Operation>) -> Result<(), StoreError> {
        if let Some(wal) = self.wal.as_mut() {
            wal.append(operations.clone())?;
        }
        for op in &operations {
            self.state.apply(op);
        }
        Ok(())
    }
}

/// Store backed by memory, with an optional WAL for durability
#[derive(Clone)]
pub struct LocalStore {
    inner: Arc<Mutex<Inner>>,
    locks: LockTable,
    config: StoreConfig,
}

impl LocalStore {
    /// Volatile store for tests and one-shot use
    pub fn in_memory(config: StoreConfig) -> Self {
        Self::from_parts(MaterializedState::new(), None, config)
    }

    /// Open or create a store in `dir`, replaying its WAL
    pub fn open(dir: &Path, config: StoreConfig) -> Result<Self, StoreError> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(WAL_FILE);

        let replay = Wal::replay(&path)?;
        if let Some(corruption) = &replay.corruption {
            tracing::warn!(
                line = corruption.line,
                reason = %corruption.reason,
                "stopping WAL replay at corrupt entry"
            );
        }

        let mut state = MaterializedState::new();
        for entry in &replay.entries {
            for op in &entry.operations {
                state.apply(op);
            }
        }
        tracing::debug!(entries = replay.entries.len(), "WAL replayed");

        let wal = Wal::open(&path, &replay)?;
        Ok(Self::from_parts(state, Some(wal), config))
    }

    fn from_parts(state: MaterializedState, wal: Option<Wal>, config: StoreConfig) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner { state, wal })),
            locks: LockTable::new(),
            config,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl Store for LocalStore {
    type Unit = LocalUnit;

    async fn begin(&self, owner: &OwnerId, lock: &[ContainerId]) -> Result<LocalUnit, StoreError> {
        let locks = self.locks.acquire(lock, self.config.lock_timeout).await?;
        Ok(LocalUnit {
            inner: Arc::clone(&self.inner),
            owner: owner.clone(),
            staged: Vec::new(),
            _locks: locks,
        })
    }

    async fn container(
        &self,
        owner: &OwnerId,
        id: &ContainerId,
    ) -> Result<Option<Container>, StoreError> {
        Ok(self.lock().state.container(owner, id).cloned())
    }

    async fn containers(&self, owner: &OwnerId) -> Result<Vec<Container>, StoreError> {
        Ok(self.lock().state.containers(owner))
    }

    async fn kind(
        &self,
        owner: &OwnerId,
        id: &KindId,
    ) -> Result<Option<ContainerKind>, StoreError> {
        Ok(self.lock().state.kind(owner, id).cloned())
    }

    async fn kinds(&self, owner: &OwnerId) -> Result<Vec<ContainerKind>, StoreError> {
        Ok(self.lock().state.kinds(owner))
    }

    async fn put_kind(&self, kind: ContainerKind) -> Result<(), StoreError> {
        self.lock().commit(vec![Operation::PutKind { kind }])
    }

    async fn transactions(
        &self,
        owner: &OwnerId,
        query: &LedgerQuery,
    ) -> Result<Vec<Transaction>, StoreError> {
        Ok(self.lock().state.transactions(owner, query))
    }

    async fn ledger_stats(&self, owner: &OwnerId) -> Result<LedgerStats, StoreError> {
        Ok(self.lock().state.ledger_stats(owner))
    }
}

/// Unit of work over a [`LocalStore`]
pub struct LocalUnit {
    inner: Arc<Mutex<Inner>>,
    owner: OwnerId,
    staged: Vec<Operation>,
    _locks: LockSet,
}

impl LocalUnit {
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Latest staged write to `id`: `Some(Some(c))` for insert/update, `Some(None)` for delete
    fn staged_container(&self, id: &ContainerId) -> Option<Option<&Container>> {
        self.staged.iter().rev().find_map(|op| match op {
            Operation::InsertContainer { container } | Operation::UpdateContainer { container }
                if &container.id == id =>
            {
                Some(Some(container))
            }
            Operation::DeleteContainer { id: deleted } if deleted == id => Some(None),
            _ => None,
        })
    }

    fn require_container(&self, id: &ContainerId) -> Result<(), StoreError> {
        match self.container(id)? {
            Some(_) => Ok(()),
            None => Err(StoreError::container_not_found(id)),
        }
    }
}

impl UnitOfWork for LocalUnit {
    fn owner(&self) -> &OwnerId {
        &self.owner
    }

    fn container(&self, id: &ContainerId) -> Result<Option<Container>, StoreError> {
        if let Some(staged) = self.staged_container(id) {
            return Ok(staged.cloned());
        }
        Ok(self.lock().state.container(&self.owner, id).cloned())
    }

    fn kind(&self, id: &KindId) -> Result<Option<ContainerKind>, StoreError> {
        Ok(self.lock().state.kind(&self.owner, id).cloned())
    }

    fn insert_container(&mut self, container: Container) -> Result<(), StoreError> {
        self.staged.push(Operation::InsertContainer { container });
        Ok(())
    }

    fn update_container(&mut self, container: Container) -> Result<(), StoreError> {
        self.require_container(&container.id)?;
        self.staged.push(Operation::UpdateContainer { container });
        Ok(())
    }

    fn delete_container(&mut self, id: &ContainerId) -> Result<(), StoreError> {
        self.require_container(id)?;
        self.staged.push(Operation::DeleteContainer { id: id.clone() });
        Ok(())
    }

    fn append(&mut self, transaction: Transaction) -> Result<(), StoreError> {
        self.staged.push(Operation::AppendTransaction { transaction });
        Ok(())
    }

    fn staged(&self) -> usize {
        self.staged.len()
    }

    fn commit(self) -> Result<(), StoreError> {
        if self.staged.is_empty() {
            return Ok(());
        }
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.commit(self.staged)
    }
}

#[cfg(test)]
#[path = "local_tests.rs"]
mod tests;
