// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Store and unit-of-work seams

use crate::error::StoreError;
use async_trait::async_trait;
use cellar_core::{
    Container, ContainerId, ContainerKind, KindId, LedgerQuery, LedgerStats, OwnerId, Transaction,
};

/// Backing store for containers, kinds and the ledger
#[async_trait]
pub trait Store: Clone + Send + Sync + 'static {
    type Unit: UnitOfWork;

    /// Start a unit of work holding locks on `lock` (any order, duplicates ok).
    ///
    /// Fails with [`StoreError::Conflict`] when a lock is not acquired in time.
    async fn begin(&self, owner: &OwnerId, lock: &[ContainerId]) -> Result<Self::Unit, StoreError>;

    async fn container(
        &self,
        owner: &OwnerId,
        id: &ContainerId,
    ) -> Result<Option<Container>, StoreError>;

    async fn containers(&self, owner: &OwnerId) -> Result<Vec<Container>, StoreError>;

    async fn kind(&self, owner: &OwnerId, id: &KindId) -> Result<Option<ContainerKind>, StoreError>;

    async fn kinds(&self, owner: &OwnerId) -> Result<Vec<ContainerKind>, StoreError>;

    /// Register or replace a container kind
    async fn put_kind(&self, kind: ContainerKind) -> Result<(), StoreError>;

    /// Ledger entries matching `query`, newest first
    async fn transactions(
        &self,
        owner: &OwnerId,
        query: &LedgerQuery,
    ) -> Result<Vec<Transaction>, StoreError>;

    async fn ledger_stats(&self, owner: &OwnerId) -> Result<LedgerStats, StoreError>;
}

/// Staged changes against one snapshot, committed all at once.
///
/// Reads see committed state overlaid with this unit's own staged writes.
/// Dropping a unit without calling [`UnitOfWork::commit`] discards it.
pub trait UnitOfWork: Send {
    fn owner(&self) -> &OwnerId;

    fn container(&self, id: &ContainerId) -> Result<Option<Container>, StoreError>;

    fn kind(&self, id: &KindId) -> Result<Option<ContainerKind>, StoreError>;

    fn insert_container(&mut self, container: Container) -> Result<(), StoreError>;

    /// Fails with [`StoreError::NotFound`] if the container does not exist
    fn update_container(&mut self, container: Container) -> Result<(), StoreError>;

    /// Fails with [`StoreError::NotFound`] if the container does not exist
    fn delete_container(&mut self, id: &ContainerId) -> Result<(), StoreError>;

    /// Append a ledger entry; entries are never updated or removed
    fn append(&mut self, transaction: Transaction) -> Result<(), StoreError>;

    /// Number of staged operations
    fn staged(&self) -> usize;

    fn commit(self) -> Result<(), StoreError>;
}
