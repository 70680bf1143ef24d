// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced store wrapper for consistent observability

use crate::error::StoreError;
use crate::store::{Store, UnitOfWork};
use async_trait::async_trait;
use cellar_core::{
    Container, ContainerId, ContainerKind, KindId, LedgerQuery, LedgerStats, OwnerId, Transaction,
};
use std::time::Instant;
use tracing::Instrument;

/// Wrapper that adds tracing to any Store
#[derive(Clone)]
pub struct TracedStore<S> {
    inner: S,
}

impl<S> TracedStore<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

#[async_trait]
impl<S: Store> Store for TracedStore<S> {
    type Unit = TracedUnit<S::Unit>;

    async fn begin(&self, owner: &OwnerId, lock: &[ContainerId]) -> Result<Self::Unit, StoreError> {
        let span = tracing::info_span!("store.begin", %owner, containers = lock.len());

        let start = Instant::now();
        let result = self.inner.begin(owner, lock).instrument(span.clone()).await;
        let wait_ms = start.elapsed().as_millis() as u64;
        let _guard = span.enter();

        match result {
            Ok(unit) => {
                tracing::debug!(wait_ms, "locks acquired");
                Ok(TracedUnit {
                    inner: unit,
                    started: Instant::now(),
                })
            }
            Err(e) => {
                tracing::warn!(wait_ms, error = %e, "begin failed");
                Err(e)
            }
        }
    }

    async fn container(
        &self,
        owner: &OwnerId,
        id: &ContainerId,
    ) -> Result<Option<Container>, StoreError> {
        let result = self.inner.container(owner, id).await;
        let found = result.as_ref().map(Option::is_some).ok();
        tracing::trace!(%owner, container = %id, ?found, "read container");
        result
    }

    async fn containers(&self, owner: &OwnerId) -> Result<Vec<Container>, StoreError> {
        self.inner.containers(owner).await
    }

    async fn kind(
        &self,
        owner: &OwnerId,
        id: &KindId,
    ) -> Result<Option<ContainerKind>, StoreError> {
        self.inner.kind(owner, id).await
    }

    async fn kinds(&self, owner: &OwnerId) -> Result<Vec<ContainerKind>, StoreError> {
        self.inner.kinds(owner).await
    }

    async fn put_kind(&self, kind: ContainerKind) -> Result<(), StoreError> {
        let span = tracing::info_span!("store.put_kind", owner = %kind.owner, kind = %kind.id);

        let result = self.inner.put_kind(kind).instrument(span.clone()).await;
        let _guard = span.enter();
        match &result {
            Ok(()) => tracing::info!("kind stored"),
            Err(e) => tracing::error!(error = %e, "put_kind failed"),
        }
        result
    }

    async fn transactions(
        &self,
        owner: &OwnerId,
        query: &LedgerQuery,
    ) -> Result<Vec<Transaction>, StoreError> {
        let result = self.inner.transactions(owner, query).await;
        tracing::debug!(%owner, returned = result.as_ref().map(Vec::len).ok(), "ledger query");
        result
    }

    async fn ledger_stats(&self, owner: &OwnerId) -> Result<LedgerStats, StoreError> {
        self.inner.ledger_stats(owner).await
    }
}

/// Unit wrapper that logs commit outcome and how long the unit was held
pub struct TracedUnit<U> {
    inner: U,
    started: Instant,
}

impl<U: UnitOfWork> UnitOfWork for TracedUnit<U> {
    fn owner(&self) -> &OwnerId {
        self.inner.owner()
    }

    fn container(&self, id: &ContainerId) -> Result<Option<Container>, StoreError> {
        self.inner.container(id)
    }

    fn kind(&self, id: &KindId) -> Result<Option<ContainerKind>, StoreError> {
        self.inner.kind(id)
    }

    fn insert_container(&mut self, container: Container) -> Result<(), StoreError> {
        self.inner.insert_container(container)
    }

    fn update_container(&mut self, container: Container) -> Result<(), StoreError> {
        self.inner.update_container(container)
    }

    fn delete_container(&mut self, id: &ContainerId) -> Result<(), StoreError> {
        self.inner.delete_container(id)
    }

    fn append(&mut self, transaction: Transaction) -> Result<(), StoreError> {
        self.inner.append(transaction)
    }

    fn staged(&self) -> usize {
        self.inner.staged()
    }

    fn commit(self) -> Result<(), StoreError> {
        let operations = self.inner.staged();
        let held_ms = self.started.elapsed().as_millis() as u64;
        let result = self.inner.commit();

        match &result {
            Ok(()) => tracing::debug!(operations, held_ms, "unit committed"),
            Err(e) => tracing::error!(operations, held_ms, error = %e, "commit failed"),
        }
        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
