// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-container async locks
//!
//! Locks are always taken in ascending id order, so two units that touch
//! the same pair of containers cannot deadlock.

use crate::error::StoreError;
use cellar_core::ContainerId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};
use tokio::time::Instant;

/// Table of one async mutex per container id. Entries exist only while some
/// unit holds or waits on them.
#[derive(Clone, Debug, Default)]
pub struct LockTable {
    locks: Arc<Mutex<HashMap<ContainerId, Arc<AsyncMutex<()>>>>>,
}

/// Guards held for the lifetime of a unit of work
#[derive(Debug)]
pub struct LockSet {
    table: LockTable,
    ids: Vec<ContainerId>,
    guards: Vec<OwnedMutexGuard<()>>,
}

impl Drop for LockSet {
    fn drop(&mut self) {
        self.guards.clear();
        self.table.prune(&self.ids);
    }
}

impl LockTable {
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&self, id: &ContainerId) -> Arc<AsyncMutex<()>> {
        let mut locks = self.locks.lock().unwrap_or_else(|e| e.into_inner());
        locks.entry(id.clone()).or_default().clone()
    }

    /// Forget mutexes nobody holds or waits on
    fn prune(&self, ids: &[ContainerId]) {
        let mut locks = self.locks.lock().unwrap_or_else(|e| e.into_inner());
        for id in ids {
            if locks.get(id).is_some_and(|lock| Arc::strong_count(lock) == 1) {
                locks.remove(id);
            }
        }
    }

    /// Lock every id, sorted and deduplicated, within `timeout` overall
    pub async fn acquire(
        &self,
        ids: &[ContainerId],
        timeout: Duration,
    ) -> Result<LockSet, StoreError> {
        let mut ids = ids.to_vec();
        ids.sort();
        ids.dedup();

        let deadline = Instant::now() + timeout;
        // Built up front so a timeout releases and prunes what was taken
        let mut set = LockSet {
            table: self.clone(),
            ids: Vec::with_capacity(ids.len()),
            guards: Vec::with_capacity(ids.len()),
        };
        for id in ids {
            let lock = self.entry(&id);
            set.ids.push(id.clone());
            match tokio::time::timeout_at(deadline, lock.lock_owned()).await {
                Ok(guard) => set.guards.push(guard),
                Err(_) => {
                    tracing::warn!(container = %id, ?timeout, "lock acquisition timed out");
                    return Err(StoreError::Conflict { id, timeout });
                }
            }
        }

        Ok(set)
    }
}

#[cfg(test)]
#[path = "locks_tests.rs"]
mod tests;
