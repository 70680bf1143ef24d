// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Operation engine: the only way containers and the ledger change

use crate::error::EngineError;
use cellar_core::{
    Clock, Container, ContainerId, ContainerKind, IdGen, LedgerQuery, LedgerStats, OwnerId,
    Transaction, TransactionId, TransactionType,
};
use cellar_storage::{Store, UnitOfWork};
use tracing::Span;

/// Signed quantities recorded on a ledger entry
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Delta {
    pub volume_gallons: f64,
    pub proof_gallons: f64,
}

impl Delta {
    pub(crate) fn new(volume_gallons: f64, proof_gallons: f64) -> Self {
        Self {
            volume_gallons,
            proof_gallons,
        }
    }

    /// `volume_gallons` wine gallons at `proof`
    pub(crate) fn at_proof(volume_gallons: f64, proof: f64) -> Self {
        Self {
            volume_gallons,
            proof_gallons: volume_gallons * proof / 100.0,
        }
    }
}

/// Runs container operations as atomic units against a [`Store`]
#[derive(Clone)]
pub struct OperationEngine<S, C, I> {
    pub(crate) store: S,
    pub(crate) clock: C,
    pub(crate) ids: I,
}

impl<S, C, I> OperationEngine<S, C, I>
where
    S: Store,
    C: Clock,
    I: IdGen,
{
    pub fn new(store: S, clock: C, ids: I) -> Self {
        Self { store, clock, ids }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Register or replace a container kind
    pub async fn register_kind(&self, kind: ContainerKind) -> Result<ContainerKind, EngineError> {
        crate::validate::name(&kind.name)?;
        if let Some(capacity) = kind.capacity_gallons {
            crate::validate::positive("capacity", capacity)?;
        }
        crate::validate::optional_non_negative("tare weight", kind.tare_weight_lbs)?;
        self.store.put_kind(kind.clone()).await?;
        tracing::info!(owner = %kind.owner, kind = %kind.id, "kind registered");
        Ok(kind)
    }

    pub async fn kinds(&self, owner: &OwnerId) -> Result<Vec<ContainerKind>, EngineError> {
        Ok(self.store.kinds(owner).await?)
    }

    /// A container owned by `owner`; other owners' containers read as not found
    pub async fn container(
        &self,
        owner: &OwnerId,
        id: &ContainerId,
    ) -> Result<Container, EngineError> {
        self.store
            .container(owner, id)
            .await?
            .ok_or_else(|| EngineError::container_not_found(id))
    }

    pub async fn containers(&self, owner: &OwnerId) -> Result<Vec<Container>, EngineError> {
        Ok(self.store.containers(owner).await?)
    }

    /// Ledger entries matching `query`, newest first
    pub async fn transactions(
        &self,
        owner: &OwnerId,
        query: &LedgerQuery,
    ) -> Result<Vec<Transaction>, EngineError> {
        Ok(self.store.transactions(owner, query).await?)
    }

    pub async fn ledger_stats(&self, owner: &OwnerId) -> Result<LedgerStats, EngineError> {
        Ok(self.store.ledger_stats(owner).await?)
    }

    /// Load a locked container inside a unit
    pub(crate) fn load(unit: &S::Unit, id: &ContainerId) -> Result<Container, EngineError> {
        unit.container(id)?.ok_or_else(|| EngineError::container_not_found(id))
    }

    /// Build a ledger entry for `container` stamped with a fresh id and the current time
    pub(crate) fn entry(
        &self,
        transaction_type: TransactionType,
        container: &Container,
        delta: Delta,
        notes: Option<String>,
    ) -> Transaction {
        Transaction {
            id: TransactionId::new(self.ids.next()),
            owner: container.owner.clone(),
            created_at: self.clock.now(),
            transaction_type,
            container_id: Some(container.id.clone()),
            product_id: container.product_id.clone(),
            proof: container.proof,
            volume_gallons: delta.volume_gallons,
            proof_gallons: delta.proof_gallons,
            temperature_f: container.temperature_f,
            notes,
        }
    }
}

/// Log an operation's outcome inside its span
pub(crate) fn record<T>(span: &Span, result: &Result<T, EngineError>) {
    let _guard = span.enter();
    match result {
        Ok(_) => tracing::info!("committed"),
        Err(e @ EngineError::Storage(_)) => tracing::error!(error = %e, "storage failure"),
        Err(e) => tracing::warn!(error = %e, code = e.code(), "rejected"),
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
