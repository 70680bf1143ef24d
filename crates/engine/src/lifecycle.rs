// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Create, delete and edit containers

use crate::audit;
use crate::engine::{record, Delta, OperationEngine};
use crate::error::EngineError;
use crate::requests::{Applied, ContainerEdit, CreateContainer};
use crate::validate;
use cellar_core::conversion::weight_to_gallons;
use cellar_core::{
    derive_status, Clock, Container, ContainerId, ContainerStatus, IdGen, OwnerId,
    TransactionType,
};
use cellar_storage::{Store, UnitOfWork};
use tracing::Instrument;

impl<S, C, I> OperationEngine<S, C, I>
where
    S: Store,
    C: Clock,
    I: IdGen,
{
    /// Create one container and its creation entry
    pub async fn create_container(
        &self,
        owner: &OwnerId,
        request: CreateContainer,
    ) -> Result<Applied, EngineError> {
        let mut created = self.create_containers(owner, request, 1).await?;
        created
            .pop()
            .ok_or_else(|| EngineError::validation("no container created"))
    }

    /// Create `count` identical containers in one unit. Names get a ` #n`
    /// suffix when more than one is made.
    pub async fn create_containers(
        &self,
        owner: &OwnerId,
        request: CreateContainer,
        count: u32,
    ) -> Result<Vec<Applied>, EngineError> {
        let span = tracing::info_span!("engine.create", %owner, kind = %request.kind_id, count);
        let result = self.create_unit(owner, request, count).instrument(span.clone()).await;
        record(&span, &result);
        result
    }

    async fn create_unit(
        &self,
        owner: &OwnerId,
        request: CreateContainer,
        count: u32,
    ) -> Result<Vec<Applied>, EngineError> {
        if count == 0 {
            return Err(EngineError::validation("count must be at least 1"));
        }
        let net_weight = validate::non_negative("net weight", request.net_weight_lbs)?;
        let proof = validate::optional_proof("proof", request.proof)?;
        let tare = validate::optional_non_negative("tare weight", request.tare_weight_lbs)?;
        let temperature = validate::finite("temperature", request.temperature_f)?;
        let base_name = request.name.as_deref().map(validate::name).transpose()?;
        let status = match request.status {
            Some(status) => {
                validate::status_matches_weight(status, net_weight)?;
                status
            }
            None => derive_status(net_weight, ContainerStatus::Empty),
        };

        let ids: Vec<ContainerId> = (0..count).map(|_| ContainerId::new(self.ids.next())).collect();
        let mut unit = self.store.begin(owner, &ids).await?;

        let kind = unit.kind(&request.kind_id)?.ok_or_else(|| EngineError::NotFound {
            kind: "container kind",
            id: request.kind_id.to_string(),
        })?;
        let Some(capacity) = kind.capacity_gallons else {
            return Err(EngineError::validation(format!(
                "container kind {} has no capacity",
                kind.id
            )));
        };

        let gallons = weight_to_gallons(proof.unwrap_or(0.0), net_weight);
        let transaction_type = if status == ContainerStatus::Empty {
            TransactionType::CreateEmptyContainer
        } else {
            TransactionType::CreateFilledContainer
        };
        let base_name = base_name.unwrap_or_else(|| kind.name.clone());
        let now = self.clock.now();

        let mut created = Vec::with_capacity(ids.len());
        for (n, id) in ids.into_iter().enumerate() {
            validate::fits(&id, Some(capacity), 0.0, gallons.wine)?;

            let name =
                if count > 1 { format!("{base_name} #{}", n + 1) } else { base_name.clone() };
            let container = Container {
                id,
                owner: owner.clone(),
                kind_id: kind.id.clone(),
                name,
                account: request.account,
                status,
                net_weight_lbs: net_weight,
                tare_weight_lbs: tare.or(kind.tare_weight_lbs),
                proof,
                temperature_f: temperature,
                product_id: request.product_id.clone(),
                location: request.location.clone(),
                notes: request.notes.clone(),
                fill_date: (net_weight > 0.0).then_some(now),
                created_at: now,
                updated_at: now,
            };
            let notes = format!("created {} from kind {}", container.name, kind.name);
            let transaction = self.entry(
                transaction_type,
                &container,
                Delta::new(gallons.wine, gallons.proof),
                Some(notes),
            );

            unit.insert_container(container.clone())?;
            unit.append(transaction.clone())?;
            created.push(Applied {
                container,
                transactions: vec![transaction],
            });
        }

        unit.commit()?;
        Ok(created)
    }

    /// Record the container's final state in the ledger, then remove it
    pub async fn delete_container(
        &self,
        owner: &OwnerId,
        id: &ContainerId,
    ) -> Result<Applied, EngineError> {
        let span = tracing::info_span!("engine.delete", %owner, container = %id);
        let result = self.delete_unit(owner, id).instrument(span.clone()).await;
        record(&span, &result);
        result
    }

    async fn delete_unit(&self, owner: &OwnerId, id: &ContainerId) -> Result<Applied, EngineError> {
        let mut unit = self.store.begin(owner, std::slice::from_ref(id)).await?;
        let container = Self::load(&unit, id)?;

        let transaction_type = if container.status == ContainerStatus::Empty {
            TransactionType::DeleteEmptyContainer
        } else {
            TransactionType::DeleteFilledContainer
        };
        let gallons = container.gallons();
        let notes = format!(
            "name: {}, product: {}, kind: {}",
            container.name,
            container.product_id.as_ref().map(|p| p.as_str()).unwrap_or("none"),
            container.kind_id
        );
        let transaction = self.entry(
            transaction_type,
            &container,
            Delta::new(-gallons.wine, -gallons.proof),
            Some(notes),
        );

        unit.append(transaction.clone())?;
        unit.delete_container(id)?;
        unit.commit()?;
        Ok(Applied {
            container,
            transactions: vec![transaction],
        })
    }

    /// Apply field changes; a ledger entry is written only when a tracked field changed
    pub async fn edit_container(
        &self,
        owner: &OwnerId,
        id: &ContainerId,
        edit: ContainerEdit,
    ) -> Result<Applied, EngineError> {
        let span = tracing::info_span!("engine.edit", %owner, container = %id);
        let result = self.edit_unit(owner, id, edit).instrument(span.clone()).await;
        record(&span, &result);
        result
    }

    async fn edit_unit(
        &self,
        owner: &OwnerId,
        id: &ContainerId,
        edit: ContainerEdit,
    ) -> Result<Applied, EngineError> {
        let name = edit.name.as_deref().map(validate::name).transpose()?;
        let proof = edit.proof.map(|p| validate::optional_proof("proof", p)).transpose()?;
        let tare = edit
            .tare_weight_lbs
            .map(|t| validate::optional_non_negative("tare weight", t))
            .transpose()?;
        let net_weight = edit
            .net_weight_lbs
            .map(|w| validate::non_negative("net weight", w))
            .transpose()?;
        let temperature =
            edit.temperature_f.map(|t| validate::finite("temperature", t)).transpose()?;

        let mut unit = self.store.begin(owner, std::slice::from_ref(id)).await?;
        let old = Self::load(&unit, id)?;

        let mut new = old.clone();
        if let Some(name) = name {
            new.name = name;
        }
        if let Some(proof) = proof {
            new.proof = proof;
        }
        if let Some(product_id) = edit.product_id {
            new.product_id = product_id;
        }
        if let Some(account) = edit.account {
            new.account = account;
        }
        if let Some(tare) = tare {
            new.tare_weight_lbs = tare;
        }
        if let Some(net_weight) = net_weight {
            new.net_weight_lbs = net_weight;
        }
        if let Some(temperature) = temperature {
            new.temperature_f = temperature;
        }
        if let Some(location) = edit.location {
            new.location = location;
        }
        if let Some(notes) = edit.notes {
            new.notes = notes;
        }
        new.status = match edit.status {
            Some(status) => {
                validate::status_matches_weight(status, new.net_weight_lbs)?;
                status
            }
            None => derive_status(new.net_weight_lbs, old.status),
        };

        if new == old {
            return Ok(Applied {
                container: old,
                transactions: Vec::new(),
            });
        }

        let now = self.clock.now();
        new.updated_at = now;
        if old.net_weight_lbs <= 0.0 && new.net_weight_lbs > 0.0 {
            new.fill_date = Some(now);
        }

        let changes = audit::diff(&old, &new);
        let mut transactions = Vec::new();
        if !changes.is_empty() {
            let delta = match (old.proof, new.proof) {
                (Some(old_proof), Some(new_proof)) => {
                    let before = weight_to_gallons(old_proof, old.net_weight_lbs);
                    let after = weight_to_gallons(new_proof, new.net_weight_lbs);
                    Delta::new(after.wine - before.wine, after.proof - before.proof)
                }
                _ => Delta::default(),
            };
            let transaction_type = audit::edit_transaction_type(old.status, new.status);
            transactions.push(self.entry(
                transaction_type,
                &new,
                delta,
                Some(audit::notes(&changes)),
            ));
        }

        unit.update_container(new.clone())?;
        for transaction in &transactions {
            unit.append(transaction.clone())?;
        }
        unit.commit()?;

        tracing::debug!(changed = changes.len(), "edit applied");
        Ok(Applied {
            container: new,
            transactions,
        })
    }
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
