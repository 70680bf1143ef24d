// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Physical operations: transfer, proof-down, adjust, bottle, reclassify

use crate::audit::format_quantity;
use crate::engine::{record, Delta, OperationEngine};
use crate::error::EngineError;
use crate::requests::{
    AdjustMethod, AdjustRequest, Applied, BottleRequest, RemainderAction, TransferRequest,
    Transferred,
};
use crate::validate;
use cellar_core::conversion::{
    bottled_volume_gallons, density, proof_gallons_to_weight, weight_to_gallons,
};
use cellar_core::{
    derive_status, Account, Clock, ContainerId, IdGen, OwnerId, TransactionType,
};
use cellar_storage::{Store, UnitOfWork};
use tracing::Instrument;

impl<S, C, I> OperationEngine<S, C, I>
where
    S: Store,
    C: Clock,
    I: IdGen,
{
    /// Move spirit from one container to another. Both containers and both
    /// ledger entries commit together or not at all.
    pub async fn transfer(
        &self,
        owner: &OwnerId,
        request: TransferRequest,
    ) -> Result<Transferred, EngineError> {
        let span = tracing::info_span!(
            "engine.transfer",
            %owner,
            source = %request.source,
            destination = %request.destination,
            weight_lbs = request.weight_lbs,
        );
        let result = self.transfer_unit(owner, &request).instrument(span.clone()).await;
        record(&span, &result);
        result
    }

    async fn transfer_unit(
        &self,
        owner: &OwnerId,
        request: &TransferRequest,
    ) -> Result<Transferred, EngineError> {
        if request.source == request.destination {
            return Err(EngineError::validation("source and destination must differ"));
        }
        let weight = validate::positive("weight", request.weight_lbs)?;
        let wine_gallons = validate::positive("wine gallons", request.wine_gallons)?;
        let proof = validate::proof("proof", request.proof)?;

        let lock = [request.source.clone(), request.destination.clone()];
        let mut unit = self.store.begin(owner, &lock).await?;
        let source = Self::load(&unit, &request.source)?;
        let destination = Self::load(&unit, &request.destination)?;

        let destination_kind = unit.kind(&destination.kind_id)?;
        validate::capacity(&destination, destination_kind.as_ref(), wine_gallons)?;

        let now = self.clock.now();

        let mut new_source = source.clone();
        new_source.net_weight_lbs = (source.net_weight_lbs - weight).max(0.0);
        new_source.status = derive_status(new_source.net_weight_lbs, source.status);
        new_source.updated_at = now;

        let source_proof = source.proof.unwrap_or(proof);
        let blended_weight = destination.net_weight_lbs + weight;
        let blended_proof = (destination.net_weight_lbs * destination.proof_or_zero()
            + weight * source_proof)
            / blended_weight;

        let mut new_destination = destination.clone();
        new_destination.net_weight_lbs = blended_weight;
        new_destination.proof = Some(blended_proof);
        new_destination.status = derive_status(blended_weight, destination.status);
        if source.product_id.is_some() {
            new_destination.product_id = source.product_id.clone();
        }
        if destination.net_weight_lbs <= 0.0 {
            new_destination.fill_date = Some(now);
        }
        new_destination.updated_at = now;

        let mut transfer_out = self.entry(
            TransactionType::TransferOut,
            &new_source,
            Delta::at_proof(-wine_gallons, proof),
            Some(format!("to {} ({})", destination.name, destination.id)),
        );
        transfer_out.proof = Some(proof);
        let mut transfer_in = self.entry(
            TransactionType::TransferIn,
            &new_destination,
            Delta::at_proof(wine_gallons, proof),
            Some(format!("from {} ({})", source.name, source.id)),
        );
        transfer_in.proof = Some(proof);

        unit.update_container(new_source.clone())?;
        unit.update_container(new_destination.clone())?;
        unit.append(transfer_out.clone())?;
        unit.append(transfer_in.clone())?;
        unit.commit()?;

        Ok(Transferred {
            source: new_source,
            destination: new_destination,
            transactions: vec![transfer_out, transfer_in],
        })
    }

    /// Dilute to a lower proof. Proof gallons are conserved; the added water
    /// shows up as extra weight.
    pub async fn proof_down(
        &self,
        owner: &OwnerId,
        id: &ContainerId,
        target_proof: f64,
    ) -> Result<Applied, EngineError> {
        let span = tracing::info_span!("engine.proof_down", %owner, container = %id, target_proof);
        let result = self.proof_down_unit(owner, id, target_proof).instrument(span.clone()).await;
        record(&span, &result);
        result
    }

    async fn proof_down_unit(
        &self,
        owner: &OwnerId,
        id: &ContainerId,
        target_proof: f64,
    ) -> Result<Applied, EngineError> {
        let target = validate::proof("target proof", target_proof)?;
        if target <= 0.0 {
            return Err(EngineError::validation("target proof must be greater than 0"));
        }

        let mut unit = self.store.begin(owner, std::slice::from_ref(id)).await?;
        let container = Self::load(&unit, id)?;

        let current = container.proof_or_zero();
        if target >= current {
            return Err(EngineError::InvalidProofTransition {
                container: id.clone(),
                current,
                target,
            });
        }
        if container.net_weight_lbs <= 0.0 {
            return Err(EngineError::validation(format!("container {id} is empty")));
        }

        let before = weight_to_gallons(current, container.net_weight_lbs);
        let new_weight = proof_gallons_to_weight(target, before.proof);
        let after = weight_to_gallons(target, new_weight);
        let water_gallons = (new_weight - container.net_weight_lbs) / density(0.0);

        let mut updated = container.clone();
        updated.proof = Some(target);
        updated.net_weight_lbs = new_weight;
        updated.status = derive_status(new_weight, container.status);
        updated.updated_at = self.clock.now();

        let notes = format!(
            "proof: {} -> {}, net_weight: {} -> {}, water added: {} gal",
            format_quantity(current),
            format_quantity(target),
            format_quantity(container.net_weight_lbs),
            format_quantity(new_weight),
            format_quantity(water_gallons),
        );
        let transaction = self.entry(
            TransactionType::ProofDown,
            &updated,
            Delta::new(after.wine - before.wine, 0.0),
            Some(notes),
        );

        unit.update_container(updated.clone())?;
        unit.append(transaction.clone())?;
        unit.commit()?;
        Ok(Applied {
            container: updated,
            transactions: vec![transaction],
        })
    }

    /// Add or remove spirit outside of a transfer (gauging corrections, samples)
    pub async fn adjust(
        &self,
        owner: &OwnerId,
        request: AdjustRequest,
    ) -> Result<Applied, EngineError> {
        let span = tracing::info_span!(
            "engine.adjust",
            %owner,
            container = %request.container,
            method = ?request.method,
        );
        let result = self.adjust_unit(owner, &request).instrument(span.clone()).await;
        record(&span, &result);
        result
    }

    async fn adjust_unit(
        &self,
        owner: &OwnerId,
        request: &AdjustRequest,
    ) -> Result<Applied, EngineError> {
        let weight = validate::positive("weight", request.weight_lbs)?;
        let wine_gallons = validate::positive("wine gallons", request.wine_gallons)?;

        let mut unit = self.store.begin(owner, std::slice::from_ref(&request.container)).await?;
        let container = Self::load(&unit, &request.container)?;

        let (new_weight, signed_gallons) = match request.method {
            AdjustMethod::Add => {
                let kind = unit.kind(&container.kind_id)?;
                validate::capacity(&container, kind.as_ref(), wine_gallons)?;
                (container.net_weight_lbs + weight, wine_gallons)
            }
            AdjustMethod::Remove => ((container.net_weight_lbs - weight).max(0.0), -wine_gallons),
        };

        let now = self.clock.now();
        let mut updated = container.clone();
        updated.net_weight_lbs = new_weight;
        updated.status = derive_status(new_weight, container.status);
        if container.net_weight_lbs <= 0.0 && new_weight > 0.0 {
            updated.fill_date = Some(now);
        }
        updated.updated_at = now;

        let notes = format!(
            "net_weight: {} -> {}",
            format_quantity(container.net_weight_lbs),
            format_quantity(new_weight)
        );
        let transaction = self.entry(
            request.method.transaction_type(),
            &updated,
            Delta::at_proof(signed_gallons, updated.proof_or_zero()),
            Some(notes),
        );

        unit.update_container(updated.clone())?;
        unit.append(transaction.clone())?;
        unit.commit()?;
        Ok(Applied {
            container: updated,
            transactions: vec![transaction],
        })
    }

    /// Draw spirit off into bottles; the container keeps the measured remainder
    pub async fn bottle(
        &self,
        owner: &OwnerId,
        request: BottleRequest,
    ) -> Result<Applied, EngineError> {
        let span = tracing::info_span!(
            "engine.bottle",
            %owner,
            container = %request.container,
            bottles = request.bottle_count,
            remainder = %request.remainder,
        );
        let result = self.bottle_unit(owner, &request).instrument(span.clone()).await;
        record(&span, &result);
        result
    }

    async fn bottle_unit(
        &self,
        owner: &OwnerId,
        request: &BottleRequest,
    ) -> Result<Applied, EngineError> {
        if request.bottle_count == 0 {
            return Err(EngineError::validation("bottle count must be at least 1"));
        }
        let remainder = validate::non_negative("remainder weight", request.remainder_weight_lbs)?;
        if request.remainder == RemainderAction::Empty && remainder > 0.0 {
            return Err(EngineError::validation(format!(
                "remainder action empty contradicts remainder weight {remainder} lbs"
            )));
        }

        let mut unit = self.store.begin(owner, std::slice::from_ref(&request.container)).await?;
        let container = Self::load(&unit, &request.container)?;
        if container.net_weight_lbs <= 0.0 {
            return Err(EngineError::validation(format!("container {} is empty", container.id)));
        }

        let bottled = bottled_volume_gallons(request.bottle_size.liters(), request.bottle_count);
        let proof = container.proof_or_zero();

        let mut updated = container.clone();
        updated.net_weight_lbs = remainder;
        updated.status = derive_status(remainder, container.status);
        updated.updated_at = self.clock.now();

        let notes = format!(
            "{} x {} bottled, remainder {} ({} lbs)",
            request.bottle_count,
            request.bottle_size,
            request.remainder,
            format_quantity(remainder)
        );
        let transaction = self.entry(
            request.remainder.transaction_type(),
            &updated,
            Delta::at_proof(-bottled, proof),
            Some(notes),
        );

        unit.update_container(updated.clone())?;
        unit.append(transaction.clone())?;
        unit.commit()?;
        Ok(Applied {
            container: updated,
            transactions: vec![transaction],
        })
    }

    /// Reclassify a container's account. Changing to the account it already
    /// has records nothing.
    pub async fn change_account(
        &self,
        owner: &OwnerId,
        id: &ContainerId,
        account: Account,
    ) -> Result<Applied, EngineError> {
        let span = tracing::info_span!("engine.change_account", %owner, container = %id, %account);
        let result = self.change_account_unit(owner, id, account).instrument(span.clone()).await;
        record(&span, &result);
        result
    }

    async fn change_account_unit(
        &self,
        owner: &OwnerId,
        id: &ContainerId,
        account: Account,
    ) -> Result<Applied, EngineError> {
        let mut unit = self.store.begin(owner, std::slice::from_ref(id)).await?;
        let container = Self::load(&unit, id)?;
        if container.account == account {
            return Ok(Applied {
                container,
                transactions: Vec::new(),
            });
        }

        let mut updated = container.clone();
        updated.account = account;
        updated.updated_at = self.clock.now();

        let transaction = self.entry(
            TransactionType::ChangeAccount,
            &updated,
            Delta::default(),
            Some(format!("account: {} -> {}", container.account, account)),
        );

        unit.update_container(updated.clone())?;
        unit.append(transaction.clone())?;
        unit.commit()?;
        Ok(Applied {
            container: updated,
            transactions: vec![transaction],
        })
    }
}

#[cfg(test)]
#[path = "operations_tests.rs"]
mod tests;
