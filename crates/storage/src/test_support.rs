// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fixtures shared by the storage tests

use cellar_core::{
    Account, Container, ContainerId, ContainerKind, ContainerStatus, KindId, OwnerId, Transaction,
    TransactionId, TransactionType,
};
use chrono::{DateTime, TimeZone, Utc};

pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

pub fn owner() -> OwnerId {
    OwnerId::new("owner-1")
}

pub fn kind(owner: &OwnerId, id: &str, capacity: Option<f64>) -> ContainerKind {
    ContainerKind {
        id: KindId::new(id),
        owner: owner.clone(),
        name: id.to_string(),
        capacity_gallons: capacity,
        tare_weight_lbs: Some(110.0),
    }
}

pub fn container(owner: &OwnerId, id: &str, weight: f64) -> Container {
    Container {
        id: ContainerId::new(id),
        owner: owner.clone(),
        kind_id: KindId::new("barrel"),
        name: format!("Container {id}"),
        account: Account::Storage,
        status: if weight > 0.0 { ContainerStatus::Filled } else { ContainerStatus::Empty },
        net_weight_lbs: weight,
        tare_weight_lbs: Some(110.0),
        proof: if weight > 0.0 { Some(120.0) } else { None },
        temperature_f: None,
        product_id: None,
        location: None,
        notes: None,
        fill_date: None,
        created_at: epoch(),
        updated_at: epoch(),
    }
}

pub fn transaction(owner: &OwnerId, id: &str, container: &str, ty: TransactionType) -> Transaction {
    Transaction {
        id: TransactionId::new(id),
        owner: owner.clone(),
        created_at: epoch(),
        transaction_type: ty,
        container_id: Some(ContainerId::new(container)),
        product_id: None,
        proof: Some(120.0),
        volume_gallons: 1.0,
        proof_gallons: 1.2,
        temperature_f: None,
        notes: None,
    }
}
