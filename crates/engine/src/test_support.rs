// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fixtures shared by the engine tests

use crate::{CreateContainer, OperationEngine};
use cellar_core::{
    derive_status, Account, Container, ContainerId, ContainerKind, ContainerStatus, FakeClock,
    KindId, LedgerQuery, OwnerId, SequentialIdGen, Transaction,
};
use cellar_storage::{LocalStore, StoreConfig};
use chrono::{TimeZone, Utc};
use std::time::Duration;

pub type TestEngine = OperationEngine<LocalStore, FakeClock, SequentialIdGen>;

pub const BARREL: &str = "barrel";
pub const SMALL: &str = "small";
pub const TANK: &str = "tank";

pub fn owner() -> OwnerId {
    OwnerId::new("owner-1")
}

pub fn kind(id: &str, capacity: Option<f64>) -> ContainerKind {
    ContainerKind {
        id: KindId::new(id),
        owner: owner(),
        name: id.to_string(),
        capacity_gallons: capacity,
        tare_weight_lbs: Some(110.0),
    }
}

/// A detached container value for pure-function tests
pub fn container(id: &str, weight: f64, proof: Option<f64>) -> Container {
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    Container {
        id: ContainerId::new(id),
        owner: owner(),
        kind_id: KindId::new(BARREL),
        name: format!("Container {id}"),
        account: Account::Storage,
        status: derive_status(weight, ContainerStatus::Empty),
        net_weight_lbs: weight,
        tare_weight_lbs: Some(110.0),
        proof,
        temperature_f: None,
        product_id: None,
        location: None,
        notes: None,
        fill_date: None,
        created_at: now,
        updated_at: now,
    }
}

/// Engine over an in-memory store with three kinds: a 53 gal barrel, a
/// 50 gal small barrel and a 5000 gal tank
pub async fn engine() -> TestEngine {
    engine_with_timeout(StoreConfig::DEFAULT_LOCK_TIMEOUT).await
}

pub async fn engine_with_timeout(lock_timeout: Duration) -> TestEngine {
    let store = LocalStore::in_memory(StoreConfig::with_lock_timeout(lock_timeout));
    let engine = OperationEngine::new(store, FakeClock::new(), SequentialIdGen::new("id"));
    engine.register_kind(kind(BARREL, Some(53.0))).await.unwrap();
    engine.register_kind(kind(SMALL, Some(50.0))).await.unwrap();
    engine.register_kind(kind(TANK, Some(5000.0))).await.unwrap();
    engine
}

pub async fn create(
    engine: &TestEngine,
    kind_id: &str,
    name: &str,
    weight: f64,
    proof: Option<f64>,
) -> Container {
    let mut request = CreateContainer::new(kind_id);
    request.name = Some(name.to_string());
    request.net_weight_lbs = weight;
    request.proof = proof;
    engine.create_container(&owner(), request).await.unwrap().container
}

pub async fn ledger(engine: &TestEngine) -> Vec<Transaction> {
    engine.transactions(&owner(), &LedgerQuery::default()).await.unwrap()
}

pub async fn ledger_for(engine: &TestEngine, id: &ContainerId) -> Vec<Transaction> {
    engine.transactions(&owner(), &LedgerQuery::for_container(id.clone())).await.unwrap()
}
