// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::test_support::{create, engine, kind, ledger, ledger_for, owner, BARREL, SMALL, TANK};
use crate::{ContainerEdit, CreateContainer, EngineError};
use cellar_core::conversion::gallons_to_weight;
use cellar_core::{Account, ContainerStatus, KindId, ProductId, TransactionType};

#[tokio::test]
async fn create_empty_container_logs_create_empty() {
    let engine = engine().await;
    let created = engine
        .create_container(&owner(), CreateContainer::new(BARREL))
        .await
        .unwrap();

    let container = &created.container;
    assert_eq!(container.status, ContainerStatus::Empty);
    assert_eq!(container.name, BARREL);
    assert_eq!(container.tare_weight_lbs, Some(110.0));
    assert!(container.fill_date.is_none());

    assert_eq!(created.transactions.len(), 1);
    let entry = &created.transactions[0];
    assert_eq!(entry.transaction_type, TransactionType::CreateEmptyContainer);
    assert_eq!(entry.volume_gallons, 0.0);
    assert_eq!(ledger(&engine).await, created.transactions);
}

#[tokio::test]
async fn create_filled_container_carries_initial_quantities() {
    let engine = engine().await;
    let weight = gallons_to_weight(120.0, 40.0);
    let mut request = CreateContainer::new(BARREL);
    request.net_weight_lbs = weight;
    request.proof = Some(120.0);
    request.product_id = Some(ProductId::new("rye"));
    request.account = Account::Production;

    let created = engine.create_container(&owner(), request).await.unwrap();
    assert_eq!(created.container.status, ContainerStatus::Filled);
    assert!(created.container.fill_date.is_some());

    let entry = &created.transactions[0];
    assert_eq!(entry.transaction_type, TransactionType::CreateFilledContainer);
    assert_eq!(entry.proof, Some(120.0));
    assert_eq!(entry.product_id, Some(ProductId::new("rye")));
    assert!((entry.volume_gallons - 40.0).abs() < 1e-9);
    assert!((entry.proof_gallons - 48.0).abs() < 1e-9);
}

#[tokio::test]
async fn create_with_unknown_kind_is_not_found() {
    let engine = engine().await;
    let err = engine
        .create_container(&owner(), CreateContainer::new("amphora"))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::NotFound { kind: "container kind", .. }));
    assert!(ledger(&engine).await.is_empty());
}

#[tokio::test]
async fn create_requires_a_kind_with_capacity() {
    let engine = engine().await;
    engine.register_kind(kind("open-vat", None)).await.unwrap();

    let err = engine
        .create_container(&owner(), CreateContainer::new("open-vat"))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Validation(_)));
}

#[tokio::test]
async fn create_rejects_initial_fill_beyond_capacity() {
    let engine = engine().await;
    let mut request = CreateContainer::new(SMALL);
    request.net_weight_lbs = gallons_to_weight(100.0, 51.0);
    request.proof = Some(100.0);

    let err = engine.create_container(&owner(), request).await.unwrap_err();
    assert!(matches!(err, EngineError::CapacityExceeded { .. }));
    assert!(engine.containers(&owner()).await.unwrap().is_empty());
}

#[tokio::test]
async fn create_rejects_contradictory_status_and_bad_numbers() {
    let engine = engine().await;

    let mut request = CreateContainer::new(BARREL);
    request.status = Some(ContainerStatus::Filled);
    assert!(matches!(
        engine.create_container(&owner(), request).await,
        Err(EngineError::Validation(_))
    ));

    let mut request = CreateContainer::new(BARREL);
    request.proof = Some(201.0);
    assert!(engine.create_container(&owner(), request).await.is_err());

    let mut request = CreateContainer::new(BARREL);
    request.net_weight_lbs = -5.0;
    assert!(engine.create_container(&owner(), request).await.is_err());

    assert!(ledger(&engine).await.is_empty());
}

#[tokio::test]
async fn create_accepts_operator_status() {
    let engine = engine().await;
    let mut request = CreateContainer::new(BARREL);
    request.status = Some(ContainerStatus::Maintenance);

    let created = engine.create_container(&owner(), request).await.unwrap();
    assert_eq!(created.container.status, ContainerStatus::Maintenance);
    assert_eq!(created.transactions[0].transaction_type, TransactionType::CreateFilledContainer);
}

#[tokio::test]
async fn bulk_create_numbers_names_and_logs_each() {
    let engine = engine().await;
    let mut request = CreateContainer::new(BARREL);
    request.name = Some("Rick A".to_string());

    let created = engine.create_containers(&owner(), request, 3).await.unwrap();
    let names: Vec<_> = created.iter().map(|a| a.container.name.as_str()).collect();
    assert_eq!(names, vec!["Rick A #1", "Rick A #2", "Rick A #3"]);
    assert_eq!(ledger(&engine).await.len(), 3);

    let err = engine
        .create_containers(&owner(), CreateContainer::new(BARREL), 0)
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Validation(_)));
}

#[tokio::test]
async fn delete_records_final_state_then_removes() {
    let engine = engine().await;
    let mut request = CreateContainer::new(TANK);
    request.name = Some("Tank 1".to_string());
    request.net_weight_lbs = gallons_to_weight(100.0, 10.0);
    request.proof = Some(100.0);
    request.product_id = Some(ProductId::new("vodka"));
    let tank = engine.create_container(&owner(), request).await.unwrap().container;

    let deleted = engine.delete_container(&owner(), &tank.id).await.unwrap();
    assert_eq!(deleted.container, tank);

    let entry = &deleted.transactions[0];
    assert_eq!(entry.transaction_type, TransactionType::DeleteFilledContainer);
    assert!((entry.volume_gallons + 10.0).abs() < 1e-9);
    assert!((entry.proof_gallons + 10.0).abs() < 1e-9);
    assert_eq!(entry.notes.as_deref(), Some("name: Tank 1, product: vodka, kind: tank"));

    assert!(engine.container(&owner(), &tank.id).await.is_err());
    // Creation and deletion both remain in the ledger
    assert_eq!(ledger_for(&engine, &tank.id).await.len(), 2);
}

#[tokio::test]
async fn delete_empty_container_uses_empty_type() {
    let engine = engine().await;
    let barrel = create(&engine, BARREL, "B", 0.0, None).await;
    let deleted = engine.delete_container(&owner(), &barrel.id).await.unwrap();
    assert_eq!(deleted.transactions[0].transaction_type, TransactionType::DeleteEmptyContainer);
}

#[tokio::test]
async fn delete_of_other_owners_container_is_not_found() {
    let engine = engine().await;
    let barrel = create(&engine, BARREL, "B", 0.0, None).await;

    let stranger = cellar_core::OwnerId::new("stranger");
    let err = engine.delete_container(&stranger, &barrel.id).await.unwrap_err();
    assert!(matches!(err, EngineError::NotFound { .. }));
    assert!(engine.container(&owner(), &barrel.id).await.is_ok());
}

#[tokio::test]
async fn editing_only_notes_writes_no_ledger_entry() {
    let engine = engine().await;
    let barrel = create(&engine, BARREL, "B", 300.0, Some(90.0)).await;
    let before = ledger(&engine).await.len();

    let edit = ContainerEdit {
        notes: Some(Some("char #4".to_string())),
        ..Default::default()
    };
    let applied = engine.edit_container(&owner(), &barrel.id, edit).await.unwrap();

    assert!(applied.transactions.is_empty());
    assert_eq!(applied.container.notes.as_deref(), Some("char #4"));
    assert_eq!(ledger(&engine).await.len(), before);
    let stored = engine.container(&owner(), &barrel.id).await.unwrap();
    assert_eq!(stored.notes.as_deref(), Some("char #4"));
}

#[tokio::test]
async fn editing_proof_on_filled_container_is_a_fill_correction() {
    let engine = engine().await;
    let barrel = create(&engine, BARREL, "B", 300.0, Some(90.0)).await;

    let edit = ContainerEdit {
        proof: Some(Some(95.0)),
        ..Default::default()
    };
    let applied = engine.edit_container(&owner(), &barrel.id, edit).await.unwrap();

    assert_eq!(applied.transactions.len(), 1);
    let entry = &applied.transactions[0];
    assert_eq!(entry.transaction_type, TransactionType::EditFillDataCorrection);
    let notes = entry.notes.as_deref().unwrap();
    assert!(notes.contains("90") && notes.contains("95"), "{notes}");
    assert_eq!(entry.proof, Some(95.0));
    assert!(entry.proof_gallons > 0.0);
}

#[tokio::test]
async fn editing_weight_onto_empty_container_is_a_refill() {
    let engine = engine().await;
    let barrel = create(&engine, BARREL, "B", 0.0, None).await;

    let edit = ContainerEdit {
        net_weight_lbs: Some(200.0),
        proof: Some(Some(110.0)),
        ..Default::default()
    };
    let applied = engine.edit_container(&owner(), &barrel.id, edit).await.unwrap();

    assert_eq!(applied.container.status, ContainerStatus::Filled);
    assert!(applied.container.fill_date.is_some());
    let entry = &applied.transactions[0];
    assert_eq!(entry.transaction_type, TransactionType::RefillContainer);
    // No old proof, so no quantity delta
    assert_eq!(entry.volume_gallons, 0.0);
    assert_eq!(entry.proof_gallons, 0.0);
}

#[tokio::test]
async fn editing_weight_to_zero_empties_the_container() {
    let engine = engine().await;
    let barrel = create(&engine, BARREL, "B", 200.0, Some(100.0)).await;

    let edit = ContainerEdit {
        net_weight_lbs: Some(0.0),
        ..Default::default()
    };
    let applied = engine.edit_container(&owner(), &barrel.id, edit).await.unwrap();

    assert_eq!(applied.container.status, ContainerStatus::Empty);
    let entry = &applied.transactions[0];
    assert_eq!(entry.transaction_type, TransactionType::EditEmptyFromFilled);
    assert!(entry.volume_gallons < 0.0);
}

#[tokio::test]
async fn editing_name_of_empty_container_is_an_empty_correction() {
    let engine = engine().await;
    let barrel = create(&engine, BARREL, "B", 0.0, None).await;

    let edit = ContainerEdit {
        name: Some("B-renamed".to_string()),
        ..Default::default()
    };
    let applied = engine.edit_container(&owner(), &barrel.id, edit).await.unwrap();
    let entry = &applied.transactions[0];
    assert_eq!(entry.transaction_type, TransactionType::EditEmptyDataCorrection);
    assert_eq!(entry.notes.as_deref(), Some("name: B -> B-renamed"));
}

#[tokio::test]
async fn edit_status_is_audited_and_checked_against_weight() {
    let engine = engine().await;
    let barrel = create(&engine, BARREL, "B", 200.0, Some(100.0)).await;

    let edit = ContainerEdit {
        status: Some(ContainerStatus::Empty),
        ..Default::default()
    };
    let err = engine.edit_container(&owner(), &barrel.id, edit).await.unwrap_err();
    assert!(matches!(err, EngineError::Validation(_)));

    let edit = ContainerEdit {
        status: Some(ContainerStatus::Damaged),
        ..Default::default()
    };
    let applied = engine.edit_container(&owner(), &barrel.id, edit).await.unwrap();
    assert_eq!(applied.container.status, ContainerStatus::Damaged);
    assert_eq!(applied.transactions[0].notes.as_deref(), Some("status: FILLED -> DAMAGED"));
}

#[tokio::test]
async fn edit_clears_optional_fields() {
    let engine = engine().await;
    let mut request = CreateContainer::new(BARREL);
    request.product_id = Some(ProductId::new("gin"));
    let barrel = engine.create_container(&owner(), request).await.unwrap().container;

    let edit = ContainerEdit {
        product_id: Some(None),
        ..Default::default()
    };
    let applied = engine.edit_container(&owner(), &barrel.id, edit).await.unwrap();
    assert_eq!(applied.container.product_id, None);
    assert_eq!(applied.transactions[0].notes.as_deref(), Some("product: gin -> none"));
}

#[tokio::test]
async fn edit_of_missing_container_is_not_found() {
    let engine = engine().await;
    let err = engine
        .edit_container(&owner(), &cellar_core::ContainerId::new("ghost"), ContainerEdit::default())
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::NotFound { .. }));
}

#[tokio::test]
async fn kind_id_of_created_container_matches_request() {
    let engine = engine().await;
    let tank = create(&engine, TANK, "T", 0.0, None).await;
    assert_eq!(tank.kind_id, KindId::new(TANK));
}
