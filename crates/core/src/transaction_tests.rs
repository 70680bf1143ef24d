// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use chrono::TimeZone;
use yare::parameterized;

#[parameterized(
    transfer_out = { TransactionType::TransferOut, "TRANSFER_OUT" },
    proof_down = { TransactionType::ProofDown, "PROOF_DOWN" },
    change_account = { TransactionType::ChangeAccount, "CHANGE_ACCOUNT" },
    bottling_loss = { TransactionType::BottlingLoss, "BOTTLING_LOSS" },
    refill = { TransactionType::RefillContainer, "REFILL_CONTAINER" },
)]
fn type_names_are_screaming_snake(ty: TransactionType, name: &str) {
    assert_eq!(ty.as_str(), name);
    assert_eq!(ty.to_string(), name);
    assert_eq!(serde_json::to_string(&ty).unwrap(), format!("\"{name}\""));
}

#[test]
fn every_type_parses_back_from_its_name() {
    for ty in TransactionType::ALL {
        assert_eq!(ty.as_str().parse::<TransactionType>().unwrap(), *ty);
    }
    assert_eq!(TransactionType::ALL.len(), 26);
}

#[test]
fn parsing_accepts_lowercase_and_dashes() {
    assert_eq!("transfer-in".parse::<TransactionType>().unwrap(), TransactionType::TransferIn);
    assert!("TELEPORT".parse::<TransactionType>().is_err());
}

#[test]
fn transaction_serializes_with_type_name() {
    let tx = Transaction {
        id: TransactionId::new("tx-1"),
        owner: OwnerId::new("owner-1"),
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        transaction_type: TransactionType::TransferIn,
        container_id: Some(ContainerId::new("c-1")),
        product_id: None,
        proof: Some(120.0),
        volume_gallons: 10.0,
        proof_gallons: 12.0,
        temperature_f: None,
        notes: None,
    };
    let json = serde_json::to_value(&tx).unwrap();
    assert_eq!(json["transaction_type"], "TRANSFER_IN");
    assert!(tx.is_for(&ContainerId::new("c-1")));
    assert!(!tx.is_for(&ContainerId::new("c-2")));

    let back: Transaction = serde_json::from_value(json).unwrap();
    assert_eq!(back, tx);
}
