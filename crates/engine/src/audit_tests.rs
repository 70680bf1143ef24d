// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::test_support::container;
use cellar_core::{Account, ProductId};
use yare::parameterized;

#[parameterized(
    refill = { ContainerStatus::Empty, ContainerStatus::Filled, TransactionType::RefillContainer },
    refill_in_use = {
        ContainerStatus::Empty,
        ContainerStatus::InUse,
        TransactionType::RefillContainer
    },
    emptied = {
        ContainerStatus::Filled,
        ContainerStatus::Empty,
        TransactionType::EditEmptyFromFilled
    },
    still_empty = {
        ContainerStatus::Empty,
        ContainerStatus::Empty,
        TransactionType::EditEmptyDataCorrection
    },
    still_filled = {
        ContainerStatus::Filled,
        ContainerStatus::Filled,
        TransactionType::EditFillDataCorrection
    },
    into_maintenance = {
        ContainerStatus::Filled,
        ContainerStatus::Maintenance,
        TransactionType::EditFillDataCorrection
    },
)]
fn edit_type_follows_status_transition(
    old: ContainerStatus,
    new: ContainerStatus,
    expected: TransactionType,
) {
    assert_eq!(edit_transaction_type(old, new), expected);
}

#[parameterized(
    whole = { 90.0, "90" },
    half = { 95.5, "95.5" },
    rounds = { 1234.5678, "1234.57" },
    negative_zero = { -0.001, "0" },
)]
fn quantities_format_compactly(value: f64, expected: &str) {
    assert_eq!(format_quantity(value), expected);
}

#[test]
fn unchanged_container_has_no_diff() {
    let old = container("c-1", 500.0, Some(90.0));
    assert!(diff(&old, &old.clone()).is_empty());
}

#[test]
fn notes_and_location_are_untracked() {
    let old = container("c-1", 500.0, Some(90.0));
    let mut new = old.clone();
    new.notes = Some("topped up".to_string());
    new.location = Some("rick 4".to_string());
    assert!(diff(&old, &new).is_empty());
}

#[test]
fn proof_change_is_described() {
    let old = container("c-1", 500.0, Some(90.0));
    let mut new = old.clone();
    new.proof = Some(95.0);

    let changes = diff(&old, &new);
    assert_eq!(notes(&changes), "proof: 90 -> 95");
}

#[test]
fn cleared_and_set_fields_show_none() {
    let old = container("c-1", 500.0, Some(90.0));
    let mut new = old.clone();
    new.proof = None;
    new.product_id = Some(ProductId::new("bourbon"));

    assert_eq!(notes(&diff(&old, &new)), "proof: 90 -> none, product: none -> bourbon");
}

#[test]
fn several_changes_are_listed_in_field_order() {
    let old = container("c-1", 500.0, Some(90.0));
    let mut new = old.clone();
    new.status = ContainerStatus::Maintenance;
    new.account = Account::Bottling;
    new.name = "Renamed".to_string();

    let fields: Vec<_> = diff(&old, &new).into_iter().map(|c| c.field).collect();
    assert_eq!(fields, vec!["name", "account", "status"]);
}
