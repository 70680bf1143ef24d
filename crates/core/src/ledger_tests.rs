// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::id::{OwnerId, TransactionId};
use chrono::{Duration, TimeZone};

fn tx(n: i64, ty: TransactionType, container: &str, volume: f64) -> Transaction {
    Transaction {
        id: TransactionId::new(format!("tx-{n}")),
        owner: OwnerId::new("owner-1"),
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::hours(n),
        transaction_type: ty,
        container_id: Some(ContainerId::new(container)),
        product_id: None,
        proof: Some(100.0),
        volume_gallons: volume,
        proof_gallons: volume,
        temperature_f: None,
        notes: None,
    }
}

fn sample_ledger() -> Vec<Transaction> {
    vec![
        tx(1, TransactionType::CreateFilledContainer, "a", 50.0),
        tx(2, TransactionType::CreateEmptyContainer, "b", 0.0),
        tx(3, TransactionType::TransferOut, "a", -10.0),
        tx(4, TransactionType::TransferIn, "b", 10.0),
        tx(5, TransactionType::AdjustContainerRemove, "a", -2.0),
    ]
}

fn ids(txs: &[Transaction]) -> Vec<&str> {
    txs.iter().map(|t| t.id.as_str()).collect()
}

#[test]
fn default_query_returns_everything_newest_first() {
    let ledger = sample_ledger();
    let selected = LedgerQuery::default().select(ledger.iter());
    assert_eq!(ids(&selected), vec!["tx-5", "tx-4", "tx-3", "tx-2", "tx-1"]);
}

#[test]
fn filters_by_container_and_type() {
    let ledger = sample_ledger();
    let by_container = LedgerQuery::for_container(ContainerId::new("a")).select(ledger.iter());
    assert_eq!(ids(&by_container), vec!["tx-5", "tx-3", "tx-1"]);

    let by_type = LedgerQuery::of_type(TransactionType::TransferIn).select(ledger.iter());
    assert_eq!(ids(&by_type), vec!["tx-4"]);
}

#[test]
fn time_window_is_half_open() {
    let ledger = sample_ledger();
    let query = LedgerQuery {
        since: Some(ledger[1].created_at),
        until: Some(ledger[3].created_at),
        ..LedgerQuery::default()
    };
    assert_eq!(ids(&query.select(ledger.iter())), vec!["tx-3", "tx-2"]);
}

#[test]
fn offset_and_limit_page_the_results() {
    let ledger = sample_ledger();
    let query = LedgerQuery {
        offset: 1,
        ..LedgerQuery::default()
    }
    .with_limit(2);
    assert_eq!(ids(&query.select(ledger.iter())), vec!["tx-4", "tx-3"]);
}

#[test]
fn stats_count_by_type_and_net_volume() {
    let ledger = sample_ledger();
    let stats: LedgerStats = ledger.iter().collect();
    assert_eq!(stats.total, 5);
    assert_eq!(stats.count(TransactionType::TransferOut), 1);
    assert_eq!(stats.count(TransactionType::BottleKeep), 0);
    assert!((stats.net_volume_gallons - 48.0).abs() < 1e-9);
    assert!((stats.net_proof_gallons - 48.0).abs() < 1e-9);
}
