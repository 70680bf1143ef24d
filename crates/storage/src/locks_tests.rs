// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn ids(names: &[&str]) -> Vec<ContainerId> {
    names.iter().map(|n| ContainerId::new(*n)).collect()
}

fn table_len(table: &LockTable) -> usize {
    table.locks.lock().unwrap().len()
}

#[tokio::test]
async fn acquire_sorts_and_dedups() {
    let table = LockTable::new();
    // A repeated id would wait on itself and time out
    let set = table.acquire(&ids(&["b", "a", "b"]), Duration::from_millis(50)).await.unwrap();
    assert_eq!(set.ids, ids(&["a", "b"]));
    assert_eq!(table_len(&table), 2);

    assert!(table.acquire(&ids(&["a"]), Duration::from_millis(10)).await.is_err());
    assert!(table.acquire(&ids(&["b"]), Duration::from_millis(10)).await.is_err());
    assert!(table.acquire(&ids(&["c"]), Duration::from_millis(10)).await.is_ok());
}

#[tokio::test]
async fn released_locks_are_pruned() {
    let table = LockTable::new();
    let set = table.acquire(&ids(&["a", "b"]), Duration::from_millis(50)).await.unwrap();
    assert_eq!(table_len(&table), 2);
    drop(set);
    assert_eq!(table_len(&table), 0);

    // Partial locks from a timed-out acquire are pruned too, the held one is kept
    let held = table.acquire(&ids(&["b"]), Duration::from_millis(50)).await.unwrap();
    assert!(table.acquire(&ids(&["a", "b"]), Duration::from_millis(20)).await.is_err());
    assert_eq!(table_len(&table), 1);
    drop(held);
    assert_eq!(table_len(&table), 0);
}

#[tokio::test]
async fn lock_with_a_waiter_is_not_pruned() {
    let table = LockTable::new();
    let held = table.acquire(&ids(&["a"]), Duration::from_secs(1)).await.unwrap();

    let waiter = {
        let table = table.clone();
        tokio::spawn(async move { table.acquire(&ids(&["a"]), Duration::from_secs(5)).await })
    };
    tokio::time::sleep(Duration::from_millis(10)).await;
    drop(held);
    assert_eq!(table_len(&table), 1);

    let set = waiter.await.unwrap().unwrap();
    assert_eq!(table_len(&table), 1);
    drop(set);
    assert_eq!(table_len(&table), 0);
}

#[tokio::test]
async fn held_lock_times_out_as_conflict() {
    let table = LockTable::new();
    let _held = table.acquire(&ids(&["a"]), Duration::from_millis(50)).await.unwrap();

    let err = table.acquire(&ids(&["b", "a"]), Duration::from_millis(20)).await.unwrap_err();
    match err {
        StoreError::Conflict { id, .. } => assert_eq!(id, ContainerId::new("a")),
        other => panic!("expected conflict, got {other:?}"),
    }
}

#[tokio::test]
async fn failed_acquire_releases_partial_locks() {
    let table = LockTable::new();
    let held = table.acquire(&ids(&["b"]), Duration::from_millis(50)).await.unwrap();

    // "a" is taken first, then "b" times out; "a" must be free again
    assert!(table.acquire(&ids(&["a", "b"]), Duration::from_millis(20)).await.is_err());
    assert!(table.acquire(&ids(&["a"]), Duration::from_millis(20)).await.is_ok());
    drop(held);
}

#[tokio::test]
async fn released_lock_can_be_reacquired() {
    let table = LockTable::new();
    let first = table.acquire(&ids(&["a"]), Duration::from_millis(50)).await.unwrap();
    drop(first);
    assert!(table.acquire(&ids(&["a"]), Duration::from_millis(50)).await.is_ok());
}

#[tokio::test]
async fn waiter_proceeds_once_holder_releases() {
    let table = LockTable::new();
    let held = table.acquire(&ids(&["a"]), Duration::from_secs(1)).await.unwrap();

    let waiter = {
        let table = table.clone();
        tokio::spawn(async move { table.acquire(&ids(&["a"]), Duration::from_secs(5)).await })
    };
    tokio::time::sleep(Duration::from_millis(10)).await;
    drop(held);

    assert!(waiter.await.unwrap().is_ok());
}
