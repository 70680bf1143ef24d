// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ledger filtering and summary counts

use crate::id::ContainerId;
use crate::transaction::{Transaction, TransactionType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Filter and page over the ledger. Results are newest first.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerQuery {
    pub transaction_type: Option<TransactionType>,
    pub container_id: Option<ContainerId>,
    /// Inclusive lower bound on `created_at`
    pub since: Option<DateTime<Utc>>,
    /// Exclusive upper bound on `created_at`
    pub until: Option<DateTime<Utc>>,
    pub offset: usize,
    pub limit: Option<usize>,
}

impl LedgerQuery {
    pub fn for_container(id: ContainerId) -> Self {
        Self {
            container_id: Some(id),
            ..Self::default()
        }
    }

    pub fn of_type(transaction_type: TransactionType) -> Self {
        Self {
            transaction_type: Some(transaction_type),
            ..Self::default()
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn matches(&self, tx: &Transaction) -> bool {
        if let Some(ty) = self.transaction_type {
            if tx.transaction_type != ty {
                return false;
            }
        }
        if let Some(id) = &self.container_id {
            if !tx.is_for(id) {
                return false;
            }
        }
        if let Some(since) = self.since {
            if tx.created_at < since {
                return false;
            }
        }
        if let Some(until) = self.until {
            if tx.created_at >= until {
                return false;
            }
        }
        true
    }

    /// Apply the filter to transactions held in append order
    pub fn select<'a, I>(&self, transactions: I) -> Vec<Transaction>
    where
        I: DoubleEndedIterator<Item = &'a Transaction>,
    {
        let matching = transactions.rev().filter(|tx| self.matches(tx)).skip(self.offset);
        match self.limit {
            Some(limit) => matching.take(limit).cloned().collect(),
            None => matching.cloned().collect(),
        }
    }
}

/// Summary counts over an owner's ledger
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerStats {
    pub total: usize,
    pub by_type: BTreeMap<TransactionType, usize>,
    pub net_volume_gallons: f64,
    pub net_proof_gallons: f64,
}

impl LedgerStats {
    pub fn record(&mut self, tx: &Transaction) {
        self.total += 1;
        *self.by_type.entry(tx.transaction_type).or_insert(0) += 1;
        self.net_volume_gallons += tx.volume_gallons;
        self.net_proof_gallons += tx.proof_gallons;
    }

    pub fn count(&self, transaction_type: TransactionType) -> usize {
        self.by_type.get(&transaction_type).copied().unwrap_or(0)
    }
}

impl<'a> FromIterator<&'a Transaction> for LedgerStats {
    fn from_iter<T: IntoIterator<Item = &'a Transaction>>(iter: T) -> Self {
        let mut stats = LedgerStats::default();
        for tx in iter {
            stats.record(tx);
        }
        stats
    }
}

#[cfg(test)]
#[path = "ledger_tests.rs"]
mod tests;
