// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Containers (barrels, tanks, totes) and their kinds

use crate::conversion::{weight_to_gallons, Gallons};
use crate::id::{ContainerId, KindId, OwnerId, ProductId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid {kind} '{value}': expected one of {expected}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

/// Physical status of a container
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContainerStatus {
    Empty,
    Filled,
    InUse,
    Maintenance,
    OutOfService,
    Damaged,
}

impl ContainerStatus {
    /// Statuses an operator sets by hand; weight changes never override them
    pub fn is_operator_set(self) -> bool {
        matches!(
            self,
            ContainerStatus::Maintenance | ContainerStatus::OutOfService | ContainerStatus::Damaged
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ContainerStatus::Empty => "EMPTY",
            ContainerStatus::Filled => "FILLED",
            ContainerStatus::InUse => "IN_USE",
            ContainerStatus::Maintenance => "MAINTENANCE",
            ContainerStatus::OutOfService => "OUT_OF_SERVICE",
            ContainerStatus::Damaged => "DAMAGED",
        }
    }
}

impl fmt::Display for ContainerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContainerStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "EMPTY" => Ok(ContainerStatus::Empty),
            "FILLED" => Ok(ContainerStatus::Filled),
            "IN_USE" => Ok(ContainerStatus::InUse),
            "MAINTENANCE" => Ok(ContainerStatus::Maintenance),
            "OUT_OF_SERVICE" => Ok(ContainerStatus::OutOfService),
            "DAMAGED" => Ok(ContainerStatus::Damaged),
            _ => Err(ParseEnumError {
                kind: "status",
                value: s.to_string(),
                expected: "EMPTY, FILLED, IN_USE, MAINTENANCE, OUT_OF_SERVICE, DAMAGED",
            }),
        }
    }
}

/// Status a container should have after its net weight changes.
///
/// Operator-set statuses stick. Otherwise zero weight means EMPTY and any
/// weight means FILLED, except that IN_USE is kept while liquid remains.
pub fn derive_status(net_weight_lbs: f64, current: ContainerStatus) -> ContainerStatus {
    if current.is_operator_set() {
        return current;
    }
    if net_weight_lbs <= 0.0 {
        ContainerStatus::Empty
    } else if current == ContainerStatus::InUse {
        ContainerStatus::InUse
    } else {
        ContainerStatus::Filled
    }
}

/// Regulatory account a container is reported under
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Account {
    #[default]
    Storage,
    Production,
    Bottling,
    Sampling,
}

impl Account {
    pub fn as_str(self) -> &'static str {
        match self {
            Account::Storage => "storage",
            Account::Production => "production",
            Account::Bottling => "bottling",
            Account::Sampling => "sampling",
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Account {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "storage" => Ok(Account::Storage),
            "production" => Ok(Account::Production),
            "bottling" => Ok(Account::Bottling),
            "sampling" => Ok(Account::Sampling),
            _ => Err(ParseEnumError {
                kind: "account",
                value: s.to_string(),
                expected: "storage, production, bottling, sampling",
            }),
        }
    }
}

/// Template for a vessel: capacity and empty weight
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContainerKind {
    pub id: KindId,
    pub owner: OwnerId,
    pub name: String,
    /// Capacity in wine gallons; `None` means unbounded
    pub capacity_gallons: Option<f64>,
    pub tare_weight_lbs: Option<f64>,
}

/// One physical vessel and what it currently holds
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub id: ContainerId,
    pub owner: OwnerId,
    pub kind_id: KindId,
    pub name: String,
    pub account: Account,
    pub status: ContainerStatus,
    /// Net spirit weight in pounds, never negative
    pub net_weight_lbs: f64,
    pub tare_weight_lbs: Option<f64>,
    /// Proof on the 0-200 scale; `None` while the vessel has never held spirit
    pub proof: Option<f64>,
    pub temperature_f: Option<f64>,
    pub product_id: Option<ProductId>,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub fill_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Container {
    /// Proof used for arithmetic; a container without a proof counts as 0
    pub fn proof_or_zero(&self) -> f64 {
        self.proof.unwrap_or(0.0)
    }

    /// Current wine and proof gallons derived from weight and proof
    pub fn gallons(&self) -> Gallons {
        if self.net_weight_lbs <= 0.0 {
            return Gallons::default();
        }
        weight_to_gallons(self.proof_or_zero(), self.net_weight_lbs)
    }
}

#[cfg(test)]
#[path = "container_tests.rs"]
mod tests;
