// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Typed operation inputs and results

use cellar_core::{
    Account, BottleSize, Container, ContainerId, ContainerStatus, KindId, ParseEnumError,
    ProductId, Transaction, TransactionType,
};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fields for a new container. Unset optional fields default from the kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateContainer {
    pub kind_id: KindId,
    pub name: Option<String>,
    pub account: Account,
    pub net_weight_lbs: f64,
    pub proof: Option<f64>,
    /// Derived from weight when unset
    pub status: Option<ContainerStatus>,
    pub product_id: Option<ProductId>,
    pub tare_weight_lbs: Option<f64>,
    pub temperature_f: Option<f64>,
    pub location: Option<String>,
    pub notes: Option<String>,
}

impl CreateContainer {
    /// An empty container of `kind_id` with every other field defaulted
    pub fn new(kind_id: impl Into<KindId>) -> Self {
        Self {
            kind_id: kind_id.into(),
            name: None,
            account: Account::default(),
            net_weight_lbs: 0.0,
            proof: None,
            status: None,
            product_id: None,
            tare_weight_lbs: None,
            temperature_f: None,
            location: None,
            notes: None,
        }
    }
}

/// Field changes for an edit. `None` leaves a field alone; for clearable
/// fields `Some(None)` clears it. In JSON an absent key leaves the field
/// alone and `null` clears it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerEdit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "clearable", skip_serializing_if = "Option::is_none")]
    pub proof: Option<Option<f64>>,
    #[serde(default, deserialize_with = "clearable", skip_serializing_if = "Option::is_none")]
    pub product_id: Option<Option<ProductId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<Account>,
    #[serde(default, deserialize_with = "clearable", skip_serializing_if = "Option::is_none")]
    pub tare_weight_lbs: Option<Option<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_weight_lbs: Option<f64>,
    #[serde(default, deserialize_with = "clearable", skip_serializing_if = "Option::is_none")]
    pub temperature_f: Option<Option<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ContainerStatus>,
    #[serde(default, deserialize_with = "clearable", skip_serializing_if = "Option::is_none")]
    pub location: Option<Option<String>>,
    #[serde(default, deserialize_with = "clearable", skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
}

/// A present key, `null` included, is a change
fn clearable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub source: ContainerId,
    pub destination: ContainerId,
    pub weight_lbs: f64,
    pub wine_gallons: f64,
    /// Proof used for the ledger's proof gallons
    pub proof: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustMethod {
    Add,
    Remove,
}

impl AdjustMethod {
    pub fn transaction_type(self) -> TransactionType {
        match self {
            AdjustMethod::Add => TransactionType::AdjustContainerAdd,
            AdjustMethod::Remove => TransactionType::AdjustContainerRemove,
        }
    }
}

impl FromStr for AdjustMethod {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" => Ok(AdjustMethod::Add),
            "remove" => Ok(AdjustMethod::Remove),
            _ => Err(ParseEnumError {
                kind: "adjust method",
                value: s.to_string(),
                expected: "add, remove",
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustRequest {
    pub container: ContainerId,
    pub method: AdjustMethod,
    pub weight_lbs: f64,
    pub wine_gallons: f64,
}

/// What happened to the liquid left after bottling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemainderAction {
    Keep,
    Empty,
    Loss,
    Gain,
}

impl RemainderAction {
    pub fn transaction_type(self) -> TransactionType {
        match self {
            RemainderAction::Keep => TransactionType::BottleKeep,
            RemainderAction::Empty => TransactionType::BottleEmpty,
            RemainderAction::Loss => TransactionType::BottlingLoss,
            RemainderAction::Gain => TransactionType::BottlingGain,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RemainderAction::Keep => "keep",
            RemainderAction::Empty => "empty",
            RemainderAction::Loss => "loss",
            RemainderAction::Gain => "gain",
        }
    }
}

impl fmt::Display for RemainderAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RemainderAction {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keep" => Ok(RemainderAction::Keep),
            "empty" => Ok(RemainderAction::Empty),
            "loss" => Ok(RemainderAction::Loss),
            "gain" => Ok(RemainderAction::Gain),
            _ => Err(ParseEnumError {
                kind: "remainder action",
                value: s.to_string(),
                expected: "keep, empty, loss, gain",
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BottleRequest {
    pub container: ContainerId,
    pub bottle_size: BottleSize,
    pub bottle_count: u32,
    pub remainder: RemainderAction,
    /// Measured weight left in the container after bottling
    pub remainder_weight_lbs: f64,
}

/// A single-container operation's outcome
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Applied {
    pub container: Container,
    /// Ledger entries appended, in order; empty when nothing was recorded
    pub transactions: Vec<Transaction>,
}

/// A transfer's outcome
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transferred {
    pub source: Container,
    pub destination: Container,
    pub transactions: Vec<Transaction>,
}

#[cfg(test)]
#[path = "requests_tests.rs"]
mod tests;
