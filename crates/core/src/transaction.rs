// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only ledger records

use crate::container::ParseEnumError;
use crate::id::{ContainerId, OwnerId, ProductId, TransactionId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! transaction_types {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// Kind of inventory movement recorded by a [`Transaction`]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum TransactionType {
            $(
                #[serde(rename = $name)]
                $variant,
            )+
        }

        impl TransactionType {
            pub const ALL: &'static [TransactionType] = &[$(TransactionType::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(TransactionType::$variant => $name,)+
                }
            }
        }

        impl FromStr for TransactionType {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
                    $($name => Ok(TransactionType::$variant),)+
                    _ => Err(ParseEnumError {
                        kind: "transaction type",
                        value: s.to_string(),
                        expected: concat!($($name, " "),+),
                    }),
                }
            }
        }
    };
}

transaction_types! {
    CreateEmptyContainer => "CREATE_EMPTY_CONTAINER",
    CreateFilledContainer => "CREATE_FILLED_CONTAINER",
    DeleteEmptyContainer => "DELETE_EMPTY_CONTAINER",
    DeleteFilledContainer => "DELETE_FILLED_CONTAINER",
    EditEmptyDataCorrection => "EDIT_EMPTY_DATA_CORRECTION",
    EditFillDataCorrection => "EDIT_FILL_DATA_CORRECTION",
    EditFillFromEmpty => "EDIT_FILL_FROM_EMPTY",
    EditEmptyFromFilled => "EDIT_EMPTY_FROM_FILLED",
    RefillContainer => "REFILL_CONTAINER",
    TransferIn => "TRANSFER_IN",
    TransferOut => "TRANSFER_OUT",
    Production => "PRODUCTION",
    DistillationFinish => "DISTILLATION_FINISH",
    SampleAdjust => "SAMPLE_ADJUST",
    ProofDown => "PROOF_DOWN",
    BottlePartial => "BOTTLE_PARTIAL",
    BottleEmpty => "BOTTLE_EMPTY",
    BottleKeep => "BOTTLE_KEEP",
    BottlingGain => "BOTTLING_GAIN",
    BottlingLoss => "BOTTLING_LOSS",
    DeleteProduct => "DELETE_PRODUCT",
    DeleteProductionBatch => "DELETE_PRODUCTION_BATCH",
    ChangeAccount => "CHANGE_ACCOUNT",
    AdjustContainerAdd => "ADJUST_CONTAINER_ADD",
    AdjustContainerRemove => "ADJUST_CONTAINER_REMOVE",
    Correction => "CORRECTION",
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One immutable ledger entry.
///
/// `volume_gallons` and `proof_gallons` are signed deltas: positive when
/// spirit enters the container, negative when it leaves.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub owner: OwnerId,
    pub created_at: DateTime<Utc>,
    pub transaction_type: TransactionType,
    pub container_id: Option<ContainerId>,
    pub product_id: Option<ProductId>,
    pub proof: Option<f64>,
    pub volume_gallons: f64,
    pub proof_gallons: f64,
    pub temperature_f: Option<f64>,
    pub notes: Option<String>,
}

impl Transaction {
    pub fn is_for(&self, container: &ContainerId) -> bool {
        self.container_id.as_ref() == Some(container)
    }
}

#[cfg(test)]
#[path = "transaction_tests.rs"]
mod tests;
