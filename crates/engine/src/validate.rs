// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Input checks shared by every operation. All run before any write.

use crate::error::EngineError;
use cellar_core::conversion::MAX_PROOF;
use cellar_core::{Container, ContainerId, ContainerKind, ContainerStatus};

/// Slack for floating-point noise in capacity comparisons
const CAPACITY_EPSILON: f64 = 1e-6;

pub(crate) fn proof(field: &str, value: f64) -> Result<f64, EngineError> {
    if value.is_finite() && (0.0..=MAX_PROOF).contains(&value) {
        Ok(value)
    } else {
        Err(EngineError::validation(format!(
            "{field} must be between 0 and {MAX_PROOF}, got {value}"
        )))
    }
}

pub(crate) fn optional_proof(field: &str, value: Option<f64>) -> Result<Option<f64>, EngineError> {
    value.map(|v| proof(field, v)).transpose()
}

pub(crate) fn positive(field: &str, value: f64) -> Result<f64, EngineError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(EngineError::validation(format!("{field} must be greater than 0, got {value}")))
    }
}

pub(crate) fn non_negative(field: &str, value: f64) -> Result<f64, EngineError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(EngineError::validation(format!("{field} must not be negative, got {value}")))
    }
}

pub(crate) fn optional_non_negative(
    field: &str,
    value: Option<f64>,
) -> Result<Option<f64>, EngineError> {
    value.map(|v| non_negative(field, v)).transpose()
}

pub(crate) fn finite(field: &str, value: Option<f64>) -> Result<Option<f64>, EngineError> {
    match value {
        Some(v) if !v.is_finite() => {
            Err(EngineError::validation(format!("{field} must be a number, got {v}")))
        }
        other => Ok(other),
    }
}

pub(crate) fn name(value: &str) -> Result<String, EngineError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(EngineError::validation("name must not be blank"))
    } else {
        Ok(trimmed.to_string())
    }
}

/// An explicit status must agree with the weight it is set alongside
pub(crate) fn status_matches_weight(
    status: ContainerStatus,
    net_weight_lbs: f64,
) -> Result<(), EngineError> {
    match status {
        ContainerStatus::Empty if net_weight_lbs > 0.0 => Err(EngineError::validation(format!(
            "status EMPTY contradicts net weight {net_weight_lbs} lbs"
        ))),
        ContainerStatus::Filled | ContainerStatus::InUse if net_weight_lbs <= 0.0 => {
            Err(EngineError::validation(format!("status {status} requires a net weight above 0")))
        }
        _ => Ok(()),
    }
}

/// Reject adding `adding_wine_gallons` when it would overfill the kind's capacity.
/// A kind without a capacity is unbounded.
pub(crate) fn capacity(
    container: &Container,
    kind: Option<&ContainerKind>,
    adding_wine_gallons: f64,
) -> Result<(), EngineError> {
    fits(
        &container.id,
        kind.and_then(|k| k.capacity_gallons),
        container.gallons().wine,
        adding_wine_gallons,
    )
}

pub(crate) fn fits(
    container: &ContainerId,
    capacity: Option<f64>,
    current: f64,
    adding: f64,
) -> Result<(), EngineError> {
    match capacity {
        Some(capacity) if current + adding > capacity + CAPACITY_EPSILON => {
            Err(EngineError::CapacityExceeded {
                container: container.clone(),
                capacity,
                current,
                adding,
            })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
