// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Edit-diff auditing
//!
//! Tracked fields appear in the ledger when they change. Notes and location
//! are bookkeeping only and never produce an entry.

use cellar_core::{Container, ContainerStatus, TransactionType};
use std::fmt::Display;

/// One tracked field whose value changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    pub field: &'static str,
    pub old: String,
    pub new: String,
}

impl Display for FieldChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} -> {}", self.field, self.old, self.new)
    }
}

/// Round to hundredths and drop trailing zeros (`90`, `95.5`, `1234.57`)
pub fn format_quantity(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        // avoid "-0"
        return "0".to_string();
    }
    rounded.to_string()
}

fn format_opt_quantity(value: Option<f64>) -> String {
    value.map(format_quantity).unwrap_or_else(|| "none".to_string())
}

fn format_opt<T: Display>(value: Option<&T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "none".to_string())
}

/// Tracked fields that differ between `old` and `new`, in a fixed order
pub fn diff(old: &Container, new: &Container) -> Vec<FieldChange> {
    let mut changes = Vec::new();
    let mut push = |field: &'static str, old: String, new: String| {
        changes.push(FieldChange { field, old, new });
    };

    if old.name != new.name {
        push("name", old.name.clone(), new.name.clone());
    }
    if old.proof != new.proof {
        push("proof", format_opt_quantity(old.proof), format_opt_quantity(new.proof));
    }
    if old.product_id != new.product_id {
        push("product", format_opt(old.product_id.as_ref()), format_opt(new.product_id.as_ref()));
    }
    if old.account != new.account {
        push("account", old.account.to_string(), new.account.to_string());
    }
    if old.tare_weight_lbs != new.tare_weight_lbs {
        push(
            "tare_weight",
            format_opt_quantity(old.tare_weight_lbs),
            format_opt_quantity(new.tare_weight_lbs),
        );
    }
    if old.net_weight_lbs != new.net_weight_lbs {
        push(
            "net_weight",
            format_quantity(old.net_weight_lbs),
            format_quantity(new.net_weight_lbs),
        );
    }
    if old.temperature_f != new.temperature_f {
        push(
            "temperature",
            format_opt_quantity(old.temperature_f),
            format_opt_quantity(new.temperature_f),
        );
    }
    if old.status != new.status {
        push("status", old.status.to_string(), new.status.to_string());
    }

    changes
}

/// Human-readable summary: `field: old -> new, ...`
pub fn notes(changes: &[FieldChange]) -> String {
    changes.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

/// Ledger type for an edit, chosen by the status transition
pub fn edit_transaction_type(old: ContainerStatus, new: ContainerStatus) -> TransactionType {
    let was_empty = old == ContainerStatus::Empty;
    let is_empty = new == ContainerStatus::Empty;
    match (was_empty, is_empty) {
        (true, false) => TransactionType::RefillContainer,
        (false, true) => TransactionType::EditEmptyFromFilled,
        (true, true) => TransactionType::EditEmptyDataCorrection,
        (false, false) => TransactionType::EditFillDataCorrection,
    }
}

#[cfg(test)]
#[path = "audit_tests.rs"]
mod tests;
