// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Text and JSON renderings of engine results

use crate::output::quantity;
use cellar_core::{Container, ContainerKind, LedgerStats, Measurement, Transaction};
use cellar_engine::{Applied, Transferred};
use serde::Serialize;
use std::fmt;

/// Column titles aligned with [`ContainerRow`]
pub fn container_header() -> String {
    format!(
        "{:<36} {:<20} {:<10} {:<14} {:>11} {:>7} {}",
        "ID", "NAME", "KIND", "STATUS", "WEIGHT(LBS)", "PROOF", "ACCOUNT"
    )
}

/// Column titles aligned with [`TransactionRow`]
pub fn transaction_header() -> String {
    format!(
        "{:<20} {:<28} {:<36} {:>9} {:>10}  {}",
        "DATE", "TYPE", "CONTAINER", "WINE GAL", "PROOF GAL", "NOTES"
    )
}

#[derive(Serialize)]
#[serde(transparent)]
pub struct ContainerRow<'a>(pub &'a Container);

impl fmt::Display for ContainerRow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.0;
        write!(
            f,
            "{:<36} {:<20} {:<10} {:<14} {:>11.2} {:>7} {}",
            c.id,
            c.name,
            c.kind_id,
            c.status,
            c.net_weight_lbs,
            quantity(c.proof),
            c.account
        )
    }
}

/// One container with its derived gallons
#[derive(Serialize)]
pub struct ContainerDetail<'a> {
    #[serde(flatten)]
    pub container: &'a Container,
    pub wine_gallons: f64,
    pub proof_gallons: f64,
}

impl<'a> ContainerDetail<'a> {
    pub fn new(container: &'a Container) -> Self {
        let gallons = container.gallons();
        Self {
            container,
            wine_gallons: gallons.wine,
            proof_gallons: gallons.proof,
        }
    }
}

impl fmt::Display for ContainerDetail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.container;
        writeln!(f, "Container: {}", c.id)?;
        writeln!(f, "  Name: {}", c.name)?;
        writeln!(f, "  Kind: {}", c.kind_id)?;
        writeln!(f, "  Status: {}", c.status)?;
        writeln!(f, "  Account: {}", c.account)?;
        writeln!(f, "  Net weight: {:.2} lbs", c.net_weight_lbs)?;
        writeln!(f, "  Proof: {}", quantity(c.proof))?;
        writeln!(f, "  Wine gallons: {:.2}", self.wine_gallons)?;
        write!(f, "  Proof gallons: {:.2}", self.proof_gallons)?;
        if let Some(tare) = c.tare_weight_lbs {
            write!(f, "\n  Tare: {:.2} lbs", tare)?;
        }
        if let Some(product) = &c.product_id {
            write!(f, "\n  Product: {}", product)?;
        }
        if let Some(temperature) = c.temperature_f {
            write!(f, "\n  Temperature: {:.1} F", temperature)?;
        }
        if let Some(location) = &c.location {
            write!(f, "\n  Location: {}", location)?;
        }
        if let Some(fill_date) = c.fill_date {
            write!(f, "\n  Filled: {}", fill_date.format("%Y-%m-%d"))?;
        }
        if let Some(notes) = &c.notes {
            write!(f, "\n  Notes: {}", notes)?;
        }
        Ok(())
    }
}

#[derive(Serialize)]
#[serde(transparent)]
pub struct TransactionRow<'a>(pub &'a Transaction);

impl fmt::Display for TransactionRow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.0;
        write!(
            f,
            "{:<20} {:<28} {:<36} {:>9.2} {:>10.2}  {}",
            t.created_at.format("%Y-%m-%d %H:%M:%S"),
            t.transaction_type,
            t.container_id.as_ref().map(|id| id.as_str()).unwrap_or("-"),
            t.volume_gallons,
            t.proof_gallons,
            t.notes.as_deref().unwrap_or("")
        )
    }
}

#[derive(Serialize)]
#[serde(transparent)]
pub struct AppliedView<'a>(pub &'a Applied);

impl fmt::Display for AppliedView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", ContainerRow(&self.0.container))?;
        write_entries(f, &self.0.transactions)
    }
}

#[derive(Serialize)]
#[serde(transparent)]
pub struct TransferredView<'a>(pub &'a Transferred);

impl fmt::Display for TransferredView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", ContainerRow(&self.0.source))?;
        write!(f, "{}", ContainerRow(&self.0.destination))?;
        write_entries(f, &self.0.transactions)
    }
}

fn write_entries(f: &mut fmt::Formatter<'_>, transactions: &[Transaction]) -> fmt::Result {
    if transactions.is_empty() {
        return write!(f, "\n  (no ledger entry)");
    }
    for transaction in transactions {
        write!(f, "\n  {}", TransactionRow(transaction))?;
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(transparent)]
pub struct KindRow<'a>(pub &'a ContainerKind);

impl fmt::Display for KindRow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let k = self.0;
        write!(
            f,
            "{:<16} {:<24} capacity={:<10} tare={}",
            k.id,
            k.name,
            quantity(k.capacity_gallons),
            quantity(k.tare_weight_lbs)
        )
    }
}

#[derive(Serialize)]
#[serde(transparent)]
pub struct StatsView<'a>(pub &'a LedgerStats);

impl fmt::Display for StatsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0;
        writeln!(f, "Transactions: {}", s.total)?;
        writeln!(f, "Net wine gallons: {:.2}", s.net_volume_gallons)?;
        write!(f, "Net proof gallons: {:.2}", s.net_proof_gallons)?;
        for (transaction_type, count) in &s.by_type {
            write!(f, "\n  {:<28} {}", transaction_type, count)?;
        }
        Ok(())
    }
}

#[derive(Serialize)]
#[serde(transparent)]
pub struct MeasurementView(pub Measurement);

impl fmt::Display for MeasurementView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.0;
        writeln!(f, "Net weight: {:.2} lbs", m.net_weight_lbs)?;
        writeln!(f, "Gross weight: {:.2} lbs", m.gross_weight_lbs)?;
        writeln!(f, "Wine gallons: {:.4}", m.wine_gallons)?;
        writeln!(f, "Proof gallons: {:.4}", m.proof_gallons)?;
        write!(f, "Density: {:.4} lbs/gal", m.density)
    }
}
