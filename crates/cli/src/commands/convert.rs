// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `cellar convert` - gauging calculations without touching the ledger

use crate::output::{print, OutputFormat};
use crate::views::MeasurementView;
use anyhow::ensure;
use cellar_core::conversion::{temperature_correction, MAX_PROOF};
use cellar_core::Measurement;
use clap::Subcommand;
use serde::Serialize;
use std::fmt;

/// Temperature at which hydrometer proofs need no correction
const STANDARD_TEMPERATURE_F: f64 = 60.0;

#[derive(Subcommand)]
pub enum ConvertCommand {
    /// Gallons in a net weight of spirit
    Weight {
        #[arg(long)]
        proof: f64,
        /// Net weight in pounds
        #[arg(long)]
        lbs: f64,
    },
    /// Weight and proof gallons of a wine-gallon volume
    Gallons {
        /// Observed proof
        #[arg(long)]
        proof: f64,
        #[arg(long)]
        wine_gallons: f64,
        /// Temperature in degrees Fahrenheit
        #[arg(long, default_value_t = STANDARD_TEMPERATURE_F)]
        temperature: f64,
        /// Tare added to report a gross weight
        #[arg(long, default_value_t = 0.0)]
        tare: f64,
    },
    /// Wine gallons and weight holding a number of proof gallons
    ProofGallons {
        /// Observed proof
        #[arg(long)]
        proof: f64,
        #[arg(long)]
        proof_gallons: f64,
        /// Temperature in degrees Fahrenheit
        #[arg(long, default_value_t = STANDARD_TEMPERATURE_F)]
        temperature: f64,
        #[arg(long, default_value_t = 0.0)]
        tare: f64,
    },
    /// Temperature-corrected proof of a hydrometer reading
    TrueProof {
        /// Observed proof
        #[arg(long)]
        proof: f64,
        /// Temperature in degrees Fahrenheit
        #[arg(long)]
        temperature: f64,
    },
    /// Gauge a container from its gross weight
    Gross {
        #[arg(long)]
        tare: f64,
        #[arg(long)]
        gross: f64,
        #[arg(long)]
        proof: f64,
    },
}

#[derive(Serialize)]
struct TrueProofInfo {
    observed_proof: f64,
    temperature_f: f64,
    correction: f64,
    true_proof: f64,
}

impl fmt::Display for TrueProofInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1} proof at {:.0} F -> {:.1} true proof ({:+.1})",
            self.observed_proof, self.temperature_f, self.true_proof, self.correction
        )
    }
}

fn check_proof(proof: f64) -> anyhow::Result<()> {
    ensure!(
        proof.is_finite() && (0.0..=MAX_PROOF).contains(&proof),
        "proof must be between 0 and {MAX_PROOF}, got {proof}"
    );
    Ok(())
}

fn check_quantity(field: &str, value: f64) -> anyhow::Result<()> {
    ensure!(value.is_finite() && value >= 0.0, "{field} must not be negative, got {value}");
    Ok(())
}

pub fn handle(command: ConvertCommand, format: OutputFormat) -> anyhow::Result<()> {
    match command {
        ConvertCommand::Weight { proof, lbs } => {
            check_proof(proof)?;
            check_quantity("weight", lbs)?;
            print(&MeasurementView(Measurement::from_gross_weight(0.0, lbs, proof)), format);
        }
        ConvertCommand::Gallons {
            proof,
            wine_gallons,
            temperature,
            tare,
        } => {
            check_proof(proof)?;
            check_quantity("wine gallons", wine_gallons)?;
            check_quantity("tare", tare)?;
            let measurement =
                Measurement::from_wine_gallons(wine_gallons, proof, tare, temperature);
            print(&MeasurementView(measurement), format);
        }
        ConvertCommand::ProofGallons {
            proof,
            proof_gallons,
            temperature,
            tare,
        } => {
            check_proof(proof)?;
            check_quantity("proof gallons", proof_gallons)?;
            check_quantity("tare", tare)?;
            let measurement =
                Measurement::from_proof_gallons(proof_gallons, proof, tare, temperature);
            print(&MeasurementView(measurement), format);
        }
        ConvertCommand::TrueProof { proof, temperature } => {
            check_proof(proof)?;
            let correction = temperature_correction(temperature, proof);
            let info = TrueProofInfo {
                observed_proof: proof,
                temperature_f: temperature,
                correction,
                true_proof: proof + correction,
            };
            print(&info, format);
        }
        ConvertCommand::Gross { tare, gross, proof } => {
            check_proof(proof)?;
            check_quantity("tare", tare)?;
            check_quantity("gross weight", gross)?;
            print(&MeasurementView(Measurement::from_gross_weight(tare, gross, proof)), format);
        }
    }
    Ok(())
}
