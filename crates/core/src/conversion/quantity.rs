// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Conversions between net weight, wine gallons and proof gallons
//!
//! Every direction goes through [`density`] exactly once so that round trips
//! agree to floating-point tolerance.

use super::density::density;
use super::temperature::true_proof;
use serde::{Deserialize, Serialize};

/// US gallons per liter
pub const GALLONS_PER_LITER: f64 = 0.264172;

/// Volume of a quantity of spirit
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Gallons {
    pub wine: f64,
    pub proof: f64,
}

/// Wine and proof gallons held in `net_weight_lbs` of spirit at `proof`
pub fn weight_to_gallons(proof: f64, net_weight_lbs: f64) -> Gallons {
    let wine = net_weight_lbs / density(proof);
    Gallons {
        wine,
        proof: wine * proof / 100.0,
    }
}

/// Net weight of `wine_gallons` of spirit at `proof`
pub fn gallons_to_weight(proof: f64, wine_gallons: f64) -> f64 {
    wine_gallons * density(proof)
}

/// Net weight of `proof_gallons` of spirit at `proof`; zero proof yields zero.
pub fn proof_gallons_to_weight(proof: f64, proof_gallons: f64) -> f64 {
    if proof <= 0.0 {
        return 0.0;
    }
    let wine_gallons = proof_gallons / (proof / 100.0);
    gallons_to_weight(proof, wine_gallons)
}

/// Wine gallons filled into `count` bottles of `bottle_size_liters`
pub fn bottled_volume_gallons(bottle_size_liters: f64, count: u32) -> f64 {
    bottle_size_liters * f64::from(count) * GALLONS_PER_LITER
}

/// Proof gallons using the temperature-corrected (true) proof
pub fn proof_gallons_ttb(wine_gallons: f64, observed_proof: f64, temperature_f: f64) -> f64 {
    wine_gallons * true_proof(observed_proof, temperature_f) / 100.0
}

/// Full set of derived quantities for one gauging of a container
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub net_weight_lbs: f64,
    pub gross_weight_lbs: f64,
    pub wine_gallons: f64,
    pub proof_gallons: f64,
    pub density: f64,
}

impl Measurement {
    /// Gauge by weight. Gross below tare reads as empty. The proof is taken
    /// as already temperature-corrected (hydrometer readings at 60°F).
    pub fn from_gross_weight(tare_lbs: f64, gross_lbs: f64, proof: f64) -> Self {
        let net_weight_lbs = (gross_lbs - tare_lbs).max(0.0);
        let gallons = weight_to_gallons(proof, net_weight_lbs);
        Self {
            net_weight_lbs,
            gross_weight_lbs: gross_lbs,
            wine_gallons: gallons.wine,
            proof_gallons: gallons.proof,
            density: density(proof),
        }
    }

    /// Gauge by volume; proof gallons use the TTB true proof.
    pub fn from_wine_gallons(
        wine_gallons: f64,
        observed_proof: f64,
        tare_lbs: f64,
        temperature_f: f64,
    ) -> Self {
        let net_weight_lbs = gallons_to_weight(observed_proof, wine_gallons);
        Self {
            net_weight_lbs,
            gross_weight_lbs: net_weight_lbs + tare_lbs,
            wine_gallons,
            proof_gallons: proof_gallons_ttb(wine_gallons, observed_proof, temperature_f),
            density: density(observed_proof),
        }
    }

    /// Work back from proof gallons to wine gallons via the TTB true proof.
    pub fn from_proof_gallons(
        proof_gallons: f64,
        observed_proof: f64,
        tare_lbs: f64,
        temperature_f: f64,
    ) -> Self {
        let corrected = true_proof(observed_proof, temperature_f);
        let wine_gallons = if observed_proof > 0.0 && proof_gallons > 0.0 && corrected > 0.0 {
            proof_gallons / (corrected / 100.0)
        } else {
            0.0
        };
        let net_weight_lbs = gallons_to_weight(observed_proof, wine_gallons);
        Self {
            net_weight_lbs,
            gross_weight_lbs: net_weight_lbs + tare_lbs,
            wine_gallons,
            proof_gallons,
            density: density(observed_proof),
        }
    }
}

#[cfg(test)]
#[path = "quantity_tests.rs"]
mod tests;
