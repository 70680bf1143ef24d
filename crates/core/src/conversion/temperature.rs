// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! TTB temperature correction of observed proof
//!
//! The grid covers even temperatures 60..=80 °F and observed proofs 80..=170
//! in steps of 5. Readings outside the grid get no correction.

const MIN_TEMPERATURE_F: i64 = 60;
const MAX_TEMPERATURE_F: i64 = 80;
const MIN_PROOF: i64 = 80;
const MAX_PROOF: i64 = 170;

/// Correction added to observed proof, rows by temperature (60, 62, .. 80 °F),
/// columns by observed proof (80, 85, .. 170)
#[rustfmt::skip]
const CORRECTIONS: [[f64; 19]; 11] = [
    [ 0.2,  0.3,  0.4,  0.5,  0.6,  0.7,  0.8,  0.9,  1.0,  1.1,  1.2,  1.3,  1.4,  1.5,  1.6,  1.7,  1.8,  1.9,  2.0], // 60
    [ 0.1,  0.2,  0.3,  0.4,  0.5,  0.6,  0.7,  0.8,  0.9,  1.0,  1.1,  1.2,  1.3,  1.4,  1.5,  1.6,  1.7,  1.8,  1.9], // 62
    [ 0.0,  0.1,  0.2,  0.3,  0.4,  0.5,  0.6,  0.7,  0.8,  0.9,  1.0,  1.1,  1.2,  1.3,  1.4,  1.5,  1.6,  1.7,  1.8], // 64
    [-0.1,  0.0,  0.1,  0.2,  0.3,  0.4,  0.5,  0.6,  0.7,  0.8,  0.9,  1.0,  1.1,  1.2,  1.3,  1.4,  1.5,  1.6,  1.7], // 66
    [-0.2, -0.1,  0.0,  0.1,  0.2,  0.3,  0.4,  0.5,  0.6,  0.7,  0.8,  0.9,  1.0,  1.1,  1.2,  1.3,  1.4,  1.5,  1.6], // 68
    [-0.3, -0.2, -0.1,  0.0,  0.1,  0.2,  0.3,  0.4,  0.5,  0.6,  0.7,  0.8,  0.9,  1.0,  1.1,  1.2,  1.3,  1.4,  1.5], // 70
    [-0.4, -0.3, -0.2, -0.1,  0.0,  0.1,  0.2,  0.3,  0.4,  0.5,  0.6,  0.7,  0.8,  0.9,  1.0,  1.1,  1.2,  1.3,  1.4], // 72
    [-0.5, -0.4, -0.3, -0.2, -0.1,  0.0,  0.1,  0.2,  0.3,  0.4,  0.5,  0.6,  0.7,  0.8,  0.9,  1.0,  1.1,  1.2,  1.3], // 74
    [-0.6, -0.5, -0.4, -0.3, -0.2, -0.1,  0.0,  0.1,  0.2,  0.3,  0.4,  0.5,  0.6,  0.7,  0.8,  0.9,  1.0,  1.1,  1.2], // 76
    [-0.7, -0.6, -0.5, -0.4, -0.3, -0.2, -0.1,  0.0,  0.1,  0.2,  0.3,  0.4,  0.5,  0.6,  0.7,  0.8,  0.9,  1.0,  1.1], // 78
    [-0.8, -0.7, -0.6, -0.5, -0.4, -0.3, -0.2, -0.1,  0.0,  0.1,  0.2,  0.3,  0.4,  0.5,  0.6,  0.7,  0.8,  0.9,  1.0], // 80
];

/// Correction to add to `observed_proof` read at `temperature_f`.
///
/// Temperature rounds to the nearest even degree and proof to the nearest
/// multiple of 5. Returns 0.0 when either lands outside the table.
pub fn temperature_correction(temperature_f: f64, observed_proof: f64) -> f64 {
    if !temperature_f.is_finite() || !observed_proof.is_finite() {
        return 0.0;
    }
    let temperature = ((temperature_f / 2.0).round() * 2.0) as i64;
    let proof = ((observed_proof / 5.0).round() * 5.0) as i64;

    if !(MIN_TEMPERATURE_F..=MAX_TEMPERATURE_F).contains(&temperature)
        || !(MIN_PROOF..=MAX_PROOF).contains(&proof)
    {
        return 0.0;
    }

    let row = ((temperature - MIN_TEMPERATURE_F) / 2) as usize;
    let column = ((proof - MIN_PROOF) / 5) as usize;
    CORRECTIONS
        .get(row)
        .and_then(|r| r.get(column))
        .copied()
        .unwrap_or(0.0)
}

/// TTB true proof: observed proof plus the temperature correction
pub fn true_proof(observed_proof: f64, temperature_f: f64) -> f64 {
    observed_proof + temperature_correction(temperature_f, observed_proof)
}

#[cfg(test)]
#[path = "temperature_tests.rs"]
mod tests;
