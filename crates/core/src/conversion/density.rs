// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Spirit density by proof (TTB Table 5 equivalent, 60°F)
//!
//! Density is tabulated per whole proof from 0 to 200 and linearly
//! interpolated between neighbouring entries. The table is monotonically
//! non-increasing: ethanol is lighter than water.

/// Density of pure ethanol at 60°F, lbs per wine gallon
pub const DENSITY_ETHANOL_LBS_PER_GALLON: f64 = 6.58;

/// Density of water at 60°F, lbs per wine gallon
pub const DENSITY_WATER_LBS_PER_GALLON: f64 = 8.328;

/// Highest proof on the scale (absolute alcohol)
pub const MAX_PROOF: f64 = 200.0;

/// Pounds per wine gallon indexed by whole proof, 0..=200
#[rustfmt::skip]
const DENSITY_TABLE: [f64; 201] = [
    8.32198, 8.32198, 8.31574, 8.30957, 8.30350, 8.29742, 8.29150, 8.28551, 8.27976, 8.27401, // 0
    8.26835, 8.26277, 8.25736, 8.25194, 8.24670, 8.24153, 8.23645, 8.23137, 8.22646, 8.22155, // 10
    8.21663, 8.21172, 8.20689, 8.20206, 8.19731, 8.19265, 8.18807, 8.18349, 8.17899, 8.17457, // 20
    8.17016, 8.16575, 8.16133, 8.15700, 8.15275, 8.14851, 8.14434, 8.14018, 8.13601, 8.13193, // 30
    8.12785, 8.12369, 8.11936, 8.11519, 8.11095, 8.10670, 8.10245, 8.09812, 8.09379, 8.08946, // 40
    8.08505, 8.08063, 8.07622, 8.07172, 8.06722, 8.06264, 8.05806, 8.05340, 8.04873, 8.04399, // 50
    8.03924, 8.03433, 8.02950, 8.02450, 8.01934, 8.01417, 8.00884, 8.00351, 7.99810, 7.99260, // 60
    7.98702, 7.98136, 7.97553, 7.96970, 7.96370, 7.95771, 7.95146, 7.94530, 7.93897, 7.93264, // 70
    7.92614, 7.91965, 7.91298, 7.90632, 7.89949, 7.89266, 7.88575, 7.87876, 7.87168, 7.86443, // 80
    7.85719, 7.84986, 7.84244, 7.83495, 7.82737, 7.81971, 7.81196, 7.80413, 7.79622, 7.78823, // 90
    7.78007, 7.77169, 7.76335, 7.75503, 7.74671, 7.73839, 7.73003, 7.72164, 7.71318, 7.70465, // 100
    7.69603, 7.68733, 7.67856, 7.66974, 7.66086, 7.65192, 7.64293, 7.63388, 7.62478, 7.61563, // 110
    7.60642, 7.59716, 7.58783, 7.57844, 7.56900, 7.55949, 7.54994, 7.54033, 7.53068, 7.52098, // 120
    7.51123, 7.50144, 7.49160, 7.48171, 7.47176, 7.46177, 7.45172, 7.44161, 7.43145, 7.42123, // 130
    7.41096, 7.40063, 7.39025, 7.37980, 7.36931, 7.35875, 7.34813, 7.33745, 7.32670, 7.31590, // 140
    7.30502, 7.29408, 7.28307, 7.27200, 7.26087, 7.24966, 7.23839, 7.22705, 7.21563, 7.20415, // 150
    7.19259, 7.18097, 7.16930, 7.15756, 7.14575, 7.13386, 7.12188, 7.10981, 7.09763, 7.08533, // 160
    7.07292, 7.06041, 7.04783, 7.03516, 7.02239, 7.00949, 6.99646, 6.98326, 6.96990, 6.95634, // 170
    6.94258, 6.92867, 6.91467, 6.90053, 6.88621, 6.87168, 6.85688, 6.84179, 6.82637, 6.81056, // 180
    6.79434, 6.77751, 6.76000, 6.74192, 6.72339, 6.70454, 6.68549, 6.66636, 6.64727, 6.62835, // 190
    6.60970, // 200
];

/// Density of spirit at the given proof in lbs per wine gallon.
///
/// Proof is clamped to `[0, 200]` (NaN reads as 0). Whole proofs return the
/// tabulated value; fractional proofs interpolate between `floor` and `ceil`.
pub fn density(proof: f64) -> f64 {
    let proof = clamp_proof(proof);
    let lower = proof.floor();
    let upper = proof.ceil();

    match (table_entry(lower), table_entry(upper)) {
        (Some(low), Some(_)) if lower == upper => low,
        (Some(low), Some(high)) => low + (high - low) * (proof - lower),
        _ => blended_density(proof),
    }
}

/// Volumetric ethanol/water blend; only reached if a proof escapes the table.
fn blended_density(proof: f64) -> f64 {
    let ethanol_fraction = proof / MAX_PROOF;
    ethanol_fraction * DENSITY_ETHANOL_LBS_PER_GALLON
        + (1.0 - ethanol_fraction) * DENSITY_WATER_LBS_PER_GALLON
}

fn table_entry(proof: f64) -> Option<f64> {
    if !(0.0..=MAX_PROOF).contains(&proof) {
        return None;
    }
    DENSITY_TABLE.get(proof as usize).copied()
}

fn clamp_proof(proof: f64) -> f64 {
    if proof.is_nan() {
        return 0.0;
    }
    proof.clamp(0.0, MAX_PROOF)
}

#[cfg(test)]
#[path = "density_tests.rs"]
mod tests;
