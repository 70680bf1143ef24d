// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use proptest::prelude::*;
use yare::parameterized;

#[parameterized(
    water = { 0.0, 8.322 },
    eighty = { 80.0, 7.926 },
    hundred = { 100.0, 7.780 },
    one_twenty = { 120.0, 7.606 },
    one_ninety = { 190.0, 6.794 },
    absolute = { 200.0, 6.610 },
)]
fn tabulated_anchor_values(proof: f64, expected: f64) {
    assert!((density(proof) - expected).abs() < 0.01, "density({proof}) = {}", density(proof));
}

#[test]
fn fractional_proof_interpolates_between_neighbours() {
    let low = density(100.0);
    let high = density(101.0);
    let mid = density(100.5);
    assert!((mid - (low + high) / 2.0).abs() < 1e-9);
}

#[test]
fn out_of_range_proof_is_clamped() {
    assert_eq!(density(-5.0), density(0.0));
    assert_eq!(density(250.0), density(200.0));
    assert_eq!(density(f64::NAN), density(0.0));
}

#[test]
fn table_is_monotone_non_increasing() {
    for window in DENSITY_TABLE.windows(2) {
        assert!(window[1] <= window[0], "{} > {}", window[1], window[0]);
    }
}

#[test]
fn blend_fallback_brackets_water_and_ethanol() {
    assert_eq!(blended_density(0.0), DENSITY_WATER_LBS_PER_GALLON);
    assert_eq!(blended_density(MAX_PROOF), DENSITY_ETHANOL_LBS_PER_GALLON);
}

proptest! {
    #[test]
    fn density_never_increases_with_proof(a in 0.0f64..=200.0, b in 0.0f64..=200.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(density(high) <= density(low) + 1e-12);
    }

    #[test]
    fn density_stays_between_ethanol_and_water(proof in -50.0f64..300.0) {
        let d = density(proof);
        prop_assert!(d >= 6.6 && d <= 8.33);
    }
}
