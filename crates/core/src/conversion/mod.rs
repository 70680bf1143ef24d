// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Quantity conversion for bulk spirits
//!
//! This module provides:
//! - **density** - TTB pounds-per-wine-gallon table by proof
//! - **temperature** - TTB temperature correction to true proof
//! - **quantity** - weight / wine gallon / proof gallon conversions
//! - **bottle** - label bottle sizes

pub mod bottle;
pub mod density;
pub mod quantity;
pub mod temperature;

pub use bottle::{BottleSize, BottleSizeError};
pub use density::{density, MAX_PROOF};
pub use quantity::{
    bottled_volume_gallons, gallons_to_weight, proof_gallons_to_weight, proof_gallons_ttb,
    weight_to_gallons, Gallons, Measurement,
};
pub use temperature::{temperature_correction, true_proof};
