// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bottle sizes as printed on labels (`750ml`, `1.75L`, ...)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid bottle size '{0}': expected e.g. 375ml, 750ml, 1L, 1.75L")]
pub struct BottleSizeError(pub String);

/// Bottle capacity in liters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BottleSize(f64);

impl BottleSize {
    pub const HALF_PINT: BottleSize = BottleSize(0.375);
    pub const FIFTH: BottleSize = BottleSize(0.75);
    pub const LITER: BottleSize = BottleSize(1.0);
    pub const HANDLE: BottleSize = BottleSize(1.75);

    /// A bottle size in liters; must be positive and finite
    pub fn from_liters(liters: f64) -> Result<Self, BottleSizeError> {
        if liters.is_finite() && liters > 0.0 {
            Ok(Self(liters))
        } else {
            Err(BottleSizeError(liters.to_string()))
        }
    }

    pub fn liters(self) -> f64 {
        self.0
    }
}

impl FromStr for BottleSize {
    type Err = BottleSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let invalid = || BottleSizeError(s.to_string());

        let (number, scale) = if let Some(ml) = lower.strip_suffix("ml") {
            (ml, 0.001)
        } else if let Some(l) = lower.strip_suffix('l') {
            (l, 1.0)
        } else {
            (lower.as_str(), 1.0)
        };

        let value: f64 = number.trim().parse().map_err(|_| invalid())?;
        Self::from_liters(value * scale).map_err(|_| invalid())
    }
}

impl fmt::Display for BottleSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 1.0 {
            write!(f, "{}ml", (self.0 * 1000.0).round())
        } else {
            write!(f, "{}L", self.0)
        }
    }
}
