// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Store tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// How long `begin` waits for container locks before reporting a conflict
    #[serde(with = "humantime_serde")]
    pub lock_timeout: Duration,
}

impl StoreConfig {
    pub const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_secs(5);

    pub fn with_lock_timeout(lock_timeout: Duration) -> Self {
        Self { lock_timeout }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            lock_timeout: Self::DEFAULT_LOCK_TIMEOUT,
        }
    }
}
