// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod container;
pub mod convert;
pub mod kind;
pub mod ledger;
pub mod operations;

use crate::error::CliError;
use cellar_engine::EngineError;

/// Lift an engine result into the CLI's error rendering
pub(crate) fn engine<T>(result: Result<T, EngineError>) -> anyhow::Result<T> {
    result.map_err(|e| CliError::from(e).into())
}
