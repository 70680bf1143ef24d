// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Opened data directory: locked store plus engine

use crate::config::Settings;
use crate::error::CliError;
use crate::output::OutputFormat;
use cellar_core::{OwnerId, SystemClock, UuidIdGen};
use cellar_engine::OperationEngine;
use cellar_storage::{LocalStore, TracedStore};
use fs2::FileExt;
use std::fs::File;
use tracing::info;

/// Engine over the WAL-backed store in the data directory
pub type Engine = OperationEngine<TracedStore<LocalStore>, SystemClock, UuidIdGen>;

pub struct App {
    pub engine: Engine,
    pub owner: OwnerId,
    pub format: OutputFormat,
    // NOTE(lifetime): Held to keep the exclusive data directory lock; released on drop
    _lock_file: File,
}

impl App {
    /// Lock the data directory, then replay its WAL
    pub fn open(settings: &Settings, format: OutputFormat) -> anyhow::Result<Self> {
        std::fs::create_dir_all(&settings.data_dir)?;

        let lock_file = File::create(settings.lock_path())?;
        lock_file
            .try_lock_exclusive()
            .map_err(|e| CliError::data_dir_locked(&settings.data_dir, e))?;

        let store = LocalStore::open(&settings.data_dir, settings.store)?;
        info!(
            data_dir = %settings.data_dir.display(),
            owner = %settings.owner,
            "store opened"
        );

        Ok(Self {
            engine: OperationEngine::new(TracedStore::new(store), SystemClock, UuidIdGen),
            owner: settings.owner.clone(),
            format,
            _lock_file: lock_file,
        })
    }
}
