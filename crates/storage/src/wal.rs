// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Write-ahead log for durable storage
//!
//! Each line is one JSON [`WalEntry`] holding every operation of a single
//! commit plus a CRC32 of those operations. Replay stops at the first line
//! that fails to parse, fails its checksum, or lacks its trailing newline,
//! so a commit torn by a crash is dropped whole.

use crate::operation::Operation;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Errors that can occur in WAL operations
#[derive(Debug, Error)]
pub enum WalError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single committed batch of operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalEntry {
    /// Monotonically increasing, starting at 0
    pub sequence: u64,
    /// Microseconds since Unix epoch
    pub timestamp_micros: u64,
    pub operations: Vec<Operation>,
    /// CRC32 of the serialized operations
    pub checksum: u32,
}

impl WalEntry {
    pub fn new(sequence: u64, operations: Vec<Operation>) -> Result<Self, WalError> {
        let timestamp_micros = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_micros() as u64)
            .unwrap_or(0);
        let checksum = Self::calculate_checksum(&operations)?;
        Ok(Self {
            sequence,
            timestamp_micros,
            operations,
            checksum,
        })
    }

    /// Replay re-serializes parsed operations, so this needs serde_json's
    /// `float_roundtrip` parsing to reproduce the written bytes.
    fn calculate_checksum(operations: &[Operation]) -> Result<u32, WalError> {
        let json = serde_json::to_string(operations)?;
        Ok(crc32fast::hash(json.as_bytes()))
    }

    /// Verify the checksum matches the operations
    pub fn verify(&self) -> bool {
        Self::calculate_checksum(&self.operations).is_ok_and(|sum| sum == self.checksum)
    }

    pub fn to_line(&self) -> Result<String, WalError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_line(line: &str) -> Result<Self, WalError> {
        Ok(serde_json::from_str(line)?)
    }
}

/// Where and why replay stopped early
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalCorruption {
    pub line: u64,
    pub reason: String,
}

/// Result of reading a WAL file from the start
#[derive(Debug, Default)]
pub struct Replay {
    pub entries: Vec<WalEntry>,
    /// Byte length of the valid prefix
    pub valid_len: u64,
    pub corruption: Option<WalCorruption>,
}

impl Replay {
    pub fn next_sequence(&self) -> u64 {
        self.entries.last().map(|e| e.sequence + 1).unwrap_or(0)
    }
}

/// Append-only, fsync'd log of committed batches
pub struct Wal {
    file: File,
    next_sequence: u64,
    len: u64,
}

impl Wal {
    /// Read every valid entry, stopping at the first corrupt or torn line
    pub fn replay(path: &Path) -> Result<Replay, WalError> {
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Replay::default()),
            Err(e) => return Err(e.into()),
        };

        let mut reader = BufReader::new(file);
        let mut replay = Replay::default();
        let mut line_number = 0u64;
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let read = reader.read_until(b'\n', &mut buf)?;
            if read == 0 {
                break;
            }
            line_number += 1;

            let corrupt = |reason: String| {
                Some(WalCorruption {
                    line: line_number,
                    reason,
                })
            };
            if buf.last() != Some(&b'\n') {
                replay.corruption = corrupt("missing newline (torn write)".to_string());
                break;
            }
            let Ok(text) = std::str::from_utf8(&buf) else {
                replay.corruption = corrupt("invalid UTF-8".to_string());
                break;
            };
            let trimmed = text.trim();
            if trimmed.is_empty() {
                replay.valid_len += read as u64;
                continue;
            }
            let entry = match WalEntry::from_line(trimmed) {
                Ok(entry) => entry,
                Err(e) => {
                    replay.corruption = corrupt(e.to_string());
                    break;
                }
            };
            if !entry.verify() {
                replay.corruption = corrupt("checksum mismatch".to_string());
                break;
            }

            replay.valid_len += read as u64;
            replay.entries.push(entry);
        }

        Ok(replay)
    }

    /// Open for appending after `replay`, cutting off anything past its valid prefix
    pub fn open(path: &Path, replay: &Replay) -> Result<Self, WalError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        let on_disk = file.metadata()?.len();
        if on_disk > replay.valid_len {
            tracing::warn!(
                path = %path.display(),
                valid_len = replay.valid_len,
                discarded = on_disk - replay.valid_len,
                "truncating WAL tail after last valid entry"
            );
            file.set_len(replay.valid_len)?;
            file.sync_all()?;
        }

        Ok(Self {
            file,
            next_sequence: replay.next_sequence(),
            len: replay.valid_len,
        })
    }

    /// Durably append one batch; returns its sequence number.
    ///
    /// On failure the file is cut back to its previous length so later
    /// appends never follow a partial line.
    pub fn append(&mut self, operations: Vec<Operation>) -> Result<u64, WalError> {
        let sequence = self.next_sequence;
        let entry = WalEntry::new(sequence, operations)?;
        let mut line = entry.to_line()?;
        line.push('\n');

        let written = self.file.write_all(line.as_bytes()).and_then(|()| self.file.sync_all());
        if let Err(e) = written {
            tracing::error!(error = %e, sequence, "WAL append failed");
            if let Err(trim) = self.file.set_len(self.len) {
                tracing::error!(error = %trim, "failed to trim partial WAL entry");
            }
            return Err(e.into());
        }

        self.len += line.len() as u64;
        self.next_sequence += 1;
        Ok(sequence)
    }
}

#[cfg(test)]
#[path = "wal_tests.rs"]
mod tests;
