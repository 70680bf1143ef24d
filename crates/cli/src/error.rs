// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! Each rendered error says:
//! - What went wrong (message)
//! - Why it might have happened (context)
//! - How to fix it (suggestions)

use cellar_engine::EngineError;
use std::fmt;
use std::path::Path;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct CliError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
    /// Original error if any
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl CliError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    /// Add context about why this error might have happened.
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    /// Add a suggestion for how to fix this error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Set the source error that caused this error.
    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Common error builders for typical failure scenarios.
impl CliError {
    /// Another process holds the data directory lock.
    pub fn data_dir_locked(dir: &Path, source: std::io::Error) -> Self {
        CliError::new(format!("Data directory '{}' is in use", dir.display()))
            .with_context("Another cellar command is writing to the same ledger")
            .with_suggestion("Wait for the other command to finish and retry")
            .with_suggestion("Use a different directory: cellar --data-dir <DIR> ...")
            .with_source(source)
    }

    /// A command that needs a proof was run against a container without one.
    pub fn proof_required(container: &str) -> Self {
        CliError::new(format!("Container '{}' has no proof", container))
            .with_context("Gallons cannot be derived from weight without a proof")
            .with_suggestion("Pass the proof explicitly: --proof <PROOF>")
            .with_suggestion(format!(
                "Set it on the container: cellar container edit {} --proof <PROOF>",
                container
            ))
    }
}

impl From<EngineError> for CliError {
    fn from(err: EngineError) -> Self {
        let base = CliError::new(err.to_string());
        let with_hints = match &err {
            EngineError::Validation(_) => {
                base.with_suggestion("Check the command's arguments: cellar <command> --help")
            }
            EngineError::NotFound {
                kind: "container kind",
                ..
            } => base
                .with_suggestion("List registered kinds: cellar kind list")
                .with_suggestion(
                    "Register one: cellar kind add --name <NAME> --capacity <GALLONS>",
                ),
            EngineError::NotFound { .. } => base
                .with_context("The container may have been deleted or belong to another owner")
                .with_suggestion("List containers: cellar container list"),
            EngineError::CapacityExceeded {
                capacity,
                current,
                ..
            } => base
                .with_context(format!(
                    "Room left: {:.2} wine gallons",
                    (capacity - current).max(0.0)
                ))
                .with_suggestion("Move less, or split it across containers"),
            EngineError::InvalidProofTransition { container, .. } => base
                .with_context("Proofing down only dilutes; it cannot raise proof")
                .with_suggestion(format!(
                    "Check the current proof: cellar container show {}",
                    container
                )),
            EngineError::Conflict(_) => base
                .with_context("Another operation held one of the containers for too long")
                .with_suggestion("Retry the command")
                .with_suggestion("Raise [store] lock_timeout in cellar.toml"),
            EngineError::Storage(_) => base
                .with_context("The ledger could not be read or written")
                .with_suggestion("Check permissions and free space in the data directory"),
        };
        with_hints.with_source(err)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
