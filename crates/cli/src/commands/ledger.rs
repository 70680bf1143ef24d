// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `cellar ledger` - query the transaction ledger

use super::engine;
use crate::app::App;
use crate::output::{print, print_list, OutputFormat};
use crate::views::{transaction_header, StatsView, TransactionRow};
use cellar_core::{ContainerId, LedgerQuery, TransactionType};
use chrono::{DateTime, Utc};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum LedgerCommand {
    /// List transactions, newest first
    List {
        /// Only entries for this container
        #[arg(long)]
        container: Option<String>,
        /// Only entries of this type (e.g. TRANSFER_IN)
        #[arg(long = "type")]
        transaction_type: Option<TransactionType>,
        /// Entries at or after this RFC 3339 time
        #[arg(long)]
        since: Option<DateTime<Utc>>,
        /// Entries before this RFC 3339 time
        #[arg(long)]
        until: Option<DateTime<Utc>>,
        /// Skip this many matching entries
        #[arg(long, default_value_t = 0)]
        offset: usize,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Totals and counts per transaction type
    Stats,
}

pub async fn handle(command: LedgerCommand, app: &App) -> anyhow::Result<()> {
    match command {
        LedgerCommand::List {
            container,
            transaction_type,
            since,
            until,
            offset,
            limit,
        } => {
            let query = LedgerQuery {
                transaction_type,
                container_id: container.map(ContainerId::new),
                since,
                until,
                offset,
                limit,
            };
            let transactions = engine(app.engine.transactions(&app.owner, &query).await)?;
            let rows: Vec<_> = transactions.iter().map(TransactionRow).collect();
            if app.format == OutputFormat::Text && !rows.is_empty() {
                println!("{}", transaction_header());
            }
            print_list(&rows, app.format, "No transactions");
        }
        LedgerCommand::Stats => {
            let stats = engine(app.engine.ledger_stats(&app.owner).await)?;
            print(&StatsView(&stats), app.format);
        }
    }
    Ok(())
}
