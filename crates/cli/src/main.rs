// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! cellar - bulk spirit inventory CLI

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod app;
mod commands;
mod config;
mod error;
mod logging;
mod output;
mod views;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{container, convert, kind, ledger, operations};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::app::App;
use crate::config::Overrides;
use crate::error::CliError;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "cellar",
    version,
    about = "cellar - bulk spirit inventory with an auditable ledger"
)]
struct Cli {
    /// Config file (default: <data-dir>/cellar.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the ledger
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Owner whose containers and ledger are used
    #[arg(long, global = true)]
    owner: Option<String>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Container kinds
    Kind {
        #[command(subcommand)]
        command: kind::KindCommand,
    },
    /// Container management
    Container {
        #[command(subcommand)]
        command: container::ContainerCommand,
    },
    /// Move spirit between containers
    Transfer(operations::TransferArgs),
    /// Dilute a container to a lower proof
    ProofDown(operations::ProofDownArgs),
    /// Add or remove spirit outside a transfer
    Adjust(operations::AdjustArgs),
    /// Bottle from a container
    Bottle(operations::BottleArgs),
    /// Move a container to another account
    Account(operations::AccountArgs),
    /// Transaction ledger
    Ledger {
        #[command(subcommand)]
        command: ledger::LedgerCommand,
    },
    /// Gauging calculations
    Convert {
        #[command(subcommand)]
        command: convert::ConvertCommand,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<CliError>() {
                Some(err) => eprint!("{}", err),
                None => eprintln!("error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let format = cli.format;

    // Conversions are pure; they need no data directory
    let command = match cli.command {
        Commands::Convert { command } => return convert::handle(command, format),
        command => command,
    };

    let overrides = Overrides {
        config: cli.config,
        data_dir: cli.data_dir,
        owner: cli.owner,
    };
    let settings = config::resolve(&overrides)?;
    let _log_guard = logging::setup_logging(&settings)?;
    tracing::debug!(source = ?settings.source, "configuration resolved");

    let app = App::open(&settings, format)?;

    match command {
        Commands::Kind { command } => kind::handle(command, &app).await,
        Commands::Container { command } => container::handle(command, &app).await,
        Commands::Transfer(args) => operations::transfer(args, &app).await,
        Commands::ProofDown(args) => operations::proof_down(args, &app).await,
        Commands::Adjust(args) => operations::adjust(args, &app).await,
        Commands::Bottle(args) => operations::bottle(args, &app).await,
        Commands::Account(args) => operations::account(args, &app).await,
        Commands::Ledger { command } => ledger::handle(command, &app).await,
        Commands::Convert { .. } => unreachable!(),
    }
}
