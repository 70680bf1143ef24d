// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `cellar kind` - container kinds (barrel, tote, tank...)

use super::engine;
use crate::app::App;
use crate::output::{print, print_list};
use crate::views::KindRow;
use cellar_core::{ContainerKind, KindId};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum KindCommand {
    /// Register a container kind, replacing one with the same id
    Add {
        /// Display name
        #[arg(long)]
        name: String,
        /// Identifier used by `container create --kind`; derived from the name if omitted
        #[arg(long)]
        id: Option<String>,
        /// Capacity in wine gallons
        #[arg(long)]
        capacity: Option<f64>,
        /// Default tare weight in pounds for new containers
        #[arg(long)]
        tare: Option<f64>,
    },
    /// List registered kinds
    List,
}

pub async fn handle(command: KindCommand, app: &App) -> anyhow::Result<()> {
    match command {
        KindCommand::Add {
            name,
            id,
            capacity,
            tare,
        } => {
            let id = id.unwrap_or_else(|| slug(&name));
            let kind = ContainerKind {
                id: KindId::new(id),
                owner: app.owner.clone(),
                name,
                capacity_gallons: capacity,
                tare_weight_lbs: tare,
            };
            let kind = engine(app.engine.register_kind(kind).await)?;
            print(&KindRow(&kind), app.format);
        }
        KindCommand::List => {
            let kinds = engine(app.engine.kinds(&app.owner).await)?;
            let rows: Vec<_> = kinds.iter().map(KindRow).collect();
            print_list(&rows, app.format, "No container kinds");
        }
    }
    Ok(())
}

/// `"53 Gal Barrel"` -> `"53-gal-barrel"`
pub(crate) fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in name.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
        } else if !out.ends_with('-') && !out.is_empty() {
            out.push('-');
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    if out.is_empty() {
        name.trim().to_string()
    } else {
        out
    }
}
