// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `cellar container` - create, inspect, edit and delete containers

use super::engine;
use crate::app::App;
use crate::output::{print, print_list, OutputFormat};
use crate::views::{container_header, AppliedView, ContainerDetail, ContainerRow};
use cellar_core::{Account, ContainerId, ContainerStatus, KindId, ProductId};
use cellar_engine::{ContainerEdit, CreateContainer};
use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum ContainerCommand {
    /// Create one or more containers of a kind
    Create(CreateArgs),
    /// List containers
    List,
    /// Show one container with its derived gallons
    Show {
        /// Container id
        id: String,
    },
    /// Correct a container's recorded data
    Edit(EditArgs),
    /// Delete a container, recording its final contents
    Delete {
        /// Container id
        id: String,
    },
}

#[derive(Args)]
pub struct CreateArgs {
    /// Container kind id
    #[arg(long)]
    pub kind: String,
    /// Name; defaults to the kind's name
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub proof: Option<f64>,
    /// Net weight in pounds
    #[arg(long, default_value_t = 0.0)]
    pub weight: f64,
    /// Explicit status; derived from weight if omitted
    #[arg(long)]
    pub status: Option<ContainerStatus>,
    #[arg(long)]
    pub product: Option<String>,
    #[arg(long, default_value_t = Account::Storage)]
    pub account: Account,
    /// Tare weight in pounds; defaults to the kind's
    #[arg(long)]
    pub tare: Option<f64>,
    /// Temperature in degrees Fahrenheit
    #[arg(long)]
    pub temperature: Option<f64>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
    /// Number of identical containers; names get a ` #n` suffix
    #[arg(long, default_value_t = 1)]
    pub count: u32,
}

#[derive(Args)]
pub struct EditArgs {
    /// Container id
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long, conflicts_with = "clear_proof")]
    pub proof: Option<f64>,
    #[arg(long)]
    pub clear_proof: bool,
    #[arg(long, conflicts_with = "clear_product")]
    pub product: Option<String>,
    #[arg(long)]
    pub clear_product: bool,
    #[arg(long)]
    pub account: Option<Account>,
    #[arg(long, conflicts_with = "clear_tare")]
    pub tare: Option<f64>,
    #[arg(long)]
    pub clear_tare: bool,
    /// Net weight in pounds
    #[arg(long)]
    pub weight: Option<f64>,
    #[arg(long, conflicts_with = "clear_temperature")]
    pub temperature: Option<f64>,
    #[arg(long)]
    pub clear_temperature: bool,
    #[arg(long)]
    pub status: Option<ContainerStatus>,
    #[arg(long, conflicts_with = "clear_location")]
    pub location: Option<String>,
    #[arg(long)]
    pub clear_location: bool,
    #[arg(long, conflicts_with = "clear_notes")]
    pub notes: Option<String>,
    #[arg(long)]
    pub clear_notes: bool,
}

impl CreateArgs {
    fn request(self) -> (CreateContainer, u32) {
        let mut request = CreateContainer::new(KindId::new(self.kind));
        request.name = self.name;
        request.account = self.account;
        request.net_weight_lbs = self.weight;
        request.proof = self.proof;
        request.status = self.status;
        request.product_id = self.product.map(ProductId::new);
        request.tare_weight_lbs = self.tare;
        request.temperature_f = self.temperature;
        request.location = self.location;
        request.notes = self.notes;
        (request, self.count)
    }
}

/// `--x V` sets, `--clear-x` clears, neither leaves the field alone
fn clearable<T>(value: Option<T>, clear: bool) -> Option<Option<T>> {
    if clear {
        Some(None)
    } else {
        value.map(Some)
    }
}

impl EditArgs {
    fn edit(self) -> (ContainerId, ContainerEdit) {
        let edit = ContainerEdit {
            name: self.name,
            proof: clearable(self.proof, self.clear_proof),
            product_id: clearable(self.product.map(ProductId::new), self.clear_product),
            account: self.account,
            tare_weight_lbs: clearable(self.tare, self.clear_tare),
            net_weight_lbs: self.weight,
            temperature_f: clearable(self.temperature, self.clear_temperature),
            status: self.status,
            location: clearable(self.location, self.clear_location),
            notes: clearable(self.notes, self.clear_notes),
        };
        (ContainerId::new(self.id), edit)
    }
}

pub async fn handle(command: ContainerCommand, app: &App) -> anyhow::Result<()> {
    match command {
        ContainerCommand::Create(args) => {
            let (request, count) = args.request();
            let created = engine(app.engine.create_containers(&app.owner, request, count).await)?;
            let views: Vec<_> = created.iter().map(AppliedView).collect();
            print_list(&views, app.format, "No containers created");
        }
        ContainerCommand::List => {
            let containers = engine(app.engine.containers(&app.owner).await)?;
            let rows: Vec<_> = containers.iter().map(ContainerRow).collect();
            if app.format == OutputFormat::Text && !rows.is_empty() {
                println!("{}", container_header());
            }
            print_list(&rows, app.format, "No containers");
        }
        ContainerCommand::Show { id } => {
            let container = engine(app.engine.container(&app.owner, &ContainerId::new(id)).await)?;
            print(&ContainerDetail::new(&container), app.format);
        }
        ContainerCommand::Edit(args) => {
            let (id, edit) = args.edit();
            let applied = engine(app.engine.edit_container(&app.owner, &id, edit).await)?;
            print(&AppliedView(&applied), app.format);
        }
        ContainerCommand::Delete { id } => {
            let deleted =
                engine(app.engine.delete_container(&app.owner, &ContainerId::new(id)).await)?;
            print(&AppliedView(&deleted), app.format);
        }
    }
    Ok(())
}
