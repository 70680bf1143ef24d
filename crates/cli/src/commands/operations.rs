// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Physical operations: transfer, proof-down, adjust, bottle, account

use super::engine;
use crate::app::App;
use crate::error::CliError;
use crate::output::print;
use crate::views::{AppliedView, TransferredView};
use cellar_core::conversion::weight_to_gallons;
use cellar_core::{Account, BottleSize, ContainerId};
use cellar_engine::{AdjustMethod, AdjustRequest, BottleRequest, RemainderAction, TransferRequest};
use clap::Args;

#[derive(Args)]
pub struct TransferArgs {
    /// Source container id
    pub source: String,
    /// Destination container id
    pub destination: String,
    /// Net weight moved, in pounds
    #[arg(long)]
    pub weight: f64,
    /// Wine gallons moved; derived from weight and proof if omitted
    #[arg(long)]
    pub gallons: Option<f64>,
    /// Proof of the spirit moved; defaults to the source container's
    #[arg(long)]
    pub proof: Option<f64>,
}

#[derive(Args)]
pub struct ProofDownArgs {
    /// Container id
    pub id: String,
    /// Proof to dilute to
    #[arg(long)]
    pub target: f64,
}

#[derive(Args)]
pub struct AdjustArgs {
    /// Container id
    pub id: String,
    /// Whether spirit is added or removed
    pub method: AdjustMethod,
    /// Net weight added or removed, in pounds
    #[arg(long)]
    pub weight: f64,
    /// Wine gallons added or removed; derived from weight if omitted
    #[arg(long)]
    pub gallons: Option<f64>,
}

#[derive(Args)]
pub struct BottleArgs {
    /// Container id
    pub id: String,
    /// Bottle size (375ml, 750ml, 1L, 1.75L)
    #[arg(long, default_value = "750ml")]
    pub size: BottleSize,
    /// Number of bottles filled
    #[arg(long)]
    pub count: u32,
    /// What happened to what was left: keep, empty, loss or gain
    #[arg(long)]
    pub remainder: RemainderAction,
    /// Net weight left in the container, in pounds
    #[arg(long, default_value_t = 0.0)]
    pub remainder_weight: f64,
}

#[derive(Args)]
pub struct AccountArgs {
    /// Container id
    pub id: String,
    /// New account: storage, production, bottling or sampling
    pub account: Account,
}

pub async fn transfer(args: TransferArgs, app: &App) -> anyhow::Result<()> {
    let source_id = ContainerId::new(args.source);
    let (proof, wine_gallons) = match (args.proof, args.gallons) {
        (Some(proof), Some(gallons)) => (proof, gallons),
        (proof, gallons) => {
            let source = engine(app.engine.container(&app.owner, &source_id).await)?;
            let Some(proof) = proof.or(source.proof) else {
                return Err(CliError::proof_required(source_id.as_str()).into());
            };
            (proof, gallons.unwrap_or_else(|| weight_to_gallons(proof, args.weight).wine))
        }
    };

    let request = TransferRequest {
        source: source_id,
        destination: ContainerId::new(args.destination),
        weight_lbs: args.weight,
        wine_gallons,
        proof,
    };
    let moved = engine(app.engine.transfer(&app.owner, request).await)?;
    print(&TransferredView(&moved), app.format);
    Ok(())
}

pub async fn proof_down(args: ProofDownArgs, app: &App) -> anyhow::Result<()> {
    let id = ContainerId::new(args.id);
    let applied = engine(app.engine.proof_down(&app.owner, &id, args.target).await)?;
    print(&AppliedView(&applied), app.format);
    Ok(())
}

pub async fn adjust(args: AdjustArgs, app: &App) -> anyhow::Result<()> {
    let id = ContainerId::new(args.id);
    let wine_gallons = match args.gallons {
        Some(gallons) => gallons,
        None => {
            let container = engine(app.engine.container(&app.owner, &id).await)?;
            weight_to_gallons(container.proof_or_zero(), args.weight).wine
        }
    };

    let request = AdjustRequest {
        container: id,
        method: args.method,
        weight_lbs: args.weight,
        wine_gallons,
    };
    let applied = engine(app.engine.adjust(&app.owner, request).await)?;
    print(&AppliedView(&applied), app.format);
    Ok(())
}

pub async fn bottle(args: BottleArgs, app: &App) -> anyhow::Result<()> {
    let request = BottleRequest {
        container: ContainerId::new(args.id),
        bottle_size: args.size,
        bottle_count: args.count,
        remainder: args.remainder,
        remainder_weight_lbs: args.remainder_weight,
    };
    let applied = engine(app.engine.bottle(&app.owner, request).await)?;
    print(&AppliedView(&applied), app.format);
    Ok(())
}

pub async fn account(args: AccountArgs, app: &App) -> anyhow::Result<()> {
    let id = ContainerId::new(args.id);
    let applied = engine(app.engine.change_account(&app.owner, &id, args.account).await)?;
    print(&AppliedView(&applied), app.format);
    Ok(())
}
