use std::sync::Arc;

mod backend_bridge;
mod config;
mod controller;
mod ui;

use anyhow::{anyhow, Context};
use clap::Parser;
use client_core::HttpTravelClient;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::config::{Args, StartupConfig};
use crate::controller::events::UiEvent;
use crate::ui::{app::WINDOW_TITLE, TravelAssistantApp};

fn init_tracing(log_filter: Option<&str>) {
    let filter = match log_filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.log_filter.as_deref());

    let startup = StartupConfig::from_args(&args)?;
    tracing::info!(
        api_base = %startup.api_base,
        ignore_stale = startup.ignore_stale_responses,
        "starting travel assistant"
    );

    let api = Arc::new(HttpTravelClient::new(&startup.api_base)?);
    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(api, cmd_rx, ui_tx)
        .context("failed to spawn backend worker thread")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([900.0, 860.0])
            .with_min_inner_size([640.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| {
            Ok(Box::new(TravelAssistantApp::bootstrap(
                cmd_tx, ui_rx, startup,
            )))
        }),
    )
    .map_err(|err| anyhow!("desktop app exited with error: {err}"))
}
