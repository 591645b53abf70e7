//! Stepwise CLI
//!
//! Command-line interface for the stepwise roadmap planner.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use stepwise_core::PlannerBuilder;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        project,
        no_color,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Stepwise started for project {project}");

    let cli = Cli::new(planner, renderer, project);
    match command {
        Some(command) => cli.handle_command(command).await,
        None => cli.show_roadmap().await,
    }
}
