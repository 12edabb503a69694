//! smelt CLI application
//!
//! Command-line interface for the smelt roadmap orchestrator.

mod args;
mod cli;
mod prompt;
mod renderer;

use std::process::ExitCode;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use smelt_core::Settings;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::init();

    match run(Args::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let Args {
        database_file,
        env_file,
        no_color,
        command,
    } = args;

    let settings = Settings::load(&env_file).context("Failed to load settings")?;
    let renderer = TerminalRenderer::for_stdout(!no_color);
    let cli = Cli::new(settings, database_file, renderer);

    info!("smelt started");

    match command {
        Commands::Next(args) => cli.next(args).await,
        Commands::Add(args) => cli.add(args),
        Commands::Done(args) => cli.done(args),
        Commands::Reset(args) => cli.reset(args),
        Commands::Remove(args) => cli.remove(args),
        Commands::Status => cli.status(),
        Commands::Import(args) => cli.import(args).await,
        Commands::Context => cli.context(),
    }
}
