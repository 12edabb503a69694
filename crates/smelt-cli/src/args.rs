use std::path::PathBuf;

use clap::{Parser, Subcommand};
use smelt_core::config::DEFAULT_ENV_FILE;

use crate::cli::{AddStepArgs, ImportArgs, NextArgs, StepIdArgs};

/// Feed a roadmap of development steps to a coding agent, one at a time
///
/// Smelt keeps an ordered roadmap in a local SQLite database. `smelt next`
/// hands the first pending step to the coding agent together with the
/// project's memory files, and marks it done when the agent succeeds.
#[derive(Parser)]
#[command(version, about, name = "smelt")]
pub struct Args {
    /// Path to the SQLite roadmap database. Defaults to
    /// $SMELT_MEMORY/$SMELT_ROADMAP_DB (memory/roadmap.db)
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Env file to read SMELT_* settings from
    #[arg(long, global = true, default_value = DEFAULT_ENV_FILE)]
    pub env_file: PathBuf,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the smelt CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Show the next step and optionally run the agent on it
    Next(NextArgs),
    /// Append a step to the roadmap
    Add(AddStepArgs),
    /// Mark a step as done without running the agent
    Done(StepIdArgs),
    /// Mark a step as not done
    Reset(StepIdArgs),
    /// Delete a step
    #[command(alias = "rm")]
    Remove(StepIdArgs),
    /// List all steps with their completion status
    Status,
    /// Parse a plan document with the language model and append its steps
    Import(ImportArgs),
    /// Print the memory context handed to the agent
    Context,
}
