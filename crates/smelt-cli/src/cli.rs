//! Command handlers for the smelt CLI.
//!
//! Each handler opens the roadmap, runs one operation and closes the roadmap
//! again on every path, so a failed command never leaves the database
//! handle open. Errors carry a command-specific context line; `main` prints
//! the chain as a single line and exits with status 1.

use std::{fs, path::PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::Args;
use log::{debug, warn};
use smelt_core::{
    advance_roadmap,
    context::{build_context, context_files},
    AiderAgent, CreateResult, Database, DeleteResult, HttpCompletionProvider, ImportResult,
    PlanParser, RoadmapStore, Settings, SmeltError, Steps, UpdateResult,
};

use crate::{prompt::StdinPrompt, renderer::TerminalRenderer};

/// Show the next step and optionally run the agent on it
#[derive(Args)]
pub struct NextArgs {
    /// Start the agent without asking for confirmation
    #[arg(short, long)]
    pub yes: bool,
}

/// Append a step to the roadmap
#[derive(Args)]
pub struct AddStepArgs {
    /// What needs to be done
    pub description: String,
}

/// Address a single step
#[derive(Args)]
pub struct StepIdArgs {
    /// Step ID
    pub id: u64,
}

/// Import steps from a plan document
#[derive(Args)]
pub struct ImportArgs {
    /// Plan file (Markdown or plain text)
    pub file: PathBuf,
}

pub struct Cli {
    settings: Settings,
    database_file: PathBuf,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(
        settings: Settings,
        database_file: Option<PathBuf>,
        renderer: TerminalRenderer,
    ) -> Self {
        let database_file = database_file.unwrap_or_else(|| settings.db_path());
        Self {
            settings,
            database_file,
            renderer,
        }
    }

    fn open_store(&self) -> smelt_core::Result<Box<dyn RoadmapStore>> {
        Ok(Box::new(Database::new(&self.database_file)?))
    }

    /// Opens the roadmap, runs `op`, and closes the roadmap whatever the
    /// outcome. An error from `op` wins over an error from closing.
    fn with_store<T>(
        &self,
        op: impl FnOnce(&mut dyn RoadmapStore) -> smelt_core::Result<T>,
    ) -> smelt_core::Result<T> {
        let mut store = self.open_store()?;
        let result = op(store.as_mut());
        close_store(store, result)
    }

    pub async fn next(&self, args: NextArgs) -> Result<()> {
        let mut store = self.open_store().context("Error reading roadmap")?;

        let mut prompt = StdinPrompt::new(&self.renderer, args.yes);
        let files = context_files(&self.settings);
        debug!("Handing {} context files to the agent", files.len());

        let result = advance_roadmap(store.as_mut(), &mut prompt, &files, || {
            AiderAgent::new(
                &self.settings.agent_binary,
                &self.settings.model,
                &self.settings.project,
            )
        })
        .await;

        let outcome = close_store(store, result).map_err(next_error)?;

        if outcome.is_failure() {
            return Err(anyhow!("{}", outcome.to_string().trim_end()));
        }
        self.renderer.render(&outcome.to_string())
    }

    pub fn add(&self, args: AddStepArgs) -> Result<()> {
        let step = self
            .with_store(|store| {
                let id = store.add_step(&args.description)?;
                Ok(smelt_core::Step {
                    id,
                    description: args.description,
                    done: false,
                })
            })
            .context("Error adding step")?;

        self.renderer.render(&CreateResult::new(step).to_string())
    }

    pub fn done(&self, args: StepIdArgs) -> Result<()> {
        self.with_store(|store| store.mark_done(args.id))
            .context("Error marking step as done")?;

        self.renderer.render(&UpdateResult::done(args.id).to_string())
    }

    pub fn reset(&self, args: StepIdArgs) -> Result<()> {
        self.with_store(|store| store.reset_step(args.id))
            .context("Error resetting step")?;

        self.renderer
            .render(&UpdateResult::reopened(args.id).to_string())
    }

    pub fn remove(&self, args: StepIdArgs) -> Result<()> {
        self.with_store(|store| store.remove_step(args.id))
            .context("Error removing step")?;

        self.renderer.render(&DeleteResult::new(args.id).to_string())
    }

    pub fn status(&self) -> Result<()> {
        let steps = self
            .with_store(|store| store.all_steps())
            .context("Error reading roadmap")?;

        self.renderer.render(&Steps(steps).to_string())
    }

    pub async fn import(&self, args: ImportArgs) -> Result<()> {
        let content = fs::read_to_string(&args.file).with_context(|| {
            format!("Error reading plan file {}", args.file.display())
        })?;

        let provider = HttpCompletionProvider::new(&self.settings.loader_base_url)
            .context("Error parsing plan")?;
        let parser = PlanParser::new(provider, &self.settings.loader_model)
            .with_api_key(self.settings.loader_api_key.clone())
            .with_retries(self.settings.loader_retries);

        let parsed = parser.parse(&content).await.context("Error parsing plan")?;

        self.with_store(|store| store.import_steps(&parsed))
            .context("Error importing steps")?;

        self.renderer
            .render(&ImportResult::from(parsed.as_slice()).to_string())
    }

    pub fn context(&self) -> Result<()> {
        let context = build_context(&self.settings);
        if !context.is_empty() {
            println!("{context}");
        }
        Ok(())
    }
}

/// Closes `store`, keeping the first error.
fn close_store<T>(
    store: Box<dyn RoadmapStore>,
    result: smelt_core::Result<T>,
) -> smelt_core::Result<T> {
    match (result, store.close()) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(close_err)) => Err(close_err),
        (Err(err), close_result) => {
            if let Err(close_err) = close_result {
                warn!("Failed to close roadmap after error: {close_err}");
            }
            Err(err)
        }
    }
}

/// Maps a failed `next` cycle onto the message the operator sees.
fn next_error(err: SmeltError) -> anyhow::Error {
    match err {
        SmeltError::RoadmapRead(source) => {
            anyhow::Error::new(*source).context("Error reading roadmap")
        }
        SmeltError::MarkDoneFailed { source, .. } => {
            anyhow::Error::new(*source).context("Agent succeeded but failed to mark step as done")
        }
        err @ SmeltError::AgentNotFound { .. } => anyhow!("Error: {err}"),
        err => anyhow::Error::new(err),
    }
}
