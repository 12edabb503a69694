//! Aider as the coding agent.

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use log::info;
use tokio::process::Command;

use super::CodingAgent;
use crate::error::{Result, SmeltError};

/// Flags that keep aider non-interactive and leave commits to the operator.
const FIXED_FLAGS: [&str; 4] = [
    "--yes-always",
    "--no-auto-commits",
    "--no-stream",
    "--no-suggest-shell-commands",
];

/// Runs `aider` (or a compatible executable) as a subprocess.
#[derive(Debug, Clone)]
pub struct AiderAgent {
    binary: String,
    program: PathBuf,
    model: String,
    workdir: PathBuf,
}

impl AiderAgent {
    /// Resolves `binary` on `PATH` and prepares an agent for `model` working
    /// in `workdir`.
    ///
    /// # Errors
    ///
    /// Returns `SmeltError::AgentNotFound` if `binary` cannot be located.
    pub fn new(
        binary: impl Into<String>,
        model: impl Into<String>,
        workdir: impl AsRef<Path>,
    ) -> Result<Self> {
        let binary = binary.into();
        let program = which::which(&binary).map_err(|source| SmeltError::AgentNotFound {
            binary: binary.clone(),
            source,
        })?;

        Ok(Self {
            binary,
            program,
            model: model.into(),
            workdir: workdir.as_ref().to_path_buf(),
        })
    }

    /// Arguments passed to the executable for one run.
    pub fn command_args(&self, message: &str, context_files: &[PathBuf]) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "--model".into(),
            self.model.clone().into(),
            "--message".into(),
            message.into(),
        ];
        args.extend(FIXED_FLAGS.iter().map(OsString::from));

        for file in context_files {
            args.push("--read".into());
            args.push(file.clone().into_os_string());
        }
        args
    }
}

#[async_trait]
impl CodingAgent for AiderAgent {
    async fn run(&self, message: &str, context_files: &[PathBuf]) -> Result<bool> {
        info!(
            "Launching {} with model {} ({} context files)",
            self.program.display(),
            self.model,
            context_files.len()
        );

        let status = Command::new(&self.program)
            .args(self.command_args(message, context_files))
            .current_dir(&self.workdir)
            .status()
            .await
            .map_err(|source| SmeltError::AgentInvocation {
                binary: self.binary.clone(),
                source,
            })?;

        info!("{} exited with {status}", self.binary);
        Ok(status.success())
    }
}
