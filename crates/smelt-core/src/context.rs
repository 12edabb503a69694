//! Project memory handed to the coding agent.
//!
//! Memory files (architecture notes, decision logs) live in the memory
//! directory. They are read-only inputs: smelt passes their paths to the agent
//! and can print them, but never writes them.

use std::{env, fs, path::PathBuf};

use log::debug;

use crate::config::Settings;

/// Separator placed between memory sections by [`build_context`].
pub const SECTION_SEPARATOR: &str = "\n\n---\n\n";

/// Configured memory files that exist and are readable, in configuration
/// order. Missing files are skipped silently.
///
/// Paths are absolute: the agent runs in the project directory, which need
/// not be the current one.
pub fn context_files(settings: &Settings) -> Vec<PathBuf> {
    settings
        .context_files
        .iter()
        .map(|name| absolute(settings.memory.join(name)))
        .filter(|path| {
            let readable = path.is_file() && fs::File::open(path).is_ok();
            if !readable {
                debug!("Skipping missing context file {}", path.display());
            }
            readable
        })
        .collect()
}

/// Resolves a relative `path` against the current directory.
fn absolute(path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        return path;
    }
    match env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(e) => {
            debug!("Cannot resolve {}: {e}", path.display());
            path
        }
    }
}

/// Concatenates the existing memory files as `## <name>` sections.
///
/// Returns an empty string when none of the configured files exist.
pub fn build_context(settings: &Settings) -> String {
    settings
        .context_files
        .iter()
        .filter_map(|name| {
            let content = fs::read_to_string(settings.memory.join(name)).ok()?;
            Some(format!("## {name}\n{}", content.trim()))
        })
        .collect::<Vec<_>>()
        .join(SECTION_SEPARATOR)
}
