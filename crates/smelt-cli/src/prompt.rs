//! Interactive confirmation before the agent starts.

use std::io::{self, BufRead, Write};

use log::warn;
use smelt_core::{Confirm, NextStep, Step};

use crate::renderer::TerminalRenderer;

/// Shows the step on stdout and reads a yes/no answer from stdin.
pub struct StdinPrompt<'a> {
    renderer: &'a TerminalRenderer,
    assume_yes: bool,
}

impl<'a> StdinPrompt<'a> {
    pub fn new(renderer: &'a TerminalRenderer, assume_yes: bool) -> Self {
        Self {
            renderer,
            assume_yes,
        }
    }

    fn ask(&self) -> io::Result<bool> {
        let mut stdout = io::stdout();
        write!(stdout, "Start working on this? [y/N] ")?;
        stdout.flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        Ok(is_yes(&answer))
    }
}

impl Confirm for StdinPrompt<'_> {
    fn confirm(&mut self, step: &Step) -> bool {
        if let Err(e) = self.renderer.render(&NextStep(step).to_string()) {
            warn!("Failed to render step: {e}");
        }

        if self.assume_yes {
            return true;
        }

        self.ask().unwrap_or_else(|e| {
            warn!("Failed to read confirmation: {e}");
            false
        })
    }
}

/// Only an explicit `y` or `yes` confirms; anything else, including end of
/// input, declines.
fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
