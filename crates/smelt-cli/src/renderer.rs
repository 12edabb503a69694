//! Terminal rendering for command output
//!
//! Output is plain text with light markdown; termimad styles it when stdout
//! is a terminal and colors are enabled.

use std::io::{self, IsTerminal, Write};

use anyhow::{Context, Result};
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Rich output only when asked for and stdout is a terminal
    pub fn for_stdout(color: bool) -> Self {
        Self::new(color && io::stdout().is_terminal())
    }

    /// Render text to stdout
    pub fn render(&self, text: &str) -> Result<()> {
        if self.rich_enabled {
            for line in text.lines() {
                self.skin.print_inline(line);
                println!();
            }
        } else {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|()| stdout.flush())
                .context("Failed to write output")?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
