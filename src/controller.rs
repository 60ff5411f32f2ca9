//! Interactive session controller.
//!
//! This module orchestrates the menu loop:
//! - Prompting and reading menu choices
//! - Dispatching actions to the core functions
//! - Rendering results and errors without ending the session
//!
//! The session is generic over its input and output so it can run on
//! stdin/stdout or on in-memory buffers.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use log::{debug, info};

use crate::event::{parse_choice, Action};
use crate::model::AppState;
use crate::report::{save_report, DEFAULT_REPORT_PATH};
use crate::revcomp::reverse_complement;
use crate::stats::compute_stats;
use crate::ui::glyphs::Glyphs;
use crate::ui::{
    render_banner, render_menu, render_prompt, render_reverse_complement, render_stats,
    render_status,
};
use crate::validate::validate;

/// An interactive menu session.
pub struct Session<R, W> {
    /// Source of user input
    input: R,
    /// Destination of prompts and results
    output: W,
    /// Session state
    state: AppState,
    /// Status markers
    glyphs: Glyphs,
    /// Wrap width for sequence output (0 = no wrapping)
    line_width: usize,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a new session with no sequence loaded.
    pub fn new(input: R, output: W, glyphs: Glyphs, line_width: usize) -> Self {
        Self {
            input,
            output,
            state: AppState::new(),
            glyphs,
            line_width,
        }
    }

    /// Returns the session state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Runs the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        render_banner(&mut self.output, &self.glyphs)?;

        while !self.state.should_quit {
            render_menu(&mut self.output)?;
            let action = match self.ask("Select an option: ")? {
                Some(line) => parse_choice(&line),
                None => Action::Quit,
            };
            debug!("Menu action: {:?}", action);
            self.apply(action)?;
        }

        Ok(())
    }

    /// Applies a single action to the session.
    pub fn apply(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Load => self.load()?,
            Action::Analyze => self.analyze()?,
            Action::ReverseComplement => self.reverse_complement()?,
            Action::Save => self.save()?,
            Action::Quit => {
                writeln!(self.output, "Goodbye!")?;
                self.state.should_quit = true;
            }
            Action::Unknown(choice) => {
                let message = format!("Unknown option: {}", choice);
                render_status(&mut self.output, self.glyphs.warning, &message)?;
            }
        }
        Ok(())
    }

    fn load(&mut self) -> Result<()> {
        let Some(raw) = self.ask("Enter DNA/RNA sequence: ")? else {
            return self.apply(Action::Quit);
        };
        match validate(&raw) {
            Ok(sequence) => {
                debug!("Loaded {} bases", sequence.len());
                self.state.load(sequence);
                let message = "Sequence loaded successfully.";
                render_status(&mut self.output, self.glyphs.success, message)?;
            }
            Err(e) => self.error(&e)?,
        }
        Ok(())
    }

    fn analyze(&mut self) -> Result<()> {
        let Some(sequence) = self.state.loaded.as_ref() else {
            return self.warn("No sequence loaded.");
        };
        match compute_stats(sequence.as_str()) {
            Ok(stats) => render_stats(&mut self.output, &stats)?,
            Err(e) => self.error(&e)?,
        }
        Ok(())
    }

    fn reverse_complement(&mut self) -> Result<()> {
        let Some(sequence) = self.state.loaded.as_ref() else {
            return self.warn("No sequence loaded.");
        };
        match reverse_complement(sequence.as_str()) {
            Ok(rc) => render_reverse_complement(&mut self.output, &rc, self.line_width)?,
            Err(e) => self.error(&e)?,
        }
        Ok(())
    }

    fn save(&mut self) -> Result<()> {
        let Some(sequence) = self.state.loaded.clone() else {
            return self.warn("Run analysis first.");
        };
        let prompt = format!("Enter filename (default: {}): ", DEFAULT_REPORT_PATH);
        let Some(answer) = self.ask(&prompt)? else {
            return self.apply(Action::Quit);
        };
        let answer = answer.trim();
        let path = PathBuf::from(if answer.is_empty() { DEFAULT_REPORT_PATH } else { answer });

        let result = compute_stats(sequence.as_str())
            .map_err(anyhow::Error::from)
            .and_then(|stats| save_report(&stats, &path).map_err(anyhow::Error::from));

        match result {
            Ok(()) => {
                info!("Saved report to {}", path.display());
                let message = format!("Saved to {}", path.display());
                render_status(&mut self.output, self.glyphs.saved, &message)?;
            }
            Err(e) => self.error(&e)?,
        }
        Ok(())
    }

    fn warn(&mut self, message: &str) -> Result<()> {
        render_status(&mut self.output, self.glyphs.warning, message)?;
        Ok(())
    }

    fn error(&mut self, error: &dyn std::fmt::Display) -> io::Result<()> {
        let message = format!("Error: {}", error);
        render_status(&mut self.output, self.glyphs.error, &message)
    }

    /// Prompts and reads one line; `None` at end of input.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        render_prompt(&mut self.output, prompt)?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Runs an interactive session on stdin/stdout.
pub fn run_interactive(glyphs: Glyphs, line_width: usize) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), glyphs, line_width);
    session.run()
}
