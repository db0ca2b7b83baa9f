//! Interactive session
//!
//! Drives one [`Analyzer`] from a stream of commands: every accepted draw
//! is followed by a fresh analysis, exactly like a player clicking the
//! number on the table and reading the panel.

use crate::command::Command;
use crate::error::Result;
use crate::report::{OutputFormat, history_line, render_json, render_text};
use roleta_analyzer::Analyzer;
use std::io::{BufRead, Write};

/// What a single command produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Text to show the user
    Output(String),
    /// Stop reading input
    Quit,
}

/// One analyzer plus output settings
pub struct Session {
    analyzer: Analyzer,
    format: OutputFormat,
}

impl Session {
    pub fn new(analyzer: Analyzer, format: OutputFormat) -> Self {
        Self { analyzer, format }
    }

    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    /// Apply one command
    pub fn handle(&mut self, command: Command) -> Result<Outcome> {
        let output = match command {
            Command::Draw(n) => {
                if !self.analyzer.add_number(n) {
                    format!("Ignored {n}: not a wheel number (0-36)\n")
                } else {
                    self.report()?
                }
            }
            Command::Reset => {
                self.analyzer.reset();
                log::info!("[Session] history cleared");
                format!("Session reset.\n{}\n", history_line(self.analyzer.history()))
            }
            Command::History => format!("{}\n", history_line(self.analyzer.history())),
            Command::Quit => return Ok(Outcome::Quit),
        };
        Ok(Outcome::Output(output))
    }

    /// Analyze and render in the configured format
    fn report(&mut self) -> Result<String> {
        let result = self.analyzer.analyze();
        match self.format {
            OutputFormat::Text => Ok(render_text(self.analyzer.history(), &result)),
            OutputFormat::Json => Ok(format!("{}\n", render_json(&result)?)),
        }
    }

    /// Handle each line of `input` until it ends or a quit command arrives.
    ///
    /// Unparseable lines are reported on `output` and skipped.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(e) => {
                    log::warn!("[Session] {e}");
                    writeln!(output, "{e}")?;
                    continue;
                }
            };

            match self.handle(command)? {
                Outcome::Output(text) => {
                    output.write_all(text.as_bytes())?;
                    output.flush()?;
                }
                Outcome::Quit => break,
            }
        }
        Ok(())
    }
}
