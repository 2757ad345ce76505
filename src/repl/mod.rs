//! Interactive report loop
//!
//! Prompts for a strategy, renders it, and prompts again until the user
//! quits. Invalid input re-prompts without limit; any failure while
//! loading or rendering ends the loop with that error.

pub mod display;
pub mod input;
pub mod selection;

pub use crate::repl::display::DisplayManager;
pub use crate::repl::input::{InputHandler, LineReader, ScriptedInput};
pub use crate::repl::selection::{parse_selection, Selection, PROMPT};

use crate::errors::Result;
use crate::report::{ReportGenerator, ReportSummary};

/// Select → generate loop
pub struct ReportSession<R: LineReader> {
    input: R,
    generator: ReportGenerator,
    display: DisplayManager,
    reports: Vec<ReportSummary>,
}

impl<R: LineReader> ReportSession<R> {
    /// Create new session
    pub fn new(input: R, generator: ReportGenerator, display: DisplayManager) -> Self {
        ReportSession {
            input,
            generator,
            display,
            reports: Vec::new(),
        }
    }

    /// Prompt until the input is a valid selection
    ///
    /// End of input counts as quitting.
    pub fn select(&mut self) -> Result<Selection> {
        loop {
            match self.input.read_line()? {
                None => return Ok(Selection::Quit),
                Some(line) => match parse_selection(&line) {
                    Some(selection) => return Ok(selection),
                    None => self.display.trace("INPUT", &format!("Ignoring {:?}", line)),
                },
            }
        }
    }

    /// Run until the user quits
    ///
    /// Returns the number of strategies rendered.
    pub fn run(&mut self) -> Result<usize> {
        loop {
            match self.select()? {
                Selection::Quit => {
                    self.display.show_info(">> NeuroNudge Plots: Exiting...");
                    break;
                }
                Selection::Plot(strategy) => {
                    let summary = self.generator.generate(strategy, &self.display)?;
                    self.display.show_summary(&summary);
                    self.reports.push(summary);
                }
            }
        }

        Ok(self.reports.len())
    }

    /// Summaries of every strategy rendered so far
    pub fn reports(&self) -> &[ReportSummary] {
        &self.reports
    }

    pub fn input(&self) -> &R {
        &self.input
    }

    pub fn display(&self) -> &DisplayManager {
        &self.display
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Verbosity;
    use crate::render::RenderOptions;
    use crate::types::Strategy;
    use std::path::Path;

    fn session(lines: &[&str]) -> ReportSession<ScriptedInput> {
        let generator = ReportGenerator::new(
            Path::new("/nonexistent/engine"),
            Path::new("/nonexistent/results"),
            vec!["Learner 1".to_string()],
            RenderOptions::default(),
        );
        ReportSession::new(
            ScriptedInput::new(lines.iter().copied()),
            generator,
            DisplayManager::new(Verbosity::Quiet),
        )
    }

    #[test]
    fn test_select_skips_invalid_input() {
        let mut session = session(&["", "7", "exit", "2"]);
        assert_eq!(
            session.select().unwrap(),
            Selection::Plot(Strategy::MasteryThresholds)
        );
        assert_eq!(session.input().consumed(), 4);
    }

    #[test]
    fn test_select_eof_is_quit() {
        let mut session = session(&["nope"]);
        assert_eq!(session.select().unwrap(), Selection::Quit);
    }

    #[test]
    fn test_quit_does_not_load() {
        let mut session = session(&["Q", "1"]);
        assert_eq!(session.run().unwrap(), 0);
        assert!(session.reports().is_empty());
        assert_eq!(session.input().remaining(), 1);
    }

    #[test]
    fn test_missing_results_is_fatal() {
        let mut session = session(&["1", "q"]);
        assert!(session.run().is_err());
        assert_eq!(session.input().remaining(), 1);
    }
}
