//! Input handling for the selection prompt
//!
//! The interactive handler wraps rustyline; `ScriptedInput` replays a fixed
//! list of lines for non-interactive use.

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::history::History;
use rustyline::DefaultEditor;
use std::collections::VecDeque;

use crate::repl::selection::PROMPT;

/// Source of prompt lines
pub trait LineReader {
    /// Read one line
    ///
    /// Returns:
    /// - Ok(Some(input)) for normal input (trimmed)
    /// - Ok(None) when input is exhausted (EOF or Ctrl-C)
    /// - Err on other failures
    fn read_line(&mut self) -> Result<Option<String>>;
}

/// Readline interface with in-session history
pub struct InputHandler {
    editor: DefaultEditor,
    prompt: String,
}

impl InputHandler {
    /// Create new input handler
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new()?;

        Ok(InputHandler {
            editor,
            prompt: PROMPT.to_string(),
        })
    }

    /// Set custom prompt
    pub fn set_prompt(&mut self, prompt: String) {
        self.prompt = prompt;
    }

    /// Get history size
    pub fn history_len(&self) -> usize {
        self.editor.history().len()
    }
}

impl LineReader for InputHandler {
    fn read_line(&mut self) -> Result<Option<String>> {
        match self.editor.readline(&self.prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    let _ = self.editor.add_history_entry(trimmed);
                }
                Ok(Some(trimmed.to_string()))
            }
            // Ctrl-C and Ctrl-D both end the session
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(anyhow::anyhow!("Readline error: {}", err)),
        }
    }
}

/// Replays a fixed sequence of lines, then reports end of input
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    consumed: usize,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            consumed: 0,
        }
    }

    /// Lines handed out so far
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Lines not yet read
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineReader for ScriptedInput {
    fn read_line(&mut self) -> Result<Option<String>> {
        let line = self.lines.pop_front();
        if line.is_some() {
            self.consumed += 1;
        }
        Ok(line.map(|l| l.trim().to_string()))
    }
}
