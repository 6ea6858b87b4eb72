//! Input handler for the chat loop using rustyline
//!
//! Line editing with in-memory history. Nothing is written to disk.

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// What one read from the terminal produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    /// Ctrl-D
    Eof,
    /// Ctrl-C
    Interrupted,
}

/// Input handler managing the readline interface
pub struct InputHandler {
    editor: DefaultEditor,
    prompt: String,
}

impl InputHandler {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new()?;

        Ok(InputHandler {
            editor,
            prompt: "You: ".to_string(),
        })
    }

    /// Set custom prompt
    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Read a line of input from the user
    pub fn read_line(&mut self) -> Result<InputEvent> {
        match self.editor.readline(&self.prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    let _ = self.editor.add_history_entry(trimmed);
                }
                Ok(InputEvent::Line(trimmed.to_string()))
            }
            Err(ReadlineError::Interrupted) => Ok(InputEvent::Interrupted),
            Err(ReadlineError::Eof) => Ok(InputEvent::Eof),
            Err(err) => Err(anyhow::anyhow!("Readline error: {}", err)),
        }
    }

    /// Read a line with a one-off prompt (used for the name question)
    pub fn ask(&mut self, question: &str) -> Result<InputEvent> {
        let saved = std::mem::replace(&mut self.prompt, question.to_string());
        let event = self.read_line();
        self.prompt = saved;
        event
    }
}
