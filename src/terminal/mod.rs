mod completion;

use anyhow::{Context, Result};
use colored::*;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{CompletionType, Config, EditMode, Editor};

use self::completion::CompletionEngine;

pub enum Input {
    Line(String),
    Interrupted,
    Eof,
}

pub struct Terminal {
    editor: Editor<CompletionEngine, DefaultHistory>,
}

impl Terminal {
    pub fn new(materials: Vec<String>) -> Result<Self> {
        let config = Config::builder()
            .edit_mode(EditMode::Emacs)
            .auto_add_history(false)
            .completion_type(CompletionType::List)
            .build();

        let mut editor = Editor::with_config(config).context("Failed to initialise line editor")?;
        editor.set_helper(Some(CompletionEngine::new(materials)));

        Ok(Terminal { editor })
    }

    pub fn read_line(&mut self) -> Result<Input> {
        let prompt = format!("\n{} ", "ficha ❯".bright_purple());

        match self.editor.readline(&prompt) {
            Ok(line) => {
                let line = line.trim().to_string();
                if !line.is_empty() {
                    self.editor.add_history_entry(line.as_str())?;
                }
                Ok(Input::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(Input::Interrupted),
            Err(ReadlineError::Eof) => Ok(Input::Eof),
            Err(err) => Err(anyhow::anyhow!("Error reading input: {}", err)),
        }
    }
}
