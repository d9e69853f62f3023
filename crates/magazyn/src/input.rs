//! Line input sources for the interactive shell.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;

/// What a single read produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    /// A line of input (without the trailing newline).
    Line(String),
    /// Ctrl-C: abandon the current prompt, keep the program running.
    Interrupted,
    /// End of input: no more lines will come.
    Eof,
}

/// A source of input lines for the dispatch loop and for the interactive
/// prompts inside handlers.
pub trait LineInput {
    /// Read one line, showing `prompt` first.
    fn read_line(&mut self, prompt: &str) -> Signal;

    /// Record a dispatched command line in history.
    fn add_history(&mut self, _line: &str) {}

    /// Persist history before shutdown.
    fn save_history(&mut self) {}
}

/// Interactive input backed by rustyline, with history persisted under
/// the user's config directory.
pub struct RustylineInput {
    editor: DefaultEditor,
    history_path: Option<PathBuf>,
}

impl RustylineInput {
    /// Create the line editor and load any saved history.
    pub fn new() -> Result<Self, ReadlineError> {
        let mut editor = DefaultEditor::new()?;
        let history_path = dirs::config_dir().map(|p| p.join("magazyn").join("history"));
        if let Some(path) = &history_path {
            if let Some(parent) = path.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = editor.load_history(path);
        }
        Ok(Self {
            editor,
            history_path,
        })
    }
}

impl LineInput for RustylineInput {
    fn read_line(&mut self, prompt: &str) -> Signal {
        match self.editor.readline(prompt) {
            Ok(line) => Signal::Line(line),
            Err(ReadlineError::Interrupted) => Signal::Interrupted,
            Err(ReadlineError::Eof) => Signal::Eof,
            Err(err) => {
                tracing::error!("readline failed: {err}");
                Signal::Eof
            }
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }

    fn save_history(&mut self) {
        if let Some(path) = &self.history_path {
            let _ = self.editor.save_history(path);
        }
    }
}

/// Scripted input: serves queued lines, then [`Signal::Eof`]. Used for
/// piped scripts and in tests.
#[derive(Debug, Default)]
pub struct ScriptInput {
    lines: VecDeque<String>,
}

impl ScriptInput {
    /// Queue up the given lines.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl LineInput for ScriptInput {
    fn read_line(&mut self, _prompt: &str) -> Signal {
        match self.lines.pop_front() {
            Some(line) => Signal::Line(line),
            None => Signal::Eof,
        }
    }
}
