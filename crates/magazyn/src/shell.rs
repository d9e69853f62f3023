//! The interactive dispatch loop and its prompt helpers.

use std::path::PathBuf;

use magazyn_core::{parse_decimal, Decimal, Warehouse};
use magazyn_io::LoaderRegistry;

use crate::input::{LineInput, Signal};
use crate::parser::parse_line;
use crate::registry::{Command, CommandRegistry};

const PROMPT: &str = "What would you like to do? ";

/// What the loop should do after a command completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Keep reading commands.
    Continue,
    /// Leave the program.
    Exit,
}

/// The interactive shell: the warehouse, its configured file paths, the
/// loader and command registries, and the input source.
///
/// All state is owned here and handed to handlers explicitly; there is no
/// ambient global state.
pub struct Shell {
    /// The warehouse being operated on.
    pub store: Warehouse,
    /// Export/import path for the stock collection.
    pub warehouse_path: PathBuf,
    /// Export/import path for the sales ledger.
    pub sales_path: PathBuf,
    /// Format loaders, selected by file extension.
    pub loaders: LoaderRegistry,
    input: Box<dyn LineInput>,
    registry: CommandRegistry,
}

impl Shell {
    /// Assemble a shell around the given input source, with the standard
    /// commands and loaders registered.
    #[must_use]
    pub fn new(
        store: Warehouse,
        warehouse_path: PathBuf,
        sales_path: PathBuf,
        input: Box<dyn LineInput>,
    ) -> Self {
        Self {
            store,
            warehouse_path,
            sales_path,
            loaders: LoaderRegistry::standard(),
            input,
            registry: CommandRegistry::standard(),
        }
    }

    /// Run the dispatch loop until `exit`/`quit` or end of input.
    pub fn run(&mut self) {
        loop {
            match self.input.read_line(PROMPT) {
                Signal::Line(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    self.input.add_history(line);
                    if self.handle_line(line) == Outcome::Exit {
                        break;
                    }
                }
                Signal::Interrupted => println!("(interrupted)"),
                Signal::Eof => {
                    println!("exit");
                    break;
                }
            }
        }
        self.input.save_history();
    }

    /// Parse and dispatch a single line, reporting problems to the user.
    ///
    /// Never fails: parse errors, unknown commands, and handlers that
    /// reject their arguments all print a single line and leave the loop
    /// running.
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        let parsed = match parse_line(line) {
            Ok(Some(parsed)) => parsed,
            Ok(None) => return Outcome::Continue,
            Err(err) => {
                println!("Error: {err}.");
                return Outcome::Continue;
            }
        };
        let Some(handler) = self.registry.lookup(&parsed.name).map(|c| c.handler) else {
            println!("Unknown command. Type 'help' to see available commands.");
            return Outcome::Continue;
        };
        match handler(self, &parsed) {
            Ok(outcome) => outcome,
            Err(err) => {
                println!("Incorrect arguments for '{}': {err:#}", parsed.name);
                Outcome::Continue
            }
        }
    }

    /// Prompt for one line; `None` means the user cancelled (Ctrl-C or
    /// end of input) and the current command should give up quietly.
    pub fn prompt(&mut self, prompt: &str) -> Option<String> {
        match self.input.read_line(prompt) {
            Signal::Line(line) => Some(line),
            Signal::Interrupted | Signal::Eof => None,
        }
    }

    /// Prompt until a non-empty line is entered.
    pub fn prompt_nonempty(&mut self, prompt: &str) -> Option<String> {
        loop {
            let line = self.prompt(prompt)?;
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
    }

    /// Prompt for a decimal, re-prompting in place on malformed input.
    ///
    /// A blank line returns `default` when one is given (the add-update
    /// "keep the current value" convention) and re-prompts otherwise.
    pub fn prompt_decimal(&mut self, prompt: &str, default: Option<Decimal>) -> Option<Decimal> {
        loop {
            let line = self.prompt(prompt)?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                if let Some(value) = default {
                    return Some(value);
                }
                continue;
            }
            match parse_decimal(trimmed) {
                Ok(value) => return Some(value),
                Err(err) => println!("Error: {err}"),
            }
        }
    }

    /// Registered commands, for `help`.
    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.registry.iter()
    }
}
