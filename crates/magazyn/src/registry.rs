//! The command registry: name to handler, built once at startup.

use crate::commands;
use crate::parser::CommandLine;
use crate::shell::{Outcome, Shell};

/// Uniform handler signature: every command consumes the shell (store,
/// loaders, input source) plus the parsed arguments, and says whether the
/// loop keeps running. An `Err` means the arguments were unusable; the
/// shell reports it and keeps running.
pub type Handler = fn(&mut Shell, &CommandLine) -> anyhow::Result<Outcome>;

/// One registered command.
pub struct Command {
    /// Lookup name, lowercase.
    pub name: &'static str,
    /// One-line summary shown by `help`.
    pub summary: &'static str,
    /// The handler function.
    pub handler: Handler,
}

/// Registry of interactive commands.
///
/// Built once before the dispatch loop starts and never mutated
/// afterwards. Lookup is case-insensitive exact match; an unknown name is
/// reported to the user by the shell, never fatal.
pub struct CommandRegistry {
    commands: Vec<Command>,
}

impl CommandRegistry {
    /// The standard command set.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            commands: vec![
                Command {
                    name: "help",
                    summary: "List available commands",
                    handler: commands::help,
                },
                Command {
                    name: "show",
                    summary: "Print the warehouse table",
                    handler: commands::show,
                },
                Command {
                    name: "add",
                    summary: "Add or update a stocked item",
                    handler: commands::add,
                },
                Command {
                    name: "sell",
                    summary: "Sell a quantity of a stocked item",
                    handler: commands::sell,
                },
                Command {
                    name: "show_revenue",
                    summary: "Print income, costs and revenue",
                    handler: commands::show_revenue,
                },
                Command {
                    name: "save",
                    summary: "Export stock and sales to the configured files",
                    handler: commands::save,
                },
                Command {
                    name: "load",
                    summary: "Import stock and/or sales (load items=PATH sales=PATH)",
                    handler: commands::load,
                },
                Command {
                    name: "exit",
                    summary: "Quit the program",
                    handler: commands::exit,
                },
                Command {
                    name: "quit",
                    summary: "Quit the program",
                    handler: commands::exit,
                },
            ],
        }
    }

    /// Case-insensitive exact-match lookup.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Command> {
        self.commands
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Registered commands, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = CommandRegistry::standard();
        assert!(registry.lookup("show").is_some());
        assert!(registry.lookup("SHOW").is_some());
        assert!(registry.lookup("Show_Revenue").is_some());
        assert!(registry.lookup("unknown").is_none());
    }

    #[test]
    fn test_exit_and_quit_are_both_registered() {
        let registry = CommandRegistry::standard();
        assert!(registry.lookup("exit").is_some());
        assert!(registry.lookup("quit").is_some());
    }
}
