//! Command parsing for the interactive session

use std::str::FromStr;

use anyhow::{bail, ensure, Result};

use crate::core::{Position, Preset};

/// A parsed player command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    New(Preset),
    Show,
    Move { from: Position, to: Position },
    Undo,
    Status,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line; an empty line parses to nothing.
    pub fn from_line(line: &str) -> Result<Option<Command>> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&name, args)) = parts.split_first() else {
            return Ok(None);
        };

        let command = match name {
            "new" => {
                ensure!(args.len() <= 1, "Usage: new [classic|variant]");
                let preset = match args.first() {
                    Some(s) => Preset::from_str(s)?,
                    None => Preset::Classic,
                };
                Command::New(preset)
            }
            "show" => Command::Show,
            "move" => {
                ensure!(args.len() == 2, "Usage: move <row,col> <row,col>");
                Command::Move {
                    from: args[0].parse()?,
                    to: args[1].parse()?,
                }
            }
            "undo" => Command::Undo,
            "status" => Command::Status,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => bail!("Unknown command: {}", name),
        };
        Ok(Some(command))
    }
}
