use anyhow::{bail, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Empty,
    List(Option<String>),
    Show(Vec<String>),
    Ask(String),
    Lookup(String),
    Other(String),
    Cache,
    Help,
    Exit,
}

/// Words that take a material name as their argument.
pub const MATERIAL_COMMANDS: [&str; 4] = ["show", "ask", "lookup", "other"];

pub const COMMANDS: [&str; 10] = [
    "list", "ls", "show", "ask", "lookup", "other", "cache", "help", "exit", "quit",
];

pub struct CommandParser;

impl CommandParser {
    pub fn parse(input: &str) -> Result<Command> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(Command::Empty);
        }

        let (word, rest) = match input.find(char::is_whitespace) {
            Some(i) => (&input[..i], input[i..].trim()),
            None => (input, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "list" | "ls" => {
                if rest.is_empty() {
                    Command::List(None)
                } else {
                    Command::List(Some(rest.to_string()))
                }
            }
            "show" => {
                let names = Self::split_names(rest);
                if names.is_empty() {
                    bail!("show: missing material name (show <nombre>[; <nombre>...])");
                }
                Command::Show(names)
            }
            "ask" => Command::Ask(Self::require(rest, "ask")?),
            "lookup" => Command::Lookup(Self::require(rest, "lookup")?),
            "other" => Command::Other(Self::require(rest, "other")?),
            "cache" => Command::Cache,
            "help" | "?" => Command::Help,
            "exit" | "quit" => Command::Exit,
            other => bail!("Unknown command '{}'. Type 'help' for the list of commands.", other),
        };

        Ok(command)
    }

    fn require(rest: &str, command: &str) -> Result<String> {
        if rest.is_empty() {
            bail!("{}: missing material name", command);
        }
        Ok(rest.to_string())
    }

    /// `;`-separated selection, in order, without empties or repeats.
    fn split_names(rest: &str) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for name in rest.split(';').map(str::trim).filter(|n| !n.is_empty()) {
            if !names.iter().any(|seen| seen == name) {
                names.push(name.to_string());
            }
        }
        names
    }
}
