//! Command line parsing.
//!
//! The typed text (without prompt) is matched exactly against the command
//! table. No trimming or prefix matching: `" w"` and `"w!"` are unknown.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    Write,
    Unknown(String),
}

pub struct CommandParser;

impl CommandParser {
    pub fn parse(raw: &str) -> ParsedCommand {
        match raw {
            "w" => ParsedCommand::Write,
            other => ParsedCommand::Unknown(other.to_string()),
        }
    }
}
