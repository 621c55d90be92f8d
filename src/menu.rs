//! Numbered command menu and input parsing

use crate::game::Command;
use thiserror::Error;

/// A line of input that does not name a command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidCommand {
    #[error("invalid input {0:?}, enter a number")]
    NotANumber(String),

    #[error("invalid option {0}")]
    UnknownOption(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub key: i64,
    pub label: &'static str,
    pub command: Command,
}

static ITEMS: [MenuItem; 7] = [
    MenuItem {
        key: 1,
        label: "Play the piece at the front of the queue",
        command: Command::Play,
    },
    MenuItem {
        key: 2,
        label: "Reserve the front piece",
        command: Command::Reserve,
    },
    MenuItem {
        key: 3,
        label: "Use the top reserved piece",
        command: Command::Use,
    },
    MenuItem {
        key: 4,
        label: "Swap the queue front with the reserve top",
        command: Command::SwapOne,
    },
    MenuItem {
        key: 5,
        label: "Swap the first 3 queued pieces with the 3 reserved",
        command: Command::SwapMany,
    },
    MenuItem {
        key: 6,
        label: "Insert a new piece into the queue",
        command: Command::Insert,
    },
    MenuItem {
        key: 0,
        label: "Exit",
        command: Command::Exit,
    },
];

/// Menu entries in display order
pub fn items() -> &'static [MenuItem] {
    &ITEMS
}

impl Command {
    /// Look up the command bound to a menu number
    pub fn from_option(option: i64) -> Result<Command, InvalidCommand> {
        items()
            .iter()
            .find(|item| item.key == option)
            .map(|item| item.command)
            .ok_or(InvalidCommand::UnknownOption(option))
    }
}

/// Parse one line of user input
pub fn parse_command(line: &str) -> Result<Command, InvalidCommand> {
    let trimmed = line.trim();
    let option: i64 = trimmed
        .parse()
        .map_err(|_| InvalidCommand::NotANumber(trimmed.to_string()))?;
    Command::from_option(option)
}
