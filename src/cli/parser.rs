//! Input tokenizing and command recognition.

use crate::error::{BookError, BookResult};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A line split into a lower-cased command word and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub command: String,
    pub args: Vec<String>,
}

/// Split a line on whitespace. Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<ParsedInput> {
    let mut words = line.split_whitespace();
    let command = words.next()?.to_lowercase();
    Some(ParsedInput {
        command,
        args: words.map(str::to_string).collect(),
    })
}

/// Commands understood by the contact book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Hello,
    Help,
    Add,
    Change,
    EditPhone,
    RemovePhone,
    Phone,
    Delete,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Exit,
}

/// The command word did not match any known command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown command: {0}")]
pub struct UnknownCommand(pub String);

impl Command {
    /// Every command, in the order `help` lists them.
    pub const ALL: [Command; 13] = [
        Command::Hello,
        Command::Add,
        Command::Change,
        Command::EditPhone,
        Command::RemovePhone,
        Command::Phone,
        Command::Delete,
        Command::All,
        Command::AddBirthday,
        Command::ShowBirthday,
        Command::Birthdays,
        Command::Help,
        Command::Exit,
    ];

    /// Canonical command word.
    pub fn name(self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Help => "help",
            Command::Add => "add",
            Command::Change => "change",
            Command::EditPhone => "edit-phone",
            Command::RemovePhone => "remove-phone",
            Command::Phone => "phone",
            Command::Delete => "delete",
            Command::All => "all",
            Command::AddBirthday => "add-birthday",
            Command::ShowBirthday => "show-birthday",
            Command::Birthdays => "birthdays",
            Command::Exit => "exit",
        }
    }

    /// Argument synopsis shown in usage messages.
    pub fn usage(self) -> &'static str {
        match self {
            Command::Add | Command::Change => "<name> <phone>",
            Command::EditPhone => "<name> <old phone> <new phone>",
            Command::RemovePhone => "<name> <phone>",
            Command::Phone | Command::Delete | Command::ShowBirthday => "<name>",
            Command::AddBirthday => "<name> <DD.MM.YYYY>",
            Command::Birthdays => "[DD.MM.YYYY]",
            Command::Hello | Command::Help | Command::All | Command::Exit => "",
        }
    }

    /// Minimum and maximum number of arguments.
    fn arity(self) -> (usize, usize) {
        match self {
            Command::Hello | Command::Help | Command::All | Command::Exit => (0, 0),
            Command::Phone | Command::Delete | Command::ShowBirthday => (1, 1),
            Command::Add | Command::Change | Command::RemovePhone | Command::AddBirthday => (2, 2),
            Command::EditPhone => (3, 3),
            Command::Birthdays => (0, 1),
        }
    }

    /// Reject argument lists of the wrong length.
    pub fn check_arity(self, count: usize) -> BookResult<()> {
        let (min, max) = self.arity();
        if count < min {
            return Err(BookError::NotEnoughArguments {
                command: self.name(),
                usage: self.usage(),
            });
        }
        if count > max {
            return Err(BookError::TooManyArguments {
                command: self.name(),
                usage: self.usage(),
            });
        }
        Ok(())
    }
}

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hello" => Ok(Command::Hello),
            "help" => Ok(Command::Help),
            "add" => Ok(Command::Add),
            "change" => Ok(Command::Change),
            "edit-phone" => Ok(Command::EditPhone),
            "remove-phone" => Ok(Command::RemovePhone),
            "phone" => Ok(Command::Phone),
            "delete" => Ok(Command::Delete),
            "all" => Ok(Command::All),
            "add-birthday" => Ok(Command::AddBirthday),
            "show-birthday" => Ok(Command::ShowBirthday),
            "birthdays" => Ok(Command::Birthdays),
            "exit" | "close" => Ok(Command::Exit),
            other => Err(UnknownCommand(other.to_string())),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input_splits_on_whitespace() {
        let parsed = parse_input("  ADD   Ann\t0991234567 ").unwrap();
        assert_eq!(parsed.command, "add");
        assert_eq!(parsed.args, vec!["Ann", "0991234567"]);
    }

    #[test]
    fn test_parse_input_blank() {
        assert_eq!(parse_input(""), None);
        assert_eq!(parse_input("   \t "), None);
    }

    #[test]
    fn test_parse_input_keeps_argument_case() {
        let parsed = parse_input("phone ANN").unwrap();
        assert_eq!(parsed.args, vec!["ANN"]);
    }

    #[test]
    fn test_command_from_str() {
        assert_eq!("add".parse::<Command>(), Ok(Command::Add));
        assert_eq!("Show-Birthday".parse::<Command>(), Ok(Command::ShowBirthday));
        assert_eq!("close".parse::<Command>(), Ok(Command::Exit));
        assert_eq!(
            "fly".parse::<Command>(),
            Err(UnknownCommand("fly".to_string()))
        );
    }

    #[test]
    fn test_unknown_command_display() {
        let err = "Fly".parse::<Command>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown command: fly");
    }

    #[test]
    fn test_every_command_name_parses_back() {
        for command in Command::ALL {
            assert_eq!(command.name().parse::<Command>(), Ok(command));
        }
    }

    #[test]
    fn test_check_arity() {
        assert!(Command::Add.check_arity(2).is_ok());
        assert_eq!(
            Command::Add.check_arity(1),
            Err(BookError::NotEnoughArguments {
                command: "add",
                usage: "<name> <phone>",
            })
        );
        assert!(matches!(
            Command::Add.check_arity(3),
            Err(BookError::TooManyArguments { command: "add", .. })
        ));
        assert!(Command::Birthdays.check_arity(0).is_ok());
        assert!(Command::Birthdays.check_arity(1).is_ok());
        assert!(Command::All.check_arity(1).is_err());
    }
}
