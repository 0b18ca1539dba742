//! Command dispatch and reply rendering.

use super::parser::{parse_input, Command};
use crate::book::UpcomingBirthday;
use crate::domain::birthday::format_date;
use crate::domain::{BirthdayDate, PhoneNumber};
use crate::error::BookResult;
use crate::services::{AddOutcome, ContactService};
use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

/// The text to show for one input line. `Exit` also ends the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Message(String),
    Exit(String),
}

impl Reply {
    fn message(text: impl Into<String>) -> Self {
        Reply::Message(text.into())
    }

    pub fn text(&self) -> &str {
        match self {
            Reply::Message(text) | Reply::Exit(text) => text,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Reply::Exit(_))
    }
}

/// Runs one command per input line against a [`ContactService`].
pub struct CommandHandler {
    service: ContactService,
    today: fn() -> NaiveDate,
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

impl CommandHandler {
    pub fn new(service: ContactService) -> Self {
        Self {
            service,
            today: local_today,
        }
    }

    /// Use `today` instead of the local date as the default reference for
    /// `birthdays`.
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn service(&self) -> &ContactService {
        &self.service
    }

    /// Handle one line of input. Every outcome, including errors, becomes
    /// a reply.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let Some(input) = parse_input(line) else {
            return Reply::message("Enter a command.");
        };

        let command = match input.command.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                warn!("{}", e);
                return Reply::message("Invalid command.");
            }
        };

        debug!("Dispatching {} with {} argument(s)", command, input.args.len());
        let result = command
            .check_arity(input.args.len())
            .and_then(|()| self.execute(command, &input.args));

        match result {
            Ok(reply) => reply,
            Err(e) => {
                warn!("{} failed: {}", command, e);
                Reply::Message(e.to_string())
            }
        }
    }

    fn execute(&mut self, command: Command, args: &[String]) -> BookResult<Reply> {
        let arg = |i: usize| args[i].as_str();

        let reply = match command {
            Command::Hello => Reply::message("How can I help you?"),
            Command::Help => Reply::Message(help_text()),
            Command::Exit => Reply::Exit("Good bye!".to_string()),
            Command::Add => match self.service.add_contact(arg(0), arg(1))? {
                AddOutcome::Created => Reply::message("Contact added."),
                AddOutcome::Updated => Reply::message("Contact updated."),
            },
            Command::Change => {
                self.service.change_phone(arg(0), arg(1))?;
                Reply::message("Contact updated.")
            }
            Command::EditPhone => {
                self.service.edit_phone(arg(0), arg(1), arg(2))?;
                Reply::message("Phone number updated.")
            }
            Command::RemovePhone => {
                self.service.remove_phone(arg(0), arg(1))?;
                Reply::message("Phone number removed.")
            }
            Command::Phone => Reply::Message(render_phones(self.service.phones(arg(0))?)),
            Command::Delete => {
                self.service.delete_contact(arg(0))?;
                Reply::message("Contact deleted.")
            }
            Command::All => Reply::Message(self.render_all()),
            Command::AddBirthday => {
                self.service.set_birthday(arg(0), arg(1))?;
                Reply::message("Birthday added.")
            }
            Command::ShowBirthday => match self.service.birthday(arg(0))? {
                Some(birthday) => Reply::Message(format!("{}'s birthday: {}", arg(0), birthday)),
                None => Reply::message("Birthday is not set."),
            },
            Command::Birthdays => {
                let reference = match args.first() {
                    Some(date) => BirthdayDate::new(date)?.date(),
                    None => (self.today)(),
                };
                Reply::Message(render_upcoming(
                    &self.service.upcoming_birthdays(reference),
                ))
            }
        };

        Ok(reply)
    }

    fn render_all(&self) -> String {
        let lines: Vec<String> = self
            .service
            .contacts()
            .map(ToString::to_string)
            .collect();
        if lines.is_empty() {
            "No contacts.".to_string()
        } else {
            lines.join("\n")
        }
    }
}

fn render_phones(phones: &[PhoneNumber]) -> String {
    if phones.is_empty() {
        return "No phone numbers.".to_string();
    }
    phones
        .iter()
        .map(PhoneNumber::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_upcoming(upcoming: &[UpcomingBirthday]) -> String {
    if upcoming.is_empty() {
        return "No upcoming birthdays.".to_string();
    }
    upcoming
        .iter()
        .map(|u| format!("{} - {}", u.name, format_date(u.congratulation_date)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn help_text() -> String {
    let mut lines = vec!["Available commands:".to_string()];
    for command in Command::ALL {
        let line = if command.usage().is_empty() {
            format!("  {}", command.name())
        } else {
            format!("  {} {}", command.name(), command.usage())
        };
        lines.push(line);
    }
    lines.join("\n")
}
