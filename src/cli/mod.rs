//! Command-line layer.
//!
//! Turns a line of user input into a command, runs it against the
//! [`ContactService`](crate::services::ContactService) and renders the
//! outcome as a single reply string. The session loop reads from and writes
//! to whatever reader and writer it is given; only the binary binds them to
//! the console.

pub mod handlers;
pub mod parser;
pub mod session;

pub use handlers::{CommandHandler, Reply};
pub use parser::{parse_input, Command, ParsedInput, UnknownCommand};
pub use session::run;
