//! Interactive read-eval-print loop.

use super::handlers::CommandHandler;
use std::io::{self, BufRead, Write};
use tracing::warn;

/// Greeting printed once when a session starts.
pub const GREETING: &str = "Welcome to the assistant bot!";

/// Run the command loop until `exit`, `close` or end of input.
///
/// Lines that are not valid UTF-8 are decoded lossily and dispatched like
/// any other input, so a stray byte never ends the session.
pub fn run<R, W>(
    handler: &mut CommandHandler,
    prompt: &str,
    mut input: R,
    mut output: W,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut buf = Vec::new();

    writeln!(output, "{}", GREETING)?;

    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        buf.clear();
        // End of input behaves like `exit`
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(output)?;
            writeln!(output, "Good bye!")?;
            return Ok(());
        }

        let line = String::from_utf8_lossy(&buf);
        if std::str::from_utf8(&buf).is_err() {
            warn!("Input line was not valid UTF-8");
        }

        let reply = handler.handle_line(&line);
        writeln!(output, "{}", reply.text())?;
        if reply.is_exit() {
            return Ok(());
        }
    }
}
