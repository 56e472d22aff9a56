//! Interactive prompt.

use std::io::{self, BufRead, Write};

use crate::Session;

const PROMPT: &str = "> ";

/// Read lines from `input` until end of input or a fatal fault.
///
/// Expression values are echoed to `output`; errors go to `errors` and the
/// session continues. Returns the fatal error's exit status, if one ended
/// the session.
pub fn run_prompt(
    session: &mut Session<'_>,
    input: impl BufRead,
    mut output: impl Write,
    mut errors: impl Write,
) -> io::Result<Option<i32>> {
    write!(output, "{PROMPT}")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        match session.run_line(&line) {
            Ok(Some(echo)) => writeln!(output, "{echo}")?,
            Ok(None) => {}
            Err(error) => {
                writeln!(errors, "{error}")?;
                if error.is_fatal() {
                    tracing::debug!("fatal error ends the session");
                    return Ok(Some(error.exit_code()));
                }
            }
        }
        write!(output, "{PROMPT}")?;
        output.flush()?;
    }

    writeln!(output)?;
    Ok(None)
}
