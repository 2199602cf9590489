//! Interactive read-eval loop over stdin.

use crate::output::{write_result, OutputOptions};
use crate::query::QueryService;
use crate::utils::split_words;
use std::io::{self, BufRead, Write};
use termcolor::WriteColor;

pub const PROMPT: &str = "word ('exit' to quit): ";

/// Token that ends the session
pub const EXIT_COMMAND: &[u8] = b"exit";

/// Answer whitespace-separated words from `input` until `exit` or end of input.
///
/// Lines are read as raw bytes, so a word in any encoding is looked up as
/// typed. Returns the number of queries served.
pub fn run<R: BufRead, W: WriteColor>(
    service: &QueryService,
    corpus: &[u8],
    input: R,
    out: &mut W,
    options: &OutputOptions,
    prompt: bool,
) -> io::Result<usize> {
    let mut served = 0;

    write_prompt(out, prompt)?;
    for line in input.split(b'\n') {
        let line = line?;
        for word in split_words(&line) {
            if word == EXIT_COMMAND {
                tracing::debug!(served, "exit requested");
                return Ok(served);
            }
            write_result(out, &service.occurrences(word), corpus, options)?;
            served += 1;
        }
        write_prompt(out, prompt)?;
    }

    // end of input without `exit`
    if prompt {
        writeln!(out)?;
    }
    Ok(served)
}

fn write_prompt<W: Write>(out: &mut W, prompt: bool) -> io::Result<()> {
    if prompt {
        write!(out, "{}", PROMPT)?;
        out.flush()?;
    }
    Ok(())
}
