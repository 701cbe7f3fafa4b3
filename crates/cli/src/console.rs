//! Line-oriented prompt/answer I/O over any reader/writer pair.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Blocking text console.
///
/// Every prompt returns `Ok(None)` once the input is exhausted, which callers
/// treat as the user leaving the session.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print one line.
    pub fn say(&mut self, line: impl core::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// Print `label` (no newline) and read one answer, without its line ending.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Prompt until the (trimmed) answer parses as `T`, printing `retry` after
    /// each bad answer.
    pub fn prompt_parsed<T: FromStr>(&mut self, label: &str, retry: &str) -> io::Result<Option<T>> {
        loop {
            let Some(raw) = self.prompt(label)? else {
                return Ok(None);
            };
            match raw.trim().parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => self.say(retry)?,
            }
        }
    }
}
