//! Console prompting over any `BufRead`/`Write` pair. Text fields read a whole
//! line; numeric fields read whitespace-separated tokens, so several numbers
//! may be typed on one line and are consumed by the prompts that follow.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use anyhow::{Context, Result};

/// Printed when a numeric field gets something that is not a whole number.
pub(crate) const NOT_A_NUMBER: &str = "Please enter a whole number.";
/// Printed when a count is below zero.
pub(crate) const NEGATIVE_NUMBER: &str = "Please enter a non-negative number.";
/// Printed when a count does not fit the catalog's counters.
pub(crate) const NUMBER_TOO_LARGE: &str = "That number is too large.";

/// Line-oriented console I/O. Owns both ends so prompts, answers and
/// results interleave in the right order. Every read returns `None` once the
/// input is exhausted.
pub struct Prompt<R, W> {
    input: R,
    output: W,
    /// Numeric tokens left over from the last line read by [`Prompt::integer`].
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    /// Prompt reading answers from `input` and printing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Print `label` without a newline and read the answer with its line
    /// ending stripped. Any numeric tokens still pending from the previous
    /// line are dropped.
    pub fn line(&mut self, label: &str) -> Result<Option<String>> {
        self.pending.clear();
        self.write_label(label)?;
        self.read_raw_line()
    }

    /// Read the next whitespace-separated token as a signed integer. Blank
    /// lines are skipped. A token that is not an integer is reported, the rest
    /// of its line is discarded, and the field is asked again.
    pub fn integer(&mut self, label: &str) -> Result<Option<i64>> {
        self.write_label(label)?;
        loop {
            let Some(token) = self.next_token()? else {
                return Ok(None);
            };
            match token.parse::<i64>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => {
                    self.pending.clear();
                    self.say(NOT_A_NUMBER)?;
                    self.write_label(label)?;
                }
            }
        }
    }

    /// Like [`Prompt::integer`] but only accepts values in `0..=u32::MAX`,
    /// asking again with a dedicated message otherwise.
    pub fn count(&mut self, label: &str) -> Result<Option<u32>> {
        loop {
            let Some(value) = self.integer(label)? else {
                return Ok(None);
            };
            if value < 0 {
                self.say(NEGATIVE_NUMBER)?;
                continue;
            }
            match u32::try_from(value) {
                Ok(count) => return Ok(Some(count)),
                Err(_) => self.say(NUMBER_TOO_LARGE)?,
            }
        }
    }

    /// Print `text` followed by a newline.
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}").context("failed to write output")
    }

    /// Give back the output sink, e.g. to inspect what a session printed.
    pub fn into_output(self) -> W {
        self.output
    }

    fn write_label(&mut self, label: &str) -> Result<()> {
        write!(self.output, "{label}").context("failed to write prompt")?;
        self.output.flush().context("failed to flush prompt")
    }

    fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let Some(line) = self.read_raw_line()? else {
                return Ok(None);
            };
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    fn read_raw_line(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        let read = self
            .input
            .read_line(&mut buf)
            .context("failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }

        let trimmed_len = buf.trim_end_matches(['\r', '\n']).len();
        buf.truncate(trimmed_len);
        Ok(Some(buf))
    }
}
