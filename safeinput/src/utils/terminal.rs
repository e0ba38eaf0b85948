//! # Terminal Input Helper
//!
//! This module provides utilities for interacting with the terminal to
//! request user input. It repeatedly prompts the user until the input
//! satisfies the provided validation rules.
//!
//! The core functionality relies on [`Sanitize`] and the typed parsers in
//! [`crate::utils::sanitize`].
//!
//! ## Features
//! - Continuously prompts the user until valid input is received.
//! - Prints one diagnostic line per rejected answer.
//! - Stops with [`TerminalError::EndOfInput`] when the input stream closes.
//! - Input and output streams are injected, so prompts run against any
//!   [`BufRead`]/[`Write`] pair (stdin/stdout, files, in-memory buffers).
//!
//! ## Usage
//!
//! ### Example 1: Ranged integer
//! ```rust,no_run
//! use safeinput::utils::Terminal;
//!
//! let mut terminal = Terminal::stdio();
//! let year = terminal
//!     .require_integer_in_range("Enter year of birth", 1900, 2025)
//!     .unwrap();
//! println!("The input: {}", year);
//! ```
//!
//! ### Example 2: Scripted input
//! ```rust
//! use std::io::Cursor;
//! use safeinput::utils::Terminal;
//!
//! let input = Cursor::new("maybe\nyes\n");
//! let mut terminal = Terminal::new(input, Vec::new());
//!
//! assert!(terminal.require_yes_no("Continue?").unwrap());
//! ```

use crate::utils::header;
use crate::utils::sanitize::{
    FilterErrorNot, Sanitize, check_between, parse_float, parse_integer, parse_non_empty,
    parse_pattern, parse_yes_no,
};
use regex::Regex;
use std::fmt::{Debug, Display};
use std::io::{self, BufRead, Stdout, StdinLock, Write};
use thiserror::Error;
use tracing::debug;

/// Errors that end a prompt without a valid answer.
///
/// Rejected answers are never reported here; they are retried.
#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("input closed before a valid answer was given")]
    EndOfInput,
    #[error("invalid bounds: low ({low}) must be <= high ({high})")]
    InvalidBounds { low: String, high: String },
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// A line-oriented prompt session over an input source and an output sink.
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
/// use safeinput::utils::{DesiredType, Sanitize, Terminal};
///
/// let mut terminal = Terminal::new(Cursor::new("abc\n12\n"), Vec::new());
/// let answer = terminal
///     .ask("Threads", &[Sanitize::IsType(DesiredType::Integer)])
///     .unwrap();
///
/// assert_eq!(answer, "12");
/// ```
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl Terminal<StdinLock<'static>, Stdout> {
    /// A terminal bound to the process' standard input and output.
    pub fn stdio() -> Self {
        Terminal::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Terminal { input, output }
    }

    /// Gives back the underlying streams.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Writes one line of plain text.
    pub fn say(&mut self, message: impl Display) -> Result<(), TerminalError> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Writes the bordered banner described in [`crate::utils::header`].
    pub fn pretty_header(&mut self, message: &str) -> Result<(), TerminalError> {
        header::pretty_header(&mut self.output, message)?;
        Ok(())
    }

    /// Reads one line and strips its terminator (`\n` or `\r\n`).
    fn read_line(&mut self) -> Result<String, TerminalError> {
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(TerminalError::EndOfInput);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Core retry loop: writes `prompt` as-is, reads a line and hands it to
    /// `check` until it produces a value.
    pub fn ask_with<T, F>(&mut self, prompt: &str, mut check: F) -> Result<T, TerminalError>
    where
        F: FnMut(&str) -> Result<T, FilterErrorNot>,
    {
        loop {
            write!(self.output, "{}", prompt)?;
            let line = self.read_line()?;

            match check(&line) {
                Ok(value) => break Ok(value),
                Err(e) => {
                    debug!(input = %line, reason = %e, "answer rejected");
                    writeln!(self.output, "{}", e)?;
                }
            }
        }
    }

    /// Prints a question to the terminal and loops until the answer passes
    /// every filter. Returns the accepted answer.
    ///
    /// A range filter with inverted bounds fails with
    /// [`TerminalError::InvalidBounds`] before anything is written or read.
    pub fn ask(&mut self, question: &str, filters: &[Sanitize]) -> Result<String, TerminalError> {
        if let Some((low, high)) = filters.iter().find_map(Sanitize::inverted_bounds) {
            return Err(TerminalError::InvalidBounds { low, high });
        }

        self.ask_with(&field_prompt(question), |line| Sanitize::execute(line, filters))
    }

    /// Asks until the user types at least one character.
    pub fn require_non_empty_text(&mut self, prompt: &str) -> Result<String, TerminalError> {
        self.ask_with(&field_prompt(prompt), parse_non_empty)
    }

    /// Asks until the answer parses as an `i32`.
    pub fn require_integer(&mut self, prompt: &str) -> Result<i32, TerminalError> {
        self.ask_with(&field_prompt(prompt), parse_integer)
    }

    /// Asks until the answer parses as a finite `f64`.
    pub fn require_float(&mut self, prompt: &str) -> Result<f64, TerminalError> {
        self.ask_with(&field_prompt(prompt), parse_float)
    }

    /// Asks for an `i32` in `[low, high]`, appending the range to the prompt.
    ///
    /// Fails with [`TerminalError::InvalidBounds`] before touching either
    /// stream when `low > high`.
    pub fn require_integer_in_range(
        &mut self,
        prompt: &str,
        low: i32,
        high: i32,
    ) -> Result<i32, TerminalError> {
        if low > high {
            return Err(invalid_bounds(low, high));
        }

        self.ask_with(&field_prompt(&ranged(prompt, low, high)), |line| {
            let value = parse_integer(line)?;
            check_between(value, low, high).map(|_| value)
        })
    }

    /// Asks for a finite `f64` in `[low, high]`, appending the range to the prompt.
    ///
    /// NaN bounds are treated like inverted ones.
    pub fn require_float_in_range(
        &mut self,
        prompt: &str,
        low: f64,
        high: f64,
    ) -> Result<f64, TerminalError> {
        if !(low <= high) {
            return Err(invalid_bounds(low, high));
        }

        self.ask_with(&field_prompt(&ranged(prompt, low, high)), |line| {
            let value = parse_float(line)?;
            check_between(value, low, high).map(|_| value)
        })
    }

    /// Asks a Y/N question. `Y`/`YES` give `true`, `N`/`NO` give `false`.
    pub fn require_yes_no(&mut self, prompt: &str) -> Result<bool, TerminalError> {
        self.ask_with(&format!("{} (Y/N):", prompt), parse_yes_no)
    }

    /// Asks until the whole line matches `pattern`.
    pub fn require_pattern(&mut self, prompt: &str, pattern: &Regex) -> Result<String, TerminalError> {
        self.ask_with(&format!("{} ", prompt), |line| parse_pattern(line, pattern))
    }
}

fn field_prompt(prompt: &str) -> String {
    format!("\n{}: ", prompt)
}

fn ranged<T: Debug>(prompt: &str, low: T, high: T) -> String {
    format!("{} [{:?} to {:?}]", prompt, low, high)
}

fn invalid_bounds<T: Debug>(low: T, high: T) -> TerminalError {
    TerminalError::InvalidBounds {
        low: format!("{:?}", low),
        high: format!("{:?}", high),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn terminal(input: &str) -> Terminal<Cursor<Vec<u8>>, Vec<u8>> {
        Terminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(terminal: Terminal<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        let (_, out) = terminal.into_parts();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_terminal_non_empty_retries_on_blank() {
        let mut t = terminal("\n\nAda\n");
        assert_eq!(t.require_non_empty_text("Enter first name").unwrap(), "Ada");

        let out = output(t);
        assert_eq!(out.matches("Input cannot be empty. Please try again.").count(), 2);
        assert_eq!(out.matches("\nEnter first name: ").count(), 3);
    }

    #[test]
    fn test_terminal_non_empty_keeps_whitespace() {
        let mut t = terminal("  Ada Lovelace \r\n");
        assert_eq!(
            t.require_non_empty_text("Name").unwrap(),
            "  Ada Lovelace "
        );
    }

    #[test]
    fn test_terminal_integer_counts_diagnostics() {
        let mut t = terminal("abc\n1.5\n99999999999\n-42\n");
        assert_eq!(t.require_integer("Number").unwrap(), -42);

        let out = output(t);
        assert_eq!(out.matches("is not a valid integer.").count(), 2);
        assert_eq!(out.matches("is outside the supported range").count(), 1);
        assert!(out.contains("99999999999 is outside the supported range of [-2147483648 … 2147483647]."));
    }

    #[test]
    fn test_terminal_float() {
        let mut t = terminal("x\n1e999\n  2.5\n");
        assert_eq!(t.require_float("Ratio").unwrap(), 2.5);

        let out = output(t);
        assert!(out.contains("x is not a valid double."));
        assert!(out.contains("1e999 is outside the supported range of a double."));
    }

    #[test]
    fn test_terminal_integer_in_range() {
        let mut t = terminal("1815\n2030\nnope\n1990\n");
        assert_eq!(
            t.require_integer_in_range("Enter year of birth", 1900, 2025)
                .unwrap(),
            1990
        );

        let out = output(t);
        assert!(out.contains("\nEnter year of birth [1900 to 2025]: "));
        assert!(out.contains("1815 is below the minimum allowed value of 1900. Please try again."));
        assert!(out.contains("2030 is above the maximum allowed value of 2025. Please try again."));
        assert!(out.contains("nope is not a valid integer."));
    }

    #[test]
    fn test_terminal_integer_in_range_accepts_bounds() {
        let mut t = terminal("5\n5\n");
        assert_eq!(t.require_integer_in_range("Only five", 5, 5).unwrap(), 5);
    }

    #[test]
    fn test_terminal_inverted_bounds_fail_without_reading() {
        let mut t = terminal("5\n");
        let res = t.require_integer_in_range("Broken", 10, 1);
        assert!(matches!(res, Err(TerminalError::InvalidBounds { .. })));

        let res = t.require_float_in_range("Broken", 2.0, 1.0);
        assert!(matches!(res, Err(TerminalError::InvalidBounds { .. })));

        let res = t.require_float_in_range("Broken", f64::NAN, 1.0);
        assert!(matches!(res, Err(TerminalError::InvalidBounds { .. })));

        let (mut input, out) = t.into_parts();
        assert!(out.is_empty());
        let mut rest = String::new();
        input.read_line(&mut rest).unwrap();
        assert_eq!(rest, "5\n");
    }

    #[test]
    fn test_terminal_ask_inverted_filter_fails_without_reading() {
        let mut t = terminal("5\n1\n10\n");
        let res = t.ask("X", &[Sanitize::IsBetween(10, 1)]);
        match res {
            Err(TerminalError::InvalidBounds { low, high }) => {
                assert_eq!(low, "10");
                assert_eq!(high, "1");
            }
            other => panic!("expected invalid bounds, got {:?}", other),
        }

        let res = t.ask("Y", &[Sanitize::NonEmpty, Sanitize::IsBetweenFloat(1.5, 0.5)]);
        assert!(matches!(res, Err(TerminalError::InvalidBounds { .. })));

        let (mut input, out) = t.into_parts();
        assert!(out.is_empty());
        let mut rest = String::new();
        input.read_line(&mut rest).unwrap();
        assert_eq!(rest, "5\n");
    }

    #[test]
    fn test_terminal_float_in_range() {
        let mut t = terminal("-0.1\n100.5\n42.0\n");
        assert_eq!(
            t.require_float_in_range("Score", 0.0, 100.0).unwrap(),
            42.0
        );

        let out = output(t);
        assert!(out.contains("Score [0.0 to 100.0]: "));
        assert!(out.contains("-0.1 is below the minimum allowed value of 0.0. Please try again."));
        assert!(out.contains("100.5 is above the maximum allowed value of 100.0. Please try again."));
        assert_eq!(out.matches("Please try again.").count(), 2);
    }

    #[test]
    fn test_terminal_yes_no() {
        let mut t = terminal("\nmaybe\nYES\nn\n");
        assert!(t.require_yes_no("Again?").unwrap());
        assert!(!t.require_yes_no("Again?").unwrap());

        let out = output(t);
        assert_eq!(out.matches("Again? (Y/N):").count(), 4);
        assert!(out.contains("Input cannot be empty. Please answer Y/N."));
        assert!(out.contains("maybe is not a valid response.  Please answer Y/N."));
    }

    #[test]
    fn test_terminal_pattern() {
        let zip = Regex::new(r"\d{5}").unwrap();
        let mut t = terminal("1234\n123456\n45221\n");
        assert_eq!(t.require_pattern("ZIP:", &zip).unwrap(), "45221");

        let out = output(t);
        assert_eq!(out.matches("does not match the correct pattern").count(), 2);
        assert!(out.contains("Sorry. \"1234\" does not match the correct pattern. The pattern we need to match is \"\\d{5}\""));
    }

    #[test]
    fn test_terminal_end_of_input() {
        let mut t = terminal("abc\n");
        assert!(matches!(
            t.require_integer("Number"),
            Err(TerminalError::EndOfInput)
        ));

        let mut t = terminal("");
        assert!(matches!(
            t.require_non_empty_text("Name"),
            Err(TerminalError::EndOfInput)
        ));
    }

    #[test]
    fn test_terminal_last_line_without_newline() {
        let mut t = terminal("7");
        assert_eq!(t.require_integer("Number").unwrap(), 7);
    }

    #[test]
    fn test_terminal_ask_with_filters() {
        let mut t = terminal("0\n11\n3\n");
        let answer = t
            .ask(
                "Threads",
                &[Sanitize::NonEmpty, Sanitize::IsBetween(1, 10)],
            )
            .unwrap();
        assert_eq!(answer, "3");
    }

    #[test]
    fn test_terminal_pretty_header() {
        let mut t = terminal("");
        t.pretty_header("Hi").unwrap();
        let out = output(t);
        assert_eq!(out.lines().count(), 3);
    }
}
