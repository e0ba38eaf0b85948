//! # SafeInput
//!
//! A small Rust library for interactive console tools: prompts that keep
//! asking until the answer is valid, a line-per-record collector and a
//! file inspection helper.
//!
//! ## Features
//!
//! - **Validated prompts** - non-empty text, integers, doubles, ranged
//!   numbers, yes/no confirmations and whole-line regex matches, each with a
//!   distinct diagnostic for every way an answer can be wrong
//! - **Injected streams** - prompts run over any `BufRead`/`Write` pair, so
//!   scripted input works the same as a real terminal
//! - **Record collection** - sequential six-digit ids and `", "`-joined export
//! - **File inspection** - echo a file and count lines, words and characters
//!   in one pass, with text or JSON summaries
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! safeinput = { path = "safeinput" }
//! ```
//!
//! ## Usage Examples
//!
//! ### Ranged input
//!
//! ```rust,no_run
//! use safeinput::utils::Terminal;
//!
//! let mut terminal = Terminal::stdio();
//! terminal.pretty_header("Scan settings").unwrap();
//!
//! let threads = terminal
//!     .require_integer_in_range("Enter scan threads", 1, 16)
//!     .unwrap();
//! println!("Threads: {}", threads);
//! ```
//!
//! ### Whole-line pattern
//!
//! ```rust,no_run
//! use regex::Regex;
//! use safeinput::utils::Terminal;
//!
//! let ssn = Regex::new(r"\d{3}-\d{2}-\d{4}").unwrap();
//! let mut terminal = Terminal::stdio();
//! let answer = terminal.require_pattern("SSN:", &ssn).unwrap();
//! println!("{}", answer);
//! ```
//!
//! ### Collect and save records
//!
//! ```rust,no_run
//! use std::path::Path;
//! use safeinput::records::{Collector, run_session};
//! use safeinput::utils::Terminal;
//!
//! let mut terminal = Terminal::stdio();
//! match run_session(&mut terminal, &Collector::default(), Path::new("src")) {
//!     Ok(path) => println!("Data saved to {}", path.display()),
//!     Err(e) => eprintln!("Error writing to file: {}", e),
//! }
//! ```
//!
//! ## Error Handling
//!
//! Bad answers never surface as errors; they are reported and asked again.
//! What does surface is the input closing ([`utils::TerminalError::EndOfInput`]),
//! impossible ranges ([`utils::TerminalError::InvalidBounds`]) and file system
//! failures ([`records::RecordError`], [`inspect::InspectError`]).
//!
//! ## Architecture
//!
//! - **`utils`** - validation rules, the prompt loop and the banner helper
//! - **`records`** - record types, the collection dialogue and export
//! - **`inspect`** - path selection, single-pass scanning and summaries

pub mod utils;

pub mod records;

pub mod inspect;
