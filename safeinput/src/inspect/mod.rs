//! # File Inspection
//!
//! Echoes a text file to the console while counting its lines, words and
//! characters in a single pass, then renders a [`FileSummary`].
//!
//! The file is named either directly ([`PathSource::Argument`]) or chosen
//! through a [`FileSelector`] ([`PathSource::Interactive`]). Both paths go
//! through the same checks and the same scan.
//!
//! ## Counting rules
//! - every line counts once, including blank ones;
//! - words are the ASCII-whitespace-separated tokens of the trimmed line
//!   (a no-break space does not split words);
//! - characters are the `char`s of the line without its terminator.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use safeinput::inspect::{PathSource, TextFormatter, run};
//!
//! let source = PathSource::Argument(PathBuf::from("notes.txt"));
//! match run(source, &TextFormatter, &mut std::io::stdout()) {
//!     Ok(summary) => eprintln!("{} lines", summary.line_count),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```
use crate::utils::{Terminal, TerminalError};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

pub mod formatter;
pub use formatter::{JsonFormatter, SummaryFormatter, TextFormatter};

pub mod selector;
pub use selector::{FileSelector, FixedSelector, NullSelector, TerminalSelector};

#[derive(Debug, Error)]
pub enum InspectError {
    #[error("File selection cancelled.")]
    Cancelled,
    #[error("Error: File '{}' not found or is not a valid file.", .0.display())]
    NotAFile(PathBuf),
    #[error("Error reading file: {0}")]
    Io(#[from] io::Error),
    #[error("Error rendering summary: {0}")]
    Render(#[from] serde_json::Error),
}

/// Where the path to inspect comes from.
pub enum PathSource {
    Argument(PathBuf),
    Interactive(Box<dyn FileSelector>),
}

/// Running line/word/character totals.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    pub lines: usize,
    pub words: usize,
    pub chars: usize,
}

impl Counts {
    pub fn add_line(&mut self, line: &str) {
        self.lines += 1;
        self.words += line.split_ascii_whitespace().count();
        self.chars += line.chars().count();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileSummary {
    pub file_name: String,
    pub line_count: usize,
    pub word_count: usize,
    pub char_count: usize,
}

impl FileSummary {
    pub fn new(file_name: impl Into<String>, counts: Counts) -> Self {
        FileSummary {
            file_name: file_name.into(),
            line_count: counts.lines,
            word_count: counts.words,
            char_count: counts.chars,
        }
    }
}

/// Turns a [`PathSource`] into an existing regular file.
pub fn resolve(source: PathSource) -> Result<PathBuf, InspectError> {
    let path = match source {
        PathSource::Argument(path) => path,
        PathSource::Interactive(mut selector) => {
            selector.try_select_file()?.ok_or(InspectError::Cancelled)?
        }
    };

    if !path.is_file() {
        return Err(InspectError::NotAFile(path));
    }
    Ok(path)
}

/// Echoes every line of `reader` to `out` and counts it.
pub fn scan<R: BufRead, W: Write>(reader: R, out: &mut W) -> io::Result<Counts> {
    let mut counts = Counts::default();
    for line in reader.lines() {
        let line = line?;
        writeln!(out, "{}", line)?;
        counts.add_line(&line);
    }
    Ok(counts)
}

/// Prints the contents of `path` to `out` and returns its summary.
///
/// On a read error the lines already echoed stay in `out` and no summary is
/// produced.
pub fn inspect<W: Write>(path: &Path, out: &mut W) -> Result<FileSummary, InspectError> {
    writeln!(out, "File Content:\n")?;

    let file = File::open(path)?;
    info!(path = %path.display(), "inspecting file");
    let counts = scan(BufReader::new(file), out)?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    debug!(?counts, "scan finished");

    Ok(FileSummary::new(file_name, counts))
}

/// Resolves the path, echoes the file and prints its summary with `formatter`.
pub fn run<W: Write>(
    source: PathSource,
    formatter: &dyn SummaryFormatter,
    out: &mut W,
) -> Result<FileSummary, InspectError> {
    let path = resolve(source)?;
    let summary = inspect(&path, out)?;
    writeln!(out, "{}", formatter.format(&summary)?)?;
    Ok(summary)
}
