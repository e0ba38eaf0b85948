//! # Record Collector
//!
//! Interactive collection of person records and their line-per-record
//! export.
//!
//! Each record is written as its fields joined by `", "` in the order
//! `first name, last name, id, email, birth year`, with no header row and no
//! quoting. Ids are assigned per session starting at `000001`.
//!
//! ## Example
//!
//! ```rust
//! use std::io::Cursor;
//! use safeinput::records::Collector;
//! use safeinput::utils::Terminal;
//!
//! let input = Cursor::new("Ada\nLovelace\nada@x.com\n1990\nn\n");
//! let mut terminal = Terminal::new(input, Vec::new());
//!
//! let records = Collector::default().collect(&mut terminal).unwrap();
//! let lines: Vec<String> = records.lines().collect();
//! assert_eq!(lines, ["Ada, Lovelace, 000001, ada@x.com, 1990"]);
//! ```
use crate::utils::{Terminal, TerminalError};
use std::fmt::Display;
use std::fs::{self, File};
use std::io::{self, BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Field separator of an exported line.
pub const FIELD_SEPARATOR: &str = ", ";
/// Suffix appended to output file names that lack it.
pub const FILE_SUFFIX: &str = ".csv";

#[cfg(windows)]
const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
const LINE_SEPARATOR: &str = "\n";

#[derive(Debug, Error)]
pub enum RecordError {
    #[error(transparent)]
    Prompt(#[from] TerminalError),
    #[error("{}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Sequential record id, displayed as six zero-padded digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(u32);

impl RecordId {
    pub fn new(value: u32) -> Self {
        RecordId(value)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:06}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    first_name: String,
    last_name: String,
    id: RecordId,
    email: String,
    birth_year: i32,
}

impl Record {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        id: RecordId,
        email: impl Into<String>,
        birth_year: i32,
    ) -> Self {
        Record {
            first_name: first_name.into(),
            last_name: last_name.into(),
            id,
            email: email.into(),
            birth_year,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn birth_year(&self) -> i32 {
        self.birth_year
    }

    /// Joins the fields with [`FIELD_SEPARATOR`].
    ///
    /// Text fields are written verbatim; one containing a comma shifts the
    /// columns of the exported line.
    pub fn to_line(&self) -> String {
        let text_fields = [&self.first_name, &self.last_name, &self.email];
        if text_fields.iter().any(|field| field.contains(',')) {
            warn!(id = %self.id, "record field contains a comma, exported line will be ambiguous");
        }

        [
            self.first_name.clone(),
            self.last_name.clone(),
            self.id.to_string(),
            self.email.clone(),
            self.birth_year.to_string(),
        ]
        .join(FIELD_SEPARATOR)
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_line())
    }
}

/// Append-only list of records that hands out ids in insertion order.
#[derive(Debug, Default)]
pub struct RecordSequence {
    records: Vec<Record>,
    counter: u32,
}

impl RecordSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record under the next id (`1`, `2`, `3`, ...).
    pub fn push_next(
        &mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        birth_year: i32,
    ) -> &Record {
        self.counter += 1;
        let record = Record::new(
            first_name,
            last_name,
            RecordId::new(self.counter),
            email,
            birth_year,
        );
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Exported lines, without terminators.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.records.iter().map(Record::to_line)
    }

    /// Writes every line followed by the platform line separator.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in self.lines() {
            write!(out, "{}{}", line, LINE_SEPARATOR)?;
        }
        out.flush()
    }
}

/// Inclusive bounds accepted for the birth year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearRange {
    pub low: i32,
    pub high: i32,
}

impl Default for BirthYearRange {
    fn default() -> Self {
        BirthYearRange {
            low: 1900,
            high: 2025,
        }
    }
}

/// Drives the "add another record?" dialogue.
#[derive(Debug, Clone, Default)]
pub struct Collector {
    years: BirthYearRange,
}

impl Collector {
    pub fn with_birth_years(years: BirthYearRange) -> Self {
        Collector { years }
    }

    /// Greets the user and collects records until they decline to add
    /// another. Always returns at least one record.
    pub fn collect<R: BufRead, W: Write>(
        &self,
        terminal: &mut Terminal<R, W>,
    ) -> Result<RecordSequence, TerminalError> {
        terminal.say("Welcome to DataSaver!")?;

        let mut records = RecordSequence::new();
        loop {
            let first_name = terminal.require_non_empty_text("Enter first name")?;
            let last_name = terminal.require_non_empty_text("Enter last name")?;
            let email = terminal.require_non_empty_text("Enter email")?;
            let birth_year = terminal.require_integer_in_range(
                "Enter year of birth",
                self.years.low,
                self.years.high,
            )?;

            let record = records.push_next(first_name, last_name, email, birth_year);
            info!(id = %record.id(), "record collected");

            if !terminal.require_yes_no("Do you want to add another record?")? {
                break;
            }
        }

        Ok(records)
    }
}

/// Appends [`FILE_SUFFIX`] unless the name already ends with it.
pub fn normalize_file_name(name: &str) -> String {
    if name.ends_with(FILE_SUFFIX) {
        name.to_string()
    } else {
        format!("{}{}", name, FILE_SUFFIX)
    }
}

/// Asks for the output file name and normalizes it.
pub fn ask_file_name<R: BufRead, W: Write>(
    terminal: &mut Terminal<R, W>,
) -> Result<String, TerminalError> {
    let name = terminal.require_non_empty_text("Enter file name to save (no extension)")?;
    Ok(normalize_file_name(&name))
}

/// Creates (or truncates) `dir/file_name` and writes every record to it.
///
/// `dir` is created when missing.
pub fn write_records(
    dir: &Path,
    file_name: &str,
    records: &RecordSequence,
) -> Result<PathBuf, RecordError> {
    let path = dir.join(file_name);
    let write_err = |source: io::Error| RecordError::Write {
        path: path.clone(),
        source,
    };

    fs::create_dir_all(dir).map_err(|source| RecordError::Write {
        path: dir.to_path_buf(),
        source,
    })?;

    let file = File::create(&path).map_err(write_err)?;
    records
        .write_to(&mut BufWriter::new(file))
        .map_err(write_err)?;

    info!(path = %path.display(), count = records.len(), "records written");
    Ok(path)
}

/// Full DataSaver session: collect, ask for a name, write into `dir`.
pub fn run_session<R: BufRead, W: Write>(
    terminal: &mut Terminal<R, W>,
    collector: &Collector,
    dir: &Path,
) -> Result<PathBuf, RecordError> {
    let records = collector.collect(terminal)?;
    let file_name = ask_file_name(terminal)?;
    write_records(dir, &file_name, &records)
}
