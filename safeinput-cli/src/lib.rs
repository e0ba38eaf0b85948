use safeinput::inspect::{
    self, FileSummary, InspectError, JsonFormatter, PathSource, SummaryFormatter, TextFormatter,
};
use safeinput::records::RecordError;
use safeinput::utils::TerminalError;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `SAFEINPUT_LOG=debug`.
pub const LOG_ENV: &str = "SAFEINPUT_LOG";

/// Logs go to stderr so they never mix with the dialogue on stdout.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Process outcome of a tool run. Exit code 0 or 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => ExitCode::SUCCESS,
            Status::Failure => ExitCode::FAILURE,
        }
    }
}

/// Prints the closing message of an inspection and picks the exit status.
///
/// A cancel is not a failure. The not-a-file message goes to `out` like the
/// rest of the dialogue; other errors go to `err`.
pub fn report_inspection<O: Write, E: Write>(
    result: Result<FileSummary, InspectError>,
    out: &mut O,
    err: &mut E,
) -> Status {
    match result {
        Ok(_) => Status::Success,
        Err(e @ InspectError::Cancelled) => {
            let _ = writeln!(out, "{}", e);
            Status::Success
        }
        Err(e @ InspectError::NotAFile(_)) => {
            let _ = writeln!(out, "{}", e);
            Status::Failure
        }
        Err(e) => {
            debug!(error = ?e, "inspection aborted");
            let _ = writeln!(err, "{}", e);
            Status::Failure
        }
    }
}

/// Prints the closing message of a data-saver session and picks the exit
/// status. Every error is reported on `err`.
pub fn report_session<O: Write, E: Write>(
    result: Result<PathBuf, RecordError>,
    output_dir: &Path,
    out: &mut O,
    err: &mut E,
) -> Status {
    match result {
        Ok(path) => {
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            let _ = writeln!(
                out,
                "Data saved to {} in the {} directory.",
                file_name,
                output_dir.display()
            );
            Status::Success
        }
        Err(RecordError::Prompt(TerminalError::EndOfInput)) => {
            let _ = writeln!(err, "Input closed.");
            Status::Failure
        }
        Err(e @ RecordError::Prompt(_)) => {
            let _ = writeln!(err, "{}", e);
            Status::Failure
        }
        Err(e) => {
            debug!(error = ?e, "session aborted");
            let _ = writeln!(err, "Error writing to file: {}", e);
            Status::Failure
        }
    }
}

/// Shared body of the file-scan and file-inspector binaries.
pub fn inspect_and_report(source: PathSource, json: bool) -> ExitCode {
    let formatter: &dyn SummaryFormatter = if json { &JsonFormatter } else { &TextFormatter };
    let mut stdout = io::stdout().lock();

    let result = inspect::run(source, formatter, &mut stdout);
    report_inspection(result, &mut stdout, &mut io::stderr()).into()
}
