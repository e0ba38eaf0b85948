use clap::Parser;
use safeinput::inspect::{PathSource, TerminalSelector};
use safeinput::utils::Terminal;
use safeinput_cli::{init_tracing, inspect_and_report};
use std::path::PathBuf;
use std::process::ExitCode;

/// Same scan as file-scan, but the file is always chosen interactively.
#[derive(Parser, Debug)]
#[command(author, version, about = "Chooses a text file, prints it and reports its counts.")]
struct Args {
    /// Print the summary as JSON.
    #[arg(long)]
    json: bool,

    /// Directory offered by the chooser.
    #[arg(long, default_value = "src")]
    start_dir: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing();

    let selector = TerminalSelector::new(Terminal::stdio(), args.start_dir);
    inspect_and_report(PathSource::Interactive(Box::new(selector)), args.json)
}
