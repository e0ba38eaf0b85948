use clap::Parser;
use safeinput::records::{Collector, run_session};
use safeinput::utils::Terminal;
use safeinput_cli::{init_tracing, report_session};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Collects person records interactively and saves them as comma-separated lines."
)]
struct Args {
    /// Directory the record file is written to.
    #[arg(short, long, default_value = "src")]
    output_dir: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing();

    let mut terminal = Terminal::stdio();
    if let Err(e) = terminal.pretty_header("DataSaver") {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    let result = run_session(&mut terminal, &Collector::default(), &args.output_dir);
    report_session(result, &args.output_dir, &mut io::stdout(), &mut io::stderr()).into()
}
