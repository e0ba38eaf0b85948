use clap::Parser;
use safeinput::inspect::{PathSource, TerminalSelector};
use safeinput::utils::Terminal;
use safeinput_cli::{init_tracing, inspect_and_report};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Prints a text file and reports its line, word and character counts."
)]
struct Args {
    /// File to scan. Without it a file is chosen interactively.
    path: Option<PathBuf>,

    /// Print the summary as JSON.
    #[arg(long)]
    json: bool,

    /// Directory offered by the interactive chooser.
    #[arg(long, default_value = "src")]
    start_dir: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing();

    let source = match args.path {
        Some(path) => PathSource::Argument(path),
        None => PathSource::Interactive(Box::new(TerminalSelector::new(
            Terminal::stdio(),
            args.start_dir,
        ))),
    };

    inspect_and_report(source, args.json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_zero_or_one_path() {
        let args = Args::try_parse_from(["file-scan"]).unwrap();
        assert_eq!(args.path, None);
        assert_eq!(args.start_dir, PathBuf::from("src"));

        let args = Args::try_parse_from(["file-scan", "notes.txt", "--json"]).unwrap();
        assert_eq!(args.path, Some(PathBuf::from("notes.txt")));
        assert!(args.json);
    }

    #[test]
    fn test_args_two_paths_is_usage_error() {
        let res = Args::try_parse_from(["file-scan", "a.txt", "b.txt"]);
        assert!(res.is_err());
    }
}
