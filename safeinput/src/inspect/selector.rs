use super::*;

/// Source of an interactively chosen file.
///
/// `None` means the user cancelled. Native OS dialogs plug in here; the
/// crate ships terminal and fixed implementations.
pub trait FileSelector {
    fn select_file(&mut self) -> Option<PathBuf>;

    /// Like [`FileSelector::select_file`], but keeps environment failures
    /// apart from a user cancel. [`resolve`] goes through this method.
    fn try_select_file(&mut self) -> Result<Option<PathBuf>, InspectError> {
        Ok(self.select_file())
    }
}

/// Always cancels. Useful for automation where no one can answer.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSelector;

impl FileSelector for NullSelector {
    fn select_file(&mut self) -> Option<PathBuf> {
        None
    }
}

/// Returns a preset answer once, then cancels.
#[derive(Debug, Default, Clone)]
pub struct FixedSelector(pub Option<PathBuf>);

impl FileSelector for FixedSelector {
    fn select_file(&mut self) -> Option<PathBuf> {
        self.0.take()
    }
}

/// Lists the regular files of a start directory and asks for a path on the
/// terminal. Relative answers are resolved against the start directory; a
/// blank answer or closed input cancels.
pub struct TerminalSelector<R, W> {
    terminal: Terminal<R, W>,
    start_dir: PathBuf,
}

impl<R: BufRead, W: Write> TerminalSelector<R, W> {
    pub fn new(terminal: Terminal<R, W>, start_dir: impl Into<PathBuf>) -> Self {
        TerminalSelector {
            terminal,
            start_dir: start_dir.into(),
        }
    }

    pub fn into_terminal(self) -> Terminal<R, W> {
        self.terminal
    }

    fn list_start_dir(&mut self) -> Result<(), TerminalError> {
        let Ok(entries) = fs::read_dir(&self.start_dir) else {
            debug!(dir = %self.start_dir.display(), "start directory not readable");
            return Ok(());
        };

        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_ok_and(|t| t.is_file()))
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();

        self.terminal
            .say(format!("Files in {}:", self.start_dir.display()))?;
        for name in names {
            self.terminal.say(format!("  {}", name))?;
        }
        Ok(())
    }

    fn ask_path(&mut self) -> Result<Option<PathBuf>, TerminalError> {
        self.list_start_dir()?;

        let answer = self
            .terminal
            .ask_with("\nFile to open (blank to cancel): ", |line| {
                Ok(line.trim().to_string())
            })?;

        if answer.is_empty() {
            return Ok(None);
        }
        Ok(Some(self.start_dir.join(answer)))
    }
}

impl<R: BufRead, W: Write> FileSelector for TerminalSelector<R, W> {
    fn select_file(&mut self) -> Option<PathBuf> {
        self.try_select_file().unwrap_or_else(|e| {
            warn!(error = %e, "file selection failed");
            None
        })
    }

    fn try_select_file(&mut self) -> Result<Option<PathBuf>, InspectError> {
        match self.ask_path() {
            Ok(path) => Ok(path),
            Err(TerminalError::EndOfInput) => Ok(None),
            Err(TerminalError::Io(e)) => Err(InspectError::Io(e)),
            Err(e) => Err(InspectError::Io(io::Error::other(e))),
        }
    }
}
