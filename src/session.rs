use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use redate_domain::{NameFilter, PathKind, TargetMoment, TimestampKind};
use redate_infra::{FsDirectoryLister, FsPathProbe, FsTimestampStore};
use redate_usecase::{ApplyTimestamps, SelectFiles};

use crate::app::RunError;
use crate::cli::parsers::{DateArg, TimeArg};
use crate::presentation;

/// Interactive prompt loop around the core operations.
///
/// Reads line-based input from any `BufRead` and writes prompts and
/// results to any `Write`, so a session can be driven by a script as
/// well as a terminal. Every prompt retries until its parser accepts
/// the line; end of input anywhere, or quit/exit at the first prompt,
/// ends the session.
pub struct Session<R, W> {
    input: R,
    output: W,
}

/// Run a session on stdin/stdout until end of input.
pub fn run_with_stdio() -> ExitCode {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());
    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "redate {}", env!("CARGO_PKG_VERSION"))?;
        writeln!(self.output, "Type quit at the first prompt to leave.")?;
        writeln!(self.output)?;

        loop {
            match self.run_once() {
                Ok(true) => {}
                Ok(false) => return Ok(()),
                Err(RunError::Io(err)) => return Err(err),
                // The front end decides: anything the prompts could not
                // catch is displayed and the outer loop starts over.
                Err(RunError::Core(err)) => {
                    writeln!(self.output, "Error: {err}")?;
                    writeln!(self.output)?;
                }
            }
        }
    }

    /// One full prompt cycle; `Ok(false)` means the session is over.
    fn run_once(&mut self) -> Result<bool, RunError> {
        let probe = FsPathProbe::new();
        let lister = FsDirectoryLister::new();
        let selector = SelectFiles::new(&probe, &lister);

        let kind = loop {
            let Some(line) = self.prompt_line("File or Directory (F/D): ")? else {
                return Ok(false);
            };
            if matches!(line.to_ascii_lowercase().as_str(), "q" | "quit" | "exit") {
                return Ok(false);
            }
            match line.parse::<PathKind>() {
                Ok(kind) => break kind,
                Err(err) => writeln!(self.output, "{err}")?,
            }
        };

        let raw_path = loop {
            let Some(line) = self.prompt_line("Path: ")? else {
                return Ok(false);
            };
            match selector.resolve(&line, kind) {
                Ok(_) => break line,
                Err(err) => writeln!(self.output, "{err}")?,
            }
        };

        let filter = match kind {
            PathKind::File => "*".to_string(),
            PathKind::Directory => {
                writeln!(
                    self.output,
                    "Filter. Press enter to collect every file in the directory."
                )?;
                writeln!(self.output, "  <name>*   files starting with <name>")?;
                writeln!(self.output, "  *<name>*  files containing <name>")?;
                writeln!(self.output, "  <name>    exactly the file named <name>")?;
                let Some(filter) = self.prompt_until("Filter: ", |line| {
                    NameFilter::new(line)
                        .map(|f| f.pattern().to_string())
                        .map_err(|err| err.to_string())
                })?
                else {
                    return Ok(false);
                };
                filter
            }
        };

        let selection = selector.select(&raw_path, kind, &filter)?;
        presentation::write_selection(&mut self.output, &selection)?;
        writeln!(self.output)?;

        writeln!(
            self.output,
            "Attribute to change (Created, Modified or Accessed)"
        )?;
        let Some(ts_kind) = self.prompt_until("Type: ", |line| {
            line.parse::<TimestampKind>().map_err(|err| err.to_string())
        })?
        else {
            return Ok(false);
        };

        writeln!(self.output, "New local date. Format: 2023-06-15")?;
        let Some(DateArg(date)) = self.prompt_until("Date: ", str::parse)? else {
            return Ok(false);
        };

        writeln!(self.output, "New local time. Format: 07:45:13.000")?;
        let Some(TimeArg(time)) = self.prompt_until("Time: ", str::parse)? else {
            return Ok(false);
        };

        let store = FsTimestampStore::new();
        let applier = ApplyTimestamps::new(&store);
        let report = applier.apply(&selection, ts_kind, TargetMoment::new(date, time))?;
        presentation::write_report(&mut self.output, &report)?;
        writeln!(self.output)?;
        Ok(true)
    }

    /// Print a prompt and read one trimmed line; `None` on end of input.
    fn prompt_line(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Retry loop around a pure parser: re-prompt until a line parses.
    fn prompt_until<T>(
        &mut self,
        text: &str,
        parse: impl Fn(&str) -> Result<T, String>,
    ) -> io::Result<Option<T>> {
        loop {
            let Some(line) = self.prompt_line(text)? else {
                return Ok(None);
            };
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(reason) => writeln!(self.output, "{reason}")?,
            }
        }
    }
}
