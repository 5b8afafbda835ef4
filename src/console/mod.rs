//! Human-facing output of a clean run.
//!
//! Deletions and the summary go to stdout, failures to stderr. Diagnostic
//! logging is handled separately by `tracing` and never mixed in here.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use colored::Colorize;
use tracing::debug;

use crate::cleaner::{CleanFailure, CleanObserver, CleanReport, TARGET_DIR_NAME};
use crate::ext::PathDisplayExt;

pub struct ConsoleObserver<O: Write, E: Write> {
    root: PathBuf,
    out: O,
    err: E,
}

impl ConsoleObserver<io::Stdout, io::Stderr> {
    pub fn stdio(root: impl Into<PathBuf>) -> Self {
        Self::new(root, io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> ConsoleObserver<O, E> {
    pub fn new(root: impl Into<PathBuf>, out: O, err: E) -> Self {
        Self {
            root: root.into(),
            out,
            err,
        }
    }

    pub fn header(&mut self) {
        let line = format!(
            "Searching for {} directories in {}",
            TARGET_DIR_NAME.bold(),
            self.root.best_effort_path_display()
        );
        write_line(&mut self.out, &line);
    }

    pub fn summary(&mut self, report: &CleanReport) {
        let deleted = report.deleted().len();
        let mut line = format!(
            "{} Removed {} {} {}.",
            "Done.".green().bold(),
            deleted,
            TARGET_DIR_NAME,
            plural(deleted, "directory", "directories")
        );

        let failed = report.failures().len();
        if failed > 0 {
            let note = format!(
                " {} {} could not be processed.",
                failed,
                plural(failed, "path", "paths")
            );
            line.push_str(&note.yellow().to_string());
        }
        write_line(&mut self.out, &line);
    }

    #[cfg(test)]
    fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O: Write, E: Write> CleanObserver for ConsoleObserver<O, E> {
    fn deleted(&mut self, path: &Path) {
        let line = format!("{} {}", "Deleted".green(), path.display_relative_to(&self.root));
        write_line(&mut self.out, &line);
    }

    fn failed(&mut self, failure: &CleanFailure) {
        let line = format!(
            "{} to {} {}: {}",
            "Failed".red().bold(),
            failure.kind(),
            failure.path().display_relative_to(&self.root),
            failure.source()
        );
        write_line(&mut self.err, &line);
    }
}

/// Blocks until the user presses Enter, or input is closed.
pub fn wait_for_acknowledgment(input: &mut impl BufRead, out: &mut impl Write) -> io::Result<()> {
    write!(out, "Press Enter to exit...")?;
    out.flush()?;
    input.read_line(&mut String::new())?;
    Ok(())
}

fn write_line(writer: &mut impl Write, line: &str) {
    if let Err(e) = writeln!(writer, "{line}") {
        debug!("Failed to write to console: {e}");
    }
}

fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 { one } else { many }
}
