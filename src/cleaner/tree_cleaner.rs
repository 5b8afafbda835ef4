use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use snafu::{ResultExt, Snafu, ensure};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::cleaner::{CandidatePath, CleanFailure, CleanReport, DirectoryRemover, FsRemover};
use crate::ext::PathDisplayExt;

/// Receives events as the cleaner makes progress.
pub trait CleanObserver {
    fn deleted(&mut self, path: &Path);
    fn failed(&mut self, failure: &CleanFailure);
}

/// Walks a tree and removes every `__pycache__` directory below its root.
///
/// Symlinks are never followed, so a symlink named `__pycache__` is left
/// alone and link cycles cannot keep the walk alive. A matched directory is
/// never descended into: anything nested inside it goes away with it.
#[derive(Debug, Default)]
pub struct TreeCleaner<R = FsRemover> {
    remover: R,
}

impl TreeCleaner {
    pub fn new() -> Self {
        Self::with_remover(FsRemover)
    }
}

impl<R: DirectoryRemover> TreeCleaner<R> {
    pub fn with_remover(remover: R) -> Self {
        Self { remover }
    }

    pub fn clean(
        &self,
        root: &Path,
        observer: &mut impl CleanObserver,
    ) -> Result<CleanReport, CleanError> {
        Self::check_root(root)?;
        info!("Cleaning tree rooted at {}", root.best_effort_path_display());

        let mut report = CleanReport::default();
        let mut entries = WalkDir::new(root)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();

        while let Some(entry) = entries.next() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(error) => {
                    self.handle_walk_error(root, error, &mut report, observer);
                    continue;
                }
            };

            let candidate = CandidatePath::from(&entry);
            if !candidate.should_delete() {
                continue;
            }

            // Drops the walker's handle on the directory, along with any
            // pending error from opening it, and keeps it from descending
            // into a subtree that is about to disappear
            entries.skip_current_dir();
            self.delete(candidate.into_path(), &mut report, observer);
        }

        debug!(
            "Finished walk: {} deleted, {} failures",
            report.deleted().len(),
            report.failures().len()
        );
        Ok(report)
    }

    fn check_root(root: &Path) -> Result<(), CleanError> {
        let metadata = fs::metadata(root).context(RootMetadataSnafu { root })?;
        ensure!(metadata.is_dir(), RootNotDirectorySnafu { root });
        fs::read_dir(root).context(RootUnreadableSnafu { root })?;
        Ok(())
    }

    fn handle_walk_error(
        &self,
        root: &Path,
        error: walkdir::Error,
        report: &mut CleanReport,
        observer: &mut impl CleanObserver,
    ) {
        let path = error
            .path()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| root.to_path_buf());

        let failure = CleanFailure::traversal(path, io::Error::from(error));
        warn!("{failure}");
        observer.failed(&failure);
        report.record_failure(failure);
    }

    fn delete(
        &self,
        path: PathBuf,
        report: &mut CleanReport,
        observer: &mut impl CleanObserver,
    ) {
        debug!("Removing {}", path.display());
        match self.remover.remove(&path) {
            Ok(()) => {
                observer.deleted(&path);
                report.record_deleted(path);
            }
            Err(source) => {
                let failure = CleanFailure::deletion(path, source);
                warn!("{failure}");
                observer.failed(&failure);
                report.record_failure(failure);
            }
        }
    }
}

#[derive(Debug, Snafu)]
pub enum CleanError {
    #[snafu(display("Cannot access root directory {}", root.best_effort_path_display()))]
    RootMetadata { root: PathBuf, source: io::Error },
    #[snafu(display("Root {} is not a directory", root.best_effort_path_display()))]
    RootNotDirectory { root: PathBuf },
    #[snafu(display("Cannot read root directory {}", root.best_effort_path_display()))]
    RootUnreadable { root: PathBuf, source: io::Error },
}
