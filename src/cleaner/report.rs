use std::io;
use std::path::{Path, PathBuf};

use derive_more::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum FailureKind {
    /// A directory could not be read while walking the tree.
    #[display("read")]
    Traversal,
    /// A matched directory could not be fully removed.
    #[display("remove")]
    Deletion,
}

/// A single path the cleaner had to give up on.
#[derive(Debug, Display)]
#[display("Failed to {kind} {}: {source}", path.display())]
pub struct CleanFailure {
    path: PathBuf,
    kind: FailureKind,
    source: io::Error,
}

impl CleanFailure {
    pub fn traversal(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            path: path.into(),
            kind: FailureKind::Traversal,
            source,
        }
    }

    pub fn deletion(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            path: path.into(),
            kind: FailureKind::Deletion,
            source,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    pub fn source(&self) -> &io::Error {
        &self.source
    }
}

/// Outcome of a single clean run, in walk order.
#[derive(Debug, Default)]
pub struct CleanReport {
    deleted: Vec<PathBuf>,
    failures: Vec<CleanFailure>,
}

impl CleanReport {
    pub(super) fn record_deleted(&mut self, path: PathBuf) {
        self.deleted.push(path);
    }

    pub(super) fn record_failure(&mut self, failure: CleanFailure) {
        self.failures.push(failure);
    }

    pub fn deleted(&self) -> &[PathBuf] {
        &self.deleted
    }

    pub fn failures(&self) -> &[CleanFailure] {
        &self.failures
    }

    pub fn deletion_failures(&self) -> impl Iterator<Item = &CleanFailure> {
        self.failures
            .iter()
            .filter(|failure| failure.kind == FailureKind::Deletion)
    }

    /// True unless some matched directory was left behind.
    /// Unreadable directories alone do not make a run unsuccessful.
    pub fn is_success(&self) -> bool {
        self.deletion_failures().next().is_none()
    }
}
