//! Removal of `__pycache__` directories from a filesystem tree.
//!
//! The walk and the deletion live in [`TreeCleaner`]. Progress is pushed to a
//! [`CleanObserver`] as it happens and summarized in a [`CleanReport`] once the
//! walk is over. Only an unusable root aborts the run; every other problem is
//! recorded per path and the walk carries on.

mod candidate;
mod remover;
mod report;
mod tree_cleaner;

pub use candidate::{CandidatePath, TARGET_DIR_NAME};
pub use remover::{DirectoryRemover, FsRemover};
pub use report::{CleanFailure, CleanReport};
#[cfg(test)]
pub use report::FailureKind;
pub use tree_cleaner::{CleanError, CleanObserver, TreeCleaner};
