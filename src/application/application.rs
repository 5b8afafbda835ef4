use std::io::{self, Write};
use std::path::Path;

use snafu::Snafu;
use snafu::prelude::*;
use tracing::{info, warn};

use crate::application::RuntimeConfig;
use crate::cleaner::{CleanError, CleanReport, DirectoryRemover, TreeCleaner};
use crate::console::{self, ConsoleObserver};

pub struct Application;

impl Application {
    pub fn run(config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let config: RuntimeConfig = config.into();
        config.color.apply();

        let mut observer = ConsoleObserver::stdio(&config.root);
        let result = Self::sweep(&TreeCleaner::new(), &config.root, &mut observer);

        if config.pause {
            // Failures are already printed, so the user gets to read them too
            let acknowledged =
                console::wait_for_acknowledgment(&mut io::stdin().lock(), &mut io::stdout());
            if let Err(e) = acknowledged {
                warn!("Could not wait for acknowledgment: {e}");
            }
        }

        result.map(|_| ())
    }

    fn sweep<R: DirectoryRemover, O: Write, E: Write>(
        cleaner: &TreeCleaner<R>,
        root: &Path,
        console: &mut ConsoleObserver<O, E>,
    ) -> Result<CleanReport, ApplicationError> {
        console.header();
        let report = cleaner.clean(root, console).context(CleanupSnafu)?;
        console.summary(&report);

        ensure!(
            report.is_success(),
            IncompleteCleanupSnafu {
                failed: report.deletion_failures().count()
            }
        );
        info!("Removed {} directories", report.deleted().len());

        Ok(report)
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while preparing the cleanup"))]
    CleanupError { source: CleanError },
    #[snafu(display("{failed} matched directories could not be removed"))]
    IncompleteCleanupError { failed: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cleaner::FsRemover;
    use std::fs;
    use tempfile::TempDir;

    struct RefusingRemover;

    impl DirectoryRemover for RefusingRemover {
        fn remove(&self, _path: &Path) -> io::Result<()> {
            Err(io::Error::other("file in use"))
        }
    }

    fn console() -> ConsoleObserver<Vec<u8>, Vec<u8>> {
        colored::control::set_override(false);
        ConsoleObserver::new(".", Vec::new(), Vec::new())
    }

    #[test]
    fn sweep_succeeds_when_everything_is_removed() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        fs::create_dir_all(temp_dir.path().join("pkg/__pycache__")).unwrap();

        let report = Application::sweep(
            &TreeCleaner::with_remover(FsRemover),
            temp_dir.path(),
            &mut console(),
        )
        .unwrap();

        assert_eq!(report.deleted().len(), 1);
    }

    #[test]
    fn sweep_fails_when_a_deletion_fails() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        fs::create_dir_all(temp_dir.path().join("a/__pycache__")).unwrap();
        fs::create_dir_all(temp_dir.path().join("b/__pycache__")).unwrap();

        let result = Application::sweep(
            &TreeCleaner::with_remover(RefusingRemover),
            temp_dir.path(),
            &mut console(),
        );

        assert!(matches!(
            result,
            Err(ApplicationError::IncompleteCleanupError { failed: 2 })
        ));
    }

    #[test]
    fn sweep_fails_on_missing_root() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let result = Application::sweep(
            &TreeCleaner::new(),
            &temp_dir.path().join("missing"),
            &mut console(),
        );

        assert!(matches!(result, Err(ApplicationError::CleanupError { .. })));
    }

    #[test]
    fn run_returns_ok_for_clean_tree() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        fs::create_dir_all(temp_dir.path().join("pkg/__pycache__")).unwrap();

        let config = RuntimeConfig {
            root: temp_dir.path().to_path_buf(),
            color: crate::application::data::ColorChoice::Never,
            pause: false,
        };

        assert!(Application::run(config).is_ok());
        assert!(!temp_dir.path().join("pkg/__pycache__").exists());
    }
}
