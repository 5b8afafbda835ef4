use std::{fs, io, path::Path};

/// Removes a matched directory together with everything beneath it.
pub trait DirectoryRemover {
    fn remove(&self, path: &Path) -> io::Result<()>;
}

/// Deletes from the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsRemover;

impl DirectoryRemover for FsRemover {
    fn remove(&self, path: &Path) -> io::Result<()> {
        fs::remove_dir_all(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn fs_remover_deletes_directory_with_contents() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let target = temp_dir.path().join("__pycache__");
        fs::create_dir_all(target.join("nested")).unwrap();
        fs::write(target.join("nested/module.pyc"), b"bytecode").unwrap();

        FsRemover.remove(&target).unwrap();

        assert!(!target.exists());
        assert!(temp_dir.path().exists());
    }

    #[test]
    fn fs_remover_reports_missing_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let result = FsRemover.remove(&temp_dir.path().join("missing"));
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }
}
