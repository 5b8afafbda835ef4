use std::ffi::OsStr;
use std::path::PathBuf;

use walkdir::DirEntry;

/// Name of the directories removed by the cleaner. Matched case-sensitively.
pub const TARGET_DIR_NAME: &str = "__pycache__";

/// A path discovered while walking the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePath {
    path: PathBuf,
    is_dir: bool,
}

impl CandidatePath {
    pub fn new(path: impl Into<PathBuf>, is_dir: bool) -> Self {
        Self {
            path: path.into(),
            is_dir,
        }
    }

    pub fn into_path(self) -> PathBuf {
        self.path
    }

    pub fn is_target(&self) -> bool {
        self.path.file_name() == Some(OsStr::new(TARGET_DIR_NAME))
    }

    /// Only real directories carrying the target name get deleted.
    pub fn should_delete(&self) -> bool {
        self.is_dir && self.is_target()
    }
}

impl From<&DirEntry> for CandidatePath {
    fn from(entry: &DirEntry) -> Self {
        // `file_type` does not follow symlinks unless the walker does
        Self::new(entry.path(), entry.file_type().is_dir())
    }
}
