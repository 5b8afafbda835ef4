use std::path::{self, Path};

/// Absolute form of `path` for messages, falling back to the path as given.
fn best_effort_path_display(path: &Path) -> String {
    path.canonicalize()
        .or_else(|_| path::absolute(path))
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}

/// `path` relative to `root` when it lies beneath it, as given otherwise.
fn display_relative_to(path: &Path, root: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(relative) if relative.as_os_str().is_empty() => ".".to_string(),
        Ok(relative) => relative.display().to_string(),
        Err(_) => path.display().to_string(),
    }
}

pub trait PathDisplayExt {
    fn best_effort_path_display(&self) -> String;
    fn display_relative_to(&self, root: &Path) -> String;
}

impl<P: AsRef<Path> + ?Sized> PathDisplayExt for P {
    fn best_effort_path_display(&self) -> String {
        best_effort_path_display(self.as_ref())
    }

    fn display_relative_to(&self, root: &Path) -> String {
        display_relative_to(self.as_ref(), root)
    }
}
