use std::path::{Path, PathBuf};

/// Joins `filename` onto the resources root. No existence check is made; a
/// bad combination only shows up later when the file fails to open.
pub fn resolve(root: &Path, filename: impl AsRef<Path>) -> PathBuf {
    root.join(filename)
}
