//! Lexical path helpers

use std::path::{Component, Path, PathBuf};

/// Lexically normalize a path: drop `.` components and fold `..` into the
/// preceding directory. Symbolic links are not resolved and the path is not
/// required to exist.
pub fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => normalized.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                let last_is_normal = matches!(normalized.components().next_back(), Some(Component::Normal(_)));
                if last_is_normal {
                    normalized.pop();
                } else if !normalized.has_root() {
                    normalized.push("..");
                }
            }
            Component::Normal(name) => normalized.push(name),
        }
    }

    normalized
}

/// Extension of a file name including the leading dot, or an empty string.
///
/// A leading dot alone does not start an extension, so `.gitignore` has none
/// while `.eslintrc.json` has `.json`.
pub fn extension_of<P: AsRef<Path>>(file_name: P) -> String {
    file_name
        .as_ref()
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

/// Number of directory levels between `root` and `path`
pub fn depth_from(root: &Path, path: &Path) -> usize {
    path.strip_prefix(root)
        .map(|relative| relative.components().count())
        .unwrap_or(0)
}
