//! Document-root containment check.
//!
//! Paths are made absolute and normalized lexically: `.` segments are
//! dropped and `..` pops the previous segment. The file system is never
//! consulted, so the check runs before anything is opened and symlinks are
//! not followed.

use std::io;
use std::path::{Component, Path, PathBuf};

/// Absolute, lexically normalized form of `path`.
///
/// Relative paths are resolved against the current directory. `..` at the
/// file-system root stays at the root.
pub fn normalize(path: &Path) -> io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    let mut out = PathBuf::new();

    for component in absolute.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            Component::Normal(segment) => out.push(segment),
        }
    }

    Ok(out)
}

/// Joins a request file name onto the document root.
///
/// Leading slashes are stripped so the name is always taken relative to the
/// root.
pub fn join(document_root: &Path, file_name: &str) -> PathBuf {
    document_root.join(file_name.trim_start_matches('/'))
}

/// Normalized location of `file_name` under `document_root`, or `None` when
/// it escapes the root.
pub fn contained_path(document_root: &Path, file_name: &str) -> Option<PathBuf> {
    let root = normalize(document_root).ok()?;
    let candidate = normalize(&join(document_root, file_name)).ok()?;

    candidate.starts_with(&root).then_some(candidate)
}

/// Whether `file_name` resolves to a location inside `document_root`.
pub fn is_contained(document_root: &Path, file_name: &str) -> bool {
    contained_path(document_root, file_name).is_some()
}
