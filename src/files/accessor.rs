use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;
use bytes::Bytes;

use crate::files::guard;

/// Classification of a file read, before it becomes an HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// File was read
    Ok,
    /// File does not exist
    NotFound,
    /// Path escapes the document root, or the OS denied access
    Forbidden,
    /// Any other I/O failure
    ReadError,
}

/// Maps a failed read to its status kind.
///
/// Only permission and existence failures are classified; everything else,
/// reading a directory included, is a `ReadError`.
pub fn classify(kind: ErrorKind) -> StatusKind {
    match kind {
        ErrorKind::PermissionDenied => StatusKind::Forbidden,
        ErrorKind::NotFound => StatusKind::NotFound,
        _ => StatusKind::ReadError,
    }
}

/// Result of reading one file for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReadOutcome {
    /// File contents, present only when `status` is `Ok`
    pub data: Option<Bytes>,
    pub status: StatusKind,
}

impl FileReadOutcome {
    pub fn ok(data: impl Into<Bytes>) -> Self {
        Self {
            data: Some(data.into()),
            status: StatusKind::Ok,
        }
    }

    pub fn failed(status: StatusKind) -> Self {
        Self { data: None, status }
    }

    /// Byte length of the contents, zero when nothing was read.
    pub fn len(&self) -> usize {
        self.data.as_ref().map_or(0, Bytes::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Reads files from beneath a fixed document root.
///
/// The root is normalized once at construction and never changes, so one
/// accessor can be shared by every connection.
#[derive(Debug, Clone)]
pub struct FileAccessor {
    document_root: PathBuf,
}

impl FileAccessor {
    pub fn new(document_root: impl AsRef<Path>) -> anyhow::Result<Self> {
        let document_root = document_root.as_ref();
        let document_root = guard::normalize(document_root)
            .with_context(|| format!("Invalid document root {}", document_root.display()))?;

        Ok(Self { document_root })
    }

    pub fn document_root(&self) -> &Path {
        &self.document_root
    }

    /// Reads `file_name` relative to the document root.
    ///
    /// The containment check runs first; a path that escapes the root is
    /// `Forbidden` and nothing is opened.
    pub async fn read(&self, file_name: &str) -> FileReadOutcome {
        let Some(path) = guard::contained_path(&self.document_root, file_name) else {
            tracing::warn!(
                root = %self.document_root.display(),
                file = file_name,
                "Path escapes document root"
            );
            return FileReadOutcome::failed(StatusKind::Forbidden);
        };

        tracing::debug!(path = %path.display(), "Reading file");

        match tokio::fs::read(&path).await {
            Ok(data) => FileReadOutcome::ok(data),
            Err(e) => {
                let status = classify(e.kind());

                if status == StatusKind::ReadError {
                    tracing::warn!(path = %path.display(), error = %e, "File read failed");
                }

                FileReadOutcome::failed(status)
            }
        }
    }
}
