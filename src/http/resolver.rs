use crate::http::mime;

/// File served for any request path without an extension.
pub const INDEX_FILE: &str = "index.html";

/// The file a request path maps to, and its media type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MimeResolution {
    /// Path relative to the document root, as taken from the request
    pub file_name: String,
    /// Media type, empty when the extension is not supported
    pub mime_type: &'static str,
}

impl MimeResolution {
    /// Whether the media type is known. Unsupported files are never read.
    pub fn is_supported(&self) -> bool {
        !self.mime_type.is_empty()
    }
}

/// Derives the file name and media type for a raw request path.
///
/// A path containing a `.` is used verbatim as the file name and its last
/// `.`-separated segment is the extension. A path without any `.` is served
/// as [`INDEX_FILE`] from the document root, whatever the path was: `/`,
/// `/docs` and `/docs/` all resolve to the same file.
///
/// # Example
///
/// ```
/// # use httpd::http::resolver::resolve;
/// let res = resolve("/img/logo.PNG");
/// assert_eq!(res.file_name, "/img/logo.PNG");
/// assert_eq!(res.mime_type, "image/png");
///
/// let res = resolve("/docs/");
/// assert_eq!(res.file_name, "index.html");
/// assert_eq!(res.mime_type, "text/html");
/// ```
pub fn resolve(raw_path: &str) -> MimeResolution {
    match raw_path.rsplit_once('.') {
        Some((_, extension)) => MimeResolution {
            file_name: raw_path.to_string(),
            mime_type: mime::lookup(&format!(".{}", extension)),
        },
        None => MimeResolution {
            file_name: INDEX_FILE.to_string(),
            mime_type: mime::lookup(".html"),
        },
    }
}
