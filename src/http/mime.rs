//! Media type lookup by file extension.

/// Extension (with leading dot) to media type.
///
/// Read-only for the lifetime of the process, shared by every connection.
const MIME_TYPES: &[(&str, &str)] = &[
    (".html", "text/html"),
    (".txt", "text/plain"),
    (".jpg", "image/jpeg"),
    (".jpeg", "image/jpeg"),
    (".png", "image/png"),
    (".gif", "image/gif"),
    (".css", "text/css"),
    (".js", "text/javascript"),
    (".swf", "application/x-shockwave-flash"),
];

/// Returns the media type for an extension such as `".html"`.
///
/// The extension is lower-cased before lookup. An unknown extension, or an
/// empty one, yields the empty string, which callers treat as unsupported.
///
/// # Example
///
/// ```
/// # use httpd::http::mime::lookup;
/// assert_eq!(lookup(".JPG"), "image/jpeg");
/// assert_eq!(lookup(".exe"), "");
/// ```
pub fn lookup(extension: &str) -> &'static str {
    let extension = extension.to_ascii_lowercase();

    MIME_TYPES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, mime)| *mime)
        .unwrap_or("")
}
