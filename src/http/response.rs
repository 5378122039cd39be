use bytes::Bytes;
use chrono::{DateTime, Utc};

use crate::files::{FileReadOutcome, StatusKind};
use crate::http::request::Method;

/// HTTP status codes the server can answer with.
///
/// - `Ok` (200): File served
/// - `Forbidden` (403): Outside the document root or not readable
/// - `NotFound` (404): No such file
/// - `MethodNotAllowed` (405): Request line is not GET or HEAD
/// - `UnsupportedMediaType` (415): Extension not in the media table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 403 Forbidden
    Forbidden,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
    /// 415 Unsupported Media Type
    UnsupportedMediaType,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use httpd::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::UnsupportedMediaType.as_u16(), 415);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Forbidden => 403,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
            StatusCode::UnsupportedMediaType => 415,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::UnsupportedMediaType => "Unsupported Media Type",
        }
    }
}

/// A complete HTTP response ready to be written to a client.
///
/// Headers keep insertion order, which is the order they go on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// Header name/value pairs in wire order
    pub headers: Vec<(String, String)>,
    /// Body bytes; `None` means nothing follows the blank line
    pub body: Option<Bytes>,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```
/// # use httpd::http::response::{ResponseBuilder, StatusCode};
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .header("Content-Type", "text/plain")
///     .body("hi")
///     .build();
/// assert_eq!(response.header("Content-Type"), Some("text/plain"));
/// ```
#[derive(Debug)]
pub struct ResponseBuilder {
    status: StatusCode,
    headers: Vec<(String, String)>,
    body: Option<Bytes>,
}

impl ResponseBuilder {
    /// Creates a new response builder with the specified status code.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: None,
        }
    }

    /// Appends a header. Headers are written in the order they were added.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn build(self) -> Response {
        Response {
            status: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}

/// Formats a `Date` header value (RFC 850, always GMT).
///
/// ```
/// # use httpd::http::response::http_date;
/// # use chrono::{TimeZone, Utc};
/// let t = Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap();
/// assert_eq!(http_date(t), "Monday, 02-Jan-06 15:04:05 GMT");
/// ```
pub fn http_date(now: DateTime<Utc>) -> String {
    now.format("%A, %d-%b-%y %H:%M:%S GMT").to_string()
}

impl Response {
    /// A minimal response: status line and `Date`, no body.
    pub fn status_only(status: StatusCode) -> Self {
        ResponseBuilder::new(status)
            .header("Date", http_date(Utc::now()))
            .build()
    }

    /// Picks the response for a file request.
    ///
    /// First match wins:
    ///
    /// 1. empty media type → 415
    /// 2. `Forbidden` → 403
    /// 3. `NotFound` → 404
    /// 4. `Ok` → 200 with `Content-Type`, `Content-Length`, `Server` and
    ///    `Connection: close`
    ///
    /// Error responses carry only the status and `Date`. The body is attached
    /// only for a 200 to a GET; a HEAD gets the same headers, including the
    /// real `Content-Length`, and no body.
    ///
    /// Returns `None` for `ReadError`: nothing is sent for a read failure that
    /// is neither a permission problem nor a missing file.
    pub fn for_file(
        method: Method,
        mime_type: &str,
        outcome: FileReadOutcome,
        server_name: &str,
    ) -> Option<Self> {
        if mime_type.is_empty() {
            return Some(Self::status_only(StatusCode::UnsupportedMediaType));
        }

        match outcome.status {
            StatusKind::Forbidden => Some(Self::status_only(StatusCode::Forbidden)),
            StatusKind::NotFound => Some(Self::status_only(StatusCode::NotFound)),
            StatusKind::ReadError => None,
            StatusKind::Ok => {
                let data = outcome.data.unwrap_or_default();

                let builder = ResponseBuilder::new(StatusCode::Ok)
                    .header("Date", http_date(Utc::now()))
                    .header("Content-Type", mime_type)
                    .header("Content-Length", data.len().to_string())
                    .header("Server", server_name)
                    .header("Connection", "close");

                let builder = if method.sends_body() {
                    builder.body(data)
                } else {
                    builder
                };

                Some(builder.build())
            }
        }
    }

    /// First header with the given name, compared case-insensitively.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Number of body bytes that will be written.
    pub fn body_len(&self) -> usize {
        self.body.as_ref().map_or(0, Bytes::len)
    }
}
