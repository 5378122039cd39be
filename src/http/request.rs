use std::fmt;

/// HTTP request methods the server answers.
///
/// Anything else is rejected with 405 Method Not Allowed before a `Request`
/// is ever built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// HEAD - Like GET but without the response body
    HEAD,
}

/// A parsed request line.
///
/// Built from the first read of a connection and dropped once the response
/// has been written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method
    pub method: Method,
    /// The request path with any query string or fragment removed
    pub raw_path: String,
    /// Value of the `Host` header, kept for logging only
    pub host: Option<String>,
}

impl Method {
    /// Parses an HTTP method from a string.
    ///
    /// # Arguments
    ///
    /// * `s` - String representation of the method (case-sensitive)
    ///
    /// # Returns
    ///
    /// `Some(Method)` for `GET` or `HEAD`, `None` otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// # use httpd::http::request::Method;
    /// assert_eq!(Method::from_str("HEAD"), Some(Method::HEAD));
    /// assert_eq!(Method::from_str("POST"), None);
    /// assert_eq!(Method::from_str("get"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "HEAD" => Some(Method::HEAD),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::HEAD => "HEAD",
        }
    }

    /// Whether a successful response carries a body.
    pub fn sends_body(&self) -> bool {
        matches!(self, Method::GET)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Request {
    pub fn new(method: Method, raw_path: impl Into<String>) -> Self {
        Self {
            method,
            raw_path: raw_path.into(),
            host: None,
        }
    }

    /// The `Host` header value, or `"-"` when the client sent none.
    pub fn host_or_dash(&self) -> &str {
        self.host.as_deref().unwrap_or("-")
    }
}
