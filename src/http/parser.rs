use crate::http::request::{Method, Request};
use once_cell::sync::Lazy;
use regex::Regex;

// A pattern that fails to compile matches nothing.
static GET_LINE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^(GET) (.*) HTTP").ok());
static HEAD_LINE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^(HEAD) (.*) HTTP").ok());
static HOST_HEADER: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"(?m)^Host: ([^\r\n]*)").ok());

fn captures<'h>(re: &Lazy<Option<Regex>>, haystack: &'h str) -> Option<regex::Captures<'h>> {
    let re: &Option<Regex> = re;
    re.as_ref()?.captures(haystack)
}

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing was read from the client
    Empty,
    /// First line is not `GET <path> HTTP...` or `HEAD <path> HTTP...`
    MethodNotAllowed,
}

/// Extracts the method and path from the bytes of a single read.
///
/// Only the first line is matched, GET first then HEAD. Everything after it
/// is ignored apart from `Host`, which is picked up for logging. A request
/// line that did not fit into the read is treated like any other unmatched
/// line.
pub fn parse_request_line(buf: &[u8]) -> Result<Request, ParseError> {
    if buf.is_empty() {
        return Err(ParseError::Empty);
    }

    let text = String::from_utf8_lossy(buf);
    let first_line = text.split('\n').next().unwrap_or_default();

    let caps = captures(&GET_LINE, first_line)
        .or_else(|| captures(&HEAD_LINE, first_line))
        .ok_or(ParseError::MethodNotAllowed)?;

    let method = Method::from_str(&caps[1]).ok_or(ParseError::MethodNotAllowed)?;
    let host = captures(&HOST_HEADER, &text)
        .map(|c| c[1].trim().to_string());

    Ok(Request {
        method,
        raw_path: strip_query(&caps[2]).to_string(),
        host,
    })
}

/// Drops the query string and fragment from a request target.
pub fn strip_query(target: &str) -> &str {
    target
        .split_once(['?', '#'])
        .map(|(path, _)| path)
        .unwrap_or(target)
}
