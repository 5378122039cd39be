use httpd::http::parser::{parse_request_line, ParseError};
use httpd::http::request::Method;

#[test]
fn test_parse_simple_get_request() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let parsed = parse_request_line(req).unwrap();

    assert_eq!(parsed.method, Method::GET);
    assert_eq!(parsed.raw_path, "/");
    assert_eq!(parsed.host.as_deref(), Some("example.com"));
}

#[test]
fn test_parse_head_request() {
    let req = b"HEAD /a.html HTTP/1.0\r\n\r\n";
    let parsed = parse_request_line(req).unwrap();

    assert_eq!(parsed.method, Method::HEAD);
    assert_eq!(parsed.raw_path, "/a.html");
    assert_eq!(parsed.host, None);
}

#[test]
fn test_parse_strips_query_string() {
    let req = b"GET /search.html?q=rust HTTP/1.1\r\n\r\n";
    let parsed = parse_request_line(req).unwrap();

    assert_eq!(parsed.raw_path, "/search.html");
}

#[test]
fn test_parse_keeps_dot_segments() {
    let req = b"GET /../../etc/passwd HTTP/1.1\r\n\r\n";
    let parsed = parse_request_line(req).unwrap();

    assert_eq!(parsed.raw_path, "/../../etc/passwd");
}

#[test]
fn test_parse_rejects_other_methods() {
    for method in ["POST", "PUT", "DELETE", "OPTIONS", "PATCH", "get"] {
        let req = format!("{} /a.html HTTP/1.1\r\n\r\n", method);
        let result = parse_request_line(req.as_bytes());
        assert_eq!(result, Err(ParseError::MethodNotAllowed), "{}", method);
    }
}

#[test]
fn test_parse_rejects_garbage() {
    let result = parse_request_line(b"\x16\x03\x01\x02\x00");
    assert_eq!(result, Err(ParseError::MethodNotAllowed));
}

#[test]
fn test_parse_request_line_must_be_first() {
    let req = b"X-Junk: 1\r\nGET / HTTP/1.1\r\n\r\n";
    assert_eq!(parse_request_line(req), Err(ParseError::MethodNotAllowed));
}

#[test]
fn test_parse_truncated_request_line() {
    // A request line split across reads is not reassembled
    let result = parse_request_line(b"GET /index.ht");
    assert_eq!(result, Err(ParseError::MethodNotAllowed));
}

#[test]
fn test_parse_empty_buffer() {
    assert_eq!(parse_request_line(b""), Err(ParseError::Empty));
}

#[test]
fn test_parse_host_header_trimmed() {
    let req = b"GET / HTTP/1.1\r\nUser-Agent: t\r\nHost: localhost:8080\r\n\r\n";
    let parsed = parse_request_line(req).unwrap();

    assert_eq!(parsed.host.as_deref(), Some("localhost:8080"));
}
