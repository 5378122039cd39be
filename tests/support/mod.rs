#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use httpd::files::FileAccessor;
use httpd::server::Site;

pub const SERVER_NAME: &str = "httpd-test";

/// Document root with a few files, removed when dropped.
pub fn document_root() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    std::fs::write(root.join("index.html"), b"<h1>index</h1>").unwrap();
    std::fs::write(root.join("a.html"), b"<p>a</p>").unwrap();
    std::fs::write(root.join("notes.txt"), b"plain notes\n").unwrap();
    std::fs::write(root.join("photo.jpg"), [0xffu8, 0xd8, 0xff, 0xe0]).unwrap();
    std::fs::write(root.join("tool.exe"), b"MZ").unwrap();
    std::fs::create_dir(root.join("listing.html")).unwrap();

    dir
}

pub fn site(root: &Path) -> Arc<Site> {
    Arc::new(Site::new(FileAccessor::new(root).unwrap(), SERVER_NAME))
}

/// A parsed response: status code, headers in order, body.
pub struct Reply {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Reply {
    pub fn parse(raw: &[u8]) -> Reply {
        let end = raw
            .windows(4)
            .position(|w| w == b"\r\n\r\n")
            .expect("response has a blank line");
        let head = std::str::from_utf8(&raw[..end]).unwrap();
        let mut lines = head.split("\r\n");

        let status_line = lines.next().unwrap();
        assert!(status_line.starts_with("HTTP/1.1 "), "{}", status_line);
        let status = status_line[9..12].parse().unwrap();

        let headers = lines
            .map(|l| {
                let (k, v) = l.split_once(": ").unwrap();
                (k.to_string(), v.to_string())
            })
            .collect();

        Reply {
            status,
            headers,
            body: raw[end + 4..].to_vec(),
        }
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn header_names(&self) -> Vec<&str> {
        self.headers.iter().map(|(k, _)| k.as_str()).collect()
    }
}
