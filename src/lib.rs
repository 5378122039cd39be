//! httpd - Static File Server
//!
//! Serves files from a document root, one GET or HEAD request per connection.

pub mod config;
pub mod files;
pub mod http;
pub mod server;
