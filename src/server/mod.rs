//! Accept loop and the state shared by every connection.

pub mod listener;

use crate::config::Config;
use crate::files::FileAccessor;

/// Read-only state handed to each connection task.
#[derive(Debug, Clone)]
pub struct Site {
    pub files: FileAccessor,
    /// Value of the `Server` header on successful responses
    pub server_name: String,
}

impl Site {
    pub fn new(files: FileAccessor, server_name: impl Into<String>) -> Self {
        Self {
            files,
            server_name: server_name.into(),
        }
    }

    pub fn from_config(cfg: &Config) -> anyhow::Result<Self> {
        let files = FileAccessor::new(&cfg.document_root)?;
        Ok(Self::new(files, cfg.server_name.clone()))
    }
}
