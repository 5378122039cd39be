//! Server configuration.
//!
//! Values are layered, later sources winning: built-in defaults, an optional
//! YAML file (`--config`), the `LISTEN` environment variable, then
//! command-line flags.
//!
//! ```yaml
//! listen_addr: "0.0.0.0:8080"
//! document_root: /srv/www
//! workers: 4
//! server_name: httpd
//! ```

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Parser;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub listen_addr: String,
    /// Directory all request paths are resolved against
    pub document_root: PathBuf,
    /// Runtime worker threads
    pub workers: usize,
    pub server_name: String,
}

/// Command-line flags. Every flag is optional and overrides the file.
#[derive(Debug, Default, Parser)]
#[command(name = "httpd", version, about = "Serves static files from a document root")]
pub struct Cli {
    /// Document root
    #[arg(short = 'r', long = "root", value_name = "DIR")]
    pub document_root: Option<PathBuf>,

    /// Number of worker threads (CPU parallelism)
    #[arg(short = 'c', long = "cpus", value_name = "N")]
    pub workers: Option<usize>,

    /// Address to listen on, host:port
    #[arg(short = 'l', long = "listen", value_name = "ADDR", env = "LISTEN")]
    pub listen_addr: Option<String>,

    /// Value of the Server response header
    #[arg(long, value_name = "NAME")]
    pub server_name: Option<String>,

    /// YAML configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
            document_root: PathBuf::from("."),
            workers: 1,
            server_name: "httpd".to_string(),
        }
    }
}

impl Config {
    /// Builds the configuration from the process arguments and environment.
    pub fn load() -> anyhow::Result<Self> {
        Self::from_cli(Cli::parse())
    }

    pub fn from_cli(cli: Cli) -> anyhow::Result<Self> {
        let mut cfg = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(root) = cli.document_root {
            cfg.document_root = root;
        }
        if let Some(workers) = cli.workers {
            cfg.workers = workers;
        }
        if let Some(addr) = cli.listen_addr {
            cfg.listen_addr = addr;
        }
        if let Some(name) = cli.server_name {
            cfg.server_name = name;
        }

        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        Self::from_yaml_str(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_yaml_str(text: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.workers == 0 {
            bail!("workers must be >= 1");
        }
        if !self.document_root.is_dir() {
            bail!(
                "document root {} is not a directory",
                self.document_root.display()
            );
        }

        Ok(())
    }
}
