//! Server configuration
//!
//! Values are resolved in precedence order: command-line flag, environment
//! variable (`MCP_HOST`, `MCP_PORT`), optional TOML file, built-in default.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default interface the servers bind to
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Network settings for a tool server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

impl ServerConfig {
    /// Config bound to the default host on the given port
    pub fn with_port(port: u16) -> Self {
        Self {
            host: default_host(),
            port,
        }
    }

    /// Load from a TOML file.
    ///
    /// `port` may be omitted from the file, in which case `default_port`
    /// is used.
    pub fn load(path: &Path, default_port: u16) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let file: FileConfig = toml::from_str(&text).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            host: file.host.unwrap_or_else(default_host),
            port: file.port.unwrap_or(default_port),
        })
    }

    /// `host:port` string suitable for logging and URLs
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    host: Option<String>,
    port: Option<u16>,
}

/// Command-line options shared by every server binary
#[derive(Debug, Clone, Default, Args)]
pub struct ServeArgs {
    /// Interface to bind
    #[arg(long, env = "MCP_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "MCP_PORT")]
    pub port: Option<u16>,

    /// TOML file with `host` and `port` keys
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl ServeArgs {
    /// Merge flags over the config file over the defaults
    pub fn resolve(&self, default_port: u16) -> Result<ServerConfig> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::load(path, default_port)?,
            None => ServerConfig::with_port(default_port),
        };
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        Ok(config)
    }
}
