//! Tracing subscriber setup for the server binaries

use tracing_subscriber::EnvFilter;

use crate::{Error, Result};

/// Install a stderr fmt subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `default_directive`
/// (e.g. `"weather_mcp=info,mcp_http=info"`) is used.
pub fn init_tracing(default_directive: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}
