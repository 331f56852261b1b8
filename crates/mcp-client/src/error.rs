//! Error types for MCP client calls

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a JSON-RPC `error` member
    #[error("MCP Error: {message}")]
    Rpc { code: i32, message: String },

    #[error("response has neither result nor error")]
    MissingResult,

    #[error("unexpected response from {tool}: {reason}")]
    UnexpectedResponse { tool: String, reason: String },
}
