//! Probe errors

use thiserror::Error;

/// Errors raised by dependency probes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    /// Could not establish a connection
    #[error("connection failed: {0}")]
    Connection(String),
    /// Connected, but a command or query failed
    #[error("query failed: {0}")]
    Query(String),
    /// The driver for this dependency is not compiled in
    #[error("{0} driver not available in this build")]
    Unavailable(&'static str),
}
