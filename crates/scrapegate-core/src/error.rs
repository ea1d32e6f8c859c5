//! Shared error type across scrapegate crates.

use std::io;
use std::net::SocketAddr;

use thiserror::Error;

/// Stable error codes used in logs and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Unreadable, malformed, or invalid configuration.
    Config,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Metric construction or registration failed.
    Registry,
    /// Exposition encoding failed.
    Render,
    /// Listener could not be bound.
    Bind,
    /// Serve loop I/O failure.
    Io,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Config => "CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Registry => "REGISTRY",
            ErrorCode::Render => "RENDER",
            ErrorCode::Bind => "BIND",
            ErrorCode::Io => "IO",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ScrapegateError>;

/// Unified error type used by core and exporter.
#[derive(Debug, Error)]
pub enum ScrapegateError {
    #[error("config: {0}")]
    Config(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("registry: {0}")]
    Registry(String),
    #[error("render: {0}")]
    Render(String),
    #[error("bind {addr} failed: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
    #[error("io: {0}")]
    Io(#[from] io::Error),
}

impl ScrapegateError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ScrapegateError::Config(_) => ErrorCode::Config,
            ScrapegateError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            ScrapegateError::Registry(_) => ErrorCode::Registry,
            ScrapegateError::Render(_) => ErrorCode::Render,
            ScrapegateError::Bind { .. } => ErrorCode::Bind,
            ScrapegateError::Io(_) => ErrorCode::Io,
        }
    }
}

impl From<prometheus::Error> for ScrapegateError {
    fn from(e: prometheus::Error) -> Self {
        ScrapegateError::Registry(e.to_string())
    }
}
