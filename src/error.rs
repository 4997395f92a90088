//! Unified error handling for slirc-warden.
//!
//! This module provides the error hierarchy for the warden, with automatic
//! conversions and stable labels for structured logging.

use thiserror::Error;

// ============================================================================
// Store Errors (allow-list persistence)
// ============================================================================

/// Errors raised while writing the configuration back to its store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Raised by [`crate::config::MemoryStore`] when told to fail.
    #[error("store unavailable")]
    Unavailable,
}

// ============================================================================
// Router Errors (event processing)
// ============================================================================

/// Errors that can occur while routing a single IRC event.
///
/// None of these are fatal: the event loop logs them and moves on to the
/// next event.
#[derive(Debug, Error)]
pub enum RouterError {
    /// The allow-list changed in memory but could not be written out.
    #[error("persistence failure: {0}")]
    PersistenceFailure(#[from] StoreError),

    /// The event names a channel the warden does not manage.
    #[error("unmanaged channel: {0}")]
    UnresolvedChannel(String),

    /// Inline command text did not match the `add`/`remove` grammar.
    #[error("not a command: {0}")]
    MalformedCommandToken(String),
}

impl RouterError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::PersistenceFailure(_) => "persistence_failure",
            Self::UnresolvedChannel(_) => "unresolved_channel",
            Self::MalformedCommandToken(_) => "malformed_command_token",
        }
    }
}

/// Result type for event handlers.
pub type RouterResult = Result<(), RouterError>;

// ============================================================================
// Transport Errors (connection to the IRC server)
// ============================================================================

/// Errors from the network layer. These end the session.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line codec error: {0}")]
    Codec(#[from] tokio_util::codec::LinesCodecError),

    #[error("invalid server name: {0}")]
    InvalidServerName(String),

    #[error("connection closed by server: {0}")]
    Closed(String),
}
