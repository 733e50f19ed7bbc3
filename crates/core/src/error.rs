//! Error types shared across the dv crates
//!
//! Walk errors are path-scoped: they abort the current drive path only,
//! never the batch. Adapter failures surface as `Auth`/`Network` and are
//! wrapped with the offending path by the materializer.

use thiserror::Error;

/// Result alias used throughout the dv crates
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by dv-core and its store adapters
#[derive(Debug, Error)]
pub enum Error {
    /// An intermediate segment is absent and intermediate creation was
    /// not requested
    #[error("{0}: no such directory")]
    NoSuchDirectory(String),

    /// A segment resolved to a non-folder object
    #[error("{0}: not a folder")]
    NotAFolder(String),

    /// The terminal segment is already present without intermediate mode
    #[error("{0}: already exists")]
    AlreadyExists(String),

    /// The remote store rejected a folder creation
    #[error("{path}: {reason}")]
    CreateFailed { path: String, reason: String },

    /// A lookup was rejected for a reason other than absence
    #[error("{path}: {reason}")]
    LookupFailed { path: String, reason: String },

    /// The root could not be resolved and bootstrap creation failed too
    #[error("failed to create directory")]
    RootUnavailable,

    /// Malformed drive path
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// Authentication or authorization failure
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Network or protocol-level failure
    #[error("network error: {0}")]
    Network(String),

    /// Configuration file problem
    #[error("configuration error: {0}")]
    Config(String),

    /// No remote configured under the given name
    #[error("remote '{0}' not found")]
    RemoteNotFound(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
