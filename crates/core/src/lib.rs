//! dv-core: Core library for the dv Drive CLI client
//!
//! This crate provides the core functionality for the dv CLI, including:
//! - Named remote configuration
//! - Drive path cleaning and segmentation
//! - Folder property encoding
//! - The DriveStore trait for remote folder stores
//! - The directory materializer implementing mkdir semantics
//!
//! This crate is designed to be independent of any specific wire protocol,
//! allowing the store to be faked in tests and potentially swapped for
//! other backends.

pub mod config;
pub mod error;
pub mod mkdir;
pub mod path;
pub mod props;
pub mod traits;

pub use config::{DEFAULT_REMOTE, Remote, RemoteManager};
pub use error::{Error, Result};
pub use mkdir::{MaterializeSummary, Materializer, PathFailure};
pub use path::{DrivePath, SEPARATOR};
pub use props::{DEFAULT_FOLDER_MODE, PERMISSIONS_KEY, Properties};
pub use traits::{DriveStore, Lookup, ROOT_PATH, RemoteNode};
