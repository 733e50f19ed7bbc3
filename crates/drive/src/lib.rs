//! dv-drive: Drive API adapter for drivecli
//!
//! Implements the `DriveStore` trait from dv-core over the Drive v3 REST
//! surface using reqwest. All wire-protocol, encoding, and credential
//! concerns live here; dv-core stays protocol-independent.

mod client;
mod types;

pub use client::DriveClient;
pub use types::{FOLDER_MIME_TYPE, FileList, FileResource};
