//! Store adapter contract for remote folder hierarchies
//!
//! The materializer drives any store that can answer "does this path
//! exist, and is it a folder" and "create a folder under this parent".
//! Implementations own wire protocol, encoding, and authentication; they
//! are passed in explicitly so tests can substitute a fake.

use async_trait::async_trait;
use jiff::Timestamp;

use crate::error::Result;
use crate::props::Properties;

/// Path that resolves to the store root
pub const ROOT_PATH: &str = "/";

/// Opaque handle to an object in the remote store
///
/// The identifier is store-assigned and never inspected by callers; it
/// only rides along so the node can serve as the parent reference for the
/// next creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteNode {
    pub id: String,
    pub name: String,
    pub is_folder: bool,
    pub properties: Properties,
}

impl RemoteNode {
    pub fn folder(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_folder: true,
            properties: Properties::new(),
        }
    }

    pub fn file(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_folder: false,
            properties: Properties::new(),
        }
    }
}

/// Outcome of a path lookup
///
/// "Definitively absent" is part of the success surface so callers are
/// forced to branch on it; auth, network, and rate-limit failures stay in
/// `Err` and are never conflated with absence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(RemoteNode),
    NotExist,
}

/// Operations the materializer requires from a remote store
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DriveStore: Send + Sync {
    /// Resolve a drive path to a node.
    ///
    /// Returns `Ok(Lookup::NotExist)` when the path is definitively
    /// absent; every other failure is an `Err`.
    async fn lookup(&self, path: &str) -> Result<Lookup>;

    /// Create a folder named `name` as a child of `parent`.
    ///
    /// No existence check is performed; the caller must have already
    /// established the name is free.
    async fn create_folder(
        &self,
        name: &str,
        parent: &RemoteNode,
        modified: Timestamp,
        properties: &Properties,
    ) -> Result<RemoteNode>;

    /// Create a folder with no parent reference.
    ///
    /// Used only when the root itself is not visible to the caller's
    /// authorization scope.
    async fn create_top_level_folder(
        &self,
        name: &str,
        modified: Timestamp,
        properties: &Properties,
    ) -> Result<RemoteNode>;
}
