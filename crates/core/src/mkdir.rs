//! Directory materialization over a remote store
//!
//! Synthesizes `mkdir`/`mkdir -p` semantics on top of a store that only
//! exposes folders as individually addressable nodes linked to a parent:
//! no native recursive create, no native path lookup. The walk is
//! strictly left to right, one remote round trip per segment; a segment
//! is resolved or created only once every earlier segment resolved to an
//! existing folder.

use jiff::Timestamp;

use crate::error::{Error, Result};
use crate::path::{DrivePath, SEPARATOR};
use crate::props::Properties;
use crate::traits::{DriveStore, Lookup, ROOT_PATH};

/// Walks drive paths against a store, creating folders as needed
pub struct Materializer<'a, S: ?Sized> {
    store: &'a S,
    make_intermediate: bool,
}

/// One failed input path and the error that stopped its walk
#[derive(Debug)]
pub struct PathFailure {
    pub path: String,
    pub error: Error,
}

/// Batch outcome; the failure count is the aggregate error signal
#[derive(Debug, Default)]
pub struct MaterializeSummary {
    pub failures: Vec<PathFailure>,
}

impl MaterializeSummary {
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    pub fn ok(&self) -> bool {
        self.failures.is_empty()
    }
}

impl<'a, S: DriveStore + ?Sized> Materializer<'a, S> {
    /// A materializer over `store`. With `make_intermediate`, missing
    /// ancestor segments are created instead of failing the walk.
    pub fn new(store: &'a S, make_intermediate: bool) -> Self {
        Self {
            store,
            make_intermediate,
        }
    }

    /// Process every path in turn.
    ///
    /// Paths are independent: a failure aborts only the current path's
    /// walk, and the batch continues with the next argument.
    pub async fn materialize<P: AsRef<str>>(&self, paths: &[P]) -> MaterializeSummary {
        let mut summary = MaterializeSummary::default();
        for path in paths {
            let path = path.as_ref();
            if let Err(error) = self.materialize_path(path).await {
                summary.failures.push(PathFailure {
                    path: path.to_string(),
                    error,
                });
            }
        }
        summary
    }

    /// Walk a single drive path, creating folders per the policy flag
    pub async fn materialize_path(&self, drive_path: &str) -> Result<()> {
        let path = DrivePath::parse(drive_path)?;
        let segments = path.segments();

        if segments.is_empty() {
            // `/` or `.`: nothing to walk. Intermediate mode treats an
            // existing prefix as done; plain mkdir reports it taken.
            return if self.make_intermediate {
                Ok(())
            } else {
                Err(Error::AlreadyExists(path.as_str().to_string()))
            };
        }

        let (mut parent, mut path_so_far, rest) = match self.store.lookup(ROOT_PATH).await {
            Ok(Lookup::Found(root)) => (root, String::new(), segments),
            Ok(Lookup::NotExist) | Err(_) => {
                // A restricted scope may be unable to see any pre-existing
                // folder, the root included, even though creation is
                // permitted. Create the first segment without a parent
                // reference and walk on from there.
                let node = self
                    .store
                    .create_top_level_folder(
                        &segments[0],
                        Timestamp::now(),
                        &Properties::folder_default(),
                    )
                    .await
                    .map_err(|e| {
                        tracing::debug!(folder = %segments[0], error = %e, "bootstrap creation failed");
                        Error::RootUnavailable
                    })?;
                tracing::debug!(folder = %segments[0], "created top-level folder");
                (node, segments[0].clone(), &segments[1..])
            }
        };

        for (index, segment) in rest.iter().enumerate() {
            let is_last = index + 1 == rest.len();
            path_so_far = join(&path_so_far, segment);

            match self.store.lookup(&path_so_far).await {
                Ok(Lookup::Found(node)) => {
                    if is_last && !self.make_intermediate {
                        return Err(Error::AlreadyExists(path_so_far));
                    }
                    if !node.is_folder {
                        return Err(Error::NotAFolder(path_so_far));
                    }
                    parent = node;
                }
                Ok(Lookup::NotExist) => {
                    if is_last || self.make_intermediate {
                        tracing::debug!(folder = %path_so_far, "creating folder");
                        parent = self
                            .store
                            .create_folder(
                                segment,
                                &parent,
                                Timestamp::now(),
                                &Properties::folder_default(),
                            )
                            .await
                            .map_err(|e| Error::CreateFailed {
                                path: path_so_far.clone(),
                                reason: e.to_string(),
                            })?;
                    } else {
                        return Err(Error::NoSuchDirectory(path_so_far));
                    }
                }
                Err(e) => {
                    return Err(Error::LookupFailed {
                        path: path_so_far.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}

/// Join an accumulated prefix with the next segment
fn join(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{prefix}{SEPARATOR}{segment}")
    }
}
