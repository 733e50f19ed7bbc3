//! Named remote configuration
//!
//! Remotes are named references to Drive-style endpoints, including the
//! access token used to reach them. They persist as TOML under the user
//! config directory; `DV_CONFIG_DIR` overrides the location so tests can
//! run against a throwaway directory.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "DV_CONFIG_DIR";

/// Remote name used when none is given on the command line
pub const DEFAULT_REMOTE: &str = "default";

/// API endpoint applied when a remote is set without one
pub const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/drive/v3";

/// A named Drive endpoint and its credentials
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remote {
    pub name: String,
    pub endpoint: String,
    pub access_token: String,
}

impl Remote {
    pub fn new(name: &str, endpoint: &str, access_token: &str) -> Self {
        Self {
            name: name.to_string(),
            endpoint: endpoint.to_string(),
            access_token: access_token.to_string(),
        }
    }
}

/// On-disk shape of the remotes file
#[derive(Debug, Default, Serialize, Deserialize)]
struct RemotesFile {
    #[serde(default)]
    remotes: BTreeMap<String, Remote>,
}

/// Loads and stores named remotes
pub struct RemoteManager {
    path: PathBuf,
}

impl RemoteManager {
    /// Manager over the default config location
    pub fn new() -> Result<Self> {
        let dir = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => dirs::config_dir()
                .ok_or_else(|| Error::Config("could not determine config directory".to_string()))?
                .join("drivecli"),
        };
        Ok(Self {
            path: dir.join("remotes.toml"),
        })
    }

    /// Manager over an explicit file path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn get(&self, name: &str) -> Result<Remote> {
        self.load()?
            .remotes
            .remove(name)
            .ok_or_else(|| Error::RemoteNotFound(name.to_string()))
    }

    pub fn set(&self, remote: Remote) -> Result<()> {
        let mut file = self.load()?;
        file.remotes.insert(remote.name.clone(), remote);
        self.store(&file)
    }

    /// All remotes, ordered by name
    pub fn list(&self) -> Result<Vec<Remote>> {
        Ok(self.load()?.remotes.into_values().collect())
    }

    pub fn remove(&self, name: &str) -> Result<()> {
        let mut file = self.load()?;
        if file.remotes.remove(name).is_none() {
            return Err(Error::RemoteNotFound(name.to_string()));
        }
        self.store(&file)
    }

    fn load(&self) -> Result<RemotesFile> {
        if !self.path.exists() {
            return Ok(RemotesFile::default());
        }
        let text = fs::read_to_string(&self.path)?;
        toml::from_str(&text).map_err(|e| Error::Config(format!("{}: {e}", self.path.display())))
    }

    fn store(&self, file: &RemotesFile) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let text = toml::to_string_pretty(file).map_err(|e| Error::Config(e.to_string()))?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn manager() -> (TempDir, RemoteManager) {
        let dir = TempDir::new().expect("temp dir");
        let manager = RemoteManager::with_path(dir.path().join("remotes.toml"));
        (dir, manager)
    }

    #[test]
    fn test_set_get_roundtrip() {
        let (_dir, manager) = manager();
        let remote = Remote::new("work", DEFAULT_ENDPOINT, "ya29.token");
        manager.set(remote.clone()).unwrap();

        assert_eq!(manager.get("work").unwrap(), remote);
    }

    #[test]
    fn test_get_missing() {
        let (_dir, manager) = manager();
        assert!(matches!(
            manager.get("nope"),
            Err(Error::RemoteNotFound(name)) if name == "nope"
        ));
    }

    #[test]
    fn test_set_overwrites() {
        let (_dir, manager) = manager();
        manager
            .set(Remote::new("work", DEFAULT_ENDPOINT, "old"))
            .unwrap();
        manager
            .set(Remote::new("work", DEFAULT_ENDPOINT, "new"))
            .unwrap();

        assert_eq!(manager.get("work").unwrap().access_token, "new");
        assert_eq!(manager.list().unwrap().len(), 1);
    }

    #[test]
    fn test_list_sorted_by_name() {
        let (_dir, manager) = manager();
        manager.set(Remote::new("b", DEFAULT_ENDPOINT, "t")).unwrap();
        manager.set(Remote::new("a", DEFAULT_ENDPOINT, "t")).unwrap();

        let names: Vec<_> = manager.list().unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn test_remove() {
        let (_dir, manager) = manager();
        manager
            .set(Remote::new("gone", DEFAULT_ENDPOINT, "t"))
            .unwrap();
        manager.remove("gone").unwrap();

        assert!(manager.list().unwrap().is_empty());
        assert!(matches!(
            manager.remove("gone"),
            Err(Error::RemoteNotFound(_))
        ));
    }

    #[test]
    fn test_missing_file_is_empty() {
        let (_dir, manager) = manager();
        assert!(manager.list().unwrap().is_empty());
    }
}
