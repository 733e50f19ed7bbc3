//! Folder creation properties
//!
//! The store attaches ordered key/value properties to nodes it creates.
//! Only one key is ever populated by the materializer: `"Permissions"`,
//! carrying an octal-string mode the way POSIX tools would print it.

/// Well-known property key holding the folder mode
pub const PERMISSIONS_KEY: &str = "Permissions";

/// Mode applied to every folder the materializer creates
pub const DEFAULT_FOLDER_MODE: u32 = 0o755;

/// Ordered key/value property set attached to created nodes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: Vec<(String, String)>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Property set for a newly created folder: the default mode masked
    /// to its permission bits
    pub fn folder_default() -> Self {
        Self::with_mode(DEFAULT_FOLDER_MODE)
    }

    /// Property set carrying the given mode under [`PERMISSIONS_KEY`]
    pub fn with_mode(mode: u32) -> Self {
        let mut props = Self::new();
        props.set(PERMISSIONS_KEY, encode_mode(mode));
        props
    }

    /// Set a property, replacing an existing value while keeping the
    /// original insertion position
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The octal-string mode, if one was set
    pub fn permissions(&self) -> Option<&str> {
        self.get(PERMISSIONS_KEY)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Encode a mode as an octal string with a leading zero ("0755")
fn encode_mode(mode: u32) -> String {
    format!("0{:o}", mode & 0o777)
}
