//! Drive path cleaning and segmentation
//!
//! Drive paths look like filesystem paths but resolve one segment at a
//! time against the remote store, so cleaning is purely lexical: runs of
//! separators collapse, `.` disappears, `..` pops the previous segment
//! (and is dropped entirely at the root of a rooted path).

use crate::error::{Error, Result};

/// Separator for drive paths
pub const SEPARATOR: char = '/';

/// A cleaned drive path split into its non-empty segments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrivePath {
    cleaned: String,
    segments: Vec<String>,
}

impl DrivePath {
    /// Clean a caller-supplied path and split it into segments.
    ///
    /// The root path (`/`) and the bare current directory (`.`) clean to
    /// zero segments. An empty input is rejected.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(Error::InvalidPath("empty path".to_string()));
        }

        let rooted = raw.starts_with(SEPARATOR);
        let mut segments: Vec<&str> = Vec::new();

        for segment in raw.split(SEPARATOR) {
            match segment {
                "" | "." => {}
                ".." => {
                    if matches!(segments.last(), Some(last) if *last != "..") {
                        segments.pop();
                    } else if !rooted {
                        // A relative path keeps leading `..` segments;
                        // a rooted one drops them at the root.
                        segments.push("..");
                    }
                }
                _ => segments.push(segment),
            }
        }

        let joined = segments.join(&SEPARATOR.to_string());
        let cleaned = if rooted {
            format!("{SEPARATOR}{joined}")
        } else if joined.is_empty() {
            ".".to_string()
        } else {
            joined
        };

        Ok(Self {
            cleaned,
            segments: segments.into_iter().map(str::to_string).collect(),
        })
    }

    /// The cleaned path string
    pub fn as_str(&self) -> &str {
        &self.cleaned
    }

    /// Ordered segment names, leading separator already discarded
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl std::fmt::Display for DrivePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(raw: &str) -> Vec<String> {
        DrivePath::parse(raw).unwrap().segments().to_vec()
    }

    #[test]
    fn test_parse_rooted() {
        let path = DrivePath::parse("/a/b/c").unwrap();
        assert_eq!(path.as_str(), "/a/b/c");
        assert_eq!(path.segments(), ["a", "b", "c"]);
    }

    #[test]
    fn test_parse_relative() {
        let path = DrivePath::parse("a/b").unwrap();
        assert_eq!(path.as_str(), "a/b");
        assert_eq!(path.segments(), ["a", "b"]);
    }

    #[test]
    fn test_redundant_separators_collapse() {
        assert_eq!(segments("//a///b//"), ["a", "b"]);
        assert_eq!(DrivePath::parse("//a///b//").unwrap().as_str(), "/a/b");
    }

    #[test]
    fn test_dot_segments_disappear() {
        assert_eq!(segments("/a/./b/."), ["a", "b"]);
    }

    #[test]
    fn test_dotdot_pops() {
        assert_eq!(segments("/a/b/../c"), ["a", "c"]);
        assert_eq!(segments("a/../../b"), ["..", "b"]);
    }

    #[test]
    fn test_dotdot_dropped_at_root() {
        assert_eq!(segments("/../a"), ["a"]);
        assert_eq!(DrivePath::parse("/..").unwrap().as_str(), "/");
    }

    #[test]
    fn test_root_has_no_segments() {
        let path = DrivePath::parse("/").unwrap();
        assert_eq!(path.as_str(), "/");
        assert!(path.segments().is_empty());
    }

    #[test]
    fn test_dot_cleans_to_dot() {
        let path = DrivePath::parse(".").unwrap();
        assert_eq!(path.as_str(), ".");
        assert!(path.segments().is_empty());
    }

    #[test]
    fn test_empty_path_rejected() {
        assert!(matches!(
            DrivePath::parse(""),
            Err(Error::InvalidPath(_))
        ));
    }
}
