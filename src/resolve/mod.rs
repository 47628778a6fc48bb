// Mon Oct 19 2026 - Alex

pub mod resolver;
pub mod token;

pub use resolver::{PathResolver, Resolution};
pub use token::PathToken;

use serde::{Serialize, Serializer};
use std::fmt;
use std::path::{Path, PathBuf};

/// Deduplication key for a library in the dependency graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CanonicalPath {
    /// Absolute path with every symlink and `..` resolved.
    Concrete(PathBuf),
    /// A reference whose token could not be substituted, kept verbatim.
    Symbolic(String),
}

impl CanonicalPath {
    pub fn as_path(&self) -> Option<&Path> {
        match self {
            CanonicalPath::Concrete(path) => Some(path),
            CanonicalPath::Symbolic(_) => None,
        }
    }

    pub fn is_symbolic(&self) -> bool {
        matches!(self, CanonicalPath::Symbolic(_))
    }

    /// Literal string prefix match. Symbolic paths never match.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        match self {
            CanonicalPath::Concrete(path) => path.to_string_lossy().starts_with(prefix),
            CanonicalPath::Symbolic(_) => false,
        }
    }
}

impl fmt::Display for CanonicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanonicalPath::Concrete(path) => write!(f, "{}", path.display()),
            CanonicalPath::Symbolic(raw) => write!(f, "{}", raw),
        }
    }
}

impl Serialize for CanonicalPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_match_is_literal() {
        let path = CanonicalPath::Concrete(PathBuf::from("/opt/homebrew/lib/libx.dylib"));
        assert!(path.has_prefix("/opt/"));
        assert!(path.has_prefix("/opt/homebrew/lib/libx"));
        assert!(!path.has_prefix("/opt/*"));
        assert!(!path.has_prefix("/usr/"));
    }

    #[test]
    fn test_symbolic_never_matches() {
        let path = CanonicalPath::Symbolic("@rpath/libbaz.dylib".to_string());
        assert!(!path.has_prefix("@rpath"));
        assert!(!path.has_prefix(""));
        assert_eq!(path.to_string(), "@rpath/libbaz.dylib");
        assert!(path.as_path().is_none());
    }
}
