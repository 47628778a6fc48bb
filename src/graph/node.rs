// Mon Oct 19 2026 - Alex

use crate::metadata::{DependencyRecord, LinkMetadata};
use crate::resolve::CanonicalPath;
use std::path::{Path, PathBuf};

/// One physical library discovered in the closure.
#[derive(Debug, Clone)]
pub struct ResolvedNode {
    pub canonical_path: CanonicalPath,
    pub declared_name: String,
    pub runtime_search_paths: Vec<String>,
    pub dependencies: Vec<DependencyRecord>,
    pub referencing_binary: PathBuf,
    pub origin_entry: PathBuf,
}

impl ResolvedNode {
    pub fn new(candidate: Candidate, metadata: LinkMetadata) -> Self {
        Self {
            canonical_path: candidate.canonical_path,
            declared_name: candidate.declared_name,
            runtime_search_paths: metadata.runtime_search_paths,
            dependencies: metadata.dependencies,
            referencing_binary: candidate.referencing_binary,
            origin_entry: candidate.origin_entry,
        }
    }

    /// Path used for `@loader_path` when resolving this node's own references.
    pub fn binary_path(&self) -> Option<&Path> {
        self.canonical_path.as_path()
    }
}

/// An entry binary as given on the command line, after canonicalization.
#[derive(Debug, Clone)]
pub struct EntryBinary {
    pub path: PathBuf,
    pub runtime_search_paths: Vec<String>,
    pub dependencies: Vec<DependencyRecord>,
}

/// A resolved reference waiting to be deduplicated against the graph.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub canonical_path: CanonicalPath,
    pub declared_name: String,
    pub referencing_binary: PathBuf,
    pub origin_entry: PathBuf,
}
