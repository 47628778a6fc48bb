// Mon Oct 19 2026 - Alex

pub mod formatter;
pub mod summary;

pub use formatter::ReportWriter;
pub use summary::GraphSummary;

use crate::graph::DependencyGraph;
use crate::resolve::CanonicalPath;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub path: CanonicalPath,
    pub declared_name: String,
}

/// Selects the libraries that live under the bundling prefix.
#[derive(Debug, Clone)]
pub struct PrefixFilter {
    prefix: Option<String>,
}

impl PrefixFilter {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }

    /// Reports every node, system and unresolved ones included.
    pub fn all() -> Self {
        Self { prefix: None }
    }

    pub fn matches(&self, path: &CanonicalPath) -> bool {
        match &self.prefix {
            Some(prefix) => path.has_prefix(prefix),
            None => true,
        }
    }

    pub fn report(&self, graph: &DependencyGraph) -> Vec<ReportEntry> {
        graph
            .nodes()
            .filter(|node| self.matches(&node.canonical_path))
            .map(|node| ReportEntry {
                path: node.canonical_path.clone(),
                declared_name: node.declared_name.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::graph::{Candidate, ResolvedNode};
    use crate::metadata::LinkMetadata;
    use std::path::PathBuf;

    pub(crate) fn graph_of(paths: &[(&str, &str)]) -> DependencyGraph {
        let mut graph = DependencyGraph::new();
        for (path, declared) in paths {
            let canonical_path = if path.starts_with('@') {
                CanonicalPath::Symbolic(path.to_string())
            } else {
                CanonicalPath::Concrete(PathBuf::from(path))
            };
            graph.insert(ResolvedNode::new(
                Candidate {
                    canonical_path,
                    declared_name: declared.to_string(),
                    referencing_binary: PathBuf::from("/bin/tool"),
                    origin_entry: PathBuf::from("/bin/tool"),
                },
                LinkMetadata::new(),
            ));
        }
        graph
    }

    #[test]
    fn test_prefix_filter_excludes_system_libraries() {
        let graph = graph_of(&[
            ("/opt/homebrew/lib/libx.dylib", "libx.dylib"),
            ("/usr/lib/libsystem.dylib", "libsystem.dylib"),
            ("/opt/homebrew/lib/liby.dylib", "liby.1.dylib"),
        ]);

        let report = PrefixFilter::new("/opt/").report(&graph);
        let paths: Vec<String> = report.iter().map(|e| e.path.to_string()).collect();
        assert_eq!(
            paths,
            vec!["/opt/homebrew/lib/libx.dylib", "/opt/homebrew/lib/liby.dylib"]
        );
        assert_eq!(report[1].declared_name, "liby.1.dylib");
    }

    #[test]
    fn test_unresolved_nodes_never_reported_under_a_prefix() {
        let graph = graph_of(&[
            ("@rpath/libbaz.dylib", "libbaz.dylib"),
            ("/opt/homebrew/lib/libx.dylib", "libx.dylib"),
        ]);

        assert_eq!(PrefixFilter::new("/").report(&graph).len(), 1);
        assert_eq!(PrefixFilter::new("@").report(&graph).len(), 0);
        assert_eq!(PrefixFilter::all().report(&graph).len(), 2);
    }
}
