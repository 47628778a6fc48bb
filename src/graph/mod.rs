// Mon Oct 19 2026 - Alex

pub mod builder;
pub mod node;

pub use builder::GraphBuilder;
pub use node::{Candidate, EntryBinary, ResolvedNode};

use crate::resolve::CanonicalPath;
use indexmap::map::Entry;
use indexmap::IndexMap;

/// Libraries keyed by canonical path, in discovery order.
#[derive(Debug, Default)]
pub struct DependencyGraph {
    entries: Vec<EntryBinary>,
    nodes: IndexMap<CanonicalPath, ResolvedNode>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_entry(&mut self, entry: EntryBinary) {
        self.entries.push(entry);
    }

    /// First writer wins; returns false if the key was already present.
    pub fn insert(&mut self, node: ResolvedNode) -> bool {
        match self.nodes.entry(node.canonical_path.clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(node);
                true
            }
        }
    }

    pub fn contains(&self, key: &CanonicalPath) -> bool {
        self.nodes.contains_key(key)
    }

    pub fn get(&self, key: &CanonicalPath) -> Option<&ResolvedNode> {
        self.nodes.get(key)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &ResolvedNode> {
        self.nodes.values()
    }

    pub fn keys(&self) -> impl Iterator<Item = &CanonicalPath> {
        self.nodes.keys()
    }

    pub fn entries(&self) -> &[EntryBinary] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn symbolic_count(&self) -> usize {
        self.nodes.keys().filter(|k| k.is_symbolic()).count()
    }
}
