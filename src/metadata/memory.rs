// Mon Oct 19 2026 - Alex

use crate::error::{ResolveError, Result};
use crate::metadata::{LinkMetadata, LinkMetadataProvider};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Serves canned metadata keyed by binary path.
#[derive(Debug, Default)]
pub struct InMemoryProvider {
    entries: HashMap<PathBuf, LinkMetadata>,
    fetches: AtomicUsize,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<P: Into<PathBuf>>(&mut self, binary: P, metadata: LinkMetadata) {
        self.entries.insert(binary.into(), metadata);
    }

    pub fn with<P: Into<PathBuf>>(mut self, binary: P, metadata: LinkMetadata) -> Self {
        self.insert(binary, metadata);
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::Relaxed)
    }
}

impl LinkMetadataProvider for InMemoryProvider {
    fn fetch(&self, binary: &Path) -> Result<LinkMetadata> {
        self.fetches.fetch_add(1, Ordering::Relaxed);
        self.entries
            .get(binary)
            .cloned()
            .ok_or_else(|| ResolveError::metadata(binary, "no such binary"))
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
