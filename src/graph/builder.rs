// Mon Oct 19 2026 - Alex

use crate::error::{ResolveError, Result};
use crate::graph::{Candidate, DependencyGraph, EntryBinary, ResolvedNode};
use crate::metadata::{DependencyRecord, LinkMetadata, LinkMetadataProvider};
use crate::resolve::PathResolver;
use rayon::prelude::*;
use rayon::ThreadPool;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

type NodeCallback = Box<dyn Fn(&ResolvedNode) + Send + Sync>;

/// Computes the transitive closure of library dependencies for a set of
/// entry binaries.
///
/// Discovery runs frontier by frontier. Each new node has its metadata
/// fetched once, and its references are resolved against its own rpaths and
/// its own location. With more than one job the fetches of a frontier are
/// spread over a rayon pool. Insertion stays serial and in discovery order,
/// so the resulting graph does not depend on the job count.
pub struct GraphBuilder {
    provider: Arc<dyn LinkMetadataProvider>,
    resolver: PathResolver,
    jobs: usize,
    on_node: Option<NodeCallback>,
}

impl GraphBuilder {
    pub fn new(provider: Arc<dyn LinkMetadataProvider>, resolver: PathResolver) -> Self {
        Self {
            provider,
            resolver,
            jobs: 1,
            on_node: None,
        }
    }

    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    pub fn with_callback<F>(mut self, callback: F) -> Self
    where
        F: Fn(&ResolvedNode) + Send + Sync + 'static,
    {
        self.on_node = Some(Box::new(callback));
        self
    }

    pub fn discover<P: AsRef<Path>>(&self, entries: &[P]) -> Result<DependencyGraph> {
        let pool = self.build_pool()?;
        let mut graph = DependencyGraph::new();
        let mut pending = Vec::new();

        for entry in entries {
            let entry = entry.as_ref();
            let path = fs::canonicalize(entry).map_err(|source| ResolveError::EntryBinary {
                path: entry.to_path_buf(),
                source,
            })?;
            log::info!("Inspecting entry binary {}", path.display());

            let metadata = self.provider.fetch(&path)?;
            pending.extend(self.resolve_records(
                &metadata.dependencies,
                &path,
                &metadata.runtime_search_paths,
                &path,
            )?);
            graph.add_entry(EntryBinary {
                path,
                runtime_search_paths: metadata.runtime_search_paths,
                dependencies: metadata.dependencies,
            });
        }

        let mut pass = 0;
        while !pending.is_empty() {
            pass += 1;
            let fresh = Self::dedup(&graph, pending);
            log::debug!("Pass {}: {} new libraries", pass, fresh.len());

            let fetched = self.fetch_all(pool.as_ref(), &fresh)?;

            let mut next = Vec::new();
            for (candidate, metadata) in fresh.into_iter().zip(fetched) {
                let node = ResolvedNode::new(candidate, metadata);
                match node.binary_path() {
                    Some(binary) => next.extend(self.resolve_records(
                        &node.dependencies,
                        binary,
                        &node.runtime_search_paths,
                        &node.origin_entry,
                    )?),
                    None => log::info!(
                        "Keeping unresolved {} (from {})",
                        node.canonical_path,
                        node.referencing_binary.display()
                    ),
                }
                if let Some(callback) = &self.on_node {
                    callback(&node);
                }
                graph.insert(node);
            }
            pending = next;
        }

        log::info!(
            "Discovered {} libraries from {} entry binaries in {} passes",
            graph.len(),
            graph.entries().len(),
            pass
        );
        Ok(graph)
    }

    fn build_pool(&self) -> Result<Option<ThreadPool>> {
        if self.jobs <= 1 {
            return Ok(None);
        }
        rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map(Some)
            .map_err(|e| ResolveError::WorkerPool(e.to_string()))
    }

    /// Drops candidates already in the graph or seen earlier in this frontier.
    fn dedup(graph: &DependencyGraph, pending: Vec<Candidate>) -> Vec<Candidate> {
        let mut seen = HashSet::new();
        pending
            .into_iter()
            .filter(|c| !graph.contains(&c.canonical_path) && seen.insert(c.canonical_path.clone()))
            .collect()
    }

    fn fetch_one(&self, candidate: &Candidate) -> Result<LinkMetadata> {
        match candidate.canonical_path.as_path() {
            Some(path) => self.provider.fetch(path),
            None => Ok(LinkMetadata::new()),
        }
    }

    fn fetch_all(&self, pool: Option<&ThreadPool>, fresh: &[Candidate]) -> Result<Vec<LinkMetadata>> {
        match pool {
            Some(pool) if fresh.len() > 1 => {
                let results: Vec<Result<LinkMetadata>> =
                    pool.install(|| fresh.par_iter().map(|c| self.fetch_one(c)).collect());
                // first failure in discovery order, not completion order
                results.into_iter().collect()
            }
            _ => fresh.iter().map(|c| self.fetch_one(c)).collect(),
        }
    }

    fn resolve_records(
        &self,
        records: &[DependencyRecord],
        binary: &Path,
        runtime_search_paths: &[String],
        origin_entry: &Path,
    ) -> Result<Vec<Candidate>> {
        records
            .iter()
            .map(|record| {
                let resolution =
                    self.resolver
                        .resolve(&record.raw_reference, binary, runtime_search_paths)?;
                Ok(Candidate {
                    canonical_path: resolution.canonical_path,
                    declared_name: resolution.declared_name,
                    referencing_binary: binary.to_path_buf(),
                    origin_entry: PathBuf::from(origin_entry),
                })
            })
            .collect()
    }
}
