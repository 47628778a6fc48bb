// Mon Oct 19 2026 - Alex

pub mod macho;
pub mod memory;
pub mod otool;

pub use macho::MachOProvider;
pub use memory::InMemoryProvider;
pub use otool::OtoolProvider;

use crate::config::{Config, ProviderKind};
use crate::error::Result;
use std::path::Path;
use std::sync::Arc;

/// One library reference as recorded in a binary's load commands.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DependencyRecord {
    pub raw_reference: String,
    pub declared_name: String,
}

impl DependencyRecord {
    pub fn new(raw_reference: impl Into<String>) -> Self {
        let raw_reference = raw_reference.into();
        let declared_name = raw_reference
            .rsplit('/')
            .next()
            .unwrap_or(raw_reference.as_str())
            .to_string();
        Self {
            raw_reference,
            declared_name,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkMetadata {
    pub dependencies: Vec<DependencyRecord>,
    pub runtime_search_paths: Vec<String>,
}

impl LinkMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dependency(mut self, raw_reference: impl Into<String>) -> Self {
        self.dependencies.push(DependencyRecord::new(raw_reference));
        self
    }

    pub fn with_search_path(mut self, path: impl Into<String>) -> Self {
        self.runtime_search_paths.push(path.into());
        self
    }
}

/// Reads the dependency references and runtime search paths recorded in a
/// binary. Implementations never cache and never retry.
pub trait LinkMetadataProvider: Send + Sync {
    fn fetch(&self, binary: &Path) -> Result<LinkMetadata>;

    fn name(&self) -> &'static str;
}

pub fn provider_for(config: &Config) -> Arc<dyn LinkMetadataProvider> {
    match config.provider {
        ProviderKind::Macho => Arc::new(MachOProvider::new()),
        ProviderKind::Otool => Arc::new(OtoolProvider::with_tool(config.otool_path.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_name_is_last_segment() {
        let record = DependencyRecord::new("@rpath/libfoo.1.dylib");
        assert_eq!(record.declared_name, "libfoo.1.dylib");

        let record = DependencyRecord::new("/usr/lib/libSystem.B.dylib");
        assert_eq!(record.declared_name, "libSystem.B.dylib");

        let record = DependencyRecord::new("libbare.dylib");
        assert_eq!(record.declared_name, "libbare.dylib");
    }
}
