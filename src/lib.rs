// Mon Oct 19 2026 - Alex

pub mod config;
pub mod error;
pub mod graph;
pub mod metadata;
pub mod report;
pub mod resolve;
pub mod ui;

pub use config::Config;
pub use error::{ResolveError, Result};
pub use graph::{DependencyGraph, GraphBuilder, ResolvedNode};
pub use metadata::{LinkMetadataProvider, MachOProvider, OtoolProvider};
pub use report::{PrefixFilter, ReportEntry};
pub use resolve::{CanonicalPath, PathResolver};
