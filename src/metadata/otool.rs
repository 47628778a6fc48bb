// Mon Oct 19 2026 - Alex

use crate::error::{ResolveError, Result};
use crate::metadata::{DependencyRecord, LinkMetadata, LinkMetadataProvider};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::process::Command;

static CMD_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*cmd\s+(LC_\w+)\s*$").unwrap());
static OPERAND_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(name|path)\s+(.+?)\s+\(offset \d+\)\s*$").unwrap());

const DYLIB_COMMANDS: &[&str] = &[
    "LC_LOAD_DYLIB",
    "LC_LOAD_WEAK_DYLIB",
    "LC_REEXPORT_DYLIB",
    "LC_LAZY_LOAD_DYLIB",
    "LC_LOAD_UPWARD_DYLIB",
];

/// Shells out to `otool -l` and scrapes the load command listing.
#[derive(Debug, Clone)]
pub struct OtoolProvider {
    tool: PathBuf,
}

impl OtoolProvider {
    pub fn new() -> Self {
        Self::with_tool(PathBuf::from("otool"))
    }

    pub fn with_tool(tool: PathBuf) -> Self {
        Self { tool }
    }
}

impl Default for OtoolProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkMetadataProvider for OtoolProvider {
    fn fetch(&self, binary: &Path) -> Result<LinkMetadata> {
        log::debug!("Running {} -l {}", self.tool.display(), binary.display());

        let output = Command::new(&self.tool)
            .arg("-l")
            .arg(binary)
            .output()
            .map_err(|e| {
                ResolveError::metadata(binary, format!("failed to run {}: {}", self.tool.display(), e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ResolveError::metadata(
                binary,
                format!("{} exited with {}: {}", self.tool.display(), output.status, stderr.trim()),
            ));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        if stdout.contains("is not an object file") {
            return Err(ResolveError::metadata(binary, "not an object file"));
        }

        Ok(parse_load_commands(&stdout))
    }

    fn name(&self) -> &'static str {
        "otool"
    }
}

/// Extracts dylib references and rpath entries from `otool -l` output.
pub fn parse_load_commands(listing: &str) -> LinkMetadata {
    let mut metadata = LinkMetadata::new();
    let mut current: Option<&str> = None;

    for line in listing.lines() {
        if let Some(caps) = CMD_LINE.captures(line) {
            current = caps.get(1).map(|m| m.as_str());
            continue;
        }

        let Some(cmd) = current else { continue };
        let Some(caps) = OPERAND_LINE.captures(line) else { continue };
        let value = &caps[2];

        match &caps[1] {
            "name" if DYLIB_COMMANDS.contains(&cmd) => {
                metadata.dependencies.push(DependencyRecord::new(value));
                current = None;
            }
            "path" if cmd == "LC_RPATH" => {
                metadata.runtime_search_paths.push(value.to_string());
                current = None;
            }
            _ => {}
        }
    }

    metadata
}
