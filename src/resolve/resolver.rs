// Mon Oct 19 2026 - Alex

use crate::config::RpathPolicy;
use crate::error::{ResolveError, Result};
use crate::resolve::token::{is_symbolic, PathToken};
use crate::resolve::CanonicalPath;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub canonical_path: CanonicalPath,
    pub declared_name: String,
}

/// Maps a raw load-command reference to the file it names.
#[derive(Debug, Clone)]
pub struct PathResolver {
    policy: RpathPolicy,
}

impl PathResolver {
    pub fn new() -> Self {
        Self::with_policy(RpathPolicy::FirstEntry)
    }

    pub fn with_policy(policy: RpathPolicy) -> Self {
        Self { policy }
    }

    pub fn resolve(
        &self,
        raw_reference: &str,
        referencing_binary: &Path,
        runtime_search_paths: &[String],
    ) -> Result<Resolution> {
        let mut segments: Vec<String> = raw_reference.split('/').map(str::to_string).collect();
        let declared_name = segments.last().cloned().unwrap_or_default();

        match segments.first().and_then(|s| PathToken::parse(s)) {
            Some(PathToken::Rpath) => {
                let rest = segments[1..].join("/");
                match self.pick_search_path(&rest, referencing_binary, runtime_search_paths) {
                    Some(base) => segments[0] = base,
                    None => {
                        log::warn!(
                            "{}: {} has no rpath entries to substitute",
                            referencing_binary.display(),
                            raw_reference
                        );
                        return Ok(Resolution {
                            canonical_path: CanonicalPath::Symbolic(raw_reference.to_string()),
                            declared_name,
                        });
                    }
                }
            }
            Some(PathToken::LoaderPath) => segments[0] = loader_dir(referencing_binary),
            _ => {}
        }

        let joined = segments.join("/");
        if is_symbolic(&joined) {
            log::warn!(
                "{}: leaving {} unresolved",
                referencing_binary.display(),
                joined
            );
            return Ok(Resolution {
                canonical_path: CanonicalPath::Symbolic(joined),
                declared_name,
            });
        }

        let canonical = fs::canonicalize(&joined).map_err(|source| ResolveError::Canonicalization {
            path: PathBuf::from(&joined),
            referenced_by: referencing_binary.to_path_buf(),
            source,
        })?;
        log::debug!("{} -> {}", raw_reference, canonical.display());

        Ok(Resolution {
            canonical_path: CanonicalPath::Concrete(canonical),
            declared_name,
        })
    }

    fn pick_search_path(
        &self,
        rest: &str,
        referencing_binary: &Path,
        runtime_search_paths: &[String],
    ) -> Option<String> {
        let mut candidates = runtime_search_paths
            .iter()
            .map(|entry| expand_search_path(entry, referencing_binary));
        let first = candidates.next()?;

        match self.policy {
            RpathPolicy::FirstEntry => Some(first),
            RpathPolicy::FirstExisting => std::iter::once(first.clone())
                .chain(candidates)
                .find(|base| !is_symbolic(base) && Path::new(&format!("{}/{}", base, rest)).exists())
                .or(Some(first)),
        }
    }
}

impl Default for PathResolver {
    fn default() -> Self {
        Self::new()
    }
}

fn loader_dir(binary: &Path) -> String {
    binary
        .parent()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Rpath entries may themselves start with `@loader_path`.
fn expand_search_path(entry: &str, referencing_binary: &Path) -> String {
    match entry.split_once('/') {
        Some((head, tail)) if PathToken::parse(head) == Some(PathToken::LoaderPath) => {
            format!("{}/{}", loader_dir(referencing_binary), tail)
        }
        None if PathToken::parse(entry) == Some(PathToken::LoaderPath) => loader_dir(referencing_binary),
        _ => entry.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::os::unix::fs::symlink;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        File::create(path).unwrap();
    }

    fn concrete(path: &Path) -> CanonicalPath {
        CanonicalPath::Concrete(path.canonicalize().unwrap())
    }

    #[test]
    fn test_rpath_uses_first_entry_only() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("opt/lib");
        let second = dir.path().join("usr/local/lib");
        touch(&first.join("libfoo.dylib"));
        touch(&second.join("libfoo.dylib"));
        let rpaths = vec![
            first.to_string_lossy().into_owned(),
            second.to_string_lossy().into_owned(),
        ];

        let resolution = PathResolver::new()
            .resolve("@rpath/libfoo.dylib", &dir.path().join("bin/tool"), &rpaths)
            .unwrap();

        assert_eq!(resolution.canonical_path, concrete(&first.join("libfoo.dylib")));
        assert_eq!(resolution.declared_name, "libfoo.dylib");
    }

    #[test]
    fn test_rpath_first_entry_missing_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let second = dir.path().join("lib");
        touch(&second.join("libfoo.dylib"));
        let rpaths = vec![
            dir.path().join("missing").to_string_lossy().into_owned(),
            second.to_string_lossy().into_owned(),
        ];

        let err = PathResolver::new()
            .resolve("@rpath/libfoo.dylib", &dir.path().join("tool"), &rpaths)
            .unwrap_err();
        assert!(matches!(err, ResolveError::Canonicalization { .. }));
    }

    #[test]
    fn test_first_existing_policy_skips_missing_entries() {
        let dir = tempfile::tempdir().unwrap();
        let second = dir.path().join("lib");
        touch(&second.join("libfoo.dylib"));
        let rpaths = vec![
            dir.path().join("missing").to_string_lossy().into_owned(),
            second.to_string_lossy().into_owned(),
        ];

        let resolution = PathResolver::with_policy(RpathPolicy::FirstExisting)
            .resolve("@rpath/libfoo.dylib", &dir.path().join("tool"), &rpaths)
            .unwrap();
        assert_eq!(resolution.canonical_path, concrete(&second.join("libfoo.dylib")));
    }

    #[test]
    fn test_loader_path_resolves_parent_components() {
        let dir = tempfile::tempdir().unwrap();
        let tool = dir.path().join("opt/app/bin/tool");
        let lib = dir.path().join("opt/app/lib/libbar.dylib");
        touch(&tool);
        touch(&lib);

        let resolution = PathResolver::new()
            .resolve("@loader_path/../lib/libbar.dylib", &tool, &[])
            .unwrap();
        assert_eq!(resolution.canonical_path, concrete(&lib));
        assert_eq!(resolution.declared_name, "libbar.dylib");
    }

    #[test]
    fn test_symlink_resolves_but_keeps_declared_name() {
        let dir = tempfile::tempdir().unwrap();
        let real = dir.path().join("lib/libz.1.2.13.dylib");
        touch(&real);
        symlink(&real, dir.path().join("lib/libz.1.dylib")).unwrap();

        let raw = format!("{}/lib/libz.1.dylib", dir.path().display());
        let resolution = PathResolver::new()
            .resolve(&raw, &dir.path().join("tool"), &[])
            .unwrap();
        assert_eq!(resolution.canonical_path, concrete(&real));
        assert_eq!(resolution.declared_name, "libz.1.dylib");
    }

    #[test]
    fn test_empty_rpath_list_leaves_reference_symbolic() {
        let resolution = PathResolver::new()
            .resolve("@rpath/libbaz.dylib", Path::new("/opt/app/bin/tool"), &[])
            .unwrap();
        assert_eq!(
            resolution.canonical_path,
            CanonicalPath::Symbolic("@rpath/libbaz.dylib".to_string())
        );
        assert_eq!(resolution.declared_name, "libbaz.dylib");
    }

    #[test]
    fn test_unhandled_tokens_stay_symbolic() {
        let resolution = PathResolver::new()
            .resolve("@executable_path/../Frameworks/libq.dylib", Path::new("/x/y"), &[])
            .unwrap();
        assert_eq!(
            resolution.canonical_path,
            CanonicalPath::Symbolic("@executable_path/../Frameworks/libq.dylib".to_string())
        );

        let rpaths = vec!["@executable_path/../Frameworks".to_string()];
        let resolution = PathResolver::new()
            .resolve("@rpath/libq.dylib", Path::new("/x/y"), &rpaths)
            .unwrap();
        assert_eq!(
            resolution.canonical_path,
            CanonicalPath::Symbolic("@executable_path/../Frameworks/libq.dylib".to_string())
        );
    }

    #[test]
    fn test_loader_relative_rpath_entry() {
        let dir = tempfile::tempdir().unwrap();
        let tool = dir.path().join("bin/tool");
        let lib = dir.path().join("lib/libfoo.dylib");
        touch(&tool);
        touch(&lib);
        let rpaths = vec!["@loader_path/../lib".to_string()];

        let resolution = PathResolver::new()
            .resolve("@rpath/libfoo.dylib", &tool, &rpaths)
            .unwrap();
        assert_eq!(resolution.canonical_path, concrete(&lib));
    }

    #[test]
    fn test_dangling_absolute_reference_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let dangling = dir.path().join("libdangling.dylib");
        symlink(dir.path().join("nowhere.dylib"), &dangling).unwrap();

        let err = PathResolver::new()
            .resolve(&dangling.to_string_lossy(), Path::new("/some/binary"), &[])
            .unwrap_err();
        match err {
            ResolveError::Canonicalization { path, referenced_by, .. } => {
                assert_eq!(path, dangling);
                assert_eq!(referenced_by, Path::new("/some/binary"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
