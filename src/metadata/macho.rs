// Mon Oct 19 2026 - Alex

use crate::error::{ResolveError, Result};
use crate::metadata::{DependencyRecord, LinkMetadata, LinkMetadataProvider};
use goblin::mach::{Mach, MachO};
use goblin::Object;
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;

/// Reads load commands straight out of the binary with goblin.
#[derive(Debug, Default, Clone)]
pub struct MachOProvider;

impl MachOProvider {
    pub fn new() -> Self {
        Self
    }

    fn parse(binary: &Path, data: &[u8]) -> Result<LinkMetadata> {
        let object = Object::parse(data).map_err(|e| ResolveError::metadata(binary, e))?;

        match object {
            Object::Mach(Mach::Binary(macho)) => Ok(Self::collect(&macho)),
            Object::Mach(Mach::Fat(multi)) => {
                let arches = multi
                    .arches()
                    .map_err(|e| ResolveError::metadata(binary, e))?;
                let arch = arches
                    .first()
                    .ok_or_else(|| ResolveError::metadata(binary, "Fat binary has no slices"))?;
                let slice = arch.slice(data);
                let macho = MachO::parse(slice, 0).map_err(|e| ResolveError::metadata(binary, e))?;
                log::debug!(
                    "{}: using first of {} fat slices",
                    binary.display(),
                    arches.len()
                );
                Ok(Self::collect(&macho))
            }
            Object::Elf(_) => Err(ResolveError::metadata(binary, "ELF binaries are not supported")),
            Object::PE(_) => Err(ResolveError::metadata(binary, "PE binaries are not supported")),
            Object::Archive(_) => Err(ResolveError::metadata(binary, "Static archives have no load commands")),
            Object::Unknown(magic) => Err(ResolveError::metadata(
                binary,
                format!("Not a Mach-O binary (magic 0x{:x})", magic),
            )),
            _ => Err(ResolveError::metadata(binary, "Unsupported object format")),
        }
    }

    fn collect(macho: &MachO) -> LinkMetadata {
        // goblin reserves libs[0] for the image itself
        let dependencies = macho
            .libs
            .iter()
            .skip(1)
            .map(|lib| DependencyRecord::new(*lib))
            .collect();
        let runtime_search_paths = macho.rpaths.iter().map(|p| p.to_string()).collect();

        LinkMetadata {
            dependencies,
            runtime_search_paths,
        }
    }
}

impl LinkMetadataProvider for MachOProvider {
    fn fetch(&self, binary: &Path) -> Result<LinkMetadata> {
        let file = File::open(binary).map_err(|e| ResolveError::metadata(binary, e))?;
        let mmap = unsafe { Mmap::map(&file) }.map_err(|e| ResolveError::metadata(binary, e))?;
        let metadata = Self::parse(binary, &mmap)?;
        log::debug!(
            "{}: {} dependencies, {} rpaths",
            binary.display(),
            metadata.dependencies.len(),
            metadata.runtime_search_paths.len()
        );
        Ok(metadata)
    }

    fn name(&self) -> &'static str {
        "macho"
    }
}
