//! Utility functions for artifact naming and file relocation.
//!
//! This module provides the helpers shared by the conversion and staging
//! steps: the derived file names for a title, and a move that survives
//! crossing filesystems.

use crate::config::{ElfPrefix, LOADER_EXTENSION, VCD_EXTENSION};
use crate::error::{CoreError, CoreResult};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Name of the VCD produced for a title (e.g. "game1" -> "game1.VCD").
#[must_use]
pub fn vcd_file_name(base_name: &str) -> String {
    format!("{}.{VCD_EXTENSION}", base_name.trim())
}

/// Name of the loader stub staged for a title (e.g. "XX.game1.ELF").
#[must_use]
pub fn loader_stub_name(prefix: ElfPrefix, base_name: &str) -> String {
    format!("{prefix}.{}.{LOADER_EXTENSION}", base_name.trim())
}

/// Moves `source` into `dest_dir`, keeping its file name, and returns the
/// new path.
///
/// Tries a rename first; when that fails because the directories live on
/// different filesystems the file is copied and the original removed.
pub fn move_into_dir(source: &Path, dest_dir: &Path) -> CoreResult<PathBuf> {
    let file_name = source.file_name().ok_or_else(|| {
        CoreError::PathError(format!("Failed to get filename for {}", source.display()))
    })?;
    let target = dest_dir.join(file_name);

    match fs::rename(source, &target) {
        Ok(()) => Ok(target),
        Err(e) if is_cross_device(&e) => {
            log::debug!(
                "Rename across filesystems failed ({}), copying {} instead",
                e,
                source.display()
            );
            fs::copy(source, &target)?;
            fs::remove_file(source)?;
            Ok(target)
        }
        Err(e) => Err(e.into()),
    }
}

fn is_cross_device(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::CrossesDevices
}
