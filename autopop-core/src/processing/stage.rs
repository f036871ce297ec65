//! Loader stub staging.

use crate::config::ElfPrefix;
use crate::error::{CoreError, CoreResult};
use crate::utils::loader_stub_name;

use log::info;

use std::fs;
use std::path::{Path, PathBuf};

/// Copies `loader_template` into `dest_dir` as `<prefix>.<base_name>.ELF`.
///
/// An existing stub of the same name is overwritten. A missing template is
/// fatal for the run.
pub fn stage_loader_stub(
    loader_template: &Path,
    base_name: &str,
    dest_dir: &Path,
    prefix: ElfPrefix,
) -> CoreResult<PathBuf> {
    if !loader_template.is_file() {
        return Err(CoreError::LoaderTemplateMissing(loader_template.to_path_buf()));
    }

    let stub_name = loader_stub_name(prefix, base_name);
    let stub_path = dest_dir.join(&stub_name);

    info!("Saving {} as {}", loader_template.display(), stub_name);
    fs::copy(loader_template, &stub_path)?;
    info!("ELF file saved");

    Ok(stub_path)
}
