//! Cue sheet discovery.
//!
//! Lists the top level of the source directory and keeps every regular file
//! whose name contains `.cue`. Entries come back in directory enumeration
//! order; no sorting is applied.

use crate::config::CUE_MARKER;
use crate::error::{CoreError, CoreResult};

use log::debug;

use std::path::Path;

/// Finds the cue sheets in `source_dir`, returning their file names.
///
/// # Returns
///
/// * `Ok(Vec<String>)` - File names (not paths) of the discovered cue sheets
/// * `Err(CoreError::Io)` - If the directory cannot be read
/// * `Err(CoreError::NoCueSheetsFound)` - If nothing matched
///
/// # Examples
///
/// ```rust,no_run
/// use autopop_core::find_cue_sheets;
/// use std::path::Path;
///
/// let cues = find_cue_sheets(Path::new("/games/bin")).unwrap();
/// println!("Found {} cues", cues.len());
/// ```
pub fn find_cue_sheets(source_dir: &Path) -> CoreResult<Vec<String>> {
    let read_dir = std::fs::read_dir(source_dir)?;
    let cues: Vec<String> = read_dir
        .filter_map(|entry| {
            let entry = entry.ok()?;
            if !entry.path().is_file() {
                return None;
            }

            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                debug!("Skipping entry with a non UTF-8 name: {:?}", file_name);
                return None;
            };
            name.contains(CUE_MARKER).then(|| name.to_string())
        })
        .collect();

    if cues.is_empty() {
        Err(CoreError::NoCueSheetsFound(source_dir.to_path_buf()))
    } else {
        Ok(cues)
    }
}
