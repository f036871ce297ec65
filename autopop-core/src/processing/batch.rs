// ============================================================================
// autopop-core/src/processing/batch.rs
// ============================================================================
//
// BATCH: Main conversion orchestration
//
// WORKFLOW:
// 1. Validate the source and destination directories
// 2. Discover cue sheets (no cue sheets aborts the run)
// 3. For each cue sheet, in discovery order:
//    a. Resolve the referenced bin; skip the title if invalid or unreadable
//    b. Convert it; skip staging unless a fresh VCD was produced. The
//       converter is only required once a title needs converting
//    c. Stage the loader stub
//
// Only the steps above that return Err end the run. Per-title problems are
// logged and recorded in the returned reports.

use crate::config::CoreConfig;
use crate::cue::{resolve_binary_reference, Resolution};
use crate::discovery::find_cue_sheets;
use crate::error::CoreResult;
use crate::external::Converter;
use crate::processing::convert::{convert_title, ConversionResult, FailureReason};
use crate::processing::stage::stage_loader_stub;

use log::{info, warn};

use std::path::PathBuf;

/// What happened to one cue sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleOutcome {
    /// The cue sheet did not resolve to an existing bin image.
    Skipped(Resolution),
    /// The destination already had the VCD; no stub was staged.
    AlreadyConverted,
    /// A fresh VCD and its loader stub are in the destination.
    Converted { vcd_path: PathBuf, loader_path: PathBuf },
    /// The converter did not produce a VCD; no stub was staged.
    Failed(FailureReason),
}

/// Per-title record returned by `run_batch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleReport {
    pub cue_name: String,
    pub outcome: TitleOutcome,
}

/// Converts every cue sheet in `config.source_dir`.
///
/// # Returns
///
/// * `Ok(Vec<TitleReport>)` - One report per discovered cue sheet
/// * `Err(CoreError)` - Invalid paths, no cue sheets, a converter that is
///   missing or cannot be started when a title needs it, a missing loader
///   template, or an I/O failure
///
/// # Examples
///
/// ```rust,no_run
/// use autopop_core::{run_batch, CoreConfig, ElfPrefix};
/// use autopop_core::external::Cue2PopsConverter;
/// use std::path::PathBuf;
///
/// let config = CoreConfig::new(
///     PathBuf::from("/games/bin"),
///     PathBuf::from("/games/POPS"),
///     ElfPrefix::Xx,
///     std::env::current_dir().unwrap(),
/// );
/// let converter = Cue2PopsConverter::new(&config.converter_path);
/// let reports = run_batch(&converter, &config).unwrap();
/// ```
pub fn run_batch<C: Converter>(converter: &C, config: &CoreConfig) -> CoreResult<Vec<TitleReport>> {
    config.validate()?;

    info!("Scanning for cue sheets in {}", config.source_dir.display());
    let cues = find_cue_sheets(&config.source_dir)?;
    info!("Found {} cue sheet(s)", cues.len());

    let mut reports = Vec::with_capacity(cues.len());
    for cue_name in cues {
        info!("Processing cue: {}", cue_name);
        let outcome = process_title(converter, config, &cue_name)?;
        reports.push(TitleReport { cue_name, outcome });
    }

    Ok(reports)
}

fn process_title<C: Converter>(
    converter: &C,
    config: &CoreConfig,
    cue_name: &str,
) -> CoreResult<TitleOutcome> {
    let reference = match resolve_binary_reference(cue_name, &config.source_dir)? {
        Resolution::Resolved(reference) => reference,
        invalid => {
            warn!("Invalid bin reference in {}, skipping", cue_name);
            return Ok(TitleOutcome::Skipped(invalid));
        }
    };

    let cue_path = config.source_dir.join(cue_name);
    let result = convert_title(
        converter,
        &cue_path,
        &config.dest_dir,
        &reference.base_name,
        &config.work_dir,
    )?;

    match result {
        ConversionResult::Succeeded { vcd_path } => {
            let loader_path = stage_loader_stub(
                &config.loader_template,
                &reference.base_name,
                &config.dest_dir,
                config.elf_prefix,
            )?;
            Ok(TitleOutcome::Converted { vcd_path, loader_path })
        }
        ConversionResult::AlreadyExists => {
            info!("Loader stub for {} was not created", reference.base_name);
            Ok(TitleOutcome::AlreadyConverted)
        }
        ConversionResult::Failed(reason) => {
            warn!("Loader stub for {} was not created: {}", reference.base_name, reason);
            Ok(TitleOutcome::Failed(reason))
        }
    }
}
