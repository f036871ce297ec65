// ============================================================================
// autopop-core/src/processing/convert.rs
// ============================================================================
//
// CONVERSION: One title through the converter
//
// WORKFLOW:
// 1. Derive "<base>.VCD" and skip if the destination already has it
// 2. Check the converter is present, then run it in the work directory
// 3. Exit status 1 means success; anything else is a failure
// 4. On success the VCD must exist in the work directory; move it into the
//    destination

use crate::error::CoreResult;
use crate::external::{Converter, ConverterExit};
use crate::utils::{move_into_dir, vcd_file_name};

use log::{info, warn};

use std::fmt;
use std::path::{Path, PathBuf};

/// Exit status CUE2POPS uses to signal a successful conversion.
pub const CONVERTER_SUCCESS_CODE: i32 = 1;

/// Why a conversion did not produce a VCD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// The converter reported success but its output was not in the work dir.
    OutputMissing,
    /// The converter exited with something other than the success code.
    ExitCode(Option<i32>),
    /// The converter was killed after the configured timeout.
    TimedOut,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::OutputMissing => write!(f, "VCD not found after conversion"),
            FailureReason::ExitCode(Some(code)) => write!(f, "converter exited with status {code}"),
            FailureReason::ExitCode(None) => write!(f, "converter was terminated by a signal"),
            FailureReason::TimedOut => write!(f, "converter timed out"),
        }
    }
}

/// Outcome of converting one title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionResult {
    /// The destination already holds the VCD; the converter was not run.
    AlreadyExists,
    /// A fresh VCD was produced and moved to `vcd_path`.
    Succeeded { vcd_path: PathBuf },
    /// The converter ran but no VCD came out of it.
    Failed(FailureReason),
}

/// Converts the title described by `cue_path` into `<base_name>.VCD` in
/// `dest_dir`.
///
/// The converter always writes into its invocation directory, so it is run
/// in `work_dir` and the output is picked up from there.
pub fn convert_title<C: Converter>(
    converter: &C,
    cue_path: &Path,
    dest_dir: &Path,
    base_name: &str,
    work_dir: &Path,
) -> CoreResult<ConversionResult> {
    let vcd_name = vcd_file_name(base_name);

    if dest_dir.join(&vcd_name).exists() {
        info!("VCD {} already exists! ignoring...", vcd_name);
        return Ok(ConversionResult::AlreadyExists);
    }

    // Only titles that actually need the converter require it to exist.
    converter.check_available()?;

    info!("Executing converter for {}", vcd_name);
    let exit = converter.run(cue_path, &vcd_name, work_dir)?;

    match exit {
        ConverterExit::Exited(Some(CONVERTER_SUCCESS_CODE)) => {
            let produced = work_dir.join(&vcd_name);
            if !produced.exists() {
                warn!("VCD {} not found in {}!", vcd_name, work_dir.display());
                return Ok(ConversionResult::Failed(FailureReason::OutputMissing));
            }

            info!("Moving {} from {} to {}", vcd_name, work_dir.display(), dest_dir.display());
            let vcd_path = move_into_dir(&produced, dest_dir)?;
            Ok(ConversionResult::Succeeded { vcd_path })
        }
        ConverterExit::Exited(code) => {
            let reason = FailureReason::ExitCode(code);
            warn!("Conversion of {} failed: {}", vcd_name, reason);
            Ok(ConversionResult::Failed(reason))
        }
        ConverterExit::TimedOut => {
            warn!("Conversion of {} failed: {}", vcd_name, FailureReason::TimedOut);
            Ok(ConversionResult::Failed(FailureReason::TimedOut))
        }
    }
}
