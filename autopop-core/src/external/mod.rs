// ============================================================================
// autopop-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: The converter executable behind a narrow trait
//
// CUE2POPS has an awkward contract: it always writes into its invocation
// directory, whatever output name it is given, and it exits with status 1 on
// success. This module only knows how to start it and report how it exited.
// Interpreting the exit status and relocating the output is the job of
// processing::convert, which works against the Converter trait so tests can
// swap in the mock from `mocks`.
//
// KEY COMPONENTS:
// - Converter: trait for running one conversion
// - ConverterExit: how a converter invocation ended
// - Cue2PopsConverter: process-backed implementation
// - check_dependency: existence check for the converter executable

// ---- Internal crate imports ----
use crate::error::{CoreError, CoreResult};

// ---- Standard library imports ----
use std::path::Path;

// ============================================================================
// SUBMODULES
// ============================================================================

/// Process-backed converter with an optional bounded wait
pub mod cue2pops;

/// Mock converter for tests
pub mod mocks;

pub use cue2pops::Cue2PopsConverter;

// ============================================================================
// CONVERTER ABSTRACTION
// ============================================================================

/// How a converter invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConverterExit {
    /// The process exited; `None` when it was terminated by a signal.
    Exited(Option<i32>),
    /// The configured timeout elapsed and the process was killed.
    TimedOut,
}

/// Something that can convert a cue sheet into a VCD.
pub trait Converter {
    /// Runs the converter for `cue_path`, asking for an output named
    /// `vcd_name`. The output, if any, appears in `work_dir`.
    fn run(&self, cue_path: &Path, vcd_name: &str, work_dir: &Path) -> CoreResult<ConverterExit>;

    /// Checks that the converter can be started at all.
    fn check_available(&self) -> CoreResult<()> {
        Ok(())
    }
}

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Checks that the converter executable exists and is a regular file.
pub fn check_dependency(program: &Path) -> CoreResult<()> {
    if program.is_file() {
        log::debug!("Found converter: {}", program.display());
        Ok(())
    } else {
        log::error!("Converter '{}' not found.", program.display());
        Err(CoreError::DependencyNotFound(program.to_path_buf()))
    }
}
