// ============================================================================
// autopop-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error types for the autopop-core library
//
// Every condition that ends a run is a CoreError variant. Per-title problems
// (unsupported or missing bin, converter failures, an existing VCD) are not
// errors: they are reported as values by the processing module so the batch
// can move on to the next cue sheet.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a conversion run.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    PathError(String),

    #[error("Invalid ELF prefix {0}")]
    InvalidPrefix(String),

    #[error("Cue files not found in {}", .0.display())]
    NoCueSheetsFound(PathBuf),

    #[error("Converter executable not found: {}", .0.display())]
    DependencyNotFound(PathBuf),

    #[error("Loader template not found: {}", .0.display())]
    LoaderTemplateMissing(PathBuf),

    #[error("Failed to start {0}: {1}")]
    CommandStart(String, #[source] io::Error),

    #[error("Failed while waiting for {0}: {1}")]
    CommandWait(String, #[source] io::Error),

    #[error("{0}")]
    OperationFailed(String),
}

/// Result type used throughout autopop-core.
pub type CoreResult<T> = Result<T, CoreError>;

pub fn command_start_error(cmd: impl Into<String>, err: io::Error) -> CoreError {
    CoreError::CommandStart(cmd.into(), err)
}

pub fn command_wait_error(cmd: impl Into<String>, err: io::Error) -> CoreError {
    CoreError::CommandWait(cmd.into(), err)
}
