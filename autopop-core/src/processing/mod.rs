//! Conversion pipeline.
//!
//! One title moves through three steps: its cue sheet is resolved to a bin
//! image (see `crate::cue`), the converter turns it into a VCD, and on a
//! fresh conversion a loader stub is staged next to it. `batch` runs those
//! steps for every discovered cue sheet.

/// Single-title conversion and VCD relocation
pub mod convert;

/// Loader stub staging
pub mod stage;

/// Whole-run orchestration
pub mod batch;

pub use batch::{run_batch, TitleOutcome, TitleReport};
pub use convert::{convert_title, ConversionResult, FailureReason, CONVERTER_SUCCESS_CODE};
pub use stage::stage_loader_stub;
