//! Core library for batch converting PlayStation One cue/bin images into
//! POPS VCDs.
//!
//! This crate discovers cue sheets, resolves the bin image each one names,
//! drives the CUE2POPS converter, and stages a renamed POPSTARTER loader next
//! to every freshly converted VCD.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use autopop_core::{CoreConfig, ElfPrefix, run_batch};
//! use autopop_core::external::Cue2PopsConverter;
//! use std::path::PathBuf;
//!
//! let config = CoreConfig::new(
//!     PathBuf::from("/path/to/bins"),
//!     PathBuf::from("/path/to/POPS"),
//!     ElfPrefix::Xx,
//!     PathBuf::from("/path/to/tools"),
//! );
//! let converter = Cue2PopsConverter::new(&config.converter_path)
//!     .with_timeout(config.converter_timeout);
//!
//! for report in run_batch(&converter, &config).unwrap() {
//!     println!("{}: {:?}", report.cue_name, report.outcome);
//! }
//! ```

pub mod config;
pub mod cue;
pub mod discovery;
pub mod error;
pub mod external;
pub mod processing;
pub mod utils;

// Re-exports for public API
pub use config::{CoreConfig, ElfPrefix};
pub use cue::{resolve_binary_reference, BinaryImageReference, Resolution};
pub use discovery::find_cue_sheets;
pub use error::{CoreError, CoreResult};
pub use processing::{
    convert_title, run_batch, stage_loader_stub, ConversionResult, FailureReason, TitleOutcome,
    TitleReport,
};
