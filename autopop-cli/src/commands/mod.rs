//! Command implementations for the CLI.

/// Module containing the conversion run.
/// Validates the arguments, builds the core configuration and runs the batch.
pub mod convert;
