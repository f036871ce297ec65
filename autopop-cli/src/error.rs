// ============================================================================
// autopop-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Error types and utilities for the CLI
//
// The CLI reports everything through autopop-core's CoreError; this module
// adds a way to attach CLI-level context to lower-level failures.

// ---- Internal crate imports ----
use autopop_core::{CoreError, CoreResult};

// ---- Standard library imports ----
use std::fmt;

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;

/// Attaches a CLI-level description to a lower-level failure.
///
/// The wrapped error keeps its own message; the result reads
/// `"<context>: <original error>"`.
pub trait CliErrorContext<T> {
    fn cli_context<C: fmt::Display>(self, context: C) -> CliResult<T>;

    /// Like `cli_context`, but only builds the description on failure.
    fn cli_with_context<C: fmt::Display, F: FnOnce() -> C>(self, f: F) -> CliResult<T>;
}

fn wrap(context: impl fmt::Display, err: impl Into<CoreError>) -> CoreError {
    let err: CoreError = err.into();
    CoreError::OperationFailed(format!("{context}: {err}"))
}

impl<T, E: Into<CoreError>> CliErrorContext<T> for Result<T, E> {
    fn cli_context<C: fmt::Display>(self, context: C) -> CliResult<T> {
        self.map_err(|e| wrap(context, e))
    }

    fn cli_with_context<C: fmt::Display, F: FnOnce() -> C>(self, f: F) -> CliResult<T> {
        self.map_err(|e| wrap(f(), e))
    }
}
