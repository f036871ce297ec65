// autopop-cli/src/lib.rs
//
// Library portion of the autopop CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod terminal;

// Re-export items needed by the binary or integration tests
pub use autopop_core;
pub use cli::Cli;
pub use commands::convert::run_convert;
