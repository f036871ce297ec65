// ============================================================================
// autopop-cli/src/logging.rs
// ============================================================================
//
// LOGGING: env_logger setup for the autopop binary
//
// The core library logs through the `log` facade; this module installs the
// env_logger backend. RUST_LOG overrides the level picked from --verbose:
// - RUST_LOG=info (default): per-title progress, skips and failures
// - RUST_LOG=debug: converter command lines and internal decisions

use log::LevelFilter;
use owo_colors::OwoColorize;
use std::io::Write;

/// Installs the global logger.
pub fn init(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_level.as_str()),
    )
    .format(|buf, record| {
        let use_color = crate::terminal::should_use_color();
        match record.level() {
            log::Level::Info => writeln!(buf, "{}", record.args()),
            level if use_color => {
                let tag = match level {
                    log::Level::Error => format!("{}", "ERROR".red().bold()),
                    log::Level::Warn => format!("{}", "WARN ".yellow()),
                    log::Level::Debug => format!("{}", "DEBUG".blue()),
                    _ => format!("{}", "TRACE".magenta()),
                };
                writeln!(buf, "{} {}", tag, record.args())
            }
            level => writeln!(buf, "{:<5} {}", level, record.args()),
        }
    })
    .init();

    log::debug!("Logger initialized with level: {}", default_level);
}

/// Returns the current local timestamp formatted as "YYYY-MM-DD HH:MM:SS".
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
