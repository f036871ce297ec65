//! Implementation of the conversion run.
//!
//! Turns the parsed arguments into an autopop-core configuration, prints the
//! run header and hands the batch to `autopop_core::run_batch`.

use crate::cli::Cli;
use crate::error::{CliErrorContext, CliResult};
use crate::terminal;

use autopop_core::external::Cue2PopsConverter;
use autopop_core::{CoreConfig, ElfPrefix};

use std::path::{self, Path, PathBuf};
use std::time::Duration;

use log::debug;

fn absolute(path: &Path) -> CliResult<PathBuf> {
    path::absolute(path).cli_with_context(|| format!("Invalid path '{}'", path.display()))
}

/// Creates and validates the CoreConfig from CLI arguments.
///
/// Paths are checked before the prefix, so a run with a bad directory and a
/// bad prefix reports the directory.
pub fn create_core_config(args: &Cli) -> CliResult<CoreConfig> {
    let work_dir = match &args.work_dir {
        Some(dir) => absolute(dir)?,
        None => std::env::current_dir().cli_context("Failed to determine the current directory")?,
    };

    let mut config = CoreConfig::new(
        args.source_dir.clone(),
        args.dest_dir.clone(),
        ElfPrefix::default(),
        work_dir,
    );
    config.validate()?;

    if let Some(prefix) = &args.elf_prefix {
        config.elf_prefix = prefix.parse()?;
    }

    if let Some(converter) = &args.converter {
        config.converter_path = absolute(converter)?;
    }

    if let Some(loader) = &args.loader {
        config.loader_template = absolute(loader)?;
    }

    config.converter_timeout = args.timeout.map(Duration::from_secs);

    Ok(config)
}

fn display_run_info(config: &CoreConfig) {
    terminal::print_section("autopop");
    terminal::print_status("Source", &config.source_dir.display().to_string());
    terminal::print_status("Destination", &config.dest_dir.display().to_string());
    terminal::print_status("ELF prefix", config.elf_prefix.as_str());
    terminal::print_status("Converter", &config.converter_path.display().to_string());
    terminal::print_status("Loader", &config.loader_template.display().to_string());
    if let Some(timeout) = config.converter_timeout {
        terminal::print_status("Timeout", &format!("{}s", timeout.as_secs()));
    }
    terminal::print_status("Started", &crate::logging::get_timestamp());
}

/// Runs the conversion batch described by `args`.
pub fn run_convert(args: Cli) -> CliResult<()> {
    let config = create_core_config(&args)?;
    display_run_info(&config);
    debug!("Work directory: {}", config.work_dir.display());

    let converter = Cue2PopsConverter::new(&config.converter_path)
        .with_timeout(config.converter_timeout);

    let reports = autopop_core::run_batch(&converter, &config)?;
    for report in &reports {
        debug!("{}: {:?}", report.cue_name, report.outcome);
    }

    terminal::print_status("Finished", &crate::logging::get_timestamp());
    Ok(())
}
