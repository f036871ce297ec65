// autopop-cli/src/cli.rs
//
// Defines the command-line argument structure using clap.

use clap::Parser;
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Autopop: batch PS1 cue/bin to VCD converter",
    long_about = "Converts every cue/bin pair in SOURCE_DIR to a POPS VCD with CUE2POPS \
                  and stages a renamed POPSTARTER.ELF for each converted title in DEST_DIR.\n\n\
                  Exits with status 0 when the batch finishes, even if some titles were skipped \
                  or failed. Exits with status 1 on a fatal error: invalid directories or prefix, \
                  no cue sheets, a missing or unstartable CUE2POPS, or a missing POPSTARTER.ELF."
)]
pub struct Cli {
    /// Directory containing the .cue/.bin pairs to convert
    #[arg(required = true, value_name = "SOURCE_DIR")]
    pub source_dir: PathBuf,

    /// Directory receiving the VCD files and loader stubs
    #[arg(required = true, value_name = "DEST_DIR")]
    pub dest_dir: PathBuf,

    /// Optional: Loader prefix, XX for the USB edition or SB for the SMB edition (default: XX)
    #[arg(value_name = "ELF_PREFIX")]
    pub elf_prefix: Option<String>,

    /// Optional: Path to the CUE2POPS executable (defaults to WORK_DIR/CUE2POPS.exe)
    #[arg(long, value_name = "PATH", env = "AUTOPOP_CONVERTER")]
    pub converter: Option<PathBuf>,

    /// Optional: Path to the POPSTARTER.ELF template (defaults to WORK_DIR/POPSTARTER.ELF)
    #[arg(long, value_name = "PATH", env = "AUTOPOP_LOADER")]
    pub loader: Option<PathBuf>,

    /// Optional: Directory CUE2POPS runs in and writes its output to (defaults to the current directory)
    #[arg(long, value_name = "WORK_DIR")]
    pub work_dir: Option<PathBuf>,

    /// Optional: Kill CUE2POPS if a single title takes longer than this
    #[arg(long, value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Enable detailed logging output
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
