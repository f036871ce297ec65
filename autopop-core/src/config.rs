// ============================================================================
// autopop-core/src/config.rs
// ============================================================================
//
// CONFIGURATION: Run configuration, ELF prefix tags and fixed file names
//
// A CoreConfig is built once by the consumer (autopop-cli) and passed into
// the pipeline. It carries every path the run touches, including the
// converter's working directory, so nothing in the library reads process
// globals such as argv or the current directory.

use crate::error::{CoreError, CoreResult};

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

// ============================================================================
// FIXED NAMES
// ============================================================================

/// Marker searched for in directory entries to find cue sheets.
pub const CUE_MARKER: &str = ".cue";

/// Extension a cue sheet's referenced image must carry.
pub const BIN_EXTENSION: &str = ".bin";

/// Extension appended to the title base name for converter output.
pub const VCD_EXTENSION: &str = "VCD";

/// Extension of the staged loader stubs.
pub const LOADER_EXTENSION: &str = "ELF";

/// Default converter executable, looked up in the working directory.
pub const DEFAULT_CONVERTER_NAME: &str = "CUE2POPS.exe";

/// Default loader template, looked up in the working directory.
pub const DEFAULT_LOADER_TEMPLATE_NAME: &str = "POPSTARTER.ELF";

// ============================================================================
// ELF PREFIX
// ============================================================================

/// Tag prepended to every loader stub produced in a run.
///
/// `XX` matches the USB edition of POPSTARTER, `SB` the SMB edition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ElfPrefix {
    #[default]
    Xx,
    Sb,
}

impl ElfPrefix {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElfPrefix::Xx => "XX",
            ElfPrefix::Sb => "SB",
        }
    }
}

impl fmt::Display for ElfPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElfPrefix {
    type Err = CoreError;

    /// Parses a prefix tag, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        match normalized.as_str() {
            "XX" => Ok(ElfPrefix::Xx),
            "SB" => Ok(ElfPrefix::Sb),
            _ => Err(CoreError::InvalidPrefix(normalized)),
        }
    }
}

// ============================================================================
// CORE CONFIGURATION
// ============================================================================

/// Everything a conversion run needs to know.
///
/// # Examples
///
/// ```rust,no_run
/// use autopop_core::{CoreConfig, ElfPrefix};
/// use std::path::PathBuf;
///
/// let config = CoreConfig::new(
///     PathBuf::from("/games/bin"),
///     PathBuf::from("/games/POPS"),
///     ElfPrefix::Sb,
///     PathBuf::from("/opt/cue2pops"),
/// );
/// config.validate().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct CoreConfig {
    // ---- Path Configuration ----

    /// Directory scanned for cue sheets and their bin images
    pub source_dir: PathBuf,

    /// Directory receiving VCD files and loader stubs
    pub dest_dir: PathBuf,

    /// Invocation directory of the converter; its output lands here first
    pub work_dir: PathBuf,

    /// Converter executable
    pub converter_path: PathBuf,

    /// Loader file copied once per converted title
    pub loader_template: PathBuf,

    // ---- Run Settings ----

    /// Prefix tag applied to every loader stub name
    pub elf_prefix: ElfPrefix,

    /// Optional upper bound on a single converter invocation
    pub converter_timeout: Option<Duration>,
}

impl CoreConfig {
    /// Creates a configuration with the converter and loader template
    /// resolved inside `work_dir`.
    pub fn new(
        source_dir: PathBuf,
        dest_dir: PathBuf,
        elf_prefix: ElfPrefix,
        work_dir: PathBuf,
    ) -> Self {
        let converter_path = work_dir.join(DEFAULT_CONVERTER_NAME);
        let loader_template = work_dir.join(DEFAULT_LOADER_TEMPLATE_NAME);
        Self {
            source_dir,
            dest_dir,
            work_dir,
            converter_path,
            loader_template,
            elf_prefix,
            converter_timeout: None,
        }
    }

    /// Checks that the source and destination directories exist.
    ///
    /// The source is checked first so a run with two bad paths reports the
    /// source.
    pub fn validate(&self) -> CoreResult<()> {
        validate_dir(&self.source_dir)?;
        validate_dir(&self.dest_dir)?;
        Ok(())
    }
}

fn validate_dir(dir: &Path) -> CoreResult<()> {
    if dir.is_dir() {
        Ok(())
    } else {
        Err(CoreError::PathError(format!(
            "Directory \"{}\" is not valid or does not exist",
            dir.display()
        )))
    }
}
