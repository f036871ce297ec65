//! Runs the CUE2POPS executable as a child process.
//!
//! The child inherits stdout/stderr so the tool's own progress output reaches
//! the console. Without a timeout the call blocks until the tool exits.

use super::{check_dependency, Converter, ConverterExit};
use crate::error::{command_start_error, command_wait_error, CoreResult};

use log::{debug, error};

use std::path::{self, Path, PathBuf};
use std::process::{Child, Command, ExitStatus};
use std::thread;
use std::time::{Duration, Instant};

/// Poll interval while waiting on a child with a timeout.
const WAIT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Converter backed by an external CUE2POPS executable.
#[derive(Debug, Clone)]
pub struct Cue2PopsConverter {
    program: PathBuf,
    timeout: Option<Duration>,
}

impl Cue2PopsConverter {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            timeout: None,
        }
    }

    /// Kills the converter if a single title takes longer than `timeout`.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn name(&self) -> String {
        self.program
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.program.display().to_string())
    }

    fn wait_bounded(&self, child: &mut Child, timeout: Duration) -> CoreResult<Option<ExitStatus>> {
        let start = Instant::now();
        while start.elapsed() < timeout {
            match child.try_wait() {
                Ok(Some(status)) => return Ok(Some(status)),
                Ok(None) => thread::sleep(WAIT_POLL_INTERVAL),
                Err(e) => return Err(command_wait_error(self.name(), e)),
            }
        }

        // The child may have finished during the last sleep.
        if let Some(status) = child.try_wait().map_err(|e| command_wait_error(self.name(), e))? {
            return Ok(Some(status));
        }

        error!("{} timed out after {} seconds, killing it", self.name(), timeout.as_secs());
        let _ = child.kill();
        child.wait().map_err(|e| command_wait_error(self.name(), e))?;
        Ok(None)
    }
}

impl Converter for Cue2PopsConverter {
    fn run(&self, cue_path: &Path, vcd_name: &str, work_dir: &Path) -> CoreResult<ConverterExit> {
        // The child runs in work_dir, so relative paths must be pinned first.
        let program = path::absolute(&self.program)?;
        let cue_path = path::absolute(cue_path)?;

        let mut cmd = Command::new(&program);
        cmd.arg(&cue_path).arg(vcd_name).current_dir(work_dir);
        debug!(
            "Executing command: {} {} {} (in {})",
            program.display(),
            cue_path.display(),
            vcd_name,
            work_dir.display()
        );

        let mut child = cmd.spawn().map_err(|e| command_start_error(self.name(), e))?;

        let status = match self.timeout {
            Some(timeout) => match self.wait_bounded(&mut child, timeout)? {
                Some(status) => status,
                None => return Ok(ConverterExit::TimedOut),
            },
            None => child.wait().map_err(|e| command_wait_error(self.name(), e))?,
        };

        debug!("{} exited with {}", self.name(), status);
        Ok(ConverterExit::Exited(status.code()))
    }

    fn check_available(&self) -> CoreResult<()> {
        check_dependency(&self.program)
    }
}
