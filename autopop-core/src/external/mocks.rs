// autopop-core/src/external/mocks.rs

// --- Mocking Infrastructure (for testing) ---

// This module is only compiled for unit tests or when the "test-mocks"
// feature is enabled.
#![cfg(any(test, feature = "test-mocks"))]

use super::{Converter, ConverterExit};
use crate::error::{CoreError, CoreResult};
use std::cell::RefCell;
use std::path::{Path, PathBuf};

/// Exit status CUE2POPS reports on success.
const MOCK_SUCCESS_CODE: i32 = 1;

/// One recorded converter invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockConverterCall {
    pub cue_path: PathBuf,
    pub vcd_name: String,
    pub work_dir: PathBuf,
}

/// Represents a scripted converter run and its result.
pub struct MockConverterExpectation {
    pub vcd_pattern: String,
    pub result: CoreResult<ConverterExit>,
    pub create_dummy_output: bool,
}

/// Mock implementation of Converter.
///
/// Expectations are matched against the requested VCD name and consumed in
/// insertion order. Calls that match no expectation fall back to the default
/// behaviour set at construction.
pub struct MockConverter {
    default_exit: ConverterExit,
    default_creates_output: bool,
    available: bool,
    expectations: RefCell<Vec<MockConverterExpectation>>,
    received_calls: RefCell<Vec<MockConverterCall>>,
}

impl MockConverter {
    fn with_default(default_exit: ConverterExit, default_creates_output: bool) -> Self {
        Self {
            default_exit,
            default_creates_output,
            available: true,
            expectations: RefCell::new(Vec::new()),
            received_calls: RefCell::new(Vec::new()),
        }
    }

    /// Exits with the success code and writes the requested VCD.
    pub fn succeeding() -> Self {
        Self::with_default(ConverterExit::Exited(Some(MOCK_SUCCESS_CODE)), true)
    }

    /// Exits with the success code but writes nothing.
    pub fn succeeding_without_output() -> Self {
        Self::with_default(ConverterExit::Exited(Some(MOCK_SUCCESS_CODE)), false)
    }

    /// Exits with `code` and writes nothing.
    pub fn exiting_with(code: i32) -> Self {
        Self::with_default(ConverterExit::Exited(Some(code)), false)
    }

    /// Fails the availability check, as a missing executable would.
    pub fn unavailable() -> Self {
        let mut mock = Self::succeeding();
        mock.available = false;
        mock
    }

    pub fn add_expectation(
        &self,
        vcd_pattern: &str,
        result: CoreResult<ConverterExit>,
        create_dummy_output: bool,
    ) {
        self.expectations.borrow_mut().push(MockConverterExpectation {
            vcd_pattern: vcd_pattern.to_string(),
            result,
            create_dummy_output,
        });
    }

    pub fn add_exit_expectation(&self, vcd_pattern: &str, code: i32, create_dummy_output: bool) {
        self.add_expectation(vcd_pattern, Ok(ConverterExit::Exited(Some(code))), create_dummy_output);
    }

    pub fn get_received_calls(&self) -> Vec<MockConverterCall> {
        self.received_calls.borrow().clone()
    }

    fn write_dummy_output(work_dir: &Path, vcd_name: &str) {
        let output_path = work_dir.join(vcd_name);
        match std::fs::write(&output_path, b"mock vcd") {
            Ok(()) => log::info!("MockConverter created dummy output file: {:?}", output_path),
            Err(e) => log::error!("MockConverter failed to create dummy output file {:?}: {}", output_path, e),
        }
    }
}

impl Converter for MockConverter {
    fn run(&self, cue_path: &Path, vcd_name: &str, work_dir: &Path) -> CoreResult<ConverterExit> {
        self.received_calls.borrow_mut().push(MockConverterCall {
            cue_path: cue_path.to_path_buf(),
            vcd_name: vcd_name.to_string(),
            work_dir: work_dir.to_path_buf(),
        });

        let mut expectations = self.expectations.borrow_mut();
        let found_index = expectations
            .iter()
            .position(|exp| vcd_name.contains(&exp.vcd_pattern));

        let (result, create_output) = match found_index {
            Some(index) => {
                let expectation = expectations.remove(index);
                log::info!("MockConverter: Matched expectation with pattern '{}'", expectation.vcd_pattern);
                (expectation.result, expectation.create_dummy_output)
            }
            None => (Ok(self.default_exit), self.default_creates_output),
        };

        if create_output && result.is_ok() {
            Self::write_dummy_output(work_dir, vcd_name);
        }
        result
    }

    fn check_available(&self) -> CoreResult<()> {
        if self.available {
            Ok(())
        } else {
            Err(CoreError::DependencyNotFound(PathBuf::from("mock-converter")))
        }
    }
}
