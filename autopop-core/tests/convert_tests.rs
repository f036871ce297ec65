// autopop-core/tests/convert_tests.rs

use autopop_core::external::mocks::MockConverter;
use autopop_core::external::ConverterExit;
use autopop_core::{convert_title, stage_loader_stub, ConversionResult, CoreError, ElfPrefix, FailureReason};
use std::fs;
use std::path::PathBuf;
use tempfile::{tempdir, TempDir};

struct Dirs {
    source: TempDir,
    dest: TempDir,
    work: TempDir,
}

fn dirs() -> Dirs {
    Dirs {
        source: tempdir().expect("source dir"),
        dest: tempdir().expect("dest dir"),
        work: tempdir().expect("work dir"),
    }
}

fn cue_path(d: &Dirs) -> PathBuf {
    d.source.path().join("game1.cue")
}

#[test]
fn test_convert_success_moves_vcd_to_destination() -> Result<(), Box<dyn std::error::Error>> {
    let d = dirs();
    let converter = MockConverter::succeeding();

    let result = convert_title(&converter, &cue_path(&d), d.dest.path(), "game1", d.work.path())?;

    let expected = d.dest.path().join("game1.VCD");
    assert_eq!(result, ConversionResult::Succeeded { vcd_path: expected.clone() });
    assert!(expected.exists());
    assert!(!d.work.path().join("game1.VCD").exists(), "VCD should leave the work dir");

    let calls = converter.get_received_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].cue_path, cue_path(&d));
    assert_eq!(calls[0].vcd_name, "game1.VCD");
    assert_eq!(calls[0].work_dir, d.work.path());
    Ok(())
}

#[test]
fn test_existing_vcd_skips_converter() -> Result<(), Box<dyn std::error::Error>> {
    let d = dirs();
    fs::write(d.dest.path().join("game1.VCD"), b"previous run")?;
    let converter = MockConverter::succeeding();

    let result = convert_title(&converter, &cue_path(&d), d.dest.path(), "game1", d.work.path())?;

    assert_eq!(result, ConversionResult::AlreadyExists);
    assert!(converter.get_received_calls().is_empty());
    assert_eq!(fs::read(d.dest.path().join("game1.VCD"))?, b"previous run");
    Ok(())
}

#[test]
fn test_success_code_without_output_fails() -> Result<(), Box<dyn std::error::Error>> {
    let d = dirs();
    let converter = MockConverter::succeeding_without_output();

    let result = convert_title(&converter, &cue_path(&d), d.dest.path(), "game1", d.work.path())?;

    assert_eq!(result, ConversionResult::Failed(FailureReason::OutputMissing));
    assert!(!d.dest.path().join("game1.VCD").exists());
    Ok(())
}

#[test]
fn test_zero_exit_code_is_a_failure() -> Result<(), Box<dyn std::error::Error>> {
    let d = dirs();
    // CUE2POPS signals success with 1; a conventional 0 is not success here.
    let converter = MockConverter::exiting_with(0);

    let result = convert_title(&converter, &cue_path(&d), d.dest.path(), "game1", d.work.path())?;

    assert_eq!(result, ConversionResult::Failed(FailureReason::ExitCode(Some(0))));
    Ok(())
}

#[test]
fn test_failure_leaves_stray_output_in_work_dir() -> Result<(), Box<dyn std::error::Error>> {
    let d = dirs();
    let converter = MockConverter::succeeding();
    converter.add_exit_expectation("game1", 2, true);

    let result = convert_title(&converter, &cue_path(&d), d.dest.path(), "game1", d.work.path())?;

    assert_eq!(result, ConversionResult::Failed(FailureReason::ExitCode(Some(2))));
    assert!(!d.dest.path().join("game1.VCD").exists());
    Ok(())
}

#[test]
fn test_timeout_is_a_failure() -> Result<(), Box<dyn std::error::Error>> {
    let d = dirs();
    let converter = MockConverter::succeeding();
    converter.add_expectation("game1", Ok(ConverterExit::TimedOut), false);

    let result = convert_title(&converter, &cue_path(&d), d.dest.path(), "game1", d.work.path())?;

    assert_eq!(result, ConversionResult::Failed(FailureReason::TimedOut));
    Ok(())
}

#[test]
fn test_base_name_is_trimmed_before_naming() -> Result<(), Box<dyn std::error::Error>> {
    let d = dirs();
    let converter = MockConverter::succeeding();

    convert_title(&converter, &cue_path(&d), d.dest.path(), " game1 ", d.work.path())?;

    assert_eq!(converter.get_received_calls()[0].vcd_name, "game1.VCD");
    assert!(d.dest.path().join("game1.VCD").exists());
    Ok(())
}

#[test]
fn test_stage_loader_stub_copies_template() -> Result<(), Box<dyn std::error::Error>> {
    let d = dirs();
    let template = d.work.path().join("POPSTARTER.ELF");
    fs::write(&template, b"\x7fELF loader bytes")?;

    let stub = stage_loader_stub(&template, "game1", d.dest.path(), ElfPrefix::Sb)?;

    assert_eq!(stub, d.dest.path().join("SB.game1.ELF"));
    assert_eq!(fs::read(&stub)?, fs::read(&template)?);
    Ok(())
}

#[test]
fn test_stage_loader_stub_overwrites_existing() -> Result<(), Box<dyn std::error::Error>> {
    let d = dirs();
    let template = d.work.path().join("POPSTARTER.ELF");
    fs::write(&template, b"new loader")?;
    fs::write(d.dest.path().join("XX.game1.ELF"), b"old loader")?;

    let stub = stage_loader_stub(&template, "game1", d.dest.path(), ElfPrefix::Xx)?;

    assert_eq!(fs::read(stub)?, b"new loader");
    Ok(())
}

#[test]
fn test_stage_loader_stub_missing_template() {
    let d = dirs();
    let template = d.work.path().join("POPSTARTER.ELF");

    match stage_loader_stub(&template, "game1", d.dest.path(), ElfPrefix::Xx) {
        Err(CoreError::LoaderTemplateMissing(path)) => assert_eq!(path, template),
        other => panic!("Unexpected result: {:?}", other),
    }
}
