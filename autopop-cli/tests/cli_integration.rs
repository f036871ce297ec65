use assert_cmd::Command;
use predicates::str::contains;
use std::error::Error;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

// Helper function to get the path to the compiled binary
fn autopop_cmd() -> Command {
    let mut cmd = Command::cargo_bin("autopop").expect("Failed to find autopop binary");
    cmd.env("NO_COLOR", "1")
        .env_remove("AUTOPOP_CONVERTER")
        .env_remove("AUTOPOP_LOADER")
        .env_remove("RUST_LOG");
    cmd
}

fn write_title(dir: &Path, base: &str) -> Result<(), Box<dyn Error>> {
    fs::write(
        dir.join(format!("{base}.cue")),
        format!("FILE \"{base}.bin\" BINARY\n  TRACK 01 MODE2/2352\n    INDEX 01 00:00:00\n"),
    )?;
    fs::write(dir.join(format!("{base}.bin")), b"raw disc")?;
    Ok(())
}

#[test]
fn test_non_existent_source() -> Result<(), Box<dyn Error>> {
    let dest = tempdir()?;

    autopop_cmd()
        .arg("surely/this/does/not/exist")
        .arg(dest.path())
        .assert()
        .failure()
        .stderr(contains("is not valid or does not exist"));

    Ok(())
}

#[test]
fn test_invalid_prefix() -> Result<(), Box<dyn Error>> {
    let source = tempdir()?;
    let dest = tempdir()?;
    write_title(source.path(), "game1")?;

    autopop_cmd()
        .arg(source.path())
        .arg(dest.path())
        .arg("zz")
        .assert()
        .failure()
        .stderr(contains("Invalid ELF prefix ZZ"));

    assert_eq!(fs::read_dir(dest.path())?.count(), 0);
    Ok(())
}

#[test]
fn test_no_cue_sheets() -> Result<(), Box<dyn Error>> {
    let source = tempdir()?;
    let dest = tempdir()?;

    autopop_cmd()
        .arg(source.path())
        .arg(dest.path())
        .assert()
        .failure()
        .stderr(contains("Cue files not found"));

    Ok(())
}

#[test]
fn test_missing_converter() -> Result<(), Box<dyn Error>> {
    let source = tempdir()?;
    let dest = tempdir()?;
    let work = tempdir()?;
    write_title(source.path(), "game1")?;

    autopop_cmd()
        .arg(source.path())
        .arg(dest.path())
        .arg("--work-dir")
        .arg(work.path())
        .assert()
        .failure()
        .stderr(contains("Converter executable not found"));

    Ok(())
}

#[test]
fn test_missing_destination_argument() {
    autopop_cmd()
        .arg("only_source")
        .assert()
        .failure()
        .stderr(contains("DEST_DIR"));
}

#[cfg(unix)]
mod with_fake_converter {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    const LOADER_BYTES: &[u8] = b"\x7fELF popstarter";

    // Mimics CUE2POPS: writes the requested name into the working directory
    // and exits with 1 on success.
    fn install_tools(work: &Path) -> Result<(), Box<dyn Error>> {
        let script = work.join("CUE2POPS.exe");
        fs::write(&script, "#!/bin/sh\nprintf 'vcd for %s' \"$1\" > \"$2\"\nexit 1\n")?;
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755))?;
        fs::write(work.join("POPSTARTER.ELF"), LOADER_BYTES)?;
        Ok(())
    }

    #[test]
    fn test_full_run_converts_and_stages() -> Result<(), Box<dyn Error>> {
        let source = tempdir()?;
        let dest = tempdir()?;
        let work = tempdir()?;
        write_title(source.path(), "game1")?;
        install_tools(work.path())?;

        autopop_cmd()
            .arg(source.path())
            .arg(dest.path())
            .arg("--work-dir")
            .arg(work.path())
            .assert()
            .success()
            .stderr(contains("Found 1 cue sheet(s)"));

        assert!(dest.path().join("game1.VCD").is_file());
        assert!(!work.path().join("game1.VCD").exists());
        assert_eq!(fs::read(dest.path().join("XX.game1.ELF"))?, LOADER_BYTES);

        // A second run leaves everything as it was and stages nothing new.
        fs::remove_file(dest.path().join("XX.game1.ELF"))?;
        autopop_cmd()
            .arg(source.path())
            .arg(dest.path())
            .arg("--work-dir")
            .arg(work.path())
            .assert()
            .success()
            .stderr(contains("already exists"));
        assert!(!dest.path().join("XX.game1.ELF").exists());

        Ok(())
    }

    #[test]
    fn test_sb_prefix_and_skipped_iso() -> Result<(), Box<dyn Error>> {
        let source = tempdir()?;
        let dest = tempdir()?;
        let work = tempdir()?;
        write_title(source.path(), "game1")?;
        fs::write(source.path().join("game2.cue"), "FILE \"game2.iso\" BINARY\n")?;
        fs::write(source.path().join("game2.iso"), b"iso")?;
        install_tools(work.path())?;

        autopop_cmd()
            .arg(source.path())
            .arg(dest.path())
            .arg("sb")
            .arg("--work-dir")
            .arg(work.path())
            .assert()
            .success();

        let mut names: Vec<String> = fs::read_dir(dest.path())?
            .map(|e| e.map(|e| e.file_name().to_string_lossy().into_owned()))
            .collect::<Result<_, _>>()?;
        names.sort();
        assert_eq!(names, vec!["SB.game1.ELF", "game1.VCD"]);

        Ok(())
    }
}
