use assert_fs::TempDir;
use assert_fs::prelude::PathChild;
use predicates::prelude::{PredicateBooleanExt, predicate};

mod common;

#[test]
fn identical_files_are_reported_identical() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    common::write_bytes(dir.child("left.bin").path(), &[0xDE, 0xAD, 0xBE, 0xEF]);
    common::write_bytes(dir.child("right.bin").path(), &[0xDE, 0xAD, 0xBE, 0xEF]);

    common::bineye_cmd()
        .arg(dir.child("left.bin").path())
        .arg(dir.child("right.bin").path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Mode: FILE COMPARISON"))
        .stdout(predicate::str::contains("Files are IDENTICAL"))
        .stdout(predicate::str::contains("Average similarity: 100.00%"));

    Ok(())
}

#[test]
fn different_files_report_offset_and_similarity() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    common::write_bytes(dir.child("left.bin").path(), &[0x01, 0x02, 0x03, 0x04]);
    common::write_bytes(dir.child("right.bin").path(), &[0x01, 0xFF, 0x03, 0x04]);

    common::bineye_cmd()
        .arg(dir.child("left.bin").path())
        .arg(dir.child("right.bin").path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Files are DIFFERENT"))
        .stdout(predicate::str::contains("Differences found: 1 bytes"))
        .stdout(predicate::str::contains(
            "First difference at offset: 0x00000001",
        ))
        .stdout(predicate::str::contains("Similarity: 75.00%"))
        .stdout(predicate::str::contains("HEX DUMP - File 1"))
        .stdout(predicate::str::contains("DETAILED DIFFERENCES"))
        .stdout(predicate::str::contains("0x00000001"));

    Ok(())
}

#[test]
fn truncated_file_counts_missing_bytes_as_differences() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    common::write_bytes(dir.child("short.bin").path(), &[0x10, 0x20, 0x30]);
    common::write_bytes(dir.child("long.bin").path(), &[0x10, 0x20, 0x30, 0x40, 0x50]);

    common::bineye_cmd()
        .arg(dir.child("short.bin").path())
        .arg(dir.child("long.bin").path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Differences found: 2 bytes"))
        .stdout(predicate::str::contains("Similarity: 60.00%"))
        .stdout(predicate::str::contains("EOF"));

    Ok(())
}

#[test]
fn two_empty_files_are_identical() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    common::write_bytes(dir.child("empty_a.bin").path(), &[]);
    common::write_bytes(dir.child("empty_b.bin").path(), &[]);

    common::bineye_cmd()
        .arg(dir.child("empty_a.bin").path())
        .arg(dir.child("empty_b.bin").path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Files are IDENTICAL"))
        .stdout(predicate::str::contains("Average similarity: 100.00%"));

    Ok(())
}

#[test]
fn side_by_side_view_is_rendered_on_request() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    common::write_bytes(dir.child("a.bin").path(), b"0123456789ABCDEF");
    common::write_bytes(dir.child("b.bin").path(), b"0123456789ABCDEX");

    common::bineye_cmd()
        .arg(dir.child("a.bin").path())
        .arg(dir.child("b.bin").path())
        .arg("--side-by-side")
        .assert()
        .success()
        .stdout(predicate::str::contains("SIDE-BY-SIDE COMPARISON"))
        .stdout(predicate::str::contains("File 1 (Hex + ASCII)"));

    Ok(())
}

#[test]
fn missing_path_fails_with_config_error() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    common::write_bytes(dir.child("present.bin").path(), &[0x00]);

    common::bineye_cmd()
        .arg(dir.child("present.bin").path())
        .arg(dir.child("absent.bin").path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));

    Ok(())
}

#[test]
fn mixed_target_kinds_fail_before_comparing() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    common::write_bytes(dir.child("file.bin").path(), &[0x00]);

    common::bineye_cmd()
        .arg(dir.child("file.bin").path())
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration error"))
        .stderr(predicate::str::contains("file with a folder"));

    Ok(())
}

#[test]
fn extensions_are_ignored_with_a_warning_in_file_mode() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    common::write_bytes(dir.child("a.bin").path(), &[0x00]);
    common::write_bytes(dir.child("b.bin").path(), &[0x00]);

    common::bineye_cmd()
        .arg(dir.child("a.bin").path())
        .arg(dir.child("b.bin").path())
        .arg("--extensions")
        .arg(".txt")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "--extensions ignored for file comparison",
        ))
        .stdout(predicate::str::contains("Files are IDENTICAL"));

    Ok(())
}

#[test]
fn difference_table_is_capped_at_fifty_rows() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    common::write_bytes(dir.child("zeros.bin").path(), &[0x00; 80]);
    common::write_bytes(dir.child("ones.bin").path(), &[0x01; 80]);

    common::bineye_cmd()
        .arg(dir.child("zeros.bin").path())
        .arg(dir.child("ones.bin").path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Differences found: 80 bytes"))
        .stdout(predicate::str::contains("0x00000031"))
        .stdout(predicate::str::contains("... and 30 more differing bytes"))
        .stdout(predicate::str::contains("0x00000032").not());

    Ok(())
}
