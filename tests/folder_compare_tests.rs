use assert_fs::TempDir;
use assert_fs::prelude::PathChild;
use predicates::prelude::{PredicateBooleanExt, predicate};

mod common;

#[test]
fn overlapping_trees_list_files_unique_to_each_side() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let left = dir.child("left");
    let right = dir.child("right");
    common::write_overlapping_trees(left.path(), right.path());

    common::bineye_cmd()
        .arg(left.path())
        .arg(right.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Mode: FOLDER COMPARISON"))
        .stdout(predicate::str::contains("Files only in Folder 1 (1):"))
        .stdout(predicate::str::contains("  - b.log"))
        .stdout(predicate::str::contains("Files only in Folder 2 (1):"))
        .stdout(predicate::str::contains("  - c.log"))
        .stdout(predicate::str::contains("\u{2713} Found 1 file(s) to compare"))
        .stdout(predicate::str::contains("Comparing: a.txt"))
        .stdout(predicate::str::contains("Total files compared: 1"))
        .stdout(predicate::str::contains("Identical files: 1"));

    Ok(())
}

#[test]
fn extension_filter_restricts_the_matched_pairs() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let left = dir.child("left");
    let right = dir.child("right");
    common::write_bytes(&left.path().join("keep.txt"), b"same");
    common::write_bytes(&right.path().join("keep.txt"), b"same");
    common::write_bytes(&left.path().join("skip.bin"), &[0x00]);
    common::write_bytes(&right.path().join("skip.bin"), &[0xFF]);

    common::bineye_cmd()
        .arg(left.path())
        .arg(right.path())
        .arg("--extensions")
        .arg(".txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("Extensions: .txt"))
        .stdout(predicate::str::contains("Comparing: keep.txt"))
        .stdout(predicate::str::contains("Comparing: skip.bin").not())
        .stdout(predicate::str::contains("Total files compared: 1"));

    Ok(())
}

#[test]
fn non_recursive_mode_ignores_subdirectories() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let left = dir.child("left");
    let right = dir.child("right");
    common::write_bytes(&left.path().join("top.bin"), &[0x01]);
    common::write_bytes(&right.path().join("top.bin"), &[0x01]);
    common::write_bytes(&left.path().join("sub").join("inner.bin"), &[0x02]);
    common::write_bytes(&right.path().join("sub").join("inner.bin"), &[0x03]);

    common::bineye_cmd()
        .arg(left.path())
        .arg(right.path())
        .arg("--no-recursive")
        .assert()
        .success()
        .stdout(predicate::str::contains("Recursive: false"))
        .stdout(predicate::str::contains("Comparing: top.bin"))
        .stdout(predicate::str::contains("inner.bin").not());

    Ok(())
}

#[test]
fn nested_pairs_use_forward_slash_relative_names() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let left = dir.child("left");
    let right = dir.child("right");
    common::write_bytes(&left.path().join("sub").join("inner.bin"), &[0x02]);
    common::write_bytes(&right.path().join("sub").join("inner.bin"), &[0x02]);

    common::bineye_cmd()
        .arg(left.path())
        .arg(right.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Comparing: sub/inner.bin"))
        .stdout(predicate::str::contains("Identical files: 1"));

    Ok(())
}

#[test]
fn empty_intersection_is_not_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let left = dir.child("left");
    let right = dir.child("right");
    common::write_bytes(&left.path().join("only_left.bin"), &[0x01]);
    common::write_bytes(&right.path().join("only_right.bin"), &[0x02]);

    common::bineye_cmd()
        .arg(left.path())
        .arg(right.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No files to compare!"))
        .stdout(predicate::str::contains("Total files compared: 0"));

    Ok(())
}

#[test]
fn different_pair_in_folder_mode_is_counted() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let left = dir.child("left");
    let right = dir.child("right");
    common::write_bytes(&left.path().join("same.bin"), &[0xAA, 0xBB]);
    common::write_bytes(&right.path().join("same.bin"), &[0xAA, 0xBB]);
    common::write_bytes(&left.path().join("diff.bin"), &[0x00, 0x00]);
    common::write_bytes(&right.path().join("diff.bin"), &[0x00, 0x01]);

    common::bineye_cmd()
        .arg(left.path())
        .arg(right.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total files compared: 2"))
        .stdout(predicate::str::contains("Identical files: 1"))
        .stdout(predicate::str::contains("Different files: 1"))
        .stdout(predicate::str::contains("Average similarity: 75.00%"));

    Ok(())
}

mod degraded_pairs {
    use bineye::areas::session::{CompareOptions, Session, Target};
    use bineye::artifacts::matching::file_pair::FilePair;
    use assert_fs::TempDir;
    use assert_fs::prelude::PathChild;

    /// A pair whose content cannot be read degrades to empty content and
    /// is reported as different, even against an empty counterpart.
    #[test]
    fn unreadable_side_degrades_to_a_different_pair() {
        let dir = TempDir::new().unwrap();
        crate::common::write_bytes(dir.child("present.bin").path(), &[]);

        let target_a = Target::from_path(dir.child("present.bin").path()).unwrap();
        let target_b = target_a.clone();
        let mut session = Session::new(
            target_a,
            target_b,
            CompareOptions::default(),
            Box::new(std::io::sink()),
        )
        .unwrap();

        let pair = FilePair::new(
            "ghost.bin".to_string(),
            dir.child("present.bin").path().to_path_buf(),
            dir.child("ghost.bin").path().to_path_buf(),
        );
        session.compare_pair(&pair).unwrap();

        let result = &session.results()[0];
        assert!(result.degraded);
        assert!(!result.identical);
        assert_eq!(result.difference_count, 0);
    }
}
