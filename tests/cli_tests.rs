//! Integration tests for the CLI interface
//!
//! Runs the binary against real image files in a temporary directory

mod common;

use assert_cmd::Command;
use common::PhotoRoll;
use predicates::prelude::*;

#[test]
fn test_cli_without_command_prints_usage() {
    let mut cmd = Command::cargo_bin("phototools").unwrap();
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_help_lists_commands() {
    let mut cmd = Command::cargo_bin("phototools").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("rename"))
        .stdout(predicate::str::contains("merge"));
}

#[test]
fn test_invalid_command() {
    let mut cmd = Command::cargo_bin("phototools").unwrap();
    cmd.arg("rotate")
        .arg(".")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_rename_resequences_files() {
    let roll = PhotoRoll::new()
        .unwrap()
        .with_image("PICT0006.JPG", 8, 6, [10, 10, 10])
        .unwrap()
        .with_image("PICT0009.JPG", 8, 6, [20, 20, 20])
        .unwrap()
        .with_image("PICT0011b.JPG", 8, 6, [30, 30, 30])
        .unwrap()
        .with_image("PICT0018.JPG", 8, 6, [40, 40, 40])
        .unwrap()
        .with_file("notes.txt", "not an image")
        .unwrap();

    roll.command()
        .arg("rename")
        .arg(roll.roll())
        .assert()
        .success()
        .stdout(predicate::str::contains("rename successful: 4 files"));

    assert_eq!(
        PhotoRoll::file_names(&roll.output("_(renamed)")),
        [
            "PICT0001.JPG",
            "PICT0002.JPG",
            "PICT0002b.JPG",
            "PICT0003.JPG"
        ]
    );
}

#[test]
fn test_rename_dry_run_writes_nothing() {
    let roll = PhotoRoll::new()
        .unwrap()
        .with_image("PICT0006.JPG", 4, 4, [0, 0, 0])
        .unwrap()
        .with_image("PICT0009.JPG", 4, 4, [0, 0, 0])
        .unwrap();

    roll.command()
        .arg("rename")
        .arg(roll.roll())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("PICT0002.JPG"));

    assert!(!roll.output("_(renamed)").exists());
}

#[test]
fn test_rename_malformed_name_fails_before_writing() {
    let roll = PhotoRoll::new()
        .unwrap()
        .with_image("PICT0006.JPG", 4, 4, [0, 0, 0])
        .unwrap()
        .with_image("cover.JPG", 4, 4, [0, 0, 0])
        .unwrap();

    roll.command()
        .arg("rename")
        .arg(roll.roll())
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("cover.JPG"));

    assert!(!roll.output("_(renamed)").exists());
}

#[test]
fn test_pad_squares_images() {
    let roll = PhotoRoll::new()
        .unwrap()
        .with_image("P1.PNG", 6, 2, [200, 0, 0])
        .unwrap();

    roll.command()
        .arg("pad")
        .arg(roll.roll())
        .arg("black")
        .assert()
        .success()
        .stdout(predicate::str::contains("Padding files from"));

    let padded = image::open(roll.output("_(padded)").join("P1.PNG"))
        .unwrap()
        .to_rgb8();
    assert_eq!(padded.dimensions(), (6, 6));
    assert_eq!(padded.get_pixel(0, 0).0, [0, 0, 0]);
    assert_eq!(padded.get_pixel(0, 2).0, [200, 0, 0]);
    assert_eq!(padded.get_pixel(5, 5).0, [0, 0, 0]);
}

#[test]
fn test_pad_uses_configured_colour() {
    let roll = PhotoRoll::new()
        .unwrap()
        .with_image("P1.PNG", 2, 4, [0, 0, 0])
        .unwrap()
        .with_config("pad_colour = [1, 2, 3]\n")
        .unwrap();

    roll.command().arg("pad").arg(roll.roll()).assert().success();

    let padded = image::open(roll.output("_(padded)").join("P1.PNG"))
        .unwrap()
        .to_rgb8();
    assert_eq!(padded.get_pixel(0, 0).0, [1, 2, 3]);
    assert_eq!(padded.get_pixel(1, 0).0, [0, 0, 0]);
}

#[test]
fn test_neg_inverts_images() {
    let roll = PhotoRoll::new()
        .unwrap()
        .with_image("N1.PNG", 3, 3, [0, 100, 255])
        .unwrap();

    roll.command().arg("neg").arg(roll.roll()).assert().success();

    let negative = image::open(roll.output("_(negative)").join("N1.PNG"))
        .unwrap()
        .to_rgb8();
    assert_eq!(negative.get_pixel(1, 1).0, [255, 155, 0]);
}

#[test]
fn test_neg_on_empty_directory_is_a_no_op() {
    let roll = PhotoRoll::new().unwrap();

    roll.command()
        .arg("neg")
        .arg(roll.roll())
        .assert()
        .success()
        .stdout(predicate::str::contains("0 files"));

    assert!(!roll.output("_(negative)").exists());
}

#[test]
fn test_merge_writes_grid_png() {
    let roll = PhotoRoll::new()
        .unwrap()
        .with_image("M1.PNG", 10, 5, [10, 0, 0])
        .unwrap()
        .with_image("M2.PNG", 10, 5, [20, 0, 0])
        .unwrap()
        .with_image("M3.JPG", 10, 5, [0, 0, 0])
        .unwrap();

    roll.command()
        .args(["merge"])
        .arg(roll.roll())
        .args(["2", "column", "row"])
        .assert()
        .success()
        .stdout(predicate::str::contains("merge successful: 3 files"));

    let output = roll.output("_(merged)");
    assert_eq!(
        PhotoRoll::file_names(&output),
        ["(2x2)_row-merged.PNG"]
    );

    let merged = image::open(output.join("(2x2)_row-merged.PNG"))
        .unwrap()
        .to_rgba8();
    assert_eq!(merged.dimensions(), (20, 10));
    assert_eq!(merged.get_pixel(10, 0).0, [20, 0, 0, 255]);
    assert_eq!(merged.get_pixel(15, 7).0, [255, 255, 255, 255]);
}

#[test]
fn test_merge_invalid_axis() {
    let roll = PhotoRoll::new().unwrap();

    roll.command()
        .arg("merge")
        .arg(roll.roll())
        .args(["2", "diagonal", "row"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("E2001"));
}

#[test]
fn test_merge_zero_amount_is_rejected() {
    let roll = PhotoRoll::new().unwrap();

    roll.command()
        .arg("merge")
        .arg(roll.roll())
        .args(["0", "row", "row"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_merge_empty_directory_fails() {
    let roll = PhotoRoll::new().unwrap();

    roll.command()
        .arg("merge")
        .arg(roll.roll())
        .args(["1", "row", "row"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("no images to merge"));
}

#[test]
fn test_too_many_files() {
    let roll = PhotoRoll::new()
        .unwrap()
        .with_image("A1.PNG", 1, 1, [0, 0, 0])
        .unwrap()
        .with_image("A2.PNG", 1, 1, [0, 0, 0])
        .unwrap()
        .with_config("max_files = 1\n")
        .unwrap();

    roll.command()
        .arg("neg")
        .arg(roll.roll())
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("there can be at most 1 files"));

    assert!(!roll.output("_(negative)").exists());
}

#[test]
fn test_max_files_from_environment() {
    let roll = PhotoRoll::new()
        .unwrap()
        .with_image("A1.PNG", 1, 1, [0, 0, 0])
        .unwrap()
        .with_image("A2.PNG", 1, 1, [0, 0, 0])
        .unwrap();

    roll.command()
        .env("PHOTOTOOLS_MAX_FILES", "1")
        .arg("neg")
        .arg(roll.roll())
        .assert()
        .failure()
        .code(5);
}

#[test]
fn test_missing_directory() {
    let roll = PhotoRoll::new().unwrap();

    roll.command()
        .arg("neg")
        .arg(roll.root().join("absent"))
        .assert()
        .failure()
        .code(6);
}

#[test]
fn test_missing_config_file() {
    let roll = PhotoRoll::new().unwrap();

    let mut cmd = Command::cargo_bin("phototools").unwrap();
    cmd.arg("--config")
        .arg(roll.root().join("absent.toml"))
        .arg("neg")
        .arg(roll.roll())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Configuration problem"));
}

#[test]
fn test_verbose_shows_error_chain() {
    let roll = PhotoRoll::new()
        .unwrap()
        .with_image("A1.PNG", 1, 1, [0, 0, 0])
        .unwrap()
        .with_config("max_files = \"many\"\n")
        .unwrap();

    roll.command()
        .arg("-v")
        .arg("neg")
        .arg(roll.roll())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("E5001: Configuration file is missing or invalid"))
        .stderr(predicate::str::contains("caused by"));
}
