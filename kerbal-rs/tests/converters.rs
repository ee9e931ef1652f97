//! End-to-end tests for the converter binaries

use assert_cmd::Command;
use ksp_mbm::encode::encode_mbm;
use ksp_mbm::types::{BitDepth, MbmImage, TextureKind};
use predicates::prelude::*;
use std::path::PathBuf;

fn write_test_mbm(dir: &tempfile::TempDir, name: &str) -> (PathBuf, Vec<u8>) {
    let pixels: Vec<u8> = (0..4 * 2 * 3).map(|n| (n * 11 + 3) as u8).collect();
    let image = MbmImage::new(4, 2, TextureKind::Color, BitDepth::Rgb24, pixels);
    let bytes = encode_mbm(&image).unwrap();
    let path = dir.path().join(name);
    std::fs::write(&path, &bytes).unwrap();
    (path, bytes)
}

#[test]
fn mbm2tga_converts_next_to_the_input() {
    let dir = tempfile::tempdir().unwrap();
    let (input, _) = write_test_mbm(&dir, "part.mbm");

    Command::cargo_bin("mbm2tga")
        .unwrap()
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Converted"));

    let output = dir.path().join("part.tga");
    let tga = std::fs::read(output).unwrap();
    // 18-byte header plus 4x2 pixels at 3 bytes each
    assert_eq!(tga.len(), 18 + 4 * 2 * 3);
    assert_eq!(tga[2], 2);
}

#[test]
fn binary_round_trip_recovers_the_original_mbm() {
    let dir = tempfile::tempdir().unwrap();
    let (input, original) = write_test_mbm(&dir, "part.mbm");

    Command::cargo_bin("mbm2tga")
        .unwrap()
        .arg(&input)
        .assert()
        .success();
    Command::cargo_bin("tga2mbm")
        .unwrap()
        .arg(dir.path().join("part.tga"))
        .assert()
        .success();

    let recovered = std::fs::read(&input).unwrap();
    assert_eq!(recovered, original);
}

#[test]
fn mbm2png_produces_a_png_signature() {
    let dir = tempfile::tempdir().unwrap();
    let (input, _) = write_test_mbm(&dir, "part.mbm");

    Command::cargo_bin("mbm2png")
        .unwrap()
        .arg(&input)
        .assert()
        .success();

    let png = std::fs::read(dir.path().join("part.png")).unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn corrupt_input_fails_with_nonzero_exit() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.mbm");
    std::fs::write(&input, b"not an mbm file at all").unwrap();

    Command::cargo_bin("mbm2png")
        .unwrap()
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to convert"));

    assert!(!dir.path().join("broken.png").exists());
}

#[test]
fn missing_input_file_is_a_fatal_error() {
    Command::cargo_bin("mbm2tga")
        .unwrap()
        .arg("does-not-exist.mbm")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read source file"));
}

#[test]
fn empty_line_ends_the_interactive_loop_cleanly() {
    Command::cargo_bin("mbm2png")
        .unwrap()
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Filename: "));
}

#[test]
fn interactive_loop_survives_a_failed_file() {
    let dir = tempfile::tempdir().unwrap();
    let (input, _) = write_test_mbm(&dir, "good.mbm");
    let bad = dir.path().join("bad.mbm");
    std::fs::write(&bad, b"garbage").unwrap();

    let stdin = format!("{}\n{}\n\n", bad.display(), input.display());
    Command::cargo_bin("mbm2tga")
        .unwrap()
        .write_stdin(stdin)
        .assert()
        .success()
        .stderr(predicate::str::contains("ERROR"));

    // The good file after the failure was still converted.
    assert!(dir.path().join("good.tga").exists());
}
