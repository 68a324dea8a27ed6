//! Integration tests for the letter writer.

use std::fs;

use em_output::{LetterWriter, OutputError};

#[test]
fn creates_directory_on_first_write() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join("output");
    let mut writer = LetterWriter::new(&dir);
    assert!(!dir.exists());

    let path = writer.write("1", "<p>hi</p>").unwrap();

    assert_eq!(path, dir.join("thanks_1.html"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "<p>hi</p>");
}

#[test]
fn existing_directory_is_reused() {
    let root = tempfile::tempdir().unwrap();
    let mut writer = LetterWriter::new(root.path());
    writer.write("1", "first").unwrap();
    writer.write("2", "second").unwrap();
    writer.write("1", "again").unwrap();

    let mut names: Vec<String> = fs::read_dir(root.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["thanks_1.html", "thanks_2.html"]);
    assert_eq!(
        fs::read_to_string(root.path().join("thanks_1.html")).unwrap(),
        "again"
    );
}

#[test]
fn unwritable_directory_is_an_error() {
    let root = tempfile::tempdir().unwrap();
    let blocker = root.path().join("output");
    fs::write(&blocker, "not a directory").unwrap();

    let mut writer = LetterWriter::new(&blocker);
    let err = writer.write("1", "x").unwrap_err();
    assert!(matches!(err, OutputError::CreateDir { .. }));
}
