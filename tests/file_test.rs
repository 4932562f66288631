mod common;
use common::*;
use ib::mach::{Runtime, LPRINT_FILENAME};

#[test]
fn test_save_new_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prog.bas");
    let path = path.to_str().unwrap();

    let mut r = Runtime::new();
    enter(&mut r, "10 LET A=5");
    enter(&mut r, "20 PRINT A");
    let listing = enter(&mut r, "LIST");

    assert_eq!(enter(&mut r, &format!("SAVE {}", path)), "OK\nREADY\n");
    assert_eq!(
        std::fs::read_to_string(path).unwrap(),
        "10 LET A=5\n20 PRINT A\n"
    );

    assert_eq!(enter(&mut r, "NEW"), "OK\nREADY\n");
    assert_eq!(enter(&mut r, "LIST"), "OK\nREADY\n");
    assert_eq!(enter(&mut r, &format!("LOAD {}", path)), "OK\nREADY\n");
    assert_eq!(enter(&mut r, "LIST"), listing);
    assert_eq!(enter(&mut r, "RUN"), "5\nOK\nREADY\n");
}

#[test]
fn test_filename_required() {
    let mut r = Runtime::new();
    assert_eq!(
        enter(&mut r, "SAVE"),
        "\x07ERROR: FILENAME REQUIRED\nREADY\n"
    );
    assert_eq!(
        enter(&mut r, "LOAD   "),
        "\x07ERROR: FILENAME REQUIRED\nREADY\n"
    );
}

#[test]
fn test_load_missing_file_keeps_program() {
    let mut r = Runtime::new();
    enter(&mut r, "10 PRINT 1");
    assert_eq!(
        enter(&mut r, "LOAD no-such-file.bas"),
        "\x07ERROR: FILE NOT FOUND\nREADY\n"
    );
    assert_eq!(enter(&mut r, "LIST"), "10 PRINT 1\nOK\nREADY\n");
}

#[test]
fn test_load_accepts_crlf() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("crlf.bas");
    std::fs::write(&path, "10 PRINT 1\r\n20 PRINT 2\r\n").unwrap();

    let mut r = Runtime::new();
    assert_eq!(
        enter(&mut r, &format!("LOAD {}", path.to_str().unwrap())),
        "OK\nREADY\n"
    );
    assert_eq!(enter(&mut r, "LIST"), "10 PRINT 1\n20 PRINT 2\nOK\nREADY\n");
}

#[test]
fn test_load_reports_bad_lines_and_continues() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.bas");
    std::fs::write(&path, "banana\n\n20 PRINT 2\n").unwrap();

    let mut r = Runtime::new();
    assert_eq!(
        enter(&mut r, &format!("LOAD {}", path.to_str().unwrap())),
        "\x07ERROR: INVALID LINE NUMBER\nOK\nREADY\n"
    );
    assert_eq!(enter(&mut r, "LIST"), "20 PRINT 2\nOK\nREADY\n");
}

#[test]
fn test_lprint_appends() {
    let _ = std::fs::remove_file(LPRINT_FILENAME);
    let mut r = Runtime::new();
    assert_eq!(enter(&mut r, "LPRINT 5+5"), "OK\nREADY\n");
    assert_eq!(enter(&mut r, "LPRINT"), "OK\nREADY\n");
    assert_eq!(enter(&mut r, "LPRINT 100*3"), "OK\nREADY\n");
    assert_eq!(
        std::fs::read_to_string(LPRINT_FILENAME).unwrap(),
        "10\n0\n44\n"
    );
    let _ = std::fs::remove_file(LPRINT_FILENAME);
}
