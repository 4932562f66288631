mod common;
use common::*;
use ib::mach::Runtime;

#[test]
fn test_relops() {
    let mut r = Runtime::new();
    assert_eq!(enter(&mut r, "IF 1=1 THEN PRINT 5"), "5\nOK\nREADY\n");
    assert_eq!(enter(&mut r, "IF 1=2 THEN PRINT 5"), "OK\nREADY\n");
    assert_eq!(enter(&mut r, "IF 1<>2 THEN PRINT 5"), "5\nOK\nREADY\n");
    assert_eq!(enter(&mut r, "IF 2<3 THEN PRINT 5"), "5\nOK\nREADY\n");
    assert_eq!(enter(&mut r, "IF 3<2 THEN PRINT 5"), "OK\nREADY\n");
    assert_eq!(enter(&mut r, "IF 3>2 THEN PRINT 5"), "5\nOK\nREADY\n");
}

#[test]
fn test_comparison_is_signed() {
    let mut r = Runtime::new();
    assert_eq!(enter(&mut r, "IF -1<1 THEN PRINT 7"), "7\nOK\nREADY\n");
    assert_eq!(enter(&mut r, "IF 127+1<0 THEN PRINT 7"), "7\nOK\nREADY\n");
}

#[test]
fn test_nested_if() {
    let mut r = Runtime::new();
    assert_eq!(
        enter(&mut r, "IF 1<2 THEN IF 2<3 THEN PRINT 9"),
        "9\nOK\nREADY\n"
    );
    assert_eq!(enter(&mut r, "IF 1<2 THEN IF 3<2 THEN PRINT 9"), "OK\nREADY\n");
}

#[test]
fn test_if_errors() {
    let mut r = Runtime::new();
    assert_eq!(
        enter(&mut r, "IF 1?2 THEN 10"),
        "\x07ERROR: EXPECTED OPERATOR IN IF\nREADY\n"
    );
    assert_eq!(
        enter(&mut r, "IF 1=1 PRINT 5"),
        "\x07ERROR: EXPECTED 'THEN' IN IF\nREADY\n"
    );
    assert_eq!(
        enter(&mut r, "IF 1=1 THENORELSE"),
        "\x07ERROR: EXPECTED 'THEN' IN IF\nREADY\n"
    );
}

#[test]
fn test_implicit_goto() {
    let mut r = Runtime::new();
    enter(&mut r, "10 IF 1=1 THEN 40");
    enter(&mut r, "20 PRINT 1");
    enter(&mut r, "40 PRINT 2");
    assert_eq!(enter(&mut r, "RUN"), "2\nOK\nREADY\n");
}

#[test]
fn test_counting_loop() {
    let mut r = Runtime::new();
    enter(&mut r, "10 LET A=1");
    enter(&mut r, "20 IF A<3 THEN 50");
    enter(&mut r, "30 PRINT 99");
    enter(&mut r, "40 END");
    enter(&mut r, "50 LET A=A+1");
    enter(&mut r, "60 GOTO 20");
    assert_eq!(enter(&mut r, "RUN"), "99\nOK\nREADY\n");
    assert_eq!(enter(&mut r, "PRINT A"), "3\nOK\nREADY\n");
}

#[test]
fn test_if_tail_empty_is_noop() {
    let mut r = Runtime::new();
    assert_eq!(enter(&mut r, "IF 1=1 THEN"), "OK\nREADY\n");
}
