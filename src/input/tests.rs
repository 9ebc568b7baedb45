#![cfg(test)]

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;

use super::*;

fn case_file(name: &str, contents: &str) -> PathBuf {
    let path = env::temp_dir().join(format!("containers_cases_{}_{name}.txt", process::id()));
    fs::write(&path, contents).unwrap();
    path
}

fn group(values: &[i32]) -> BoxVec<i32> {
    values.iter().copied().collect()
}

#[test]
fn test_reads_blank_separated_groups() {
    let path = case_file("groups", "3\n\n1 2 3\n\n4 5\n\n6\n");
    let cases: BoxVec<BoxVec<i32>> = read_cases(&path);

    assert_eq!(cases.len(), 3, "Each blank line should start a new group.");
    assert_eq!(cases.get(0), &group(&[1, 2, 3]));
    assert_eq!(cases.get(1), &group(&[4, 5]));
    assert_eq!(cases.get(2), &group(&[6]));
    let _ = fs::remove_file(path);
}

#[test]
fn test_first_group_opens_without_a_blank() {
    let path = case_file("implicit", "2\n10 20\n30\n\n40\n");
    let cases: BoxVec<BoxVec<i32>> = read_cases(&path);

    assert_eq!(cases.len(), 2);
    assert_eq!(
        cases.get(0),
        &group(&[10, 20, 30]),
        "Value lines before the first blank should fill the first group together."
    );
    assert_eq!(cases.get(1), &group(&[40]));
    let _ = fs::remove_file(path);
}

#[test]
fn test_consecutive_blanks_produce_an_empty_group() {
    let path = case_file("empty_group", "2\n\n\n1\n");
    let cases: BoxVec<BoxVec<i32>> = read_cases(&path);

    assert_eq!(cases.len(), 2);
    assert!(
        cases.get(0).is_empty(),
        "A blank line straight after another should close an empty group."
    );
    assert_eq!(cases.get(1), &group(&[1]));
    let _ = fs::remove_file(path);
}

#[test]
fn test_stops_at_the_declared_count() {
    let path = case_file("cutoff", "1\n1 2\n\n9 9\n\n8\n");
    let cases: BoxVec<BoxVec<i32>> = read_cases(&path);

    assert_eq!(
        cases,
        [group(&[1, 2])].into_iter().collect(),
        "Lines past the declared number of groups should be ignored."
    );
    let _ = fs::remove_file(path);
}

#[test]
fn test_declared_zero_stops_at_the_first_blank() {
    let path = case_file("zero", "0\n\n1 2\n");
    let cases: BoxVec<BoxVec<i32>> = read_cases(&path);
    assert!(cases.is_empty());
    let _ = fs::remove_file(path);

    let path = case_file("zero_unseparated", "0\n5\n");
    let cases: BoxVec<BoxVec<i32>> = read_cases(&path);
    assert_eq!(
        cases,
        [group(&[5])].into_iter().collect(),
        "The declared count is only consulted at group boundaries."
    );
    let _ = fs::remove_file(path);
}

#[test]
fn test_keeps_tokens_before_a_parse_failure() {
    let path = case_file("bad_token", "1\n1 2 x 3\n");
    let cases: BoxVec<BoxVec<i32>> = read_cases(&path);

    assert_eq!(
        cases,
        [group(&[1, 2])].into_iter().collect(),
        "A line should contribute the values up to its first unparseable token."
    );
    let _ = fs::remove_file(path);
}

#[test]
fn test_unreadable_inputs_produce_empty_results() {
    let missing = env::temp_dir().join(format!("containers_cases_{}_missing.txt", process::id()));
    let _ = fs::remove_file(&missing);
    let cases: BoxVec<BoxVec<i32>> = read_cases(&missing);
    assert!(cases.is_empty(), "A missing file should read as no cases at all.");

    let path = case_file("empty", "");
    let cases: BoxVec<BoxVec<i32>> = read_cases(&path);
    assert!(cases.is_empty());
    let _ = fs::remove_file(path);

    let path = case_file("bad_header", "cases\n1 2\n");
    let cases: BoxVec<BoxVec<i32>> = read_cases(&path);
    assert!(cases.is_empty(), "An unparseable count line should read as no cases.");
    let _ = fs::remove_file(path);

    let path = case_file("header_only", "2\n");
    let cases: BoxVec<BoxVec<i32>> = read_cases(&path);
    assert!(cases.is_empty());
    let _ = fs::remove_file(path);
}

#[test]
fn test_crlf_lines_parse_like_plain_lines() {
    let path = case_file("crlf", "2\r\n1 2\r\n\r\n3\r\n");
    let cases: BoxVec<BoxVec<i32>> = read_cases(&path);

    assert_eq!(cases.len(), 2);
    assert_eq!(cases.get(0), &group(&[1, 2]));
    assert_eq!(cases.get(1), &group(&[3]));
    let _ = fs::remove_file(path);
}

#[test]
fn test_parses_any_fromstr_type() {
    let path = case_file("floats", "1\n-1.5 2.25 -3\n");
    let cases: BoxVec<BoxVec<f64>> = read_cases(&path);

    assert_eq!(cases.len(), 1);
    assert!(cases.get(0).iter().copied().eq([-1.5, 2.25, -3.0]));
    let _ = fs::remove_file(path);
}
