//! Response parser tests: in-memory and file-backed paths
mod common;

use tempfile::TempDir;

use ssoquery::angle::Angle;
use ssoquery::errors::SsoError;
use ssoquery::table::{parse_response, read_response_file, save_response, ParseError};

use common::SKYBOT_PAYLOAD;

fn payload(rows: usize) -> String {
    let mut text = String::from("# Flag: 1\n# Ticket: 7\n A | B | C \n");
    for i in 0..rows {
        text.push_str(&format!("{} | x{} | {}.5\n", i, i, i));
    }
    text
}

#[test]
fn test_columns_and_row_count() {
    let table = parse_response(&payload(4)).unwrap();

    assert_eq!(table.columns(), &["A", "B", "C"]);
    assert_eq!(table.len(), 4);
    assert!(table.rows().iter().all(|row| row.len() == 3));
}

#[test]
fn test_column_names_trimmed_in_both_paths() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("response.txt");
    save_response(&path, &payload(1)).unwrap();

    let in_memory = parse_response(&payload(1)).unwrap();
    let from_file = read_response_file(&path).unwrap();

    assert_eq!(in_memory.columns(), &["A", "B", "C"]);
    assert_eq!(from_file.columns(), &["A", "B", "C"]);
}

#[test]
fn test_short_payload_is_an_error() {
    for text in ["", "# Flag: 0", "# Flag: 0\n# Ticket: 1\n"] {
        match parse_response(text) {
            Err(ParseError::MissingHeader { .. }) => {}
            other => panic!("expected MissingHeader for {:?}, got {:?}", text, other),
        }
    }
}

#[test]
fn test_file_round_trip_matches_in_memory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("response.txt");
    save_response(&path, SKYBOT_PAYLOAD).unwrap();

    let in_memory = parse_response(SKYBOT_PAYLOAD).unwrap();
    let from_file = read_response_file(&path).unwrap();

    assert_eq!(in_memory.columns(), from_file.columns());
    assert_eq!(in_memory.len(), from_file.len());
    assert_eq!(from_file.len(), 3);
}

#[test]
fn test_cell_trimming_differs_between_paths() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("response.txt");
    save_response(&path, SKYBOT_PAYLOAD).unwrap();

    let in_memory = parse_response(SKYBOT_PAYLOAD).unwrap();
    let from_file = read_response_file(&path).unwrap();

    assert_eq!(in_memory.column("Name").unwrap()[0], " Parthenope ");
    assert_eq!(from_file.column("Name").unwrap()[0], "Parthenope");
}

#[test]
fn test_row_width_checked_in_both_paths() {
    let text = "a\nb\nA|B\n1|2\n3\n";
    assert!(matches!(
        parse_response(text),
        Err(ParseError::RowWidth { line: 5, expected: 2, found: 1 })
    ));

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("response.txt");
    save_response(&path, text).unwrap();
    assert!(matches!(
        read_response_file(&path),
        Err(SsoError::Parse(ParseError::RowWidth { line: 5, expected: 2, found: 1 }))
    ));
}

#[test]
fn test_blank_lines_skipped_in_both_paths() {
    let dir = TempDir::new().unwrap();
    for (idx, text) in [
        "a\nb\nA|B\n1|2\n   \n3|4\n",
        "a\nb\nA|B\n\t\n1|2\n\n3|4\n  \n",
        "a\r\nb\r\nA|B\r\n1|2\r\n \r\n3|4\r\n",
    ]
    .iter()
    .enumerate()
    {
        let path = dir.path().join(format!("response{}.txt", idx));
        save_response(&path, text).unwrap();

        let in_memory = parse_response(text).unwrap();
        let from_file = read_response_file(&path).unwrap();

        assert_eq!(in_memory.columns(), from_file.columns(), "payload {:?}", text);
        assert_eq!(in_memory.len(), 2, "payload {:?}", text);
        assert_eq!(from_file.len(), 2, "payload {:?}", text);
    }
}

#[test]
fn test_blank_header_is_missing_in_both_paths() {
    let text = "a\nb\n   \n1|2\n";
    assert!(matches!(parse_response(text), Err(ParseError::MissingHeader { .. })));

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("response.txt");
    save_response(&path, text).unwrap();
    assert!(matches!(
        read_response_file(&path),
        Err(SsoError::Parse(ParseError::MissingHeader { .. }))
    ));
}

#[test]
fn test_right_ascension_conversion() {
    let ra = Angle::parse_ra("07h08m00").unwrap();
    assert!((ra.degrees() - 107.0).abs() < 1e-9);
}
