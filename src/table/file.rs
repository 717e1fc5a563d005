//! File-backed variant: save the raw payload, then read it back with `csv`

use std::fs::{self, File};
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use tracing::debug;

use super::{ParseError, ResultTable, BANNER_LINES, DELIMITER};
use crate::errors::SsoError;

/// Write the raw payload verbatim, replacing any existing file
pub fn save_response(path: &Path, text: &str) -> Result<(), SsoError> {
    fs::write(path, text)?;
    debug!(path = %path.display(), bytes = text.len(), "Saved raw response");
    Ok(())
}

/// Read a saved payload, skipping the banner lines
///
/// Column names and cell values are both trimmed. Whitespace-only data lines
/// are skipped like empty ones.
pub fn read_response_file(path: &Path) -> Result<ResultTable, SsoError> {
    let mut reader = BufReader::new(File::open(path)?);

    let mut skipped = 0;
    let mut line = String::new();
    while skipped < BANNER_LINES {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(ParseError::MissingHeader { found: skipped }.into());
        }
        skipped += 1;
    }

    let mut rest = String::new();
    reader.read_to_string(&mut rest)?;
    if rest.lines().next().map_or(true, |header| header.trim().is_empty()) {
        return Err(ParseError::MissingHeader { found: BANNER_LINES }.into());
    }

    // Blank out whitespace-only data lines so csv skips them; line numbers stay put
    let body = rest
        .lines()
        .map(|l| if l.trim().is_empty() { "" } else { l })
        .collect::<Vec<_>>()
        .join("\n");

    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER as u8)
        .has_headers(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(body.as_bytes());

    let columns: Vec<String> = csv_reader
        .headers()
        .map_err(map_csv_error)?
        .iter()
        .map(String::from)
        .collect();

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(map_csv_error)?;
        rows.push(record.iter().map(String::from).collect());
    }

    Ok(ResultTable::new(columns, rows)?)
}

/// Report row-width problems the same way the in-memory parser does
fn map_csv_error(err: csv::Error) -> SsoError {
    if let csv::ErrorKind::UnequalLengths { pos, expected_len, len } = err.kind() {
        let line = pos.as_ref().map(|p| p.line() as usize).unwrap_or(0) + BANNER_LINES;
        return ParseError::RowWidth {
            line,
            expected: *expected_len as usize,
            found: *len as usize,
        }
        .into();
    }
    SsoError::Csv(err)
}
