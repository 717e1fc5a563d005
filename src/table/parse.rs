//! In-memory parsing of pipe-delimited payloads

use super::{ParseError, ResultTable, BANNER_LINES, DELIMITER};

/// Options for [`parse_response_with`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// Trim whitespace around cell values (column names are always trimmed)
    pub trim_cells: bool,
}

/// Parse a payload with default options (cells kept as received)
pub fn parse_response(text: &str) -> Result<ResultTable, ParseError> {
    parse_response_with(text, &ParseOptions::default())
}

/// Parse a payload: two banner lines, a header line, then data lines
///
/// Blank data lines are skipped. Every data line must have as many cells as
/// the header.
pub fn parse_response_with(text: &str, options: &ParseOptions) -> Result<ResultTable, ParseError> {
    let lines: Vec<&str> = text.lines().collect();

    let header = match lines.get(BANNER_LINES) {
        Some(line) if !line.trim().is_empty() => *line,
        _ => return Err(ParseError::MissingHeader { found: lines.len() }),
    };

    let columns: Vec<String> = header
        .split(DELIMITER)
        .map(|name| name.trim().to_string())
        .collect();

    let mut rows = Vec::with_capacity(lines.len() - BANNER_LINES - 1);
    for (idx, line) in lines.iter().enumerate().skip(BANNER_LINES + 1) {
        if line.trim().is_empty() {
            continue;
        }

        let row: Vec<String> = line
            .split(DELIMITER)
            .map(|cell| {
                if options.trim_cells {
                    cell.trim().to_string()
                } else {
                    cell.to_string()
                }
            })
            .collect();

        if row.len() != columns.len() {
            return Err(ParseError::RowWidth {
                line: idx + 1,
                expected: columns.len(),
                found: row.len(),
            });
        }
        rows.push(row);
    }

    ResultTable::new(columns, rows)
}
