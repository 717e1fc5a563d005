//! Result tables built from pipe-delimited service answers
//!
//! A SkyBoT text answer looks like:
//!
//! ```text
//! # Flag: 1
//! # Ticket: 1665406351163840
//! # Num | Name | RA(h) | DE(deg) | Class | Mv
//! 11 | Parthenope | 07 08 01.2 | +26 30 14 | MB>Inner | 11.9
//! ```
//!
//! The first two lines are a banner, the third is the header. Two parse
//! paths produce a [`ResultTable`]: [`parse_response`] works on the text in
//! memory, [`read_response_file`] re-reads a saved payload through the
//! `csv` reader.

pub mod file;
pub mod parse;
pub mod render;

use indexmap::IndexMap;
use thiserror::Error;

pub use file::{read_response_file, save_response};
pub use parse::{parse_response, parse_response_with, ParseOptions};
pub use render::{format_as_csv, format_as_json, format_as_table};

/// Column delimiter used by the service's text output
pub const DELIMITER: char = '|';

/// Number of banner lines preceding the header
pub const BANNER_LINES: usize = 2;

/// Errors raised while turning a payload into a table
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected a header on line 3, payload has {found} line(s)")]
    MissingHeader { found: usize },

    #[error("line {line}: expected {expected} cells, found {found}")]
    RowWidth {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("duplicate column name '{0}'")]
    DuplicateColumn(String),
}

/// Labeled table of string cells, one row per returned object
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl ResultTable {
    /// Build a table from trimmed column names and rows of matching width
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, ParseError> {
        let mut seen = std::collections::HashSet::new();
        for name in &columns {
            if !seen.insert(name.as_str()) {
                return Err(ParseError::DuplicateColumn(name.clone()));
            }
        }

        // Line numbers assume the in-memory layout: banner, header, then rows
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(ParseError::RowWidth {
                    line: BANNER_LINES + 2 + idx,
                    expected: columns.len(),
                    found: row.len(),
                });
            }
        }

        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cells of the named column, top to bottom
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.columns.iter().position(|c| c == name)?;
        Some(self.rows.iter().map(|row| row[idx].as_str()).collect())
    }

    /// First `n` rows, keeping the header
    pub fn head(&self, n: usize) -> ResultTable {
        ResultTable {
            columns: self.columns.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }

    /// Column name to cells, in header order
    pub fn to_columns(&self) -> IndexMap<String, Vec<String>> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                let cells = self.rows.iter().map(|row| row[idx].clone()).collect();
                (name.clone(), cells)
            })
            .collect()
    }
}
