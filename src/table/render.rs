//! Table, CSV and JSON output for result tables

use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use serde_json::Value as JsonValue;

use super::ResultTable;
use crate::errors::SsoError;

/// Format a result table as an ASCII grid
pub fn format_as_table(table: &ResultTable) -> String {
    if table.columns().is_empty() {
        return "(empty)".to_string();
    }

    let mut grid = Table::new();
    grid.set_content_arrangement(ContentArrangement::Dynamic);

    let header: Vec<Cell> = table
        .columns()
        .iter()
        .map(|col| Cell::new(col).add_attribute(Attribute::Bold))
        .collect();
    grid.set_header(header);

    for row in table.rows() {
        grid.add_row(row.iter().map(|cell| Cell::new(cell.trim())));
    }

    grid.to_string()
}

/// Format a result table as comma-separated values
pub fn format_as_csv(table: &ResultTable) -> Result<String, SsoError> {
    let mut output = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut output);
        writer.write_record(table.columns())?;
        for row in table.rows() {
            writer.write_record(row)?;
        }
        writer.flush()?;
    }

    String::from_utf8(output).map_err(|e| SsoError::Argument(format!("UTF-8 error: {}", e)))
}

/// Format a result table as a JSON object of column name to cells
pub fn format_as_json(table: &ResultTable) -> Result<String, SsoError> {
    let value: JsonValue = serde_json::to_value(table.to_columns())?;
    Ok(serde_json::to_string_pretty(&value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ResultTable {
        ResultTable::new(
            vec!["Num".into(), "Name".into()],
            vec![
                vec!["11 ".into(), " Parthenope ".into()],
                vec!["-".into(), "2010 AB, b".into()],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_format_as_table() {
        let out = format_as_table(&sample());
        assert!(out.contains("Num"));
        assert!(out.contains("Parthenope"));
        assert!(out.contains("2010 AB, b"));
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(format_as_table(&ResultTable::default()), "(empty)");
    }

    #[test]
    fn test_format_as_csv_quotes_commas() {
        let out = format_as_csv(&sample()).unwrap();
        assert_eq!(out.lines().next(), Some("Num,Name"));
        assert_eq!(out.lines().count(), 3);
        assert!(out.contains("\"2010 AB, b\""));
    }

    #[test]
    fn test_format_as_json_column_order() {
        let out = format_as_json(&sample()).unwrap();
        let value: JsonValue = serde_json::from_str(&out).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["Num", "Name"]);
        assert_eq!(value["Num"][1], "-");
    }
}
