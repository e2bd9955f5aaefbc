//! Reads the first worksheet of an uploaded workbook into row objects.
//!
//! The first row is the header. Every later row becomes an object keyed by
//! header text. Empty cells are left out of the object and fully blank rows
//! are skipped, so a row missing a value simply lacks that key.
//!
//! Plain-text uploads that no workbook reader recognises are read as CSV,
//! a one-sheet workbook with the same row rules.

use crate::ImportError;
use calamine::{Data, Reader, open_workbook_auto_from_rs};
use serde_json::{Map, Number, Value};
use std::io::Cursor;
use tracing::debug;

pub type Row = Map<String, Value>;

/// Parses xlsx, xls, xlsb or ods bytes, falling back to CSV for UTF-8 text.
pub fn parse_rows(bytes: &[u8]) -> Result<Vec<Row>, ImportError> {
    match open_workbook_auto_from_rs(Cursor::new(bytes.to_vec())) {
        Ok(mut workbook) => {
            let range = workbook
                .worksheet_range_at(0)
                .ok_or_else(|| ImportError::UnparseableFile("workbook has no worksheets".into()))?
                .map_err(|e| ImportError::UnparseableFile(e.to_string()))?;

            let mut rows = range.rows();
            let Some(header_cells) = rows.next() else {
                return Ok(Vec::new());
            };
            let headers: Vec<Option<String>> = header_cells.iter().map(header_text).collect();

            Ok(rows
                .filter_map(|cells| keyed_row(&headers, cells.iter().map(cell_value)))
                .collect())
        }
        Err(e) if std::str::from_utf8(bytes).is_ok() => {
            debug!(error = %e, "no workbook format detected, reading upload as CSV");
            parse_csv(bytes)
        }
        Err(e) => Err(ImportError::UnparseableFile(e.to_string())),
    }
}

fn parse_csv(bytes: &[u8]) -> Result<Vec<Row>, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let headers: Vec<Option<String>> = reader
        .headers()
        .map_err(|e| ImportError::UnparseableFile(e.to_string()))?
        .iter()
        .map(|h| Some(h.trim().to_string()).filter(|h| !h.is_empty()))
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| ImportError::UnparseableFile(e.to_string()))?;
        if let Some(row) = keyed_row(&headers, record.iter().map(csv_value)) {
            rows.push(row);
        }
    }
    Ok(rows)
}

/// Pairs values with their headers. `None` when nothing in the row survives.
fn keyed_row<I>(headers: &[Option<String>], values: I) -> Option<Row>
where
    I: Iterator<Item = Option<Value>>,
{
    let mut row = Row::new();
    for (header, value) in headers.iter().zip(values) {
        if let (Some(key), Some(value)) = (header, value) {
            row.insert(key.clone(), value);
        }
    }
    (!row.is_empty()).then_some(row)
}

/// CSV fields are typed the way a spreadsheet would type them on entry.
fn csv_value(field: &str) -> Option<Value> {
    if field.is_empty() {
        return None;
    }
    let trimmed = field.trim();
    if let Ok(i) = trimmed.parse::<i64>() {
        return Some(Value::from(i));
    }
    if let Ok(f) = trimmed.parse::<f64>() {
        if f.is_finite() && trimmed.chars().any(|c| c.is_ascii_digit()) {
            return Some(float_value(f));
        }
    }
    if trimmed.eq_ignore_ascii_case("true") {
        return Some(Value::Bool(true));
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return Some(Value::Bool(false));
    }
    Some(Value::String(field.to_string()))
}

fn header_text(cell: &Data) -> Option<String> {
    match cell_value(cell)? {
        Value::String(s) => Some(s.trim().to_string()).filter(|s| !s.is_empty()),
        other => Some(other.to_string()),
    }
}

/// Raw cell value. Dates stay as their spreadsheet serial number.
fn cell_value(cell: &Data) -> Option<Value> {
    match cell {
        Data::Empty => None,
        Data::String(s) => Some(Value::String(s.clone())),
        Data::Int(i) => Some(Value::from(*i)),
        Data::Float(f) => Some(float_value(*f)),
        Data::Bool(b) => Some(Value::Bool(*b)),
        Data::DateTime(dt) => Some(float_value(dt.as_f64())),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(Value::String(s.clone())),
        Data::Error(e) => Some(Value::String(e.to_string())),
    }
}

/// Whole numbers come out as JSON integers, the way spreadsheet readers report them.
fn float_value(f: f64) -> Value {
    if f.fract() == 0.0 && f.abs() < 1e15 {
        Value::from(f as i64)
    } else {
        Number::from_f64(f).map_or(Value::Null, Value::Number)
    }
}
