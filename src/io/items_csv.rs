//! Items CSV reader.
//!
//! Reads the `items.csv` export: the first record is the header, and every
//! following record becomes one schema-free document keyed by the header
//! fields. The dialect is the common spreadsheet export: comma separated,
//! fields optionally enclosed in double quotes, `""` inside a quoted field
//! for a literal quote, LF or CRLF line endings. Quoted fields do not span
//! lines.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::catalog::ItemDoc;
use crate::error::{Error, Result};

/// Read an items CSV file into schema-free documents.
pub fn read_items_csv(path: &Path) -> Result<Vec<ItemDoc>> {
    let text = fs::read_to_string(path)?;
    parse_items_csv(&text)
}

/// Parse items CSV text into one document per data record.
///
/// Empty input (or a header with no data records) produces no documents.
/// Blank lines are skipped. A record whose field count differs from the
/// header is rejected with its line number.
pub fn parse_items_csv(text: &str) -> Result<Vec<ItemDoc>> {
    let mut header: Option<Vec<String>> = None;
    let mut items = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        if line.is_empty() {
            continue;
        }
        let fields = split_record(line, line_no)?;
        match &header {
            None => header = Some(fields),
            Some(columns) => {
                if fields.len() != columns.len() {
                    return Err(Error::Csv {
                        line: line_no,
                        message: format!(
                            "expected {} fields, found {}",
                            columns.len(),
                            fields.len()
                        ),
                    });
                }
                let mut doc = ItemDoc::new();
                for (column, value) in columns.iter().zip(fields) {
                    doc.insert(column.clone(), Value::String(value));
                }
                items.push(doc);
            }
        }
    }

    Ok(items)
}

/// Split one CSV record into its fields.
fn split_record(line: &str, line_no: usize) -> Result<Vec<String>> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else {
            match c {
                '"' if field.is_empty() => in_quotes = true,
                ',' => fields.push(std::mem::take(&mut field)),
                _ => field.push(c),
            }
        }
    }

    if in_quotes {
        return Err(Error::Csv {
            line: line_no,
            message: "unterminated quoted field".into(),
        });
    }
    fields.push(field);
    Ok(fields)
}
