use serde::Serialize;

use crate::{models::Entry, tagging::table::COLUMNS};

pub const CSV_MIME_TYPE: &str = "text/csv";

const DELIMITER: char = ',';
const QUOTE: char = '"';
const RECORD_END: &str = "\r\n";

/// Download payload for the webview.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CsvExport {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Serialize entries as UTF-8 CSV with a header row, quoting fields per RFC 4180.
pub fn write_csv(entries: &[Entry]) -> Vec<u8> {
    let mut out = String::new();
    write_record(&mut out, COLUMNS.iter().copied());
    for entry in entries {
        let row = entry.to_row();
        write_record(&mut out, row.iter().map(String::as_str));
    }
    out.into_bytes()
}

fn write_record<'a>(out: &mut String, fields: impl Iterator<Item = &'a str>) {
    for (idx, field) in fields.enumerate() {
        if idx > 0 {
            out.push(DELIMITER);
        }
        write_field(out, field);
    }
    out.push_str(RECORD_END);
}

fn write_field(out: &mut String, field: &str) {
    let needs_quotes = field
        .chars()
        .any(|c| c == DELIMITER || c == QUOTE || c == '\r' || c == '\n');
    if !needs_quotes {
        out.push_str(field);
        return;
    }

    out.push(QUOTE);
    for c in field.chars() {
        if c == QUOTE {
            out.push(QUOTE);
        }
        out.push(c);
    }
    out.push(QUOTE);
}
