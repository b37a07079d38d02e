/// JSON array ↔ CSV text conversion.
use serde_json::{Map, Value};

use super::expect_object;
use crate::powers::PowerError;

/// Render one JSON value as a CSV cell.
fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Convert an array of objects to CSV with a header row.
///
/// Column order comes from the first object's keys. Missing keys and
/// `null` produce empty cells; nested values are written as compact JSON.
/// An empty slice yields an empty string.
///
/// # Errors
///
/// - `PowerError::InvalidInput` if an element is not an object.
/// - `PowerError::CsvField` if a row has a key the first object lacks.
pub fn json_to_csv(rows: &[Value]) -> Result<String, PowerError> {
    let Some(first) = rows.first() else {
        return Ok(String::new());
    };
    let columns = expect_object(first)?;

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(columns.keys())?;

    for (index, row) in rows.iter().enumerate() {
        let row = expect_object(row)?;
        if let Some(extra) = row.keys().find(|k| !columns.contains_key(*k)) {
            return Err(PowerError::CsvField {
                row: index,
                field: extra.clone(),
            });
        }
        let record: Vec<String> = columns
            .keys()
            .map(|column| row.get(column).map(cell_text).unwrap_or_default())
            .collect();
        writer.write_record(&record)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| PowerError::Io(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| PowerError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// Parse CSV with a header row into one string-valued object per record.
///
/// Values are kept as strings; no type inference is applied.
///
/// # Errors
///
/// Returns `PowerError::Csv` on malformed input, including rows whose field
/// count differs from the header.
pub fn csv_to_json(text: &str) -> Result<Vec<Map<String, Value>>, PowerError> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let headers = reader.headers()?.clone();

    let mut out = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: Map<String, Value> = headers
            .iter()
            .zip(record.iter())
            .map(|(column, cell)| (column.to_owned(), Value::String(cell.to_owned())))
            .collect();
        out.push(row);
    }
    Ok(out)
}
