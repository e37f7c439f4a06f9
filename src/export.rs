//! CSV rendering of list pages.

use std::io::Write;

use serde_json::Value;

use crate::repository::Row;

/// Column names to export: the configured ones, or the keys of the first row.
pub fn resolve_columns(configured: &[String], rows: &[Row]) -> Vec<String> {
    if !configured.is_empty() {
        return configured.to_vec();
    }
    rows.first()
        .and_then(Value::as_object)
        .map(|object| object.keys().cloned().collect())
        .unwrap_or_default()
}

fn cell(row: &Row, column: &str) -> String {
    match row.get(column) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Writes a header line followed by one record per row.
pub fn write_rows<W: Write>(out: W, columns: &[String], rows: &[Row]) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(columns)?;
    for row in rows {
        writer.write_record(columns.iter().map(|column| cell(row, column)))?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn columns_fall_back_to_first_row_keys() {
        let rows = vec![json!({"job_no": "OE-1", "customer_code": "C1"})];

        assert_eq!(
            resolve_columns(&[], &rows),
            vec!["customer_code".to_string(), "job_no".to_string()]
        );
        assert_eq!(
            resolve_columns(&["job_no".to_string()], &rows),
            vec!["job_no".to_string()]
        );
        assert!(resolve_columns(&[], &[]).is_empty());
    }

    #[test]
    fn writes_missing_and_null_fields_as_empty_cells() {
        let columns = vec!["job_no".to_string(), "pieces".to_string(), "eta".to_string()];
        let rows = vec![
            json!({"job_no": "OE-1", "pieces": 4, "eta": null}),
            json!({"job_no": "OE-2, part"}),
        ];
        let mut out = Vec::new();

        write_rows(&mut out, &columns, &rows).expect("csv written");

        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "job_no,pieces,eta\nOE-1,4,\n\"OE-2, part\",,\n"
        );
    }
}
