//! CSV loader for batch load data
//!
//! Validates the full schema before parsing any record: a file missing
//! required columns fails with a schema error naming every missing column,
//! and no rows are produced.

use std::collections::HashMap;
use std::path::Path;

use haulcalc_domain::model::{LoadRecord, REQUIRED_COLUMNS};
use haulcalc_types::{Error, InputError, Result, SchemaError};

/// Load batch records from a UTF-8, comma-delimited CSV file with a
/// header row.
pub fn load_records_from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<LoadRecord>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    let columns = validate_headers(&headers)?;

    let mut records = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        // +2: row_idx is 0-based and the header occupies row 1
        records.push(parse_record(&record, &columns, row_idx + 2)?);
    }

    Ok(records)
}

/// Check all nine required columns are present, returning a name -> index
/// map on success and every missing column on failure.
fn validate_headers(headers: &csv::StringRecord) -> Result<HashMap<&'static str, usize>> {
    let mut columns = HashMap::new();
    let mut missing = Vec::new();

    for name in REQUIRED_COLUMNS {
        match headers.iter().position(|h| h == name) {
            Some(idx) => {
                columns.insert(name, idx);
            }
            None => missing.push(name.to_string()),
        }
    }

    if !missing.is_empty() {
        return Err(SchemaError { missing }.into());
    }
    Ok(columns)
}

fn parse_record(
    record: &csv::StringRecord,
    columns: &HashMap<&'static str, usize>,
    row_num: usize,
) -> Result<LoadRecord> {
    let cell = |name: &'static str| -> Result<f64> {
        let value = record.get(columns[name]).unwrap_or("");
        value.parse::<f64>().map_err(|_| {
            InputError::InvalidCell {
                row: row_num,
                column: name.to_string(),
                value: value.to_string(),
            }
            .into()
        })
    };

    Ok(LoadRecord {
        otr_price: cell("OTR Price ($)")?,
        fuel_cost: cell("Total Fuel Cost ($)")?,
        driver_pay: cell("Driver Pay ($)")?,
        dispatcher_fee: cell("Dispatcher Fee ($)")?,
        taxes: cell("Taxes ($)")?,
        tolls: cell("Tolls ($)")?,
        maintenance_cost: cell("Maintenance Cost ($)")?,
        total_miles: cell("Total Miles")?,
        load_weight_lbs: cell("Load Weight (lbs)")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FULL_HEADER: &str = "OTR Price ($),Total Fuel Cost ($),Driver Pay ($),\
Dispatcher Fee ($),Taxes ($),Tolls ($),Maintenance Cost ($),Total Miles,Load Weight (lbs)";

    fn write_csv_file(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("loads.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "{}", content).unwrap();
        path
    }

    #[test]
    fn test_load_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv_file(
            &dir,
            &format!("{FULL_HEADER}\n1000,300,200,100,50,50,50,500,10000\n"),
        );

        let records = load_records_from_csv(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert!((records[0].otr_price - 1000.0).abs() < f64::EPSILON);
        assert!((records[0].load_weight_lbs - 10000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_columns_matched_by_name_not_position() {
        // Same columns, shuffled order plus an extra one
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv_file(
            &dir,
            "Load Weight (lbs),Total Miles,Notes,Maintenance Cost ($),Tolls ($),Taxes ($),\
Dispatcher Fee ($),Driver Pay ($),Total Fuel Cost ($),OTR Price ($)\n\
10000,500,checked,50,50,50,100,200,300,1000\n",
        );

        let records = load_records_from_csv(&path).unwrap();
        assert!((records[0].otr_price - 1000.0).abs() < f64::EPSILON);
        assert!((records[0].total_miles - 500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_tolls_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv_file(
            &dir,
            "OTR Price ($),Total Fuel Cost ($),Driver Pay ($),Dispatcher Fee ($),Taxes ($),\
Maintenance Cost ($),Total Miles,Load Weight (lbs)\n1000,300,200,100,50,50,500,10000\n",
        );

        let err = load_records_from_csv(&path).unwrap_err();
        match err {
            Error::Schema(schema) => assert_eq!(schema.missing, vec!["Tolls ($)".to_string()]),
            other => panic!("expected schema error, got: {other}"),
        }
    }

    #[test]
    fn test_multiple_missing_columns_all_named() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv_file(
            &dir,
            "OTR Price ($),Driver Pay ($),Dispatcher Fee ($),Taxes ($),Tolls ($),\
Maintenance Cost ($),Total Miles\n1000,200,100,50,50,50,500\n",
        );

        let err = load_records_from_csv(&path).unwrap_err();
        match err {
            Error::Schema(schema) => {
                assert_eq!(
                    schema.missing,
                    vec![
                        "Total Fuel Cost ($)".to_string(),
                        "Load Weight (lbs)".to_string()
                    ]
                );
            }
            other => panic!("expected schema error, got: {other}"),
        }
    }

    #[test]
    fn test_bad_cell_names_row_and_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv_file(
            &dir,
            &format!("{FULL_HEADER}\n1000,300,200,100,50,50,50,500,10000\n1000,n/a,200,100,50,50,50,500,10000\n"),
        );

        let err = load_records_from_csv(&path).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("row 3"), "unexpected message: {msg}");
        assert!(msg.contains("Total Fuel Cost ($)"), "unexpected message: {msg}");
    }

    #[test]
    fn test_missing_file() {
        let err = load_records_from_csv("no/such/file.csv").unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
    }
}
