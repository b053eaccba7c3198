//! CSV export
//!
//! Output is deterministic for identical input: fixed column order, rows
//! in table order, floats rendered with Rust's shortest round-trip
//! formatting.

use std::path::Path;

use haulcalc_domain::model::ProfitabilityTable;
use haulcalc_types::Result;

/// Serialize a profitability table as UTF-8, comma-delimited CSV with a
/// header row.
pub fn table_to_csv_bytes(table: &ProfitabilityTable) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(ProfitabilityTable::columns())?;
    for row in &table.rows {
        let cells: Vec<String> = row.values().iter().map(|v| v.to_string()).collect();
        writer.write_record(&cells)?;
    }

    writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()).into())
}

/// Write a profitability table to a CSV file.
pub fn write_csv(table: &ProfitabilityTable, path: &Path) -> Result<()> {
    let bytes = table_to_csv_bytes(table)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use haulcalc_domain::model::LoadRecord;
    use haulcalc_domain::service::compute_profitability;

    fn sample_table() -> ProfitabilityTable {
        compute_profitability(&[LoadRecord {
            otr_price: 1000.0,
            fuel_cost: 300.0,
            driver_pay: 200.0,
            dispatcher_fee: 100.0,
            taxes: 50.0,
            tolls: 50.0,
            maintenance_cost: 50.0,
            total_miles: 500.0,
            load_weight_lbs: 10000.0,
        }])
    }

    #[test]
    fn test_header_and_row() {
        let bytes = table_to_csv_bytes(&sample_table()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let mut lines = text.lines();

        let header = lines.next().unwrap();
        assert!(header.starts_with("OTR Price ($),"));
        assert!(header.ends_with("Load Weight per Mile (lbs/mile)"));

        let row = lines.next().unwrap();
        assert!(row.starts_with("1000,300,200,100,50,50,50,500,10000,"));
        assert!(row.contains(",750,250,0.5,0.6,0.4,20"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_output_is_reproducible() {
        let table = sample_table();
        let first = table_to_csv_bytes(&table).unwrap();
        let second = table_to_csv_bytes(&table).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_table_writes_header_only() {
        let table = compute_profitability(&[]);
        let text = String::from_utf8(table_to_csv_bytes(&table).unwrap()).unwrap();
        assert_eq!(text.lines().count(), 1);
    }
}
