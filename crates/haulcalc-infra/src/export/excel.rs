//! Excel export

use std::path::Path;

use haulcalc_domain::model::ProfitabilityTable;
use haulcalc_types::{Error, Result};
use rust_xlsxwriter::{Format, Workbook};

/// Write a profitability table to an Excel workbook with a single sheet
/// named "Profitability Analysis".
pub fn write_excel(table: &ProfitabilityTable, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet
        .set_name("Profitability Analysis")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();

    for (col, header) in ProfitabilityTable::columns().iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    for (row_idx, row) in table.rows.iter().enumerate() {
        let excel_row = (row_idx + 1) as u32;
        for (col, value) in row.values().iter().enumerate() {
            sheet
                .write_number(excel_row, col as u16, *value)
                .map_err(|e| Error::Excel(e.to_string()))?;
        }
    }

    workbook
        .save(path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}
