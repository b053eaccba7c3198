//! Export of profitability tables

mod csv;
mod excel;

pub use self::csv::{table_to_csv_bytes, write_csv};
pub use self::excel::write_excel;
