//! Infrastructure layer for haulcalc
//!
//! CSV ingestion with schema validation, CSV/Excel export of
//! profitability tables, and load-book persistence.

pub mod csv_loader;
pub mod export;
pub mod persistence;

pub use csv_loader::load_records_from_csv;
pub use export::{table_to_csv_bytes, write_csv, write_excel};
pub use persistence::load_book_store;
