//! Domain model types

pub mod load_book;
pub mod load_estimate;
pub mod load_input;
pub mod load_record;
pub mod profitability;

pub use load_book::{LoadBook, LoadEntry};
pub use load_estimate::LoadEstimate;
pub use load_input::LoadInput;
pub use load_record::{LoadRecord, REQUIRED_COLUMNS};
pub use profitability::{ProfitabilityRow, ProfitabilitySummary, ProfitabilityTable};
