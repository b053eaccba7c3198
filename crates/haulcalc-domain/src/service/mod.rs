//! Domain services

pub mod distance_table;
pub mod estimator;
pub mod profitability;

pub use distance_table::DistanceTable;
pub use estimator::{estimate, CostRates, DistanceResolver};
pub use profitability::compute_profitability;
