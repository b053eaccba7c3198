use serde::{Deserialize, Serialize};

use super::load_record::{LoadRecord, REQUIRED_COLUMNS};

// Derived column headers, appended after the input columns on export.
pub const COL_TOTAL_REVENUE: &str = "Total Revenue ($)";
pub const COL_TOTAL_COSTS: &str = "Total Costs ($)";
pub const COL_PROFIT: &str = "Profit ($)";
pub const COL_PROFIT_PER_MILE: &str = "Profit per Mile ($)";
pub const COL_FUEL_PER_MILE: &str = "Fuel Cost per Mile ($)";
pub const COL_DRIVER_PAY_PER_MILE: &str = "Driver Pay per Mile ($)";
pub const COL_WEIGHT_PER_MILE: &str = "Load Weight per Mile (lbs/mile)";

pub const DERIVED_COLUMNS: [&str; 7] = [
    COL_TOTAL_REVENUE,
    COL_TOTAL_COSTS,
    COL_PROFIT,
    COL_PROFIT_PER_MILE,
    COL_FUEL_PER_MILE,
    COL_DRIVER_PAY_PER_MILE,
    COL_WEIGHT_PER_MILE,
];

/// One input record extended with its derived metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitabilityRow {
    pub record: LoadRecord,
    pub total_revenue: f64,
    pub total_costs: f64,
    pub profit: f64,
    pub profit_per_mile: f64,
    pub fuel_cost_per_mile: f64,
    pub driver_pay_per_mile: f64,
    pub weight_per_mile: f64,
}

impl ProfitabilityRow {
    /// Zero profit counts as non-profitable.
    pub fn is_profitable(&self) -> bool {
        self.profit > 0.0
    }

    /// Input then derived values, matching `ProfitabilityTable::columns()`.
    pub fn values(&self) -> [f64; 16] {
        let r = self.record.values();
        [
            r[0],
            r[1],
            r[2],
            r[3],
            r[4],
            r[5],
            r[6],
            r[7],
            r[8],
            self.total_revenue,
            self.total_costs,
            self.profit,
            self.profit_per_mile,
            self.fuel_cost_per_mile,
            self.driver_pay_per_mile,
            self.weight_per_mile,
        ]
    }
}

/// Aggregates over a whole table.
///
/// Means are defined as 0.0 for an empty table so the engine stays total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitabilitySummary {
    pub total_revenue: f64,
    pub total_costs: f64,
    pub total_profit: f64,
    pub avg_profit_per_mile: f64,
    pub avg_fuel_cost_per_mile: f64,
    pub avg_driver_pay_per_mile: f64,
}

/// Batch analysis result: derived rows in input order plus aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitabilityTable {
    pub rows: Vec<ProfitabilityRow>,
    pub summary: ProfitabilitySummary,
}

impl ProfitabilityTable {
    /// Export column headers: the nine input columns followed by the
    /// seven derived ones.
    pub fn columns() -> [&'static str; 16] {
        let mut cols = [""; 16];
        cols[..9].copy_from_slice(&REQUIRED_COLUMNS);
        cols[9..].copy_from_slice(&DERIVED_COLUMNS);
        cols
    }

    /// Rows with positive profit, in input order.
    pub fn profitable(&self) -> Vec<&ProfitabilityRow> {
        self.rows.iter().filter(|r| r.is_profitable()).collect()
    }

    /// Rows with zero or negative profit, in input order.
    pub fn non_profitable(&self) -> Vec<&ProfitabilityRow> {
        self.rows.iter().filter(|r| !r.is_profitable()).collect()
    }
}
