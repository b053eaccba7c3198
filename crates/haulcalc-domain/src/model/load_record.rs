use serde::{Deserialize, Serialize};

// Literal spreadsheet column headers recognized by the batch engine.
pub const COL_OTR_PRICE: &str = "OTR Price ($)";
pub const COL_FUEL_COST: &str = "Total Fuel Cost ($)";
pub const COL_DRIVER_PAY: &str = "Driver Pay ($)";
pub const COL_DISPATCHER_FEE: &str = "Dispatcher Fee ($)";
pub const COL_TAXES: &str = "Taxes ($)";
pub const COL_TOLLS: &str = "Tolls ($)";
pub const COL_MAINTENANCE: &str = "Maintenance Cost ($)";
pub const COL_TOTAL_MILES: &str = "Total Miles";
pub const COL_LOAD_WEIGHT: &str = "Load Weight (lbs)";

/// Columns a batch input table must supply, in canonical order.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    COL_OTR_PRICE,
    COL_FUEL_COST,
    COL_DRIVER_PAY,
    COL_DISPATCHER_FEE,
    COL_TAXES,
    COL_TOLLS,
    COL_MAINTENANCE,
    COL_TOTAL_MILES,
    COL_LOAD_WEIGHT,
];

/// One fully itemized load from a batch input table.
///
/// All costs are pre-supplied by the data source; the engine only derives
/// metrics from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadRecord {
    /// Over-the-road price: agreed revenue for the load ($)
    pub otr_price: f64,
    pub fuel_cost: f64,
    pub driver_pay: f64,
    pub dispatcher_fee: f64,
    pub taxes: f64,
    pub tolls: f64,
    pub maintenance_cost: f64,
    pub total_miles: f64,
    pub load_weight_lbs: f64,
}

impl LoadRecord {
    /// Raw field values in `REQUIRED_COLUMNS` order.
    pub fn values(&self) -> [f64; 9] {
        [
            self.otr_price,
            self.fuel_cost,
            self.driver_pay,
            self.dispatcher_fee,
            self.taxes,
            self.tolls,
            self.maintenance_cost,
            self.total_miles,
            self.load_weight_lbs,
        ]
    }
}
