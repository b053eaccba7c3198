//! Batch profitability engine

use crate::model::{LoadRecord, ProfitabilityRow, ProfitabilitySummary, ProfitabilityTable};

/// Derive per-row and aggregate metrics for a batch of loads.
///
/// Pure and total: rows are processed independently in input order, and a
/// row with zero total miles uses a divisor of 1 for the per-mile ratios
/// instead of failing.
pub fn compute_profitability(records: &[LoadRecord]) -> ProfitabilityTable {
    let rows: Vec<ProfitabilityRow> = records.iter().map(derive_row).collect();
    let summary = summarize(&rows);
    ProfitabilityTable { rows, summary }
}

fn derive_row(record: &LoadRecord) -> ProfitabilityRow {
    let total_revenue = record.otr_price;
    let total_costs = record.fuel_cost
        + record.driver_pay
        + record.dispatcher_fee
        + record.taxes
        + record.tolls
        + record.maintenance_cost;
    let profit = total_revenue - total_costs;

    // Degenerate-case guard: zero miles divides by 1, never by zero
    let miles_divisor = if record.total_miles != 0.0 {
        record.total_miles
    } else {
        1.0
    };

    ProfitabilityRow {
        record: record.clone(),
        total_revenue,
        total_costs,
        profit,
        profit_per_mile: profit / miles_divisor,
        fuel_cost_per_mile: record.fuel_cost / miles_divisor,
        driver_pay_per_mile: record.driver_pay / miles_divisor,
        weight_per_mile: record.load_weight_lbs / miles_divisor,
    }
}

fn summarize(rows: &[ProfitabilityRow]) -> ProfitabilitySummary {
    let count = rows.len() as f64;
    let mean = |total: f64| if rows.is_empty() { 0.0 } else { total / count };

    ProfitabilitySummary {
        total_revenue: rows.iter().map(|r| r.total_revenue).sum(),
        total_costs: rows.iter().map(|r| r.total_costs).sum(),
        total_profit: rows.iter().map(|r| r.profit).sum(),
        avg_profit_per_mile: mean(rows.iter().map(|r| r.profit_per_mile).sum()),
        avg_fuel_cost_per_mile: mean(rows.iter().map(|r| r.fuel_cost_per_mile).sum()),
        avg_driver_pay_per_mile: mean(rows.iter().map(|r| r.driver_pay_per_mile).sum()),
    }
}
