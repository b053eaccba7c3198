use serde::{Deserialize, Serialize};

/// Profitability breakdown for a single load.
///
/// Created fresh per calculation, never persisted or mutated. No rounding
/// is applied here; display formatting belongs to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadEstimate {
    /// Route miles plus both deadhead legs
    pub total_distance: f64,
    /// Load pay divided by total distance
    pub rate_per_mile: f64,
    pub fuel_cost: f64,
    pub dispatcher_fee: f64,
    pub maintenance_cost: f64,
    pub toll_cost: f64,
    pub total_expenses: f64,
    pub net_profit: f64,
}
