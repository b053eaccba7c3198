//! Single-load profit estimation
//!
//! Resolves the trip distance (known-route table first, injected resolver
//! as fallback) and derives the cost/profit breakdown from the configured
//! rates. Pure: no side effects, the distance table is never mutated.

use haulcalc_types::InputError;
use serde::{Deserialize, Serialize};

use crate::model::load_input::parse_field;
use crate::model::{LoadEstimate, LoadInput};

use super::distance_table::DistanceTable;

/// Cost constants used by the estimator.
///
/// Exposed as configuration rather than hardcoded so callers can vary
/// them without code changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostRates {
    /// Fuel cost per mile ($)
    #[serde(default = "default_fuel_cost_per_mile")]
    pub fuel_cost_per_mile: f64,

    /// Dispatcher fee as a fraction of load pay
    #[serde(default = "default_dispatcher_fee_rate")]
    pub dispatcher_fee_rate: f64,

    /// Maintenance cost per mile ($)
    #[serde(default = "default_maintenance_cost_per_mile")]
    pub maintenance_cost_per_mile: f64,

    /// Flat toll cost per load ($), not distance-scaled
    #[serde(default = "default_toll_cost")]
    pub default_toll_cost: f64,
}

fn default_fuel_cost_per_mile() -> f64 {
    0.6
}

fn default_dispatcher_fee_rate() -> f64 {
    0.1
}

fn default_maintenance_cost_per_mile() -> f64 {
    0.1
}

fn default_toll_cost() -> f64 {
    50.0
}

impl Default for CostRates {
    fn default() -> Self {
        Self {
            fuel_cost_per_mile: default_fuel_cost_per_mile(),
            dispatcher_fee_rate: default_dispatcher_fee_rate(),
            maintenance_cost_per_mile: default_maintenance_cost_per_mile(),
            default_toll_cost: default_toll_cost(),
        }
    }
}

/// Capability for obtaining a route distance from an external source when
/// the table has no entry, e.g. prompting the user.
///
/// Returns the raw value, or `None` when the source cancels. Cancellation
/// aborts the whole calculation; there is no default-to-zero path.
pub trait DistanceResolver {
    fn resolve(&self, origin: &str, destination: &str) -> Option<String>;
}

impl<F> DistanceResolver for F
where
    F: Fn(&str, &str) -> Option<String>,
{
    fn resolve(&self, origin: &str, destination: &str) -> Option<String> {
        self(origin, destination)
    }
}

/// Compute the profitability breakdown for one load.
///
/// Route miles come from `distances` when the (origin, destination) pair
/// is known, otherwise from `resolver`. A resolver value that does not
/// parse as a non-negative number fails the calculation, as does a total
/// distance of zero (rate per mile would be undefined).
pub fn estimate(
    input: &LoadInput,
    distances: &DistanceTable,
    resolver: &dyn DistanceResolver,
    rates: &CostRates,
) -> Result<LoadEstimate, InputError> {
    let route_miles = resolve_route_miles(input, distances, resolver)?;

    let total_distance =
        route_miles + input.deadhead_to_origin + input.deadhead_from_destination;
    if total_distance == 0.0 {
        return Err(InputError::ZeroDistance);
    }

    let rate_per_mile = input.load_pay / total_distance;

    let fuel_cost = total_distance * rates.fuel_cost_per_mile;
    let dispatcher_fee = input.load_pay * rates.dispatcher_fee_rate;
    let maintenance_cost = total_distance * rates.maintenance_cost_per_mile;
    let toll_cost = rates.default_toll_cost;

    let total_expenses = fuel_cost + dispatcher_fee + maintenance_cost + toll_cost;
    let net_profit = input.load_pay - total_expenses;

    Ok(LoadEstimate {
        total_distance,
        rate_per_mile,
        fuel_cost,
        dispatcher_fee,
        maintenance_cost,
        toll_cost,
        total_expenses,
        net_profit,
    })
}

fn resolve_route_miles(
    input: &LoadInput,
    distances: &DistanceTable,
    resolver: &dyn DistanceResolver,
) -> Result<f64, InputError> {
    if let Some(miles) = distances.get(&input.origin, &input.destination) {
        return Ok(miles);
    }

    let raw = resolver
        .resolve(&input.origin, &input.destination)
        .ok_or_else(|| InputError::UnresolvedRoute {
            origin: input.origin.clone(),
            destination: input.destination.clone(),
        })?;

    let miles = parse_field("Route Distance (miles)", &raw)?;
    if !miles.is_finite() || miles < 0.0 {
        return Err(InputError::NegativeNumber {
            field: "Route Distance (miles)".to_string(),
            value: miles,
        });
    }
    Ok(miles)
}
