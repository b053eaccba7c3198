use serde::{Deserialize, Serialize};

use super::load_estimate::LoadEstimate;
use super::load_input::LoadInput;

/// An estimated load held in the book, either booked or still under
/// consideration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadEntry {
    pub input: LoadInput,
    pub estimate: LoadEstimate,
}

/// Owned session collection of booked and considered loads.
///
/// Callers own the book and pass it explicitly; there is no shared state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadBook {
    booked: Vec<LoadEntry>,
    considered: Vec<LoadEntry>,
}

impl LoadBook {
    pub fn book(&mut self, input: LoadInput, estimate: LoadEstimate) {
        self.booked.push(LoadEntry { input, estimate });
    }

    pub fn consider(&mut self, input: LoadInput, estimate: LoadEstimate) {
        self.considered.push(LoadEntry { input, estimate });
    }

    pub fn booked(&self) -> &[LoadEntry] {
        &self.booked
    }

    pub fn considered(&self) -> &[LoadEntry] {
        &self.considered
    }

    pub fn is_empty(&self) -> bool {
        self.booked.is_empty() && self.considered.is_empty()
    }

    /// Sum of net profit over booked loads.
    pub fn total_profit(&self) -> f64 {
        self.booked.iter().map(|e| e.estimate.net_profit).sum()
    }

    /// Sum of total expenses over booked loads.
    pub fn total_expenses(&self) -> f64 {
        self.booked.iter().map(|e| e.estimate.total_expenses).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(pay: f64, expenses: f64) -> (LoadInput, LoadEstimate) {
        let input = LoadInput::new("Atlanta, GA", "Macon, GA", pay, 0.0, 0.0).unwrap();
        let estimate = LoadEstimate {
            total_distance: 84.0,
            rate_per_mile: pay / 84.0,
            fuel_cost: 0.0,
            dispatcher_fee: 0.0,
            maintenance_cost: 0.0,
            toll_cost: 0.0,
            total_expenses: expenses,
            net_profit: pay - expenses,
        };
        (input, estimate)
    }

    #[test]
    fn test_booked_totals() {
        let mut book = LoadBook::default();
        let (i1, e1) = entry(500.0, 170.0);
        let (i2, e2) = entry(800.0, 230.0);
        book.book(i1, e1);
        book.book(i2, e2);

        assert_eq!(book.booked().len(), 2);
        assert!((book.total_profit() - 900.0).abs() < 1e-9);
        assert!((book.total_expenses() - 400.0).abs() < 1e-9);
    }

    #[test]
    fn test_considered_excluded_from_totals() {
        let mut book = LoadBook::default();
        let (i, e) = entry(500.0, 170.0);
        book.consider(i, e);

        assert_eq!(book.considered().len(), 1);
        assert!((book.total_profit() - 0.0).abs() < f64::EPSILON);
        assert!(!book.is_empty());
    }
}
