use haulcalc_types::InputError;
use serde::{Deserialize, Serialize};

/// One trip's manually entered parameters for single-load estimation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadInput {
    pub origin: String,
    pub destination: String,
    /// Agreed revenue for the load ($)
    pub load_pay: f64,
    /// Empty-haul miles driven to reach the pickup
    pub deadhead_to_origin: f64,
    /// Empty-haul miles driven after drop-off
    pub deadhead_from_destination: f64,
}

impl LoadInput {
    /// Build a validated input. Numeric fields must be non-negative and
    /// finite; origin/destination must be non-empty.
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        load_pay: f64,
        deadhead_to_origin: f64,
        deadhead_from_destination: f64,
    ) -> Result<Self, InputError> {
        let origin = origin.into();
        let destination = destination.into();
        check_location("Origin", &origin)?;
        check_location("Destination", &destination)?;
        check_non_negative("Total Load Pay ($)", load_pay)?;
        check_non_negative("Deadhead to Origin (miles)", deadhead_to_origin)?;
        check_non_negative(
            "Deadhead from Destination (miles)",
            deadhead_from_destination,
        )?;

        Ok(Self {
            origin,
            destination,
            load_pay,
            deadhead_to_origin,
            deadhead_from_destination,
        })
    }

    /// Parse an input from raw text fields, as supplied by an interactive
    /// collector. A field that does not parse as a number fails with an
    /// error naming that field.
    pub fn from_fields(
        origin: &str,
        destination: &str,
        load_pay: &str,
        deadhead_to_origin: &str,
        deadhead_from_destination: &str,
    ) -> Result<Self, InputError> {
        Self::new(
            origin.trim(),
            destination.trim(),
            parse_field("Total Load Pay ($)", load_pay)?,
            parse_field("Deadhead to Origin (miles)", deadhead_to_origin)?,
            parse_field("Deadhead from Destination (miles)", deadhead_from_destination)?,
        )
    }
}

/// Parse a single numeric field, reporting the field name on failure.
pub(crate) fn parse_field(field: &str, value: &str) -> Result<f64, InputError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| InputError::InvalidNumber {
            field: field.to_string(),
            value: value.to_string(),
        })
}

fn check_non_negative(field: &str, value: f64) -> Result<(), InputError> {
    if !value.is_finite() || value < 0.0 {
        return Err(InputError::NegativeNumber {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}

fn check_location(field: &str, value: &str) -> Result<(), InputError> {
    if value.trim().is_empty() {
        return Err(InputError::EmptyField {
            field: field.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_fields() {
        let input =
            LoadInput::from_fields("Atlanta, GA", "Macon, GA", "500", "10", "5").unwrap();
        assert_eq!(input.origin, "Atlanta, GA");
        assert!((input.load_pay - 500.0).abs() < f64::EPSILON);
        assert!((input.deadhead_to_origin - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_numeric_pay_names_field() {
        let err = LoadInput::from_fields("A", "B", "five hundred", "10", "5").unwrap_err();
        assert!(err.to_string().contains("Total Load Pay ($)"));
    }

    #[test]
    fn test_negative_deadhead_rejected() {
        let err = LoadInput::new("A", "B", 500.0, -10.0, 5.0).unwrap_err();
        assert!(err.to_string().contains("Deadhead to Origin (miles)"));
    }

    #[test]
    fn test_empty_origin_rejected() {
        let err = LoadInput::new("  ", "B", 500.0, 10.0, 5.0).unwrap_err();
        assert!(err.to_string().contains("Origin"));
    }
}
