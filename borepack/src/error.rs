use thiserror::Error;

/// Failure outcomes of a packing request
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PackError {
    /// No cable selection row resolved to a valid circle
    #[error("no valid cables provided")]
    NoValidCables,
    /// More circles than the configured maximum
    #[error("circle count {count} exceeds configured maximum of {max}")]
    TooManyCircles { count: usize, max: usize },
    /// A circle handed directly to the search has a radius which is not a positive number
    #[error("circle {index} ({name}) has an invalid radius: {radius}")]
    InvalidRadius {
        index: usize,
        name: String,
        radius: f64,
    },
    /// None of the attempted trial radii admitted a placement.
    /// Indicates a configuration or algorithm defect rather than bad input.
    #[error("bore search exhausted after {attempts} attempts (last trial radius: {last_radius})")]
    SearchExhausted { attempts: usize, last_radius: f64 },
}

impl PackError {
    /// True if the error is caused by the request itself, and can be resolved by the user
    pub fn is_input_rejection(&self) -> bool {
        match self {
            PackError::NoValidCables
            | PackError::TooManyCircles { .. }
            | PackError::InvalidRadius { .. } => true,
            PackError::SearchExhausted { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_rejections_are_distinguished() {
        assert!(PackError::NoValidCables.is_input_rejection());
        assert!(PackError::TooManyCircles { count: 3, max: 2 }.is_input_rejection());
        let exhausted = PackError::SearchExhausted {
            attempts: 10,
            last_radius: 1.5,
        };
        assert!(!exhausted.is_input_rejection());
        assert_eq!(
            PackError::TooManyCircles { count: 3, max: 2 }.to_string(),
            "circle count 3 exceeds configured maximum of 2"
        );
    }
}
