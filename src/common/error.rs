//! Error types for sampling_planner

use std::fmt;

/// Main error type for the planning primitives
#[derive(Debug)]
pub enum PlanningError {
    /// Invalid parameter (bias out of range, inverted bounds, bad obstacle)
    InvalidParameter(String),
    /// Goal-biased sampling requested without a goal configuration
    MissingGoal(String),
    /// Path has too few waypoints for shortcutting
    DegeneratePath(String),
    /// The collision oracle's placement/query call itself failed
    CollisionOracle(String),
    /// Visualization backend failed
    Visualization(String),
}

impl fmt::Display for PlanningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanningError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            PlanningError::MissingGoal(msg) => write!(f, "Missing goal: {}", msg),
            PlanningError::DegeneratePath(msg) => write!(f, "Degenerate path: {}", msg),
            PlanningError::CollisionOracle(msg) => write!(f, "Collision oracle failure: {}", msg),
            PlanningError::Visualization(msg) => write!(f, "Visualization error: {}", msg),
        }
    }
}

impl std::error::Error for PlanningError {}

/// Result type alias for planning operations
pub type PlanningResult<T> = Result<T, PlanningError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PlanningError::DegeneratePath("2 waypoints".to_string());
        assert_eq!(format!("{}", err), "Degenerate path: 2 waypoints");
    }

    #[test]
    fn test_oracle_failure_is_distinct() {
        let err = PlanningError::CollisionOracle("non-finite placement".to_string());
        assert!(matches!(err, PlanningError::CollisionOracle(_)));
        assert!(format!("{}", err).starts_with("Collision oracle failure"));
    }
}
