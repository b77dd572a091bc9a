//! Goal calculation

use crate::error::{Error, Result};

/// Applies a percentage increase to a total
pub struct GoalCalculator;

impl GoalCalculator {
    /// `total * (1 + percent / 100)`, unrounded
    pub fn compute_goal(total: f64, percent: f64) -> Result<f64> {
        if !percent.is_finite() {
            return Err(Error::InvalidPercent(percent.to_string()));
        }
        Ok(total * (1.0 + percent / 100.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_goal() {
        assert_eq!(GoalCalculator::compute_goal(1000.0, 20.0).unwrap(), 1200.0);
        assert_eq!(GoalCalculator::compute_goal(0.0, 50.0).unwrap(), 0.0);
        assert_eq!(GoalCalculator::compute_goal(200.0, -10.0).unwrap(), 180.0);
        assert_eq!(GoalCalculator::compute_goal(80.0, 0.0).unwrap(), 80.0);
    }

    #[test]
    fn test_non_finite_percent() {
        assert!(matches!(
            GoalCalculator::compute_goal(100.0, f64::NAN),
            Err(Error::InvalidPercent(_))
        ));
        assert!(matches!(
            GoalCalculator::compute_goal(100.0, f64::INFINITY),
            Err(Error::InvalidPercent(_))
        ));
    }
}
