//! Query parameters and sort options.
//!
//! The exercise thresholds and price boundaries are sample parameters; they
//! live here as named defaults so callers can override them explicitly.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::QueryLabError;
use crate::Result;

/// Minimum summed turnover for a customer to be listed by `task1` (exclusive)
pub const DEFAULT_TURNOVER_THRESHOLD: f64 = 10_000.0;
/// Minimum single order total for a customer to be listed by `task3` (exclusive)
pub const DEFAULT_ORDER_THRESHOLD: f64 = 1_000.0;
/// Products priced below this are cheap
pub const DEFAULT_CHEAP_BELOW: f64 = 50.0;
/// Products priced at or above this are expensive
pub const DEFAULT_EXPENSIVE_FROM: f64 = 100.0;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderDirection {
    /// Ascending (A-Z, smallest first)
    #[default]
    Ascending,
    /// Descending (Z-A, largest first)
    Descending,
}

impl OrderDirection {
    /// Orient an ascending comparison result.
    pub fn apply(self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            OrderDirection::Ascending => ordering,
            OrderDirection::Descending => ordering.reverse(),
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            OrderDirection::Ascending => OrderDirection::Descending,
            OrderDirection::Descending => OrderDirection::Ascending,
        }
    }
}

/// Price bucket used by the product grouping exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceTier {
    Cheap,
    Average,
    Expensive,
}

impl fmt::Display for PriceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PriceTier::Cheap => "Cheap",
            PriceTier::Average => "Average",
            PriceTier::Expensive => "Expensive",
        };
        f.write_str(name)
    }
}

/// Parameters shared by the exercises.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Turnover a customer must exceed to be listed by `task1`
    pub turnover_threshold: f64,
    /// Order total a customer must exceed at least once to be listed by `task3`
    pub order_threshold: f64,
    /// Upper (exclusive) bound of the cheap tier
    pub cheap_below: f64,
    /// Lower (inclusive) bound of the expensive tier
    pub expensive_from: f64,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            turnover_threshold: DEFAULT_TURNOVER_THRESHOLD,
            order_threshold: DEFAULT_ORDER_THRESHOLD,
            cheap_below: DEFAULT_CHEAP_BELOW,
            expensive_from: DEFAULT_EXPENSIVE_FROM,
        }
    }
}

impl QueryConfig {
    /// Create with the default sample parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the turnover threshold
    pub fn turnover_threshold(mut self, value: f64) -> Self {
        self.turnover_threshold = value;
        self
    }

    /// Builder: set the single order threshold
    pub fn order_threshold(mut self, value: f64) -> Self {
        self.order_threshold = value;
        self
    }

    /// Builder: set both price tier boundaries
    pub fn price_tiers(mut self, cheap_below: f64, expensive_from: f64) -> Self {
        self.cheap_below = cheap_below;
        self.expensive_from = expensive_from;
        self
    }

    /// Reject negative or non-finite values and price boundaries that are not increasing.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("turnover threshold", self.turnover_threshold),
            ("order threshold", self.order_threshold),
            ("cheap price boundary", self.cheap_below),
            ("expensive price boundary", self.expensive_from),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(QueryLabError::InvalidConfig(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        if self.cheap_below >= self.expensive_from {
            return Err(QueryLabError::InvalidConfig(format!(
                "cheap price boundary ({}) must be below expensive price boundary ({})",
                self.cheap_below, self.expensive_from
            )));
        }
        Ok(())
    }

    /// Bucket a unit price. The cheap check wins over the average check.
    pub fn price_tier(&self, price: f64) -> PriceTier {
        if price < self.cheap_below {
            PriceTier::Cheap
        } else if price < self.expensive_from {
            PriceTier::Average
        } else {
            PriceTier::Expensive
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cmp::Ordering;

    #[test]
    fn test_config_default() {
        let config = QueryConfig::default();
        assert_eq!(config.turnover_threshold, 10_000.0);
        assert_eq!(config.order_threshold, 1_000.0);
        assert_eq!(config.cheap_below, 50.0);
        assert_eq!(config.expensive_from, 100.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = QueryConfig::new()
            .turnover_threshold(500.0)
            .order_threshold(1500.0)
            .price_tiers(10.0, 20.0);
        assert_eq!(config.turnover_threshold, 500.0);
        assert_eq!(config.order_threshold, 1500.0);
        assert_eq!(config.price_tier(15.0), PriceTier::Average);
    }

    #[test]
    fn test_config_rejects_inverted_tiers() {
        let err = QueryConfig::new().price_tiers(100.0, 50.0).validate();
        assert!(matches!(err, Err(QueryLabError::InvalidConfig(_))));
        let err = QueryConfig::new().price_tiers(50.0, 50.0).validate();
        assert!(err.is_err());
    }

    #[test]
    fn test_config_rejects_negative_and_nan() {
        assert!(QueryConfig::new().turnover_threshold(-1.0).validate().is_err());
        assert!(QueryConfig::new().order_threshold(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_price_tier_boundaries() {
        let config = QueryConfig::default();
        assert_eq!(config.price_tier(49.99), PriceTier::Cheap);
        assert_eq!(config.price_tier(50.0), PriceTier::Average);
        assert_eq!(config.price_tier(99.99), PriceTier::Average);
        assert_eq!(config.price_tier(100.0), PriceTier::Expensive);
        assert_eq!(config.price_tier(150.0), PriceTier::Expensive);
        assert_eq!(config.price_tier(0.0), PriceTier::Cheap);
    }

    #[test]
    fn test_direction_apply() {
        assert_eq!(OrderDirection::Ascending.apply(Ordering::Less), Ordering::Less);
        assert_eq!(OrderDirection::Descending.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(OrderDirection::Descending.apply(Ordering::Equal), Ordering::Equal);
        assert_eq!(OrderDirection::Ascending.reversed(), OrderDirection::Descending);
    }

    proptest! {
        #[test]
        fn price_tiers_are_exclusive_and_ordered(price in 0.0f64..1000.0) {
            let config = QueryConfig::default();
            let tier = config.price_tier(price);
            let in_cheap = price < 50.0;
            let in_average = (50.0..100.0).contains(&price);
            let in_expensive = price >= 100.0;
            prop_assert_eq!(
                [in_cheap, in_average, in_expensive].iter().filter(|b| **b).count(),
                1
            );
            prop_assert_eq!(tier == PriceTier::Cheap, in_cheap);
            prop_assert_eq!(tier == PriceTier::Average, in_average);
            prop_assert_eq!(tier == PriceTier::Expensive, in_expensive);
        }
    }
}
