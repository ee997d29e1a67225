//! Query operations: join, group, sort and aggregate.
//!
//! These are the building blocks every exercise composes. Filtering is plain
//! `Iterator::filter`; what the standard library lacks lives here:
//!
//! - **join**: `inner_join`, `group_join` on an equality key
//! - **group**: `group_by`, first-occurrence ordered and nestable
//! - **sort**: `SortSpec`, stable multi-key sort with per-key direction
//! - **aggregate**: `sum`, `count`, `average` (with an explicit no-data case)
//! - **options**: `QueryConfig`, `OrderDirection`, `PriceTier`
//!
//! ## Example
//!
//! ```rust
//! use querylablib::query::{average, group_by, Average};
//!
//! let cities = ["Berlin", "London", "Berlin"];
//! let turnover = [100.0, 40.0, 300.0];
//! let groups = group_by(cities.iter().zip(turnover.iter()), |(city, _)| **city);
//!
//! assert_eq!(groups[0].key, "Berlin");
//! assert_eq!(average(groups[0].iter(), |(_, t)| **t), Average::Value(200.0));
//! ```

pub mod aggregate;
pub mod group;
pub mod join;
pub mod options;
pub mod sort;

pub use aggregate::{average, count, round_cents, sum, Average, NO_DATA};
pub use group::{group_by, Grouping};
pub use join::{group_join, inner_join};
pub use options::{
    OrderDirection, PriceTier, QueryConfig, DEFAULT_CHEAP_BELOW, DEFAULT_EXPENSIVE_FROM,
    DEFAULT_ORDER_THRESHOLD, DEFAULT_TURNOVER_THRESHOLD,
};
pub use sort::SortSpec;
