//! # querylablib
//!
//! A collection of small query exercises over an in-memory dataset of
//! customers, orders, suppliers and products.
//!
//! ## Overview
//!
//! Each exercise filters, joins, groups, sorts or aggregates one immutable
//! [`Dataset`] and returns a [`Report`]: the structured result plus the
//! listing a user sees. The pieces:
//!
//! - **data**: entity types and the dataset provider (bundled sample or JSON file)
//! - **query**: inner/group join, group-by, multi-key sort, sum/count/average
//! - **exercises**: the ten exercises, one typed result function each
//! - **registry**: stable keys (`task1`..`task10`) mapped to report functions
//! - **output**: reports and the depth-limited text dumper
//!
//! Nothing here prints. Rendering writes to a caller-supplied sink.
//!
//! ## Example
//!
//! ```rust
//! use querylablib::{render_report, run_exercise, Dataset, QueryConfig};
//!
//! let dataset = Dataset::sample().unwrap();
//! let config = QueryConfig::new().turnover_threshold(20_000.0);
//!
//! let report = run_exercise("task1", &dataset, &config).unwrap();
//! let text = render_report(&report, None).unwrap();
//! assert!(text.contains("company_name="));
//!
//! // Unknown keys are an error, not an empty report
//! assert!(run_exercise("task42", &dataset, &config).is_err());
//! ```

pub mod data;
pub mod error;
pub mod exercises;
pub mod output;
pub mod query;
pub mod registry;

pub use data::{Category, Customer, Dataset, Order, Product, Supplier};
pub use error::QueryLabError;
pub use output::{render_report, write_report, Dumper, Report, ReportEntry, PLACEHOLDER};
pub use query::{Average, OrderDirection, PriceTier, QueryConfig};
pub use registry::{run_exercise, Exercise, ExerciseFn, ExerciseInfo, Registry};

/// Result type for querylablib operations
pub type Result<T> = std::result::Result<T, QueryLabError>;
