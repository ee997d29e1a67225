//! Data layer: entity types and the dataset provider.
//!
//! - **model**: `Customer`, `Order`, `Supplier`, `Product`, `Category`
//! - **dataset**: `Dataset`, loaded from the bundled sample or a JSON file

pub mod dataset;
pub mod model;

pub use dataset::Dataset;
pub use model::{Category, Customer, Order, Product, Supplier};
