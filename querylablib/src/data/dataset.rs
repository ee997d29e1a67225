//! Dataset provider: the immutable snapshot every exercise reads.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::model::{Customer, Product, Supplier};
use crate::error::QueryLabError;
use crate::Result;

/// The bundled sample data, embedded at compile time
const SAMPLE_DATASET: &str = include_str!("../../data/sample.json");

/// Customers (with their orders), suppliers and products.
///
/// Built once by one of the constructors and only ever read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub suppliers: Vec<Supplier>,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Dataset {
    /// Load the bundled sample dataset.
    pub fn sample() -> Result<Self> {
        Self::parse(SAMPLE_DATASET, "bundled sample")
    }

    /// Load a dataset from a JSON file with the same shape as the sample.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|source| QueryLabError::DatasetRead {
                path: path.to_path_buf(),
                source,
            })?;
        Self::parse(&contents, &path.display().to_string())
    }

    /// Load a dataset from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::parse(json, "string")
    }

    fn parse(json: &str, origin: &str) -> Result<Self> {
        let dataset: Dataset =
            serde_json::from_str(json).map_err(|source| QueryLabError::DatasetParse {
                origin: origin.to_string(),
                source,
            })?;
        dataset.validate()?;

        debug!(
            origin,
            customers = dataset.customers.len(),
            orders = dataset.order_count(),
            suppliers = dataset.suppliers.len(),
            products = dataset.products.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    /// Total number of orders across all customers.
    pub fn order_count(&self) -> usize {
        self.customers.iter().map(|c| c.orders.len()).sum()
    }

    /// Check the numeric invariants: order totals and unit prices are finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        for customer in &self.customers {
            for order in &customer.orders {
                check_amount(order.total).map_err(|reason| QueryLabError::InvalidRecord {
                    entity: "order",
                    id: format!("{}/{}", customer.id, order.id),
                    field: "total",
                    reason,
                })?;
            }
        }
        for product in &self.products {
            check_amount(product.unit_price).map_err(|reason| QueryLabError::InvalidRecord {
                entity: "product",
                id: product.id.to_string(),
                field: "unit_price",
                reason,
            })?;
        }
        Ok(())
    }
}

fn check_amount(value: f64) -> std::result::Result<(), String> {
    if !value.is_finite() {
        Err(format!("must be a finite number, got {value}"))
    } else if value < 0.0 {
        Err(format!("must not be negative, got {value}"))
    } else {
        Ok(())
    }
}
