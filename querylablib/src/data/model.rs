//! Entity types of the sample dataset.
//!
//! All records are plain immutable data. Customers own their orders; an
//! order never points back at its customer.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

/// A customer and its order history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Five-letter customer code (e.g. "ALFKI")
    pub id: String,
    pub company_name: String,
    pub city: String,
    /// Not every country uses regions, so this is frequently absent
    #[serde(default)]
    pub region: Option<String>,
    /// Stored verbatim; may be non-numeric
    #[serde(default)]
    pub postal_code: Option<String>,
    pub country: String,
    pub phone: String,
    /// Orders in the order they were placed. Missing or `null` in the source means none.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub orders: Vec<Order>,
}

impl Customer {
    /// Sum of all order totals (0 for a customer without orders).
    pub fn turnover(&self) -> f64 {
        self.orders.iter().map(|o| o.total).sum()
    }

    /// Date of the earliest order, if any.
    pub fn first_order_date(&self) -> Option<NaiveDate> {
        self.orders.iter().map(|o| o.date).min()
    }

    /// Whether the postal code, ignoring surrounding whitespace, parses as an integer.
    pub fn has_numeric_postal_code(&self) -> bool {
        self.postal_code
            .as_deref()
            .is_some_and(|code| code.trim().parse::<i32>().is_ok())
    }

    /// Whether the region is present and non-empty.
    pub fn has_region(&self) -> bool {
        self.region.as_deref().is_some_and(|r| !r.is_empty())
    }

    /// Phone numbers with an operator code start with "(".
    pub fn has_operator_code(&self) -> bool {
        self.phone.starts_with('(')
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Order>, D::Error> {
    Ok(Option::<Vec<Order>>::deserialize(deserializer)?.unwrap_or_default())
}

/// A single order placed by a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u32,
    pub date: NaiveDate,
    pub total: f64,
}

impl Order {
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    pub city: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category: Category,
    pub unit_price: f64,
    pub units_in_stock: u32,
}

/// Product categories. The set is fixed; unknown names fail to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Beverages,
    Condiments,
    Confections,
    #[serde(rename = "Dairy Products")]
    DairyProducts,
    #[serde(rename = "Grains/Cereals")]
    GrainsCereals,
    #[serde(rename = "Meat/Poultry")]
    MeatPoultry,
    Produce,
    Seafood,
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Category::Beverages => "Beverages",
            Category::Condiments => "Condiments",
            Category::Confections => "Confections",
            Category::DairyProducts => "Dairy Products",
            Category::GrainsCereals => "Grains/Cereals",
            Category::MeatPoultry => "Meat/Poultry",
            Category::Produce => "Produce",
            Category::Seafood => "Seafood",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
