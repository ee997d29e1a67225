//! Sum, count and average over numeric projections.

use std::fmt;

use serde::{Serialize, Serializer};

/// Marker rendered in place of an average over no values
pub const NO_DATA: &str = "no data";

/// Sum of `value` over `items`. Empty input sums to 0.
pub fn sum<I, F>(items: I, value: F) -> f64
where
    I: IntoIterator,
    F: FnMut(I::Item) -> f64,
{
    items.into_iter().map(value).sum()
}

pub fn count<I: IntoIterator>(items: I) -> usize {
    items.into_iter().count()
}

/// Arithmetic mean of `value` over `items`, or [`Average::NoData`] when empty.
pub fn average<I, F>(items: I, value: F) -> Average
where
    I: IntoIterator,
    F: FnMut(I::Item) -> f64,
{
    let (total, n) = items
        .into_iter()
        .map(value)
        .fold((0.0, 0usize), |(total, n), v| (total + v, n + 1));
    if n == 0 {
        Average::NoData
    } else {
        Average::Value(total / n as f64)
    }
}

/// Round a monetary amount to cents for display.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Result of [`average`].
///
/// Serializes as a number, or as the string `"no data"` when undefined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Average {
    Value(f64),
    NoData,
}

impl Average {
    pub fn value(&self) -> Option<f64> {
        match self {
            Average::Value(v) => Some(*v),
            Average::NoData => None,
        }
    }

    /// Round a defined average to cents; `NoData` stays as is.
    pub fn rounded(self) -> Self {
        match self {
            Average::Value(v) => Average::Value(round_cents(v)),
            Average::NoData => Average::NoData,
        }
    }
}

impl fmt::Display for Average {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Average::Value(v) => write!(f, "{v}"),
            Average::NoData => f.write_str(NO_DATA),
        }
    }
}

impl Serialize for Average {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Average::Value(v) => serializer.serialize_f64(*v),
            Average::NoData => serializer.serialize_str(NO_DATA),
        }
    }
}
