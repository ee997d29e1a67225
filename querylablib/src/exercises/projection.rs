//! Projection exercises: when each customer started ordering.
//!
//! - `task4`: month and year of the first order
//! - `task5`: the same, with turnover, sorted by year, month, turnover
//!   (largest first) and company name

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};

use crate::data::{Customer, Dataset};
use crate::output::Report;
use crate::query::{round_cents, sum, OrderDirection, QueryConfig, SortSpec};
use crate::Result;

/// A calendar month, rendered as `month.year` (e.g. `8.1997`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl From<NaiveDate> for YearMonth {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.month, self.year)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Month a customer placed their first order; `None` if they never ordered.
pub fn first_order_month(customer: &Customer) -> Option<YearMonth> {
    customer.first_order_date().map(YearMonth::from)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerSince<'a> {
    pub company_name: &'a str,
    pub since: Option<YearMonth>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerTimeline<'a> {
    pub company_name: &'a str,
    pub month: Option<u32>,
    pub year: Option<i32>,
    /// Exact sum of order totals; rounded to cents only when serialized
    #[serde(serialize_with = "serialize_cents")]
    pub turnover: f64,
}

fn serialize_cents<S: Serializer>(
    value: &f64,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(round_cents(*value))
}

impl<'a> CustomerTimeline<'a> {
    fn from_customer(customer: &'a Customer) -> Self {
        let start = first_order_month(customer);
        Self {
            company_name: &customer.company_name,
            month: start.map(|s| s.month),
            year: start.map(|s| s.year),
            turnover: sum(&customer.orders, |o| o.total),
        }
    }
}

pub fn customer_start_months(dataset: &Dataset) -> Vec<CustomerSince<'_>> {
    dataset
        .customers
        .iter()
        .map(|c| CustomerSince {
            company_name: &c.company_name,
            since: first_order_month(c),
        })
        .collect()
}

/// Sort order for timelines; `turnover` sets the direction of the turnover key.
///
/// Customers that never ordered have no year and sort first.
pub fn timeline_order<'a>(turnover: OrderDirection) -> SortSpec<'static, CustomerTimeline<'a>> {
    SortSpec::new()
        .then_by(|t: &CustomerTimeline<'a>| t.year, OrderDirection::Ascending)
        .then_by(|t: &CustomerTimeline<'a>| t.month, OrderDirection::Ascending)
        .then_by_float(|t: &CustomerTimeline<'a>| t.turnover, turnover)
        .then_with(
            |a: &CustomerTimeline<'a>, b: &CustomerTimeline<'a>| {
                a.company_name.cmp(b.company_name)
            },
            OrderDirection::Ascending,
        )
}

pub fn customer_timelines(dataset: &Dataset) -> Vec<CustomerTimeline<'_>> {
    let timelines = dataset
        .customers
        .iter()
        .map(CustomerTimeline::from_customer)
        .collect();
    timeline_order(OrderDirection::Descending).sorted(timelines)
}

pub fn start_month_report(dataset: &Dataset, _config: &QueryConfig) -> Result<Report> {
    let rows = customer_start_months(dataset);
    let mut report = Report::new(&rows)?;
    report.values(&rows, 0)?;
    Ok(report)
}

pub fn timeline_report(dataset: &Dataset, _config: &QueryConfig) -> Result<Report> {
    let rows = customer_timelines(dataset);
    let mut report = Report::new(&rows)?;
    report.values(&rows, 0)?;
    Ok(report)
}
