//! Aggregate exercises.
//!
//! - `task9`: per city, average customer turnover and average order count
//! - `task10`: per customer, order counts by month of year, by year, and by
//!   year and month
//!
//! Buckets only exist for months/years that actually have orders.

use serde::Serialize;

use crate::data::{Customer, Dataset};
use crate::output::Report;
use crate::query::{average, count, group_by, Average, QueryConfig};
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityStatistics {
    pub city: String,
    /// Mean turnover of the city's customers
    pub average_income: Average,
    /// Mean number of orders per customer
    pub intensity: Average,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthCount {
    pub month: u32,
    pub orders: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearCount {
    pub year: i32,
    pub orders: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearMonthCount {
    pub year: i32,
    pub month: u32,
    pub orders: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerActivity<'a> {
    pub customer_id: &'a str,
    pub by_month: Vec<MonthCount>,
    pub by_year: Vec<YearCount>,
    pub by_year_month: Vec<YearMonthCount>,
}

/// Average turnover and order count per customer, grouped by city.
pub fn city_statistics(dataset: &Dataset) -> Vec<CityStatistics> {
    group_by(dataset.customers.iter(), |c| c.city.clone())
        .into_iter()
        .map(|g| CityStatistics {
            average_income: average(g.iter(), |c| c.turnover()).rounded(),
            intensity: average(g.iter(), |c| c.orders.len() as f64).rounded(),
            city: g.key,
        })
        .collect()
}

/// Order counts of one customer, bucketed three ways.
pub fn activity_of(customer: &Customer) -> CustomerActivity<'_> {
    let by_month = group_by(&customer.orders, |o| o.month())
        .into_iter()
        .map(|g| MonthCount {
            month: g.key,
            orders: count(g.items),
        })
        .collect();
    let by_year = group_by(&customer.orders, |o| o.year())
        .into_iter()
        .map(|g| YearCount {
            year: g.key,
            orders: count(g.items),
        })
        .collect();
    let by_year_month = group_by(&customer.orders, |o| (o.year(), o.month()))
        .into_iter()
        .map(|g| YearMonthCount {
            year: g.key.0,
            month: g.key.1,
            orders: count(g.items),
        })
        .collect();

    CustomerActivity {
        customer_id: &customer.id,
        by_month,
        by_year,
        by_year_month,
    }
}

pub fn customer_activity(dataset: &Dataset) -> Vec<CustomerActivity<'_>> {
    dataset.customers.iter().map(activity_of).collect()
}

pub fn city_report(dataset: &Dataset, _config: &QueryConfig) -> Result<Report> {
    let rows = city_statistics(dataset);
    let mut report = Report::new(&rows)?;
    report.values(&rows, 0)?;
    Ok(report)
}

pub fn activity_report(dataset: &Dataset, _config: &QueryConfig) -> Result<Report> {
    let rows = customer_activity(dataset);
    let mut report = Report::new(&rows)?;
    report.values(&rows, 4)?;
    Ok(report)
}
