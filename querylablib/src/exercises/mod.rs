//! The ten query exercises.
//!
//! Each exercise is a pair of functions: one returning a typed result built
//! from query operations, and a `*_report` function with the uniform
//! signature `fn(&Dataset, &QueryConfig) -> Result<Report>` that the
//! [`Registry`](crate::registry::Registry) calls.
//!
//! | Key | Module | Report |
//! | --- | --- | --- |
//! | `task1` | restriction | [`turnover_report`] |
//! | `task2` | joins | [`supplier_report`] |
//! | `task3` | restriction | [`large_order_report`] |
//! | `task4` | projection | [`start_month_report`] |
//! | `task5` | projection | [`timeline_report`] |
//! | `task6` | restriction | [`incomplete_contact_report`] |
//! | `task7` | grouping | [`stock_report`] |
//! | `task8` | grouping | [`price_tier_report`] |
//! | `task9` | statistics | [`city_report`] |
//! | `task10` | statistics | [`activity_report`] |

pub mod grouping;
pub mod joins;
pub mod projection;
pub mod restriction;
pub mod statistics;

pub use grouping::{
    price_tier_report, products_by_category_and_stock, products_by_price_tier, stock_report,
    CategoryStock, PriceGroup, StockLevel,
};
pub use joins::{
    supplier_pairs, supplier_report, suppliers_by_customer, CustomerSupplier, CustomerSuppliers,
    SupplierMatches,
};
pub use projection::{
    customer_start_months, customer_timelines, first_order_month, start_month_report,
    timeline_order, timeline_report, CustomerSince, CustomerTimeline, YearMonth,
};
pub use restriction::{
    contact_issues, customers_above_turnover, customers_with_incomplete_contact,
    customers_with_large_order, incomplete_contact_report, large_order_report, turnover_report,
    ContactIssue, FlaggedCustomer,
};
pub use statistics::{
    activity_of, activity_report, city_report, city_statistics, customer_activity,
    CityStatistics, CustomerActivity, MonthCount, YearCount, YearMonthCount,
};
