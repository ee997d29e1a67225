//! Restriction exercises: customers picked out by a predicate.
//!
//! - `task1`: turnover above a threshold
//! - `task3`: at least one order above a threshold
//! - `task6`: incomplete contact details

use serde::Serialize;

use crate::data::{Customer, Dataset};
use crate::output::Report;
use crate::query::{sum, QueryConfig};
use crate::Result;

/// Customers whose summed order totals exceed `threshold`.
///
/// A customer without orders sums to 0 and never passes a positive threshold.
pub fn customers_above_turnover(dataset: &Dataset, threshold: f64) -> Vec<&Customer> {
    dataset
        .customers
        .iter()
        .filter(|c| sum(&c.orders, |o| o.total) > threshold)
        .collect()
}

/// Customers with at least one order whose total exceeds `threshold`.
pub fn customers_with_large_order(dataset: &Dataset, threshold: f64) -> Vec<&Customer> {
    dataset
        .customers
        .iter()
        .filter(|c| c.orders.iter().any(|o| o.total > threshold))
        .collect()
}

/// Why a customer's contact details are considered incomplete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactIssue {
    /// Postal code is absent, empty or not an integer
    NonNumericPostalCode,
    /// Region is absent or empty
    MissingRegion,
    /// Phone does not start with an operator code in parentheses
    MissingOperatorCode,
}

/// A customer flagged for incomplete contact details.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlaggedCustomer<'a> {
    pub id: &'a str,
    pub company_name: &'a str,
    pub postal_code: Option<&'a str>,
    pub region: Option<&'a str>,
    pub phone: &'a str,
    pub issues: Vec<ContactIssue>,
}

/// Every contact issue found on a customer, in a fixed order.
pub fn contact_issues(customer: &Customer) -> Vec<ContactIssue> {
    let mut issues = Vec::new();
    if !customer.has_numeric_postal_code() {
        issues.push(ContactIssue::NonNumericPostalCode);
    }
    if !customer.has_region() {
        issues.push(ContactIssue::MissingRegion);
    }
    if !customer.has_operator_code() {
        issues.push(ContactIssue::MissingOperatorCode);
    }
    issues
}

/// Customers with a non-numeric postal code, no region, or no operator code.
pub fn customers_with_incomplete_contact(dataset: &Dataset) -> Vec<FlaggedCustomer<'_>> {
    dataset
        .customers
        .iter()
        .filter_map(|c| {
            let issues = contact_issues(c);
            if issues.is_empty() {
                return None;
            }
            Some(FlaggedCustomer {
                id: &c.id,
                company_name: &c.company_name,
                postal_code: c.postal_code.as_deref(),
                region: c.region.as_deref(),
                phone: &c.phone,
                issues,
            })
        })
        .collect()
}

pub fn turnover_report(dataset: &Dataset, config: &QueryConfig) -> Result<Report> {
    let customers = customers_above_turnover(dataset, config.turnover_threshold);
    let mut report = Report::new(&customers)?;
    report.values(customers, 2)?;
    Ok(report)
}

pub fn large_order_report(dataset: &Dataset, config: &QueryConfig) -> Result<Report> {
    let names: Vec<&str> = customers_with_large_order(dataset, config.order_threshold)
        .into_iter()
        .map(|c| c.company_name.as_str())
        .collect();
    let mut report = Report::new(&names)?;
    for name in names {
        report.text(name);
    }
    Ok(report)
}

pub fn incomplete_contact_report(dataset: &Dataset, _config: &QueryConfig) -> Result<Report> {
    let flagged = customers_with_incomplete_contact(dataset);
    let mut report = Report::new(&flagged)?;
    report.values(&flagged, 1)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Order;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn order(id: u32, total: f64) -> Order {
        Order {
            id,
            date: NaiveDate::from_ymd_opt(1997, 8, 25).unwrap(),
            total,
        }
    }

    fn customer(id: &str, totals: &[f64]) -> Customer {
        Customer {
            id: id.to_string(),
            company_name: format!("{id} Company"),
            city: "Berlin".to_string(),
            region: Some("BE".to_string()),
            postal_code: Some("12209".to_string()),
            country: "Germany".to_string(),
            phone: "(030) 0074321".to_string(),
            orders: totals
                .iter()
                .enumerate()
                .map(|(i, t)| order(i as u32, *t))
                .collect(),
        }
    }

    fn dataset(customers: Vec<Customer>) -> Dataset {
        Dataset {
            customers,
            ..Dataset::default()
        }
    }

    fn ids(customers: &[&Customer]) -> Vec<String> {
        customers.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn test_turnover_threshold_is_exclusive() {
        let data = dataset(vec![
            customer("BIG", &[6000.0, 4000.01]),
            customer("EXACT", &[10000.0]),
            customer("SMALL", &[10.0]),
            customer("NONE", &[]),
        ]);
        let found = customers_above_turnover(&data, 10000.0);
        assert_eq!(ids(&found), vec!["BIG"]);
    }

    #[test]
    fn test_customer_without_orders_never_passes_positive_threshold() {
        let data = dataset(vec![customer("NONE", &[])]);
        assert!(customers_above_turnover(&data, 0.01).is_empty());
        // Zero threshold is also exclusive: 0 > 0 is false
        assert!(customers_above_turnover(&data, 0.0).is_empty());
    }

    #[test]
    fn test_large_order_uses_single_orders() {
        let data = dataset(vec![
            customer("ALFKI", &[1200.0]),
            customer("SPLIT", &[800.0, 800.0]),
        ]);
        assert_eq!(ids(&customers_with_large_order(&data, 1000.0)), vec!["ALFKI"]);
        assert!(customers_with_large_order(&data, 1500.0).is_empty());
    }

    #[test]
    fn test_contact_issues_each_condition() {
        let complete = customer("OK", &[]);
        assert!(contact_issues(&complete).is_empty());

        let mut c = customer("A", &[]);
        c.postal_code = Some("WA1 1DP".to_string());
        assert_eq!(contact_issues(&c), vec![ContactIssue::NonNumericPostalCode]);

        let mut c = customer("B", &[]);
        c.region = Some(String::new());
        assert_eq!(contact_issues(&c), vec![ContactIssue::MissingRegion]);

        let mut c = customer("C", &[]);
        c.phone = "030-0074321".to_string();
        assert_eq!(contact_issues(&c), vec![ContactIssue::MissingOperatorCode]);

        let mut c = customer("D", &[]);
        c.postal_code = None;
        c.region = None;
        c.phone = String::new();
        assert_eq!(contact_issues(&c).len(), 3);
    }

    #[test]
    fn test_incomplete_contact_on_sample() {
        let data = Dataset::sample().unwrap();
        let flagged = customers_with_incomplete_contact(&data);
        let flagged_ids: Vec<&str> = flagged.iter().map(|f| f.id).collect();

        assert!(flagged_ids.contains(&"ALFKI")); // no region, no operator code
        assert!(flagged_ids.contains(&"AROUT")); // postal code "WA1 1DP"
        assert!(flagged_ids.contains(&"COMMI")); // postal code "05432-043"
        assert!(!flagged_ids.contains(&"GREAL"));
        assert!(!flagged_ids.contains(&"SAVEA"));

        let alfki = flagged.iter().find(|f| f.id == "ALFKI").unwrap();
        assert_eq!(
            alfki.issues,
            vec![ContactIssue::MissingRegion, ContactIssue::MissingOperatorCode]
        );
    }

    #[test]
    fn test_turnover_report_on_sample() {
        let data = Dataset::sample().unwrap();
        let report = turnover_report(&data, &QueryConfig::default()).unwrap();
        let listed: Vec<&str> = report
            .data
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["id"].as_str().unwrap())
            .collect();

        assert_eq!(listed, vec!["AROUT", "ERNSH", "GREAL", "MEREP", "SAVEA"]);
        assert_eq!(report.len(), listed.len());
    }

    #[test]
    fn test_large_order_report_lists_names() {
        let data = dataset(vec![customer("ALFKI", &[1200.0]), customer("LOW", &[5.0])]);
        let report = large_order_report(&data, &QueryConfig::default()).unwrap();
        assert_eq!(report.data, serde_json::json!(["ALFKI Company"]));

        let report = large_order_report(&data, &QueryConfig::new().order_threshold(1500.0)).unwrap();
        assert!(report.is_empty());
    }

    proptest! {
        #[test]
        fn turnover_filter_matches_definition(
            totals in prop::collection::vec(prop::collection::vec(0.0f64..5000.0, 0..5), 0..8),
            threshold in 1.0f64..15000.0,
        ) {
            let customers: Vec<Customer> = totals
                .iter()
                .enumerate()
                .map(|(i, t)| customer(&format!("C{i}"), t))
                .collect();
            let data = dataset(customers);
            let found = ids(&customers_above_turnover(&data, threshold));

            for c in &data.customers {
                let included = found.contains(&c.id);
                prop_assert_eq!(included, c.turnover() > threshold);
                if c.orders.is_empty() {
                    prop_assert!(!included);
                }
            }
        }
    }
}
