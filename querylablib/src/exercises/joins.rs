//! Join exercise (`task2`): suppliers located in each customer's city.
//!
//! The location key is the exact (city, country) pair as stored; no case
//! folding or trimming is applied.

use serde::Serialize;

use crate::data::{Customer, Dataset, Supplier};
use crate::output::Report;
use crate::query::{group_join, inner_join, QueryConfig};
use crate::Result;

/// One customer/supplier pair sharing a location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerSupplier<'a> {
    pub customer: &'a str,
    pub supplier: &'a str,
}

/// A customer with every supplier sharing its location (possibly none).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerSuppliers<'a> {
    pub customer: &'a str,
    pub suppliers: Vec<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplierMatches<'a> {
    pub pairs: Vec<CustomerSupplier<'a>>,
    pub grouped: Vec<CustomerSuppliers<'a>>,
}

fn customer_location(c: &Customer) -> (&str, &str) {
    (&c.city, &c.country)
}

fn supplier_location(s: &Supplier) -> (&str, &str) {
    (&s.city, &s.country)
}

/// Inner join: one row per matching (customer, supplier) pair.
pub fn supplier_pairs(dataset: &Dataset) -> Vec<CustomerSupplier<'_>> {
    inner_join(
        &dataset.customers,
        &dataset.suppliers,
        customer_location,
        supplier_location,
        |c, s| CustomerSupplier {
            customer: &c.company_name,
            supplier: &s.name,
        },
    )
}

/// Group join: one row per customer.
pub fn suppliers_by_customer(dataset: &Dataset) -> Vec<CustomerSuppliers<'_>> {
    group_join(
        &dataset.customers,
        &dataset.suppliers,
        customer_location,
        supplier_location,
        |c, suppliers| CustomerSuppliers {
            customer: &c.company_name,
            suppliers: suppliers.into_iter().map(|s| s.name.as_str()).collect(),
        },
    )
}

pub fn supplier_report(dataset: &Dataset, _config: &QueryConfig) -> Result<Report> {
    let matches = SupplierMatches {
        pairs: supplier_pairs(dataset),
        grouped: suppliers_by_customer(dataset),
    };
    let mut report = Report::new(&matches)?;

    report.text("Without grouping:");
    for pair in &matches.pairs {
        report.text(format!(
            "Customer: {}\n   Supplier: {}",
            pair.customer, pair.supplier
        ));
    }

    report.text("With grouping:");
    for row in &matches.grouped {
        report.text(format!(
            "Customer: {}\n   Suppliers: {}",
            row.customer,
            row.suppliers.join(", ")
        ));
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_on_sample() {
        let data = Dataset::sample().unwrap();
        let pairs = supplier_pairs(&data);

        let expected = data
            .customers
            .iter()
            .map(|c| {
                data.suppliers
                    .iter()
                    .filter(|s| s.city == c.city && s.country == c.country)
                    .count()
            })
            .sum::<usize>();
        assert_eq!(pairs.len(), expected);
        assert_eq!(pairs.len(), 7);
        assert_eq!(
            pairs[0],
            CustomerSupplier {
                customer: "Alfreds Futterkiste",
                supplier: "Heli Süßwaren GmbH & Co. KG",
            }
        );
        // Three London customers share one London supplier
        let exotic = pairs.iter().filter(|p| p.supplier == "Exotic Liquids").count();
        assert_eq!(exotic, 3);
    }

    #[test]
    fn test_grouped_has_one_row_per_customer() {
        let data = Dataset::sample().unwrap();
        let grouped = suppliers_by_customer(&data);

        assert_eq!(grouped.len(), data.customers.len());
        let graz = grouped
            .iter()
            .find(|r| r.customer == "Ernst Handel")
            .unwrap();
        assert!(graz.suppliers.is_empty());
        let paris = grouped
            .iter()
            .find(|r| r.customer == "Paris spécialités")
            .unwrap();
        assert_eq!(paris.suppliers, vec!["Aux joyeux ecclésiastiques"]);
    }

    #[test]
    fn test_same_city_different_country_does_not_match() {
        let json = r#"{
            "customers": [
                { "id": "A", "company_name": "A", "city": "London", "country": "Canada", "phone": "(1)" }
            ],
            "suppliers": [
                { "id": 1, "name": "S", "city": "London", "country": "UK" }
            ]
        }"#;
        let data = Dataset::from_json_str(json).unwrap();
        assert!(supplier_pairs(&data).is_empty());
        assert_eq!(suppliers_by_customer(&data)[0].suppliers.len(), 0);
    }

    #[test]
    fn test_report_sections() {
        let data = Dataset::sample().unwrap();
        let report = supplier_report(&data, &QueryConfig::default()).unwrap();
        // Two headings, one line per pair, one line per customer
        assert_eq!(report.len(), 2 + 7 + data.customers.len());
        assert_eq!(report.data["pairs"].as_array().unwrap().len(), 7);
    }
}
