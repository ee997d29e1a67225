//! Grouping exercises over products.
//!
//! - `task7`: by category, then by units in stock, cheapest first inside
//! - `task8`: by price tier (cheap / average / expensive)

use serde::Serialize;

use crate::data::{Category, Dataset, Product};
use crate::output::{format_number, Report};
use crate::query::{group_by, OrderDirection, PriceTier, QueryConfig, SortSpec};
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockLevel<'a> {
    pub units_in_stock: u32,
    pub products: Vec<&'a Product>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStock<'a> {
    pub category: Category,
    pub in_stock: Vec<StockLevel<'a>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceGroup<'a> {
    pub tier: PriceTier,
    pub products: Vec<&'a Product>,
}

fn cheapest_first<'a>() -> SortSpec<'static, &'a Product> {
    SortSpec::new().then_by_float(|p: &&'a Product| p.unit_price, OrderDirection::Ascending)
}

/// Products grouped by category, each category grouped by stock level.
///
/// Both levels keep first-occurrence order; products inside a stock level
/// are sorted by unit price.
pub fn products_by_category_and_stock(dataset: &Dataset) -> Vec<CategoryStock<'_>> {
    let by_price = cheapest_first();
    group_by(dataset.products.iter(), |p| p.category)
        .into_iter()
        .map(|category| CategoryStock {
            category: category.key,
            in_stock: group_by(category.items, |p| p.units_in_stock)
                .into_iter()
                .map(|level| StockLevel {
                    units_in_stock: level.key,
                    products: by_price.sorted(level.items),
                })
                .collect(),
        })
        .collect()
}

/// Products bucketed by the configured price boundaries.
pub fn products_by_price_tier<'a>(
    dataset: &'a Dataset,
    config: &QueryConfig,
) -> Vec<PriceGroup<'a>> {
    group_by(dataset.products.iter(), |p| config.price_tier(p.unit_price))
        .into_iter()
        .map(|g| PriceGroup {
            tier: g.key,
            products: g.items,
        })
        .collect()
}

pub fn stock_report(dataset: &Dataset, _config: &QueryConfig) -> Result<Report> {
    let groups = products_by_category_and_stock(dataset);
    let mut report = Report::new(&groups)?;
    report.values(&groups, 2)?;
    Ok(report)
}

pub fn price_tier_report(dataset: &Dataset, config: &QueryConfig) -> Result<Report> {
    let groups = products_by_price_tier(dataset, config);
    let mut report = Report::new(&groups)?;
    for group in &groups {
        report.text(format!("{}:", group.tier));
        for product in &group.products {
            report.text(format!(
                "Product: {} Price: {}",
                product.name,
                format_number(product.unit_price)
            ));
        }
    }
    Ok(report)
}
