//! Brand pricing statistics
//!
//! Aggregates a brand's product catalogue into the snapshot consumed by the
//! estimation engine. Snapshots are computed fresh per call and never cached.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::Product;

/// Min/max/average of a brand's effective product prices
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
    pub average: f64,
}

/// Average price split between made-to-order and ready-to-wear pieces
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CustomVsReady {
    pub custom_avg: f64,
    pub ready_avg: f64,
}

/// Aggregate pricing statistics for one brand's catalogue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandPricingSnapshot {
    /// All products on the brand, priced or not
    pub total_products: i64,
    pub price_range: PriceRange,
    /// Average effective price per product category, keyed lower-case
    pub category_averages: HashMap<String, f64>,
    pub custom_vs_ready: CustomVsReady,
    /// True iff at least one product has a resolvable price
    pub has_pricing_data: bool,
}

impl BrandPricingSnapshot {
    /// All-zero snapshot used when pricing data is missing or unavailable
    pub fn empty() -> Self {
        Self {
            total_products: 0,
            price_range: PriceRange::default(),
            category_averages: HashMap::new(),
            custom_vs_ready: CustomVsReady::default(),
            has_pricing_data: false,
        }
    }
}

/// Build a pricing snapshot from a brand's product rows.
///
/// Products without a resolvable price count toward `total_products` but are
/// excluded from every statistic.
pub fn snapshot_from_products(products: &[Product]) -> BrandPricingSnapshot {
    let total_products = products.len() as i64;

    let priced: Vec<(&Product, f64)> = products
        .iter()
        .filter_map(|p| p.effective_price().map(|price| (p, price)))
        .collect();

    if priced.is_empty() {
        return BrandPricingSnapshot {
            total_products,
            ..BrandPricingSnapshot::empty()
        };
    }

    let prices: Vec<f64> = priced.iter().map(|(_, price)| *price).collect();
    let min = prices.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = prices.iter().cloned().fold(0.0_f64, f64::max);
    let average = prices.iter().sum::<f64>() / prices.len() as f64;

    let mut by_category: HashMap<String, Vec<f64>> = HashMap::new();
    for (product, price) in &priced {
        if let Some(category) = product.category.as_deref() {
            let key = category.trim().to_lowercase();
            if !key.is_empty() {
                by_category.entry(key).or_default().push(*price);
            }
        }
    }
    let category_averages = by_category
        .into_iter()
        .map(|(category, prices)| {
            let avg = prices.iter().sum::<f64>() / prices.len() as f64;
            (category, avg)
        })
        .collect();

    let custom: Vec<f64> = priced
        .iter()
        .filter(|(p, _)| p.is_custom)
        .map(|(_, price)| *price)
        .collect();
    let ready: Vec<f64> = priced
        .iter()
        .filter(|(p, _)| !p.is_custom)
        .map(|(_, price)| *price)
        .collect();

    let avg_of = |values: &[f64]| {
        if values.is_empty() {
            0.0
        } else {
            values.iter().sum::<f64>() / values.len() as f64
        }
    };

    BrandPricingSnapshot {
        total_products,
        price_range: PriceRange { min, max, average },
        category_averages,
        custom_vs_ready: CustomVsReady {
            custom_avg: avg_of(&custom),
            ready_avg: avg_of(&ready),
        },
        has_pricing_data: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn product(category: Option<&str>, price: Option<f64>, sale: Option<f64>, custom: bool) -> Product {
        Product {
            id: 0,
            brand_id: 1,
            title: "piece".to_string(),
            category: category.map(str::to_string),
            price,
            sale_price: sale,
            is_custom: custom,
            in_stock: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_catalogue() {
        let snapshot = snapshot_from_products(&[]);
        assert_eq!(snapshot.total_products, 0);
        assert!(!snapshot.has_pricing_data);
        assert_eq!(snapshot.price_range.average, 0.0);
    }

    #[test]
    fn test_unpriced_products_counted_but_excluded() {
        let products = vec![
            product(Some("Wedding"), None, None, false),
            product(Some("Wedding"), Some(1000.0), None, false),
        ];
        let snapshot = snapshot_from_products(&products);

        assert_eq!(snapshot.total_products, 2);
        assert!(snapshot.has_pricing_data);
        assert_eq!(snapshot.price_range.average, 1000.0);
        assert_eq!(snapshot.category_averages.get("wedding"), Some(&1000.0));
    }

    #[test]
    fn test_sale_price_wins_in_statistics() {
        let products = vec![product(None, Some(1000.0), Some(600.0), false)];
        let snapshot = snapshot_from_products(&products);
        assert_eq!(snapshot.price_range.min, 600.0);
        assert_eq!(snapshot.price_range.max, 600.0);
        assert_eq!(snapshot.price_range.average, 600.0);
    }

    #[test]
    fn test_category_and_custom_split() {
        let products = vec![
            product(Some("Wedding"), Some(2000.0), None, true),
            product(Some("wedding"), Some(4000.0), None, true),
            product(Some("Evening"), Some(900.0), None, false),
            product(None, Some(300.0), None, false),
        ];
        let snapshot = snapshot_from_products(&products);

        assert_eq!(snapshot.total_products, 4);
        assert_eq!(snapshot.category_averages.get("wedding"), Some(&3000.0));
        assert_eq!(snapshot.category_averages.get("evening"), Some(&900.0));
        assert_eq!(snapshot.custom_vs_ready.custom_avg, 3000.0);
        assert_eq!(snapshot.custom_vs_ready.ready_avg, 600.0);
        assert_eq!(snapshot.price_range.min, 300.0);
        assert_eq!(snapshot.price_range.max, 4000.0);
        assert_eq!(snapshot.price_range.average, 1800.0);
    }
}
