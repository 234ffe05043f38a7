//! Summary metrics over a variation row set

use super::VariationRow;
use serde::Serialize;
use shared::models::Product;

/// Total stock at or below this flags a product as low stock
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// Derived metrics for list and table views
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct VariationSummary {
    /// Sum of stock, negative entries counted as 0
    pub total_stock: i64,
    /// Lowest selling price, 0 for no rows
    pub min_selling_price: f64,
    /// Highest discount, 0 for no rows
    pub max_discount: f64,
    pub low_stock: bool,
}

pub fn summarize<R: VariationRow>(rows: &[R]) -> VariationSummary {
    summarize_with_threshold(rows, LOW_STOCK_THRESHOLD)
}

pub fn summarize_with_threshold<R: VariationRow>(rows: &[R], threshold: i64) -> VariationSummary {
    let total_stock: i64 = rows.iter().map(|r| r.stock().max(0)).sum();

    let min_selling_price = rows
        .iter()
        .map(VariationRow::selling_price)
        .reduce(f64::min)
        .unwrap_or(0.0);
    let max_discount = rows
        .iter()
        .map(VariationRow::discount)
        .reduce(f64::max)
        .unwrap_or(0.0);

    VariationSummary {
        total_stock,
        min_selling_price,
        max_discount,
        low_stock: total_stock <= threshold,
    }
}

/// Number of products flagged low stock (list-view badge)
pub fn low_stock_count(products: &[Product], threshold: i64) -> usize {
    products
        .iter()
        .filter(|p| summarize_with_threshold(&p.variations, threshold).low_stock)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{PersistedVariation, VariationStatus};

    fn variation(id: i64, stock: i64, price: f64, discount: f64) -> PersistedVariation {
        PersistedVariation {
            id,
            product_id: 1,
            color_id: 1,
            variant_id: 1,
            buying_price: 0.0,
            selling_price: price,
            discount,
            stock,
            sku: String::new(),
            status: VariationStatus::Active,
        }
    }

    #[test]
    fn test_empty_rows() {
        let rows: Vec<PersistedVariation> = Vec::new();
        let s = summarize(&rows);
        assert_eq!(s.total_stock, 0);
        assert_eq!(s.min_selling_price, 0.0);
        assert_eq!(s.max_discount, 0.0);
        assert!(s.low_stock);
    }

    #[test]
    fn test_negative_stock_counts_as_zero() {
        let rows = vec![
            variation(1, 5, 10.0, 0.0),
            variation(2, -4, 12.0, 0.0),
            variation(3, 8, 9.5, 0.0),
        ];
        assert_eq!(summarize(&rows).total_stock, 13);
    }

    #[test]
    fn test_price_and_discount_extremes() {
        let rows = vec![
            variation(1, 1, 30.0, 5.0),
            variation(2, 1, 12.5, 20.0),
            variation(3, 1, 18.0, 10.0),
        ];
        let s = summarize(&rows);
        assert_eq!(s.min_selling_price, 12.5);
        assert_eq!(s.max_discount, 20.0);
    }

    #[test]
    fn test_low_stock_threshold_is_inclusive() {
        let rows = vec![variation(1, 10, 1.0, 0.0)];
        assert!(summarize(&rows).low_stock);
        let rows = vec![variation(1, 11, 1.0, 0.0)];
        assert!(!summarize(&rows).low_stock);
        assert!(summarize_with_threshold(&rows, 20).low_stock);
    }

    #[test]
    fn test_low_stock_count() {
        let product = |id: i64, stock: i64| Product {
            id,
            name: format!("p{id}"),
            sku: None,
            category_id: None,
            brand_id: None,
            variations: vec![variation(id, stock, 1.0, 0.0)],
        };
        let products = vec![product(1, 3), product(2, 50), product(3, 10)];
        assert_eq!(low_stock_count(&products, LOW_STOCK_THRESHOLD), 2);
    }
}
