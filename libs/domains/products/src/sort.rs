use std::cmp::Ordering;

use crate::models::Product;
use crate::query::{SortField, SortOrder};

impl SortField {
    /// Ascending comparison of two products on this field.
    pub fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortField::Name => a
                .name
                .chars()
                .flat_map(char::to_lowercase)
                .cmp(b.name.chars().flat_map(char::to_lowercase)),
            SortField::Price => a.price.total_cmp(&b.price),
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::Stock => a.stock.cmp(&b.stock),
        }
    }
}

/// Stable in-place sort. Equal keys keep their input order in both directions.
pub fn sort_products(products: &mut [Product], field: SortField, order: SortOrder) {
    match order {
        SortOrder::Asc => products.sort_by(|a, b| field.compare(a, b)),
        SortOrder::Desc => products.sort_by(|a, b| field.compare(b, a)),
    }
}
