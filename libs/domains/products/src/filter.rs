use crate::models::Product;
use crate::query::ProductQuery;

/// Keep the products that pass every active predicate in `query`.
///
/// Input order is preserved. With no active predicate this is the identity.
pub fn filter_products(products: Vec<Product>, query: &ProductQuery) -> Vec<Product> {
    if !query.has_filters() {
        return products;
    }

    products
        .into_iter()
        .filter(|product| {
            matches_category(product, query.category.as_deref())
                && matches_price(product, query.min_price, query.max_price)
                && matches_search(product, query.search.as_deref())
        })
        .collect()
}

/// `needle` must already be lower-cased.
fn matches_category(product: &Product, needle: Option<&str>) -> bool {
    needle.is_none_or(|needle| product.category.to_lowercase().contains(needle))
}

fn matches_price(product: &Product, min: Option<f64>, max: Option<f64>) -> bool {
    min.is_none_or(|min| product.price >= min) && max.is_none_or(|max| product.price <= max)
}

/// `term` must already be lower-cased.
fn matches_search(product: &Product, term: Option<&str>) -> bool {
    let Some(term) = term else {
        return true;
    };

    product.name.to_lowercase().contains(term)
        || product
            .description
            .as_deref()
            .is_some_and(|description| description.to_lowercase().contains(term))
        || product.category.to_lowercase().contains(term)
}
