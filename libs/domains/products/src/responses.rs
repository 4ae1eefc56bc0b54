//! Success envelopes for the products endpoints.
//!
//! Every body carries `success` and a human-readable `message` next to the
//! data, mirroring the error envelope produced by `axum_helpers::AppError`.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Product;
use crate::pagination::{Page, PageMeta};
use crate::query::{ProductQuery, SortField, SortOrder};

/// The normalized query echoed back to the client
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppliedFilters {
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub search: Option<String>,
    pub sort_by: SortField,
    pub order: SortOrder,
}

impl From<&ProductQuery> for AppliedFilters {
    fn from(query: &ProductQuery) -> Self {
        Self {
            category: query.category.clone(),
            min_price: query.min_price,
            max_price: query.max_price,
            search: query.search.clone(),
            sort_by: query.sort_by,
            order: query.order,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductListResponse {
    pub success: bool,
    #[schema(example = "Retrieved 10 of 42 products")]
    pub message: String,
    pub data: Vec<Product>,
    pub pagination: PageMeta,
    pub filters: AppliedFilters,
}

impl ProductListResponse {
    pub fn new(page: Page<Product>, query: &ProductQuery) -> Self {
        Self {
            success: true,
            message: format!(
                "Retrieved {} of {} products",
                page.items.len(),
                page.meta.total_items
            ),
            data: page.items,
            pagination: page.meta,
            filters: query.into(),
        }
    }
}

/// Single product envelope; `timestamp` is omitted on create
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub success: bool,
    #[schema(example = "Product retrieved successfully")]
    pub message: String,
    pub data: Product,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl ProductResponse {
    pub fn new(message: impl Into<String>, data: Product) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
            timestamp: None,
        }
    }

    pub fn stamped(message: impl Into<String>, data: Product) -> Self {
        Self {
            timestamp: Some(Utc::now()),
            ..Self::new(message, data)
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryProductsResponse {
    pub success: bool,
    #[schema(example = "Found 3 active products in category 'Electronics'")]
    pub message: String,
    #[schema(example = "Electronics")]
    pub category: String,
    pub data: Vec<Product>,
}

impl CategoryProductsResponse {
    pub fn new(category: String, data: Vec<Product>) -> Self {
        Self {
            success: true,
            message: format!(
                "Found {} active products in category '{}'",
                data.len(),
                category
            ),
            category,
            data,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdatedResponse {
    pub success: bool,
    #[schema(example = "Product updated successfully")]
    pub message: String,
    /// JSON names of the fields present in the patch
    pub updated_fields: Vec<String>,
    pub data: Product,
    pub timestamp: DateTime<Utc>,
}

impl ProductUpdatedResponse {
    pub fn new(updated_fields: Vec<&'static str>, data: Product) -> Self {
        Self {
            success: true,
            message: "Product updated successfully".to_string(),
            updated_fields: updated_fields.into_iter().map(str::to_string).collect(),
            data,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CreateProduct;
    use crate::pagination::paginate;

    fn product() -> Product {
        Product::new(
            1,
            CreateProduct {
                name: "Lamp".to_string(),
                description: None,
                price: 10.0,
                stock: 1,
                category: "Home".to_string(),
                is_active: true,
            },
        )
    }

    #[test]
    fn test_list_envelope_shape() {
        let query = ProductQuery {
            search: Some("lamp".to_string()),
            ..Default::default()
        };
        let page = paginate(vec![product()], 1, 10).unwrap();

        let json = serde_json::to_value(ProductListResponse::new(page, &query)).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Retrieved 1 of 1 products");
        assert_eq!(json["pagination"]["totalItems"], 1);
        assert_eq!(json["pagination"]["hasNextPage"], false);
        assert_eq!(json["filters"]["search"], "lamp");
        assert_eq!(json["filters"]["sortBy"], "createdAt");
        assert_eq!(json["filters"]["order"], "DESC");
    }

    #[test]
    fn test_timestamp_only_when_stamped() {
        let plain = serde_json::to_value(ProductResponse::new("created", product())).unwrap();
        assert!(plain.get("timestamp").is_none());

        let stamped = serde_json::to_value(ProductResponse::stamped("read", product())).unwrap();
        assert!(stamped.get("timestamp").is_some());
    }

    #[test]
    fn test_updated_envelope_lists_fields() {
        let json =
            serde_json::to_value(ProductUpdatedResponse::new(vec!["price"], product())).unwrap();
        assert_eq!(json["updatedFields"], serde_json::json!(["price"]));
        assert!(json.get("timestamp").is_some());
    }
}
