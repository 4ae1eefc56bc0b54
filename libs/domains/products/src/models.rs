use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Highest price accepted anywhere in the catalog
pub const MAX_PRICE: f64 = 999_999.99;

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn default_active() -> bool {
    true
}

/// Product entity - a catalog item owned by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Store-assigned identifier, never reused
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = "Mechanical Keyboard")]
    pub name: String,
    pub description: Option<String>,
    /// Unit price, 0 ..= 999999.99
    #[schema(example = 129.9)]
    pub price: f64,
    pub stock: i32,
    /// Free-form category, compared case-insensitively
    #[schema(example = "Electronics")]
    pub category: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 100), custom(function = "validate_not_blank"))]
    pub name: String,
    #[validate(length(max = 500))]
    #[serde(default)]
    pub description: Option<String>,
    #[validate(range(min = 0.0, max = MAX_PRICE))]
    pub price: f64,
    #[validate(range(min = 0))]
    #[serde(default)]
    pub stock: i32,
    #[validate(length(min = 1, max = 50), custom(function = "validate_not_blank"))]
    pub category: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

/// DTO for a partial update; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProduct {
    #[validate(length(min = 1, max = 100), custom(function = "validate_not_blank"))]
    pub name: Option<String>,
    #[validate(length(max = 500))]
    pub description: Option<String>,
    /// Must be strictly positive when provided
    #[validate(range(exclusive_min = 0.0, max = MAX_PRICE))]
    pub price: Option<f64>,
    #[validate(range(min = 0))]
    pub stock: Option<i32>,
    #[validate(length(min = 1, max = 50), custom(function = "validate_not_blank"))]
    pub category: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateProduct {
    /// JSON names of the fields present in this patch, in declaration order.
    pub fn provided_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.name.is_some() {
            fields.push("name");
        }
        if self.description.is_some() {
            fields.push("description");
        }
        if self.price.is_some() {
            fields.push("price");
        }
        if self.stock.is_some() {
            fields.push("stock");
        }
        if self.category.is_some() {
            fields.push("category");
        }
        if self.is_active.is_some() {
            fields.push("isActive");
        }
        fields
    }
}

impl Product {
    /// Build a product from a creation DTO with both timestamps set to now.
    pub fn new(id: u64, input: CreateProduct) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: input.name,
            description: input.description,
            price: input.price,
            stock: input.stock,
            category: input.category,
            is_active: input.is_active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge the provided fields and refresh `updated_at`.
    ///
    /// `updated_at` never moves backwards, even if the wall clock does.
    pub fn apply_update(&mut self, update: UpdateProduct) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(stock) = update.stock {
            self.stock = stock;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
        self.updated_at = Utc::now().max(self.updated_at);
    }
}
