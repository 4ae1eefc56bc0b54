//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::filter::filter_products;
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::pagination::{paginate, Page};
use crate::query::ProductQuery;
use crate::repository::ProductRepository;
use crate::sort::sort_products;

/// Product service providing business logic operations
///
/// Validates input, runs the list pipeline (filter, sort, paginate) and
/// orchestrates repository calls.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new product
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input.validate()?;
        self.repository.create(input).await
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: u64) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Filter, sort and paginate the catalog
    #[instrument(skip(self))]
    pub async fn list_products(&self, query: &ProductQuery) -> ProductResult<Page<Product>> {
        let products = self.repository.list().await?;

        let mut matched = filter_products(products, query);
        sort_products(&mut matched, query.sort_by, query.order);

        let page = paginate(matched, query.page, query.limit)?;
        tracing::debug!(
            total_items = page.meta.total_items,
            returned = page.items.len(),
            "Listed products"
        );
        Ok(page)
    }

    /// Active products in exactly this category (case-insensitive)
    #[instrument(skip(self))]
    pub async fn get_by_category(&self, category: &str) -> ProductResult<Vec<Product>> {
        let category = category.trim();
        if category.is_empty() {
            return Err(ProductError::Validation(
                "category must not be empty".to_string(),
            ));
        }

        self.repository.find_by_category(category, true).await
    }

    /// Apply a partial update to an existing product
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: u64, input: UpdateProduct) -> ProductResult<Product> {
        input.validate()?;
        self.repository.update(id, input).await
    }

    /// Delete a product, returning the removed record
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: u64) -> ProductResult<Product> {
        self.repository.delete(id).await
    }

    /// Load a batch of products, e.g. demo data at startup
    #[instrument(skip(self, inputs), fields(count = inputs.len()))]
    pub async fn seed(&self, inputs: Vec<CreateProduct>) -> ProductResult<usize> {
        let mut created = 0;
        for input in inputs {
            self.create_product(input).await?;
            created += 1;
        }

        tracing::info!(created, "Seeded product catalog");
        Ok(created)
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
