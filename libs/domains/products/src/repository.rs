use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct};

/// Repository trait for Product persistence
///
/// Implementations own the records; every method hands back clones.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Store a new product under the next id
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Get a product by ID
    async fn get_by_id(&self, id: u64) -> ProductResult<Option<Product>>;

    /// Snapshot of every product in insertion order
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Products whose category equals `category`, ignoring case
    async fn find_by_category(
        &self,
        category: &str,
        active_only: bool,
    ) -> ProductResult<Vec<Product>>;

    /// Merge the provided fields into an existing product
    async fn update(&self, id: u64, input: UpdateProduct) -> ProductResult<Product>;

    /// Remove a product and return it
    async fn delete(&self, id: u64) -> ProductResult<Product>;
}

#[derive(Debug, Default)]
struct CatalogState {
    products: Vec<Product>,
    last_id: u64,
}

impl CatalogState {
    fn position(&self, id: u64) -> ProductResult<usize> {
        self.products
            .iter()
            .position(|p| p.id == id)
            .ok_or(ProductError::NotFound(id))
    }
}

/// In-memory catalog store.
///
/// One lock guards both the records and the id counter, so id assignment and
/// read-modify-write updates are serialized.
#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    state: Arc<RwLock<CatalogState>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let mut state = self.state.write().await;

        let id = state
            .last_id
            .checked_add(1)
            .ok_or_else(|| ProductError::Internal("product id space exhausted".to_string()))?;
        let product = Product::new(id, input);

        state.last_id = id;
        state.products.push(product.clone());

        tracing::info!(product_id = id, "Created product");
        Ok(product)
    }

    async fn get_by_id(&self, id: u64) -> ProductResult<Option<Product>> {
        let state = self.state.read().await;
        Ok(state.products.iter().find(|p| p.id == id).cloned())
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        let state = self.state.read().await;
        Ok(state.products.clone())
    }

    async fn find_by_category(
        &self,
        category: &str,
        active_only: bool,
    ) -> ProductResult<Vec<Product>> {
        let category = category.trim().to_lowercase();
        let state = self.state.read().await;

        Ok(state
            .products
            .iter()
            .filter(|p| p.category.to_lowercase() == category)
            .filter(|p| !active_only || p.is_active)
            .cloned()
            .collect())
    }

    async fn update(&self, id: u64, input: UpdateProduct) -> ProductResult<Product> {
        let mut state = self.state.write().await;
        let index = state.position(id)?;

        if let Some(price) = input.price {
            if price <= 0.0 {
                return Err(ProductError::Validation(format!(
                    "price must be greater than 0, got {price}"
                )));
            }
        }

        let product = &mut state.products[index];
        product.apply_update(input);

        tracing::info!(product_id = id, "Updated product");
        Ok(product.clone())
    }

    async fn delete(&self, id: u64) -> ProductResult<Product> {
        let mut state = self.state.write().await;
        let index = state.position(id)?;
        let product = state.products.remove(index);

        tracing::info!(product_id = id, "Deleted product");
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, category: &str, is_active: bool) -> CreateProduct {
        CreateProduct {
            name: name.to_string(),
            description: None,
            price: 10.0,
            stock: 3,
            category: category.to_string(),
            is_active,
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryProductRepository::new();

        let product = repo.create(input("Lamp", "Home", true)).await.unwrap();
        assert_eq!(product.id, 1);

        let fetched = repo.get_by_id(product.id).await.unwrap();
        assert_eq!(fetched, Some(product));
        assert_eq!(repo.get_by_id(99).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_ids_are_never_reused() {
        let repo = InMemoryProductRepository::new();

        let first = repo.create(input("A", "x", true)).await.unwrap();
        let second = repo.create(input("B", "x", true)).await.unwrap();
        repo.delete(second.id).await.unwrap();
        let third = repo.create(input("C", "x", true)).await.unwrap();

        assert_eq!((first.id, second.id, third.id), (1, 2, 3));
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let repo = InMemoryProductRepository::new();
        for name in ["one", "two", "three"] {
            repo.create(input(name, "x", true)).await.unwrap();
        }

        let names: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["one", "two", "three"]);
    }

    #[tokio::test]
    async fn test_find_by_category_is_exact_and_case_insensitive() {
        let repo = InMemoryProductRepository::new();
        repo.create(input("Phone", "Electronics", true)).await.unwrap();
        repo.create(input("Radio", "electronics", false)).await.unwrap();
        repo.create(input("Cable", "Electronics Accessories", true))
            .await
            .unwrap();

        let all = repo.find_by_category("ELECTRONICS", false).await.unwrap();
        assert_eq!(all.len(), 2);

        let active = repo.find_by_category("electronics", true).await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name, "Phone");
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let repo = InMemoryProductRepository::new();
        let result = repo.update(5, UpdateProduct::default()).await;
        assert_eq!(result, Err(ProductError::NotFound(5)));
    }

    #[tokio::test]
    async fn test_update_rejects_non_positive_price_without_mutating() {
        let repo = InMemoryProductRepository::new();
        let product = repo.create(input("Lamp", "Home", true)).await.unwrap();

        let result = repo
            .update(
                product.id,
                UpdateProduct {
                    name: Some("Renamed".to_string()),
                    price: Some(0.0),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(ProductError::Validation(_))));
        assert_eq!(repo.get_by_id(product.id).await.unwrap(), Some(product));
    }

    #[tokio::test]
    async fn test_update_merges_fields() {
        let repo = InMemoryProductRepository::new();
        let product = repo.create(input("Lamp", "Home", true)).await.unwrap();

        let updated = repo
            .update(
                product.id,
                UpdateProduct {
                    stock: Some(0),
                    is_active: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.stock, 0);
        assert!(!updated.is_active);
        assert_eq!(updated.name, product.name);
        assert_eq!(updated.created_at, product.created_at);
        assert!(updated.updated_at >= product.updated_at);
    }

    #[tokio::test]
    async fn test_delete_returns_record_and_detaches_it() {
        let repo = InMemoryProductRepository::new();
        let product = repo.create(input("Lamp", "Home", true)).await.unwrap();

        let removed = repo.delete(product.id).await.unwrap();
        assert_eq!(removed, product);
        assert_eq!(repo.get_by_id(product.id).await.unwrap(), None);
        assert_eq!(
            repo.delete(product.id).await,
            Err(ProductError::NotFound(product.id))
        );
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_unique_ids() {
        let repo = InMemoryProductRepository::new();

        let handles: Vec<_> = (0..20)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.create(input(&format!("p{i}"), "x", true)).await })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap().id);
        }
        ids.sort_unstable();
        assert_eq!(ids, (1..=20).collect::<Vec<u64>>());
    }
}
