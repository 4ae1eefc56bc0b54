//! Products Domain
//!
//! An in-memory product catalog with filtered, sorted and paginated listing.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, response envelopes
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, list pipeline (filter → sort → paginate)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{handlers, InMemoryProductRepository, ProductService};
//!
//! let service = ProductService::new(InMemoryProductRepository::new());
//! let router: axum::Router = handlers::router(service);
//! ```

pub mod error;
pub mod filter;
pub mod handlers;
pub mod models;
pub mod pagination;
pub mod query;
pub mod repository;
pub mod responses;
pub mod seed;
pub mod service;
pub mod sort;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use filter::filter_products;
pub use handlers::ApiDoc;
pub use models::{CreateProduct, Product, UpdateProduct};
pub use pagination::{paginate, Page, PageMeta};
pub use query::{ListProductsParams, ProductQuery, SortField, SortOrder};
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;
pub use sort::sort_products;
