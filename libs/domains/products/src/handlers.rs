//! HTTP handlers for Products API

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestIdResponse, BadRequestPageResponse, BadRequestValidationResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
    IdPath, QueryParams, TextPath, ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::pagination::PageMeta;
use crate::query::{ListProductsParams, ProductQuery, SortField, SortOrder};
use crate::repository::ProductRepository;
use crate::responses::{
    AppliedFilters, CategoryProductsResponse, ProductListResponse, ProductResponse,
    ProductUpdatedResponse,
};
use crate::service::ProductService;

/// Cache hint for single-product reads
pub const PRODUCT_CACHE_CONTROL: &str = "public, max-age=60";

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        get_by_category,
        update_product,
        delete_product,
    ),
    components(
        schemas(
            Product, CreateProduct, UpdateProduct, PageMeta, AppliedFilters,
            SortField, SortOrder, ProductListResponse, ProductResponse,
            CategoryProductsResponse, ProductUpdatedResponse
        ),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            BadRequestPageResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/category/{name}", get(get_by_category))
        .route(
            "/{id}",
            get(get_product).patch(update_product).delete(delete_product),
        )
        .with_state(shared_service)
}

/// List products with filtering, sorting and pagination
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(ListProductsParams),
    responses(
        (status = 200, description = "One page of matching products", body = ProductListResponse),
        (status = 400, response = BadRequestPageResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    QueryParams(params): QueryParams<ListProductsParams>,
) -> ProductResult<Json<ProductListResponse>> {
    let query = ProductQuery::try_from(params)?;
    let page = service.list_products(&query).await?;
    Ok(Json(ProductListResponse::new(page, &query)))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created successfully", body = ProductResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ProductResponse::new("Product created successfully", product)),
    ))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = u64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductResponse,
            headers(("cache-control" = String, description = "public, max-age=60"))),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> ProductResult<impl IntoResponse> {
    let product = service.get_product(id).await?;
    Ok((
        [(header::CACHE_CONTROL, PRODUCT_CACHE_CONTROL)],
        Json(ProductResponse::stamped(
            "Product retrieved successfully",
            product,
        )),
    ))
}

/// List active products in a category (exact, case-insensitive)
#[utoipa::path(
    get,
    path = "/category/{name}",
    tag = "Products",
    params(
        ("name" = String, Path, description = "Category name")
    ),
    responses(
        (status = 200, description = "Active products in the category", body = CategoryProductsResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_by_category<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    TextPath(name): TextPath,
) -> ProductResult<Json<CategoryProductsResponse>> {
    let products = service.get_by_category(&name).await?;
    Ok(Json(CategoryProductsResponse::new(
        name.trim().to_string(),
        products,
    )))
}

/// Partially update a product
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = u64, Path, description = "Product ID")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated successfully", body = ProductUpdatedResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateProduct>,
) -> ProductResult<Json<ProductUpdatedResponse>> {
    let updated_fields = input.provided_fields();
    let product = service.update_product(id, input).await?;
    Ok(Json(ProductUpdatedResponse::new(updated_fields, product)))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = u64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted successfully", body = ProductResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> ProductResult<Json<ProductResponse>> {
    let product = service.delete_product(id).await?;
    Ok(Json(ProductResponse::stamped(
        "Product deleted successfully",
        product,
    )))
}
