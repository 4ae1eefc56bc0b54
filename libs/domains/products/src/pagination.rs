use serde::Serialize;
use utoipa::ToSchema;

use crate::error::{ProductError, ProductResult};

/// Pagination metadata returned alongside a page of results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    #[schema(example = 1)]
    pub current_page: u32,
    #[schema(example = 10)]
    pub items_per_page: u32,
    #[schema(example = 42)]
    pub total_items: u64,
    #[schema(example = 5)]
    pub total_pages: u64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

/// One page of `T` plus its metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

/// Slice `items` into the requested page.
///
/// An empty set always has a valid (empty) first page. For a non-empty set,
/// pages past the last one are rejected rather than returned empty.
pub fn paginate<T>(items: Vec<T>, page: u32, limit: u32) -> ProductResult<Page<T>> {
    if limit == 0 {
        return Err(ProductError::Validation(
            "limit must be at least 1, got 0".to_string(),
        ));
    }

    let total_items = items.len() as u64;
    let total_pages = total_items.div_ceil(u64::from(limit));

    if page == 0 || (total_items > 0 && u64::from(page) > total_pages) {
        return Err(ProductError::PageOutOfRange { page, total_pages });
    }

    let limit_len = limit as usize;
    let start = (page as usize - 1).saturating_mul(limit_len);
    let items: Vec<T> = items.into_iter().skip(start).take(limit_len).collect();

    Ok(Page {
        items,
        meta: PageMeta {
            current_page: page,
            items_per_page: limit,
            total_items,
            total_pages,
            has_next_page: u64::from(page) < total_pages,
            has_previous_page: page > 1,
        },
    })
}
