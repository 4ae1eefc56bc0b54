//! Query normalization for the list endpoint.
//!
//! Raw query parameters arrive as optional strings so that every parsing
//! failure is reported here with the offending parameter's name. The result is
//! a fully defaulted [`ProductQuery`] that the filter, sort and pagination
//! stages can use without further checks.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use utoipa::{IntoParams, ToSchema};

use crate::error::{ProductError, ProductResult};

pub const DEFAULT_PAGE: u32 = 1;
pub const MAX_PAGE: u32 = 1000;
pub const DEFAULT_LIMIT: u32 = 10;
pub const MIN_LIMIT: u32 = 1;
pub const MAX_LIMIT: u32 = 100;

/// Field a product listing can be ordered by
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    Default,
    ToSchema,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum SortField {
    Name,
    Price,
    #[default]
    CreatedAt,
    Stock,
}

/// Sort direction; parsing is case-sensitive
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    Default,
    ToSchema,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Raw list parameters as received on the query string
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListProductsParams {
    /// Page number, 1..=1000 (default 1)
    #[param(example = "1")]
    pub page: Option<String>,
    /// Page size, 1..=100 (default 10)
    #[param(example = "10")]
    pub limit: Option<String>,
    /// Case-insensitive substring of the product category
    pub category: Option<String>,
    /// Inclusive lower price bound
    pub min_price: Option<String>,
    /// Inclusive upper price bound
    pub max_price: Option<String>,
    /// Case-insensitive substring of name, description or category
    pub search: Option<String>,
    /// One of name, price, createdAt, stock (default createdAt)
    pub sort_by: Option<String>,
    /// ASC or DESC (default DESC)
    pub order: Option<String>,
}

/// A validated, defaulted list query
#[derive(Debug, Clone, PartialEq)]
pub struct ProductQuery {
    pub page: u32,
    pub limit: u32,
    /// Lower-cased, trimmed, never empty
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    /// Lower-cased, trimmed, never empty
    pub search: Option<String>,
    pub sort_by: SortField,
    pub order: SortOrder,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            category: None,
            min_price: None,
            max_price: None,
            search: None,
            sort_by: SortField::default(),
            order: SortOrder::default(),
        }
    }
}

impl ProductQuery {
    /// True when at least one filter predicate is active.
    pub fn has_filters(&self) -> bool {
        self.category.is_some()
            || self.min_price.is_some()
            || self.max_price.is_some()
            || self.search.is_some()
    }
}

impl TryFrom<ListProductsParams> for ProductQuery {
    type Error = ProductError;

    fn try_from(params: ListProductsParams) -> ProductResult<Self> {
        Ok(Self {
            page: parse_bounded("page", params.page, DEFAULT_PAGE, 1, MAX_PAGE)?,
            limit: parse_bounded("limit", params.limit, DEFAULT_LIMIT, MIN_LIMIT, MAX_LIMIT)?,
            category: normalize_text(params.category),
            min_price: parse_price("minPrice", params.min_price)?,
            max_price: parse_price("maxPrice", params.max_price)?,
            search: normalize_text(params.search),
            sort_by: parse_choice("sortBy", params.sort_by)?,
            order: parse_choice("order", params.order)?,
        })
    }
}

/// Blank values count as absent.
fn present(raw: Option<String>) -> Option<String> {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn normalize_text(raw: Option<String>) -> Option<String> {
    present(raw).map(|value| value.to_lowercase())
}

fn parse_number(field: &str, raw: &str) -> ProductResult<f64> {
    let value: f64 = raw
        .parse()
        .map_err(|_| ProductError::Validation(format!("{field} must be a number, got '{raw}'")))?;

    if !value.is_finite() {
        return Err(ProductError::Validation(format!(
            "{field} must be a finite number, got '{raw}'"
        )));
    }
    Ok(value)
}

fn parse_bounded(
    field: &str,
    raw: Option<String>,
    default: u32,
    min: u32,
    max: u32,
) -> ProductResult<u32> {
    let Some(raw) = present(raw) else {
        return Ok(default);
    };

    let value = parse_number(field, &raw)?;
    if value.fract() != 0.0 {
        return Err(ProductError::Validation(format!(
            "{field} must be an integer, got '{raw}'"
        )));
    }
    if value < f64::from(min) {
        return Err(ProductError::Validation(format!(
            "{field} must be at least {min}, got {raw}"
        )));
    }
    if value > f64::from(max) {
        return Err(ProductError::Validation(format!(
            "{field} must not exceed {max}, got {raw}"
        )));
    }
    Ok(value as u32)
}

fn parse_price(field: &str, raw: Option<String>) -> ProductResult<Option<f64>> {
    let Some(raw) = present(raw) else {
        return Ok(None);
    };

    let value = parse_number(field, &raw)?;
    if value < 0.0 {
        return Err(ProductError::Validation(format!(
            "{field} must not be negative, got {raw}"
        )));
    }
    Ok(Some(value))
}

fn parse_choice<T>(field: &str, raw: Option<String>) -> ProductResult<T>
where
    T: std::str::FromStr + IntoEnumIterator + std::fmt::Display + Default,
{
    let Some(raw) = present(raw) else {
        return Ok(T::default());
    };

    raw.parse().map_err(|_| {
        let allowed: Vec<String> = T::iter().map(|choice| choice.to_string()).collect();
        ProductError::Validation(format!(
            "{field} must be one of [{}], got '{raw}'",
            allowed.join(", ")
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> ListProductsParams {
        let mut params = ListProductsParams::default();
        for (key, value) in pairs {
            let value = Some(value.to_string());
            match *key {
                "page" => params.page = value,
                "limit" => params.limit = value,
                "category" => params.category = value,
                "minPrice" => params.min_price = value,
                "maxPrice" => params.max_price = value,
                "search" => params.search = value,
                "sortBy" => params.sort_by = value,
                "order" => params.order = value,
                other => panic!("unknown parameter {other}"),
            }
        }
        params
    }

    fn validation_message(pairs: &[(&str, &str)]) -> String {
        match ProductQuery::try_from(params(pairs)) {
            Err(ProductError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_defaults() {
        let query = ProductQuery::try_from(ListProductsParams::default()).unwrap();
        assert_eq!(query, ProductQuery::default());
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 10);
        assert_eq!(query.sort_by, SortField::CreatedAt);
        assert_eq!(query.order, SortOrder::Desc);
        assert!(!query.has_filters());
    }

    #[test]
    fn test_text_is_trimmed_and_lowercased() {
        let query = ProductQuery::try_from(params(&[
            ("category", "  Electronics "),
            ("search", " KeyBoard"),
        ]))
        .unwrap();
        assert_eq!(query.category.as_deref(), Some("electronics"));
        assert_eq!(query.search.as_deref(), Some("keyboard"));
        assert!(query.has_filters());
    }

    #[test]
    fn test_blank_values_are_absent() {
        let query = ProductQuery::try_from(params(&[
            ("category", "   "),
            ("page", ""),
            ("sortBy", " "),
        ]))
        .unwrap();
        assert_eq!(query, ProductQuery::default());
    }

    #[test]
    fn test_numeric_fields_reject_non_numbers() {
        for field in ["page", "limit", "minPrice", "maxPrice"] {
            let msg = validation_message(&[(field, "abc")]);
            assert!(msg.starts_with(field), "{msg}");
            assert!(msg.contains("must be a number"), "{msg}");
        }
    }

    #[test]
    fn test_page_bounds() {
        assert_eq!(ProductQuery::try_from(params(&[("page", "1000")])).unwrap().page, MAX_PAGE);
        assert!(validation_message(&[("page", "0")]).contains("at least 1"));
        assert!(validation_message(&[("page", "-2")]).contains("at least 1"));
        assert!(validation_message(&[("page", "1001")]).contains("must not exceed 1000"));
        assert!(validation_message(&[("page", "1.5")]).contains("must be an integer"));
    }

    #[test]
    fn test_limit_bounds() {
        for ok in [MIN_LIMIT, 50, MAX_LIMIT] {
            let query = ProductQuery::try_from(params(&[("limit", &ok.to_string())])).unwrap();
            assert_eq!(query.limit, ok);
        }
        assert!(validation_message(&[("limit", "0")]).starts_with("limit"));
        assert!(validation_message(&[("limit", "101")]).contains("must not exceed 100"));
    }

    #[test]
    fn test_prices() {
        let query =
            ProductQuery::try_from(params(&[("minPrice", "150"), ("maxPrice", "250.5")])).unwrap();
        assert_eq!(query.min_price, Some(150.0));
        assert_eq!(query.max_price, Some(250.5));

        assert!(validation_message(&[("minPrice", "-1")]).contains("must not be negative"));
        assert!(validation_message(&[("maxPrice", "inf")]).contains("finite"));
        assert!(validation_message(&[("maxPrice", "NaN")]).contains("finite"));
    }

    #[test]
    fn test_every_sort_field_parses() {
        for field in SortField::iter() {
            let query =
                ProductQuery::try_from(params(&[("sortBy", &field.to_string())])).unwrap();
            assert_eq!(query.sort_by, field);
        }
        let names: Vec<String> = SortField::iter().map(|f| f.to_string()).collect();
        assert_eq!(names, ["name", "price", "createdAt", "stock"]);
    }

    #[test]
    fn test_invalid_sort_field_lists_allowed_values() {
        let msg = validation_message(&[("sortBy", "color")]);
        assert_eq!(
            msg,
            "sortBy must be one of [name, price, createdAt, stock], got 'color'"
        );
    }

    #[test]
    fn test_order_is_case_sensitive() {
        for order in SortOrder::iter() {
            let query = ProductQuery::try_from(params(&[("order", &order.to_string())])).unwrap();
            assert_eq!(query.order, order);
        }
        assert!(validation_message(&[("order", "asc")]).starts_with("order must be one of [ASC, DESC]"));
        assert!(validation_message(&[("order", "Desc")]).starts_with("order"));
    }
}
