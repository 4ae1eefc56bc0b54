//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "success": false,
        "statusCode": 500,
        "code": 5000,
        "error": "INTERNAL_ERROR",
        "message": "An internal server error occurred",
        "timestamp": "2026-01-01T00:00:00Z"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "success": false,
        "statusCode": 400,
        "code": 1001,
        "error": "VALIDATION_ERROR",
        "message": "Request validation failed: name",
        "details": {
            "name": [{
                "code": "length",
                "message": null,
                "params": {"min": 1, "max": 100, "value": ""}
            }]
        },
        "timestamp": "2026-01-01T00:00:00Z"
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid id",
    content_type = "application/json",
    example = json!({
        "success": false,
        "statusCode": 400,
        "code": 1002,
        "error": "INVALID_ID",
        "message": "id must be a positive integer, got 'abc'",
        "timestamp": "2026-01-01T00:00:00Z"
    })
)]
pub struct BadRequestIdResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Page out of range",
    content_type = "application/json",
    example = json!({
        "success": false,
        "statusCode": 400,
        "code": 1005,
        "error": "PAGE_OUT_OF_RANGE",
        "message": "Page 9 is out of range, valid pages are 1..=3",
        "timestamp": "2026-01-01T00:00:00Z"
    })
)]
pub struct BadRequestPageResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "success": false,
        "statusCode": 404,
        "code": 1004,
        "error": "NOT_FOUND",
        "message": "Product with id 7 not found",
        "timestamp": "2026-01-01T00:00:00Z"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);
