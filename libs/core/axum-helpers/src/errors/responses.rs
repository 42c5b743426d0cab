//! Reusable OpenAPI response types for consistent API documentation.

use crate::envelope::ErrorBody;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "data": null,
        "errors": "An internal server error occurred"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorBody);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - malformed id, body or field values",
    content_type = "application/json",
    example = json!({
        "data": null,
        "errors": "name must not be blank"
    })
)]
pub struct BadRequestResponse(pub ErrorBody);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "data": null,
        "errors": "category 42 not found"
    })
)]
pub struct NotFoundResponse(pub ErrorBody);
