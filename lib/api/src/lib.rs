//! REST surfaces for the two kuliner services.
//!
//! - [`RecommendApi`] - `POST /recommend` over the precomputed similarity artifacts
//! - [`MenuApi`] - `GET /recommend?menu_name=` over the fixed menu catalog
//!
//! Error bodies are `{"detail": ...}` objects.

use actix_web::HttpResponse;

pub mod menu;
pub mod recommend;

pub use menu::MenuApi;
pub use recommend::RecommendApi;

/// 422 response for request bodies or parameters that fail validation.
pub(crate) fn unprocessable(detail: String) -> HttpResponse {
    HttpResponse::UnprocessableEntity().json(serde_json::json!({
        "detail": detail
    }))
}
