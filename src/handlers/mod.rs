pub mod checkout;
pub mod products;

use axum::{extract::FromRequest, http::StatusCode, Json};
use serde_json::json;

use crate::error::AppError;

/// `Json` extractor whose rejections come back as `{ "error": ... }` 400s.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "ok": true })))
}
