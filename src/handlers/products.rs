use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use super::AppJson;
use crate::{
    error::{AppError, AppResult},
    models::{whole_number, CreateProduct, NewProduct, Product},
    AppState,
};

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_products(State(state): State<AppState>) -> (StatusCode, Json<Vec<Product>>) {
    let products = state.store.read().await.list_products();

    info!(count = products.len(), "Listed products");

    (StatusCode::OK, Json(products))
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<(StatusCode, Json<Product>)> {
    // Anything that isn't a whole, non-negative number can't match a product.
    let id = raw_id
        .trim()
        .parse::<f64>()
        .ok()
        .and_then(whole_number)
        .ok_or_else(|| AppError::NotFound("Not found".to_string()))?;

    let product = state.store.read().await.get_product(id)?.clone();

    info!(id, "Fetched product");

    Ok((StatusCode::OK, Json(product)))
}

// ── Admin create ──────────────────────────────────────────────────────────────

pub async fn create_product(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateProduct>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let new = NewProduct::try_from(payload)?;
    let product = state.store.write().await.add_product(new);

    info!(id = product.id, title = %product.title, "Created product");

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "product": product,
        })),
    ))
}
