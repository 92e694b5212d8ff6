use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use super::AppJson;
use crate::{error::AppResult, models::CheckoutRequest, AppState};

pub async fn checkout(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CheckoutRequest>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let cart = payload.cart.unwrap_or_default();
    let lines = cart.len();

    // Validate and commit under one write guard so no other checkout can
    // observe the catalog between the two passes.
    let mut store = state.store.write().await;
    let order = store.checkout(cart, payload.customer)?;
    let orders_total = store.orders().len();
    drop(store);

    info!(
        order_id = order.id,
        lines,
        total = order.total,
        orders_total,
        "Checkout completed"
    );

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "order": order,
        })),
    ))
}
