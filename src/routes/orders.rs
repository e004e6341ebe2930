use axum::{Json, Router, extract::State, routing::post};

use crate::{
    error::{AppError, AppResult},
    extract::ValidatedJson,
    models::Order,
    response::{ErrorBody, StatusMessage},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/order-confirmation", post(create_order_confirmation))
}

#[utoipa::path(
    post,
    path = "/api/order-confirmation",
    request_body = Order,
    responses(
        (status = 200, description = "Confirmation email scheduled", body = StatusMessage),
        (status = 400, description = "Invalid order payload", body = ErrorBody),
        (status = 500, description = "Failed to schedule the confirmation", body = ErrorBody),
    ),
    tag = "Orders"
)]
pub async fn create_order_confirmation(
    State(state): State<AppState>,
    ValidatedJson(order): ValidatedJson<Order>,
) -> AppResult<Json<StatusMessage>> {
    tracing::debug!(order_id = %order.order_id, "order confirmation requested");

    // The worker sends the email after this handler has returned; delivery
    // failures never reach the caller.
    state
        .dispatch
        .enqueue(order)
        .await
        .map_err(|e| AppError::Dispatch(e.to_string()))?;

    Ok(Json(StatusMessage::success("Order confirmation email sent")))
}
