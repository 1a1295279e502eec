use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use tracing::{debug, error};

use crate::{
    adapters::inbound::http::{
        dto::{
            CreateOrderDto, ErrorResponseDto, ListOrdersDto, ListOrdersResponseDto, OrderDto,
            UpdateStatusDto,
        },
        router::AppState,
    },
    domain::errors::OrderError,
};

type HandlerError = (StatusCode, Json<ErrorResponseDto>);

fn order_error_response(err: OrderError) -> HandlerError {
    let status_code = StatusCode::from(&err);
    if status_code.is_server_error() {
        error!(error = %err, "order operation failed");
    } else {
        debug!(error = %err, status = %status_code, "order request rejected");
    }
    (status_code, Json(ErrorResponseDto::from_order_error(&err)))
}

fn body_rejection_response(rejection: JsonRejection) -> HandlerError {
    let status_code = rejection.status();
    debug!(error = %rejection, status = %status_code, "request body rejected");
    (
        status_code,
        Json(ErrorResponseDto::invalid_body(&rejection.body_text())),
    )
}

/// Handle order creation
pub async fn add_order(
    State(app_state): State<AppState>,
    body: Result<Json<CreateOrderDto>, JsonRejection>,
) -> Result<(StatusCode, Json<OrderDto>), HandlerError> {
    let Json(body) = body.map_err(body_rejection_response)?;
    let order = app_state
        .order_service
        .add_order(body.into())
        .await
        .map_err(order_error_response)?;

    Ok((StatusCode::CREATED, Json(order.into())))
}

/// Handle order retrieval
pub async fn get_order(
    State(app_state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<OrderDto>, HandlerError> {
    let order = app_state
        .order_service
        .get_order_by_id(&order_id)
        .await
        .map_err(order_error_response)?
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponseDto::not_found(&format!(
                    "Order with ID '{}' not found",
                    order_id
                ))),
            )
        })?;

    Ok(Json(order.into()))
}

/// Handle order status update
pub async fn update_order_status(
    State(app_state): State<AppState>,
    Path(order_id): Path<String>,
    body: Result<Json<UpdateStatusDto>, JsonRejection>,
) -> Result<Json<OrderDto>, HandlerError> {
    let Json(body) = body.map_err(body_rejection_response)?;
    let order = app_state
        .order_service
        .update_order_status(&order_id, &body.status)
        .await
        .map_err(order_error_response)?;

    Ok(Json(order.into()))
}

/// Handle order listing, optionally filtered by status
pub async fn list_orders(
    State(app_state): State<AppState>,
    Query(params): Query<ListOrdersDto>,
) -> Result<Json<ListOrdersResponseDto>, HandlerError> {
    let order_service = &app_state.order_service;

    let orders = match params.status.as_deref() {
        Some(status) => order_service.list_orders_by_status(status).await,
        None => order_service.list_all_orders().await,
    }
    .map_err(order_error_response)?;

    Ok(Json(orders.into()))
}

/// Liveness probe
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
