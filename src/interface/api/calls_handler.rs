//! Call API handlers

use super::call_dto::{CallStatusQuery, CallStatusResponse, MakeCallRequest, MakeCallResponse};
use super::error::ApiError;
use crate::application::CallService;
use crate::domain::call::CallRequest;
use crate::domain::shared::error::DomainError;
use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Query, State},
    Json,
};
use metrics::counter;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{info, warn};

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub calls: Arc<CallService>,
}

impl AppState {
    pub fn new(calls: CallService) -> Self {
        Self {
            calls: Arc::new(calls),
        }
    }
}

/// Place an outbound call
pub async fn make_call(
    State(state): State<AppState>,
    payload: Result<Json<MakeCallRequest>, JsonRejection>,
) -> Result<Json<MakeCallResponse>, ApiError> {
    let Json(req) = payload.map_err(|rejection| {
        warn!("API: Rejected make-call body: {}", rejection.body_text());
        DomainError::Validation(rejection.body_text())
    })?;

    let request = CallRequest::try_from(req).map_err(|e| {
        counter!("calls_failed_total", "reason" => "validation").increment(1);
        e
    })?;

    info!("API: Making call to {}", request.destination_number());

    let handle = state.calls.initiate(request).await?;
    Ok(Json(handle.into()))
}

/// Get the current status of a call
pub async fn call_status(
    State(state): State<AppState>,
    query: Result<Query<CallStatusQuery>, QueryRejection>,
) -> Result<Json<CallStatusResponse>, ApiError> {
    let call_sid = query
        .ok()
        .and_then(|Query(q)| q.call_sid)
        .unwrap_or_default();

    info!("API: Getting status of call {}", call_sid);

    let view = state.calls.status(&call_sid).await?;
    Ok(Json(view.into()))
}

/// Liveness check
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "provider_configured": state.calls.is_configured(),
    }))
}
