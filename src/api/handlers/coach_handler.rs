//! Coach API Handlers
//!
//! HTTP handlers for the AI coaching endpoints.

use axum::{
    Json,
    extract::{Query, State},
    http::HeaderMap,
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::coach_dto::*, handlers::session_user},
    error::AppError,
};

/// Generate today's advice for the acting user
///
/// GET /api/v1/coach/advice
pub async fn get_daily_advice(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let session = session_user(&headers);
    debug!(session = ?session, "Generating daily advice");
    state.metrics.record_coach_request();

    let reply = state
        .coach_service
        .daily_advice(session.as_deref())
        .await
        .inspect_err(|_| state.metrics.record_error())?;

    if reply.from_fallback {
        state.metrics.record_fallback();
    }

    Ok(Json(CoachResponse::from(reply)))
}

/// Answer a free-text question for the acting user
///
/// POST /api/v1/coach/question
pub async fn ask_question(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<QuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let session = session_user(&headers);
    debug!(session = ?session, "Answering coach question");
    state.metrics.record_coach_request();

    let reply = state
        .coach_service
        .answer_question(session.as_deref(), &request.question)
        .await
        .inspect_err(|_| state.metrics.record_error())?;

    if reply.from_fallback {
        state.metrics.record_fallback();
    }

    Ok(Json(CoachResponse::from(reply)))
}

#[derive(Debug, Deserialize, Default)]
pub struct HistoryParams {
    pub limit: Option<usize>,
}

/// List recent coaching exchanges for the acting user
///
/// GET /api/v1/coach/history
pub async fn get_history(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<HistoryParams>,
) -> Result<impl IntoResponse, AppError> {
    let session = session_user(&headers);
    let limit = params.limit.unwrap_or(20).clamp(1, 100);
    debug!(session = ?session, limit, "Listing coach history");

    let entries = state
        .coach_service
        .history(session.as_deref(), limit)
        .await?;

    let total = entries.len();
    let entries: Vec<HistoryEntryDto> = entries.into_iter().map(HistoryEntryDto::from).collect();

    Ok(Json(HistoryResponse { entries, total }))
}
