//! Record API Handlers
//!
//! HTTP handlers for the thin user/record CRUD surface. These endpoints
//! feed the data store the coaching pipeline aggregates from.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::record_dto::*, handlers::session_user},
    error::AppError,
    models::record::{MealRecord, MoodRecord, WorkoutRecord},
    models::user::{Persona, UserProfile},
};

/// Create a new user profile
///
/// POST /api/v1/users
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("名称不能为空".to_string()));
    }

    let persona = request
        .persona
        .as_deref()
        .map(Persona::from_tag)
        .unwrap_or_default();

    let mut profile = UserProfile::new(request.name.trim(), persona);
    profile.target_weight_kg = request.target_weight_kg;
    profile.height_cm = request.height_cm;
    profile.current_weight_kg = request.current_weight_kg;
    debug!(user_id = %profile.id, persona = persona.as_tag(), "Creating user");

    let created = state.store.create_user(&profile).await?;

    let response = UserResponse {
        id: created.id,
        name: created.name,
        persona: created.persona.as_tag().to_string(),
        target_weight_kg: created.target_weight_kg,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Append a meal record for the acting user
///
/// POST /api/v1/records/meals
pub async fn log_meal(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<LogMealRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = acting_user(&state, &headers).await?;
    if request.description.trim().is_empty() {
        return Err(AppError::Validation("食物描述不能为空".to_string()));
    }

    let record = MealRecord::new(&user_id, request.description.trim(), request.calories);
    state.store.append_meal(&record).await?;
    state.metrics.record_entry();

    Ok((
        StatusCode::CREATED,
        Json(LogRecordResponse {
            id: record.id,
            message: "饮食记录已保存".to_string(),
        }),
    ))
}

/// Append a workout record for the acting user
///
/// POST /api/v1/records/workouts
pub async fn log_workout(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<LogWorkoutRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = acting_user(&state, &headers).await?;
    if request.activity.trim().is_empty() {
        return Err(AppError::Validation("运动类型不能为空".to_string()));
    }

    let record = WorkoutRecord::new(
        &user_id,
        request.activity.trim(),
        request.duration_min,
        request.calories_burned,
    );
    state.store.append_workout(&record).await?;
    state.metrics.record_entry();

    Ok((
        StatusCode::CREATED,
        Json(LogRecordResponse {
            id: record.id,
            message: "运动记录已保存".to_string(),
        }),
    ))
}

/// Append a mood record for the acting user
///
/// POST /api/v1/records/moods
pub async fn log_mood(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<LogMoodRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = acting_user(&state, &headers).await?;
    if request.mood.trim().is_empty() {
        return Err(AppError::Validation("情绪标签不能为空".to_string()));
    }

    let record = MoodRecord::new(&user_id, request.mood.trim(), request.note);
    state.store.append_mood(&record).await?;
    state.metrics.record_entry();

    Ok((
        StatusCode::CREATED,
        Json(LogRecordResponse {
            id: record.id,
            message: "情绪记录已保存".to_string(),
        }),
    ))
}

/// Summarize today's records for the acting user
///
/// GET /api/v1/records/today
pub async fn get_today_summary(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user_id = acting_user(&state, &headers).await?;

    let today = chrono::Utc::now().date_naive();
    let records = state.store.daily_records(&user_id, today).await?;

    let calories_in = records.meals.iter().map(|m| m.calories.unwrap_or(0)).sum();
    let calories_out = records
        .workouts
        .iter()
        .map(|w| w.calories_burned.unwrap_or(0))
        .sum();

    Ok(Json(TodaySummaryResponse {
        date: today.to_string(),
        meal_count: records.meals.len(),
        workout_count: records.workouts.len(),
        mood_count: records.moods.len(),
        calories_in,
        calories_out,
    }))
}

/// 记录接口沿用流水线的身份解析策略（含第一个用户回退）
async fn acting_user(state: &AppState, headers: &HeaderMap) -> Result<String, AppError> {
    use crate::coach::identity::{IdentityResolver, Resolution};

    let session = session_user(headers);
    let resolver = IdentityResolver::new(state.store.clone());
    match resolver.resolve(session.as_deref()).await? {
        Resolution::Resolved(id) => Ok(id),
        Resolution::Unresolved => Err(AppError::Authentication("请先登录".to_string())),
    }
}
