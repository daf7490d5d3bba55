//! Record Routes
//!
//! 定义用户与健康记录相关的 API 路由。

use crate::api::handlers::record_handler::*;
use axum::{
    Router,
    routing::{get, post},
};

use crate::api::app_state::AppState;

/// 创建记录路由器
pub fn create_record_router() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user))
        .route("/records/meals", post(log_meal))
        .route("/records/workouts", post(log_workout))
        .route("/records/moods", post(log_mood))
        .route("/records/today", get(get_today_summary))
}
