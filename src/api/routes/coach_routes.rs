//! Coach Routes
//!
//! 定义教练相关的 API 路由。

use crate::api::handlers::coach_handler::*;
use axum::{
    Router,
    routing::{get, post},
};

use crate::api::app_state::AppState;

/// 创建教练路由器
pub fn create_coach_router() -> Router<AppState> {
    Router::new()
        .route("/coach/advice", get(get_daily_advice))
        .route("/coach/question", post(ask_question))
        .route("/coach/history", get(get_history))
}
