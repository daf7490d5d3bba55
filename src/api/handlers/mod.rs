//! API Handlers

pub mod coach_handler;
pub mod record_handler;

use axum::http::HeaderMap;

/// 外层认证面传入的已认证用户 ID（可能缺失）
///
/// 缺失时教练流水线按身份解析策略回退。
pub(crate) fn session_user(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-user-id")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
