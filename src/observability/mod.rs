//! 可观测性模块
//!
//! 提供运行指标、健康检查与 Prometheus 文本暴露。

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

// ===== Simple Metrics (using atomics for zero-dep implementation) =====

/// 简单应用指标
#[derive(Clone, Default)]
pub struct AppMetrics {
    pub coach_requests_total: Arc<AtomicU64>,
    pub coach_fallbacks_total: Arc<AtomicU64>,
    pub records_total: Arc<AtomicU64>,
    pub errors_total: Arc<AtomicU64>,
}

impl AppMetrics {
    /// 记录一次教练请求
    pub fn record_coach_request(&self) {
        self.coach_requests_total.fetch_add(1, Ordering::SeqCst);
    }

    /// 记录一次降级回复
    pub fn record_fallback(&self) {
        self.coach_fallbacks_total.fetch_add(1, Ordering::SeqCst);
    }

    /// 记录一条健康记录写入
    pub fn record_entry(&self) {
        self.records_total.fetch_add(1, Ordering::SeqCst);
    }

    /// 记录错误
    pub fn record_error(&self) {
        self.errors_total.fetch_add(1, Ordering::SeqCst);
    }

    /// 生成 Prometheus 格式指标
    pub fn gather(&self) -> String {
        format!(
            r#"# HELP coach_requests_total Total coaching requests
# TYPE coach_requests_total counter
coach_requests_total {}
# HELP coach_fallbacks_total Coaching replies served from the fallback pool
# TYPE coach_fallbacks_total counter
coach_fallbacks_total {}
# HELP records_total Health records appended
# TYPE records_total counter
records_total {}
# HELP errors_total Total errors
# TYPE errors_total counter
errors_total {}
"#,
            self.coach_requests_total.load(Ordering::SeqCst),
            self.coach_fallbacks_total.load(Ordering::SeqCst),
            self.records_total.load(Ordering::SeqCst),
            self.errors_total.load(Ordering::SeqCst),
        )
    }
}

/// 可观测性状态
#[derive(Clone)]
pub struct ObservabilityState {
    pub version: String,
    pub started_at: DateTime<Utc>,
    pub metrics: AppMetrics,
}

impl ObservabilityState {
    pub fn new(version: String, metrics: AppMetrics) -> Self {
        Self {
            version,
            started_at: Utc::now(),
            metrics,
        }
    }
}

/// 健康检查响应
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: i64,
}

async fn health(State(state): State<Arc<ObservabilityState>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: state.version.clone(),
        uptime_seconds: (Utc::now() - state.started_at).num_seconds(),
    })
}

async fn metrics(State(state): State<Arc<ObservabilityState>>) -> impl IntoResponse {
    state.metrics.gather()
}

/// 创建可观测性路由
pub fn create_observability_router(state: Arc<ObservabilityState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .with_state(state)
}
