//! 健康记录接口 DTO

use serde::{Deserialize, Serialize};

/// 创建用户请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    /// 显示名称
    pub name: String,
    /// 人设标签，未知标签回退为 warm
    #[serde(default)]
    pub persona: Option<String>,
    /// 目标体重（kg）
    #[serde(default)]
    pub target_weight_kg: Option<f32>,
    /// 身高（cm）
    #[serde(default)]
    pub height_cm: Option<f32>,
    /// 当前体重（kg）
    #[serde(default)]
    pub current_weight_kg: Option<f32>,
}

/// 创建用户响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: Option<String>,
    pub persona: String,
    pub target_weight_kg: Option<f32>,
}

/// 追加饮食记录请求
#[derive(Debug, Clone, Deserialize)]
pub struct LogMealRequest {
    pub description: String,
    #[serde(default)]
    pub calories: Option<u32>,
}

/// 追加运动记录请求
#[derive(Debug, Clone, Deserialize)]
pub struct LogWorkoutRequest {
    pub activity: String,
    #[serde(default)]
    pub duration_min: Option<u32>,
    #[serde(default)]
    pub calories_burned: Option<u32>,
}

/// 追加情绪记录请求
#[derive(Debug, Clone, Deserialize)]
pub struct LogMoodRequest {
    pub mood: String,
    #[serde(default)]
    pub note: Option<String>,
}

/// 追加记录响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecordResponse {
    pub id: String,
    pub message: String,
}

/// 当日记录概览响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodaySummaryResponse {
    pub date: String,
    pub meal_count: usize,
    pub workout_count: usize,
    pub mood_count: usize,
    pub calories_in: u32,
    pub calories_out: u32,
}
