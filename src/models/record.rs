//! 健康记录数据模型
//!
//! 饮食、运动、情绪三类日常记录，由数据存储层持有，
//! 教练流水线按自然日读取后做聚合。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 饮食记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealRecord {
    /// 记录唯一标识
    pub id: String,
    /// 所属用户
    pub user_id: String,
    /// 食物描述
    pub description: String,
    /// 估算热量（kcal），缺失时聚合按 0 处理
    pub calories: Option<u32>,
    /// 记录时间
    pub recorded_at: DateTime<Utc>,
}

impl MealRecord {
    pub fn new(user_id: &str, description: &str, calories: Option<u32>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            description: description.to_string(),
            calories,
            recorded_at: Utc::now(),
        }
    }
}

/// 运动记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// 记录唯一标识
    pub id: String,
    /// 所属用户
    pub user_id: String,
    /// 运动类型
    pub activity: String,
    /// 时长（分钟）
    pub duration_min: Option<u32>,
    /// 消耗热量（kcal），缺失时聚合按 0 处理
    pub calories_burned: Option<u32>,
    /// 记录时间
    pub recorded_at: DateTime<Utc>,
}

impl WorkoutRecord {
    pub fn new(
        user_id: &str,
        activity: &str,
        duration_min: Option<u32>,
        calories_burned: Option<u32>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            activity: activity.to_string(),
            duration_min,
            calories_burned,
            recorded_at: Utc::now(),
        }
    }
}

/// 情绪记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodRecord {
    /// 记录唯一标识
    pub id: String,
    /// 所属用户
    pub user_id: String,
    /// 情绪标签
    pub mood: String,
    /// 补充说明
    pub note: Option<String>,
    /// 记录时间
    pub recorded_at: DateTime<Utc>,
}

impl MoodRecord {
    pub fn new(user_id: &str, mood: &str, note: Option<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            mood: mood.to_string(),
            note,
            recorded_at: Utc::now(),
        }
    }
}

/// 某用户某自然日的全部记录
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DailyRecords {
    pub meals: Vec<MealRecord>,
    pub workouts: Vec<WorkoutRecord>,
    pub moods: Vec<MoodRecord>,
}
