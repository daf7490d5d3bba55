//! 当日上下文聚合
//!
//! 把某用户某自然日的饮食/运动/情绪记录约简为条目列表加标量汇总。
//! 每次请求都重新计算，不缓存；空集合是正常结果而非错误。

use std::sync::Arc;

use chrono::NaiveDate;

use crate::error::Result;
use crate::models::record::{MealRecord, MoodRecord, WorkoutRecord};
use crate::storage::DataStore;

/// 当日上下文
///
/// 缺失的数值字段（热量、时长）一律按 0 参与汇总。
#[derive(Debug, Clone)]
pub struct DailyContext {
    /// 自然日
    pub date: NaiveDate,
    /// 当日饮食
    pub meals: Vec<MealRecord>,
    /// 当日运动
    pub workouts: Vec<WorkoutRecord>,
    /// 当日情绪
    pub moods: Vec<MoodRecord>,
    /// 摄入热量合计（kcal）
    pub calories_in: u32,
    /// 消耗热量合计（kcal）
    pub calories_out: u32,
}

impl DailyContext {
    /// 当日是否没有任何记录
    pub fn is_empty(&self) -> bool {
        self.meals.is_empty() && self.workouts.is_empty() && self.moods.is_empty()
    }
}

/// 上下文聚合器
pub struct ContextAggregator {
    store: Arc<dyn DataStore>,
}

impl ContextAggregator {
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        Self { store }
    }

    /// 聚合某用户某自然日的上下文
    pub async fn aggregate(&self, user_id: &str, date: NaiveDate) -> Result<DailyContext> {
        let records = self.store.daily_records(user_id, date).await?;

        let calories_in = records
            .meals
            .iter()
            .map(|m| m.calories.unwrap_or(0))
            .sum();
        let calories_out = records
            .workouts
            .iter()
            .map(|w| w.calories_burned.unwrap_or(0))
            .sum();

        Ok(DailyContext {
            date,
            meals: records.meals,
            workouts: records.workouts,
            moods: records.moods,
            calories_in,
            calories_out,
        })
    }
}
