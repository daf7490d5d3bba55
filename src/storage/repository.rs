//! 数据存储契约
//!
//! 教练流水线对存储层的全部依赖都通过这个 trait 表达：
//! 按 ID 读用户、读任意一个已存在用户（身份回退用）、
//! 按自然日读三类记录、追加交互日志。记录与用户的创建/列表
//! 操作属于外围 CRUD 面，同样收敛在这里。

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::Result;
use crate::models::interaction::InteractionLogEntry;
use crate::models::record::{DailyRecords, MealRecord, MoodRecord, WorkoutRecord};
use crate::models::user::UserProfile;

/// 数据存储 trait
#[async_trait]
pub trait DataStore: Send + Sync {
    /// 按 ID 读取用户资料
    async fn get_user(&self, id: &str) -> Result<Option<UserProfile>>;

    /// 按存储顺序返回第一个用户，存储为空时返回 None
    async fn first_user(&self) -> Result<Option<UserProfile>>;

    /// 创建用户资料
    async fn create_user(&self, profile: &UserProfile) -> Result<UserProfile>;

    /// 读取某用户某自然日的全部饮食/运动/情绪记录
    async fn daily_records(&self, user_id: &str, date: NaiveDate) -> Result<DailyRecords>;

    /// 追加饮食记录
    async fn append_meal(&self, record: &MealRecord) -> Result<()>;

    /// 追加运动记录
    async fn append_workout(&self, record: &WorkoutRecord) -> Result<()>;

    /// 追加情绪记录
    async fn append_mood(&self, record: &MoodRecord) -> Result<()>;

    /// 追加交互日志条目
    async fn append_interaction(&self, entry: &InteractionLogEntry) -> Result<()>;

    /// 按时间倒序列出某用户的交互日志
    async fn list_interactions(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<InteractionLogEntry>>;
}
