//! 进程内数据存储实现
//!
//! 用插入序的向量支撑 [`DataStore`] 契约，`first_user` 的
//! "存储定义顺序" 即插入顺序。按自然日过滤在这里完成，
//! 聚合层拿到的永远是恰好一个日历日的记录。

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::RwLock;

use crate::error::Result;
use crate::models::interaction::InteractionLogEntry;
use crate::models::record::{DailyRecords, MealRecord, MoodRecord, WorkoutRecord};
use crate::models::user::UserProfile;
use crate::storage::repository::DataStore;

/// 进程内存储
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<Vec<UserProfile>>,
    meals: RwLock<Vec<MealRecord>>,
    workouts: RwLock<Vec<WorkoutRecord>>,
    moods: RwLock<Vec<MoodRecord>>,
    interactions: RwLock<Vec<InteractionLogEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DataStore for MemoryStore {
    async fn get_user(&self, id: &str) -> Result<Option<UserProfile>> {
        Ok(self.users.read().iter().find(|u| u.id == id).cloned())
    }

    async fn first_user(&self) -> Result<Option<UserProfile>> {
        Ok(self.users.read().first().cloned())
    }

    async fn create_user(&self, profile: &UserProfile) -> Result<UserProfile> {
        self.users.write().push(profile.clone());
        Ok(profile.clone())
    }

    async fn daily_records(&self, user_id: &str, date: NaiveDate) -> Result<DailyRecords> {
        let meals = self
            .meals
            .read()
            .iter()
            .filter(|r| r.user_id == user_id && r.recorded_at.date_naive() == date)
            .cloned()
            .collect();
        let workouts = self
            .workouts
            .read()
            .iter()
            .filter(|r| r.user_id == user_id && r.recorded_at.date_naive() == date)
            .cloned()
            .collect();
        let moods = self
            .moods
            .read()
            .iter()
            .filter(|r| r.user_id == user_id && r.recorded_at.date_naive() == date)
            .cloned()
            .collect();

        Ok(DailyRecords {
            meals,
            workouts,
            moods,
        })
    }

    async fn append_meal(&self, record: &MealRecord) -> Result<()> {
        self.meals.write().push(record.clone());
        Ok(())
    }

    async fn append_workout(&self, record: &WorkoutRecord) -> Result<()> {
        self.workouts.write().push(record.clone());
        Ok(())
    }

    async fn append_mood(&self, record: &MoodRecord) -> Result<()> {
        self.moods.write().push(record.clone());
        Ok(())
    }

    async fn append_interaction(&self, entry: &InteractionLogEntry) -> Result<()> {
        self.interactions.write().push(entry.clone());
        Ok(())
    }

    async fn list_interactions(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<InteractionLogEntry>> {
        let mut entries: Vec<InteractionLogEntry> = self
            .interactions
            .read()
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        entries.truncate(limit);
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::Persona;

    #[tokio::test]
    async fn test_first_user_follows_insertion_order() {
        let store = MemoryStore::new();
        let alice = UserProfile::new("alice", Persona::Warm);
        let bob = UserProfile::new("bob", Persona::Harsh);
        store.create_user(&alice).await.unwrap();
        store.create_user(&bob).await.unwrap();

        let first = store.first_user().await.unwrap().unwrap();
        assert_eq!(first.id, alice.id);
    }

    #[tokio::test]
    async fn test_first_user_on_empty_store() {
        let store = MemoryStore::new();
        assert!(store.first_user().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_daily_records_filters_by_calendar_date() {
        let store = MemoryStore::new();
        let mut today_meal = MealRecord::new("u1", "沙拉", Some(350));
        let mut old_meal = MealRecord::new("u1", "拉面", Some(600));
        old_meal.recorded_at -= chrono::Duration::days(1);
        today_meal.recorded_at = chrono::Utc::now();
        store.append_meal(&today_meal).await.unwrap();
        store.append_meal(&old_meal).await.unwrap();
        store
            .append_meal(&MealRecord::new("u2", "汉堡", Some(550)))
            .await
            .unwrap();

        let today = chrono::Utc::now().date_naive();
        let records = store.daily_records("u1", today).await.unwrap();
        assert_eq!(records.meals.len(), 1);
        assert_eq!(records.meals[0].description, "沙拉");
        assert!(records.workouts.is_empty());
        assert!(records.moods.is_empty());
    }

    #[tokio::test]
    async fn test_list_interactions_newest_first() {
        let store = MemoryStore::new();
        let mut first = InteractionLogEntry::new(
            "u1",
            crate::models::interaction::InteractionKind::DailyAdvice,
            None,
            "第一条",
            Persona::Warm,
        );
        first.created_at -= chrono::Duration::minutes(5);
        let second = InteractionLogEntry::new(
            "u1",
            crate::models::interaction::InteractionKind::Question,
            Some("问题"),
            "第二条",
            Persona::Warm,
        );
        store.append_interaction(&first).await.unwrap();
        store.append_interaction(&second).await.unwrap();

        let entries = store.list_interactions("u1", 10).await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].response, "第二条");
    }
}
