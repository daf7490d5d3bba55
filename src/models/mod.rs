//! 数据模型模块

pub mod interaction;
pub mod record;
pub mod user;

pub use interaction::{InteractionKind, InteractionLogEntry};
pub use record::{DailyRecords, MealRecord, MoodRecord, WorkoutRecord};
pub use user::{Persona, UserProfile};
