//! 教练交互日志数据模型
//!
//! 每次教练流水线完成后追加一条记录（含降级回复），
//! 仅追加，本服务不修改也不删除。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::user::Persona;

/// 交互类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    /// 每日建议
    DailyAdvice,
    /// 自由问答
    Question,
}

/// 交互日志条目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionLogEntry {
    /// 条目唯一标识
    pub id: String,
    /// 所属用户
    pub user_id: String,
    /// 交互类型
    pub kind: InteractionKind,
    /// 用户提问原文；每日建议没有用户提问，为 None
    pub prompt: Option<String>,
    /// 最终返回给用户的回复文本
    pub response: String,
    /// 生成时使用的人设
    pub persona: Persona,
    /// 创建时间
    pub created_at: DateTime<Utc>,
}

impl InteractionLogEntry {
    /// 创建新日志条目
    pub fn new(
        user_id: &str,
        kind: InteractionKind,
        prompt: Option<&str>,
        response: &str,
        persona: Persona,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            kind,
            prompt: prompt.map(|p| p.to_string()),
            response: response.to_string(),
            persona,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_advice_entry_has_no_prompt() {
        let entry = InteractionLogEntry::new(
            "user123",
            InteractionKind::DailyAdvice,
            None,
            "早餐记得补充蛋白质。",
            Persona::Warm,
        );
        assert!(entry.prompt.is_none());
        assert_eq!(entry.kind, InteractionKind::DailyAdvice);
        assert!(!entry.id.is_empty());
    }

    #[test]
    fn test_question_entry_keeps_prompt_verbatim() {
        let entry = InteractionLogEntry::new(
            "user123",
            InteractionKind::Question,
            Some("晚上可以吃碳水吗？"),
            "可以，控制总量即可。",
            Persona::Harsh,
        );
        assert_eq!(entry.prompt.as_deref(), Some("晚上可以吃碳水吗？"));
    }
}
