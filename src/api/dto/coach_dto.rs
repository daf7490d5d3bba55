//! 教练接口 DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::coach::service::CoachReply;
use crate::models::interaction::{InteractionKind, InteractionLogEntry};

/// 自由问答请求
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionRequest {
    /// 用户的问题原文
    pub question: String,
}

/// 教练回复响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachResponse {
    /// 回复文本
    pub message: String,
    /// 人设标签
    pub persona: String,
    /// 交互类型
    pub kind: String,
    /// 是否为降级回复
    pub fallback: bool,
}

impl From<CoachReply> for CoachResponse {
    fn from(reply: CoachReply) -> Self {
        Self {
            message: reply.text,
            persona: reply.persona.as_tag().to_string(),
            kind: kind_tag(reply.kind).to_string(),
            fallback: reply.from_fallback,
        }
    }
}

/// 历史记录条目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntryDto {
    pub id: String,
    pub kind: String,
    pub prompt: Option<String>,
    pub response: String,
    pub persona: String,
    pub created_at: DateTime<Utc>,
}

impl From<InteractionLogEntry> for HistoryEntryDto {
    fn from(entry: InteractionLogEntry) -> Self {
        Self {
            id: entry.id,
            kind: kind_tag(entry.kind).to_string(),
            prompt: entry.prompt,
            response: entry.response,
            persona: entry.persona.as_tag().to_string(),
            created_at: entry.created_at,
        }
    }
}

/// 历史记录响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub entries: Vec<HistoryEntryDto>,
    pub total: usize,
}

fn kind_tag(kind: InteractionKind) -> &'static str {
    match kind {
        InteractionKind::DailyAdvice => "daily_advice",
        InteractionKind::Question => "question",
    }
}
