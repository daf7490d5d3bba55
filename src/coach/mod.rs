//! AI 教练模块
//!
//! 教练回复流水线：解析身份 → 聚合当日上下文 → 按人设构建提示词 →
//! 调用外部生成服务 → 失败时选取预置回复 → 追加交互日志。
//! 整条流水线在单个请求生命周期内顺序执行，对外部调用只尝试一次。

pub mod client;
pub mod context;
pub mod fallback;
pub mod identity;
pub mod prompt;
pub mod recorder;
pub mod service;

use std::sync::Arc;

pub use client::{CoachingClient, GeminiClient, GenerateFailure};
pub use context::{ContextAggregator, DailyContext};
pub use fallback::FallbackSelector;
pub use identity::{IdentityResolver, Resolution};
pub use prompt::{PromptBuilder, PromptEnvelope};
pub use recorder::InteractionRecorder;
pub use service::{CoachReply, CoachService};

use crate::config::GenerationConfig;
use crate::error::Result;
use crate::storage::DataStore;

/// 创建外部生成客户端
pub fn create_coaching_client(config: &GenerationConfig) -> Result<Box<dyn CoachingClient>> {
    let client = GeminiClient::new(config)?;
    Ok(Box::new(client))
}

/// 创建教练服务
pub fn create_coach_service(
    store: Arc<dyn DataStore>,
    client: Box<dyn CoachingClient>,
) -> CoachService {
    CoachService::new(store, Arc::from(client))
}
