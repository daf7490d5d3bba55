//! 交互日志记录
//!
//! 每次流水线完成后（无论外部生成成功还是降级）追加一条日志。
//! 这是尽力而为的审计落盘：写入失败由服务层记日志后吞掉，
//! 绝不影响已经算出的回复。

use std::sync::Arc;

use crate::error::Result;
use crate::models::interaction::{InteractionKind, InteractionLogEntry};
use crate::models::user::Persona;
use crate::storage::DataStore;

/// 交互记录器
pub struct InteractionRecorder {
    store: Arc<dyn DataStore>,
}

impl InteractionRecorder {
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        Self { store }
    }

    /// 追加一条交互日志
    pub async fn record(
        &self,
        user_id: &str,
        kind: InteractionKind,
        prompt: Option<&str>,
        response: &str,
        persona: Persona,
    ) -> Result<()> {
        let entry = InteractionLogEntry::new(user_id, kind, prompt, response, persona);
        self.store.append_interaction(&entry).await
    }
}
