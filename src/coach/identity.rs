//! 身份解析
//!
//! 确定本次请求作用于哪个用户。请求带有已认证的用户 ID 时直接采用；
//! 否则按存储顺序取第一个已存在用户；存储为空时返回 `Unresolved`。
//!
//! 未认证请求回退到任意已存在用户是历史遗留行为（调试便利演变成了
//! 对外可观察的语义），安全上有异味，但在整体认证模型重新设计之前
//! 保持原样。这里把它收敛为一个显式分支并打日志，便于审计。

use std::sync::Arc;

use tracing::warn;

use crate::error::Result;
use crate::storage::DataStore;

/// 身份解析结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// 解析到用户 ID
    Resolved(String),
    /// 无法解析（存储为空且请求未携带身份）
    Unresolved,
}

/// 身份解析器
pub struct IdentityResolver {
    store: Arc<dyn DataStore>,
}

impl IdentityResolver {
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        Self { store }
    }

    /// 解析本次请求的用户
    ///
    /// `session_user` 为外层认证面传入的已认证用户 ID（可能缺失）。
    pub async fn resolve(&self, session_user: Option<&str>) -> Result<Resolution> {
        if let Some(id) = session_user {
            if !id.is_empty() {
                return Ok(Resolution::Resolved(id.to_string()));
            }
        }

        match self.store.first_user().await? {
            Some(user) => {
                warn!(
                    user_id = %user.id,
                    "请求未携带身份，回退为存储中的第一个用户"
                );
                Ok(Resolution::Resolved(user.id))
            }
            None => Ok(Resolution::Unresolved),
        }
    }
}
