//! 教练服务
//!
//! 串起整条回复流水线：身份 → 上下文 → 提示词 → 外部生成 →
//! 降级 → 日志。外部生成的四类失败都在这里被拦下并降级为
//! 人设一致的预置回复，绝不把原始错误抛给最终用户；
//! 日志写入失败记 warn 后吞掉。

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, warn};

use crate::coach::client::CoachingClient;
use crate::coach::context::ContextAggregator;
use crate::coach::fallback::FallbackSelector;
use crate::coach::identity::{IdentityResolver, Resolution};
use crate::coach::prompt::PromptBuilder;
use crate::coach::recorder::InteractionRecorder;
use crate::error::{AppError, Result};
use crate::models::interaction::{InteractionKind, InteractionLogEntry};
use crate::models::user::Persona;
use crate::storage::DataStore;

/// 教练回复
#[derive(Debug, Clone)]
pub struct CoachReply {
    /// 回复文本
    pub text: String,
    /// 生成时的人设
    pub persona: Persona,
    /// 交互类型
    pub kind: InteractionKind,
    /// 是否来自降级池
    pub from_fallback: bool,
}

/// 教练服务
pub struct CoachService {
    store: Arc<dyn DataStore>,
    resolver: IdentityResolver,
    aggregator: ContextAggregator,
    recorder: InteractionRecorder,
    client: Arc<dyn CoachingClient>,
}

impl CoachService {
    pub fn new(store: Arc<dyn DataStore>, client: Arc<dyn CoachingClient>) -> Self {
        Self {
            resolver: IdentityResolver::new(store.clone()),
            aggregator: ContextAggregator::new(store.clone()),
            recorder: InteractionRecorder::new(store.clone()),
            store,
            client,
        }
    }

    /// 生成今日建议
    pub async fn daily_advice(&self, session_user: Option<&str>) -> Result<CoachReply> {
        self.run(session_user, InteractionKind::DailyAdvice, None)
            .await
    }

    /// 回答自由问题
    pub async fn answer_question(
        &self,
        session_user: Option<&str>,
        question: &str,
    ) -> Result<CoachReply> {
        let question = question.trim();
        if question.is_empty() {
            return Err(AppError::Validation("问题不能为空".to_string()));
        }

        self.run(session_user, InteractionKind::Question, Some(question))
            .await
    }

    /// 某用户的交互历史，按时间倒序
    pub async fn history(
        &self,
        session_user: Option<&str>,
        limit: usize,
    ) -> Result<Vec<InteractionLogEntry>> {
        let user_id = self.resolve_user(session_user).await?;
        self.store.list_interactions(&user_id, limit).await
    }

    async fn resolve_user(&self, session_user: Option<&str>) -> Result<String> {
        match self.resolver.resolve(session_user).await? {
            Resolution::Resolved(id) => Ok(id),
            Resolution::Unresolved => Err(AppError::Authentication("请先登录".to_string())),
        }
    }

    /// 流水线本体，在单个请求生命周期内顺序执行
    async fn run(
        &self,
        session_user: Option<&str>,
        kind: InteractionKind,
        question: Option<&str>,
    ) -> Result<CoachReply> {
        let user_id = self.resolve_user(session_user).await?;

        let profile = self
            .store
            .get_user(&user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("用户不存在: {}", user_id)))?;

        let today = Utc::now().date_naive();
        let context = self.aggregator.aggregate(&user_id, today).await?;
        debug!(
            user_id = %user_id,
            meals = context.meals.len(),
            workouts = context.workouts.len(),
            moods = context.moods.len(),
            "当日上下文聚合完成"
        );

        let envelope = match question {
            Some(q) => PromptBuilder::build_question(&profile, &context, q),
            None => PromptBuilder::build_daily_advice(&profile, &context),
        };

        let (text, from_fallback) = match self.client.generate(&envelope).await {
            Ok(text) => (text, false),
            Err(failure) => (
                FallbackSelector::pick(profile.persona, &failure).to_string(),
                true,
            ),
        };

        if let Err(e) = self
            .recorder
            .record(&user_id, kind, question, &text, profile.persona)
            .await
        {
            warn!(user_id = %user_id, error = %e, "交互日志写入失败，回复照常返回");
        }

        Ok(CoachReply {
            text,
            persona: profile.persona,
            kind,
            from_fallback,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coach::client::GenerateFailure;
    use crate::coach::prompt::PromptEnvelope;
    use crate::models::record::MealRecord;
    use crate::models::user::UserProfile;
    use crate::storage::MemoryStore;
    use async_trait::async_trait;

    /// 返回固定结果的生成客户端测试替身
    struct FixedClient(std::result::Result<String, GenerateFailure>);

    #[async_trait]
    impl CoachingClient for FixedClient {
        async fn generate(
            &self,
            _envelope: &PromptEnvelope,
        ) -> std::result::Result<String, GenerateFailure> {
            self.0.clone()
        }
    }

    async fn service_with_user(
        result: std::result::Result<String, GenerateFailure>,
        persona: Persona,
    ) -> (CoachService, Arc<MemoryStore>, String) {
        let store = Arc::new(MemoryStore::new());
        let profile = UserProfile::new("小明", persona);
        let user_id = profile.id.clone();
        store.create_user(&profile).await.unwrap();

        let service = CoachService::new(store.clone(), Arc::new(FixedClient(result)));
        (service, store, user_id)
    }

    #[tokio::test]
    async fn test_success_path_returns_generated_text_and_records() {
        let (service, store, user_id) =
            service_with_user(Ok("今天状态不错！".to_string()), Persona::Warm).await;

        let reply = service.daily_advice(Some(&user_id)).await.unwrap();
        assert_eq!(reply.text, "今天状态不错！");
        assert!(!reply.from_fallback);
        assert_eq!(reply.persona, Persona::Warm);

        let entries = store.list_interactions(&user_id, 10).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].response, "今天状态不错！");
        assert!(entries[0].prompt.is_none());
    }

    #[tokio::test]
    async fn test_failure_degrades_to_persona_pool_and_still_records() {
        let (service, store, user_id) =
            service_with_user(Err(GenerateFailure::Timeout), Persona::Encouraging).await;
        store
            .append_meal(&MealRecord::new(&user_id, "沙拉", Some(350)))
            .await
            .unwrap();

        let reply = service.daily_advice(Some(&user_id)).await.unwrap();
        assert!(reply.from_fallback);
        assert!(FallbackSelector::pool(Persona::Encouraging).contains(&reply.text.as_str()));

        // 降级回复同样进交互日志
        let entries = store.list_interactions(&user_id, 10).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].response, reply.text);
    }

    #[tokio::test]
    async fn test_question_records_prompt_verbatim() {
        let (service, store, user_id) =
            service_with_user(Ok("可以的。".to_string()), Persona::Harsh).await;

        let reply = service
            .answer_question(Some(&user_id), "晚上可以吃碳水吗？")
            .await
            .unwrap();
        assert_eq!(reply.kind, InteractionKind::Question);

        let entries = store.list_interactions(&user_id, 10).await.unwrap();
        assert_eq!(entries[0].prompt.as_deref(), Some("晚上可以吃碳水吗？"));
    }

    #[tokio::test]
    async fn test_empty_store_requires_sign_in() {
        let store = Arc::new(MemoryStore::new());
        let service = CoachService::new(
            store,
            Arc::new(FixedClient(Ok("unused".to_string()))),
        );

        let err = service.daily_advice(None).await.unwrap_err();
        assert!(matches!(err, AppError::Authentication(_)));
    }

    #[tokio::test]
    async fn test_resolved_but_missing_profile_is_not_found() {
        let (service, _store, _user_id) =
            service_with_user(Ok("unused".to_string()), Persona::Warm).await;

        let err = service.daily_advice(Some("ghost")).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_blank_question_is_rejected() {
        let (service, _store, user_id) =
            service_with_user(Ok("unused".to_string()), Persona::Warm).await;

        let err = service
            .answer_question(Some(&user_id), "   ")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
