//! 外部生成服务客户端
//!
//! 对外部文本生成端点发起单次同步调用：带客户端级超时、
//! 认证头与最大输出 token 预算。所有失败路径都映射为类型化的
//! [`GenerateFailure`]，绝不向调用方抛出异常。

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::coach::prompt::PromptEnvelope;
use crate::config::GenerationConfig;
use crate::error::Result;

/// 生成调用失败类型
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateFailure {
    /// 超过调用超时上限
    #[error("生成服务调用超时")]
    Timeout,

    /// 非成功状态码，携带状态用于日志
    #[error("生成服务返回错误状态: {0}")]
    UpstreamError(u16),

    /// 成功响应但提取不到任何文本
    #[error("生成服务返回空内容")]
    EmptyResponse,

    /// 传输层错误（DNS、连接中断、响应损坏等）
    #[error("传输层错误: {0}")]
    Transport(String),
}

/// 生成客户端 trait
#[async_trait]
pub trait CoachingClient: Send + Sync {
    /// 发起一次生成调用
    ///
    /// 每次请求只尝试一次，不做自动重试。
    async fn generate(
        &self,
        envelope: &PromptEnvelope,
    ) -> std::result::Result<String, GenerateFailure>;
}

/// Gemini 风格生成端点客户端
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
    max_output_tokens: u32,
}

impl GeminiClient {
    pub fn new(config: &GenerationConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            max_output_tokens: config.max_output_tokens,
        })
    }
}

#[async_trait]
impl CoachingClient for GeminiClient {
    async fn generate(
        &self,
        envelope: &PromptEnvelope,
    ) -> std::result::Result<String, GenerateFailure> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let body = json!({
            "system_instruction": { "parts": [{ "text": envelope.system }] },
            "contents": [{ "role": "user", "parts": [{ "text": envelope.user }] }],
            "generationConfig": { "maxOutputTokens": self.max_output_tokens }
        });

        let response = match self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) if e.is_timeout() => return Err(GenerateFailure::Timeout),
            Err(e) => return Err(GenerateFailure::Transport(e.to_string())),
        };

        let status = response.status();
        if !status.is_success() {
            return Err(GenerateFailure::UpstreamError(status.as_u16()));
        }

        let raw = match response.text().await {
            Ok(raw) => raw,
            Err(e) if e.is_timeout() => return Err(GenerateFailure::Timeout),
            Err(e) => return Err(GenerateFailure::Transport(e.to_string())),
        };

        extract_text(&raw).ok_or(GenerateFailure::EmptyResponse)
    }
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

/// 从响应体提取第一段生成文本
///
/// 结构化解析是主路径；响应体不是合法 JSON 时退到
/// [`scan_text_marker`] 这一个明确的兜底分支。
fn extract_text(raw: &str) -> Option<String> {
    match serde_json::from_str::<GenerateResponse>(raw) {
        Ok(parsed) => parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty()),
        Err(_) => scan_text_marker(raw),
    }
}

/// 最后手段：在原始响应体里扫描 `"text":` 标记后的 JSON 字符串
fn scan_text_marker(raw: &str) -> Option<String> {
    let marker = "\"text\":";
    let start = raw.find(marker)? + marker.len();
    let rest = raw[start..].trim_start();
    if !rest.starts_with('"') {
        return None;
    }

    let mut stream = serde_json::Deserializer::from_str(rest).into_iter::<String>();
    stream
        .next()?
        .ok()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}
