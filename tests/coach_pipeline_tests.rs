// End-to-end tests for the coaching response pipeline
//
// Tests cover:
// - Prompt content reaching the external endpoint (persona directive, totals)
// - The fallback ladder (timeout, upstream error, empty/garbled body)
// - Identity resolution (explicit id, first-user fallback, empty store)
// - Interaction recording on both success and fallback paths

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vita::coach::fallback::FallbackSelector;
use vita::coach::prompt::persona_directive;
use vita::coach::{CoachService, create_coaching_client};
use vita::config::GenerationConfig;
use vita::models::interaction::InteractionKind;
use vita::models::record::MealRecord;
use vita::models::user::{Persona, UserProfile};
use vita::storage::{DataStore, MemoryStore};

fn generation_config(base_url: &str, timeout_secs: u64) -> GenerationConfig {
    GenerationConfig {
        base_url: base_url.to_string(),
        model: "gemini-test".to_string(),
        api_key: "test-key".to_string(),
        timeout_secs,
        max_output_tokens: 128,
    }
}

fn service_against(server_url: &str, store: Arc<MemoryStore>, timeout_secs: u64) -> CoachService {
    let client = create_coaching_client(&generation_config(server_url, timeout_secs)).unwrap();
    let store: Arc<dyn DataStore> = store;
    CoachService::new(store, Arc::from(client))
}

fn gemini_success(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "candidates": [{ "content": { "parts": [{ "text": text }] } }]
    }))
}

async fn store_with_user(persona: Persona) -> (Arc<MemoryStore>, String) {
    let store = Arc::new(MemoryStore::new());
    let profile = UserProfile::new("小明", persona);
    let user_id = profile.id.clone();
    store.create_user(&profile).await.unwrap();
    (store, user_id)
}

#[tokio::test]
async fn test_daily_advice_posts_persona_directive_and_totals() {
    let server = MockServer::start().await;
    let (store, user_id) = store_with_user(Persona::Encouraging).await;
    store
        .append_meal(&MealRecord::new(&user_id, "沙拉", Some(350)))
        .await
        .unwrap();

    // 提示词必须带鼓励型语气指令与当日热量数字
    Mock::given(method("POST"))
        .and(path_regex(r"/v1beta/models/.+:generateContent"))
        .and(body_string_contains(persona_directive(
            Persona::Encouraging,
        )))
        .and(body_string_contains("350"))
        .respond_with(gemini_success("今天的沙拉选得好，继续保持！"))
        .expect(1)
        .mount(&server)
        .await;

    let service = service_against(&server.uri(), store.clone(), 5);
    let reply = service.daily_advice(Some(&user_id)).await.unwrap();

    assert_eq!(reply.text, "今天的沙拉选得好，继续保持！");
    assert!(!reply.from_fallback);

    let entries = store.list_interactions(&user_id, 10).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].kind, InteractionKind::DailyAdvice);
}

#[tokio::test]
async fn test_timeout_degrades_to_persona_pool() {
    let server = MockServer::start().await;
    let (store, user_id) = store_with_user(Persona::Encouraging).await;
    store
        .append_meal(&MealRecord::new(&user_id, "沙拉", Some(350)))
        .await
        .unwrap();

    Mock::given(method("POST"))
        .respond_with(gemini_success("来不及了").set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let service = service_against(&server.uri(), store.clone(), 1);
    let reply = service.daily_advice(Some(&user_id)).await.unwrap();

    assert!(reply.from_fallback);
    assert!(FallbackSelector::pool(Persona::Encouraging).contains(&reply.text.as_str()));
}

#[tokio::test]
async fn test_upstream_error_degrades_to_persona_pool() {
    let server = MockServer::start().await;
    let (store, user_id) = store_with_user(Persona::Harsh).await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let service = service_against(&server.uri(), store.clone(), 5);
    let reply = service
        .answer_question(Some(&user_id), "今晚吃什么？")
        .await
        .unwrap();

    assert!(reply.from_fallback);
    assert!(FallbackSelector::pool(Persona::Harsh).contains(&reply.text.as_str()));
}

#[tokio::test]
async fn test_garbled_success_body_still_records_fallback() {
    let server = MockServer::start().await;
    let (store, user_id) = store_with_user(Persona::Warm).await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let service = service_against(&server.uri(), store.clone(), 5);
    let reply = service.daily_advice(Some(&user_id)).await.unwrap();

    assert!(reply.from_fallback);
    assert!(FallbackSelector::pool(Persona::Warm).contains(&reply.text.as_str()));

    // 降级文本作为 response 进了交互日志
    let entries = store.list_interactions(&user_id, 10).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].response, reply.text);
}

#[tokio::test]
async fn test_text_marker_scan_rescues_malformed_json() {
    let server = MockServer::start().await;
    let (store, user_id) = store_with_user(Persona::Warm).await;

    // 残缺 JSON，但依然带 "text" 标记
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"candidates":[{"content":{"parts":[{"text": "多喝热水""#),
        )
        .mount(&server)
        .await;

    let service = service_against(&server.uri(), store, 5);
    let reply = service.daily_advice(Some(&user_id)).await.unwrap();

    assert!(!reply.from_fallback);
    assert_eq!(reply.text, "多喝热水");
}

#[tokio::test]
async fn test_missing_identity_uses_first_user_in_store_order() {
    let server = MockServer::start().await;
    let store = Arc::new(MemoryStore::new());
    let mut ids = Vec::new();
    for i in 0..3 {
        let profile = UserProfile::new(&format!("user{}", i), Persona::Warm);
        ids.push(profile.id.clone());
        store.create_user(&profile).await.unwrap();
    }

    Mock::given(method("POST"))
        .respond_with(gemini_success("好的。"))
        .mount(&server)
        .await;

    let service = service_against(&server.uri(), store.clone(), 5);
    let reply = service.daily_advice(None).await.unwrap();
    assert!(!reply.from_fallback);

    // 交互日志落在存储顺序的第一个用户名下
    let entries = store.list_interactions(&ids[0], 10).await.unwrap();
    assert_eq!(entries.len(), 1);
}

#[tokio::test]
async fn test_empty_store_short_circuits_without_calling_upstream() {
    let server = MockServer::start().await;
    let store = Arc::new(MemoryStore::new());

    Mock::given(method("POST"))
        .respond_with(gemini_success("不应被调用"))
        .expect(0)
        .mount(&server)
        .await;

    let service = service_against(&server.uri(), store, 5);
    let err = service.daily_advice(None).await.unwrap_err();
    assert!(matches!(err, vita::error::AppError::Authentication(_)));
}

#[tokio::test]
async fn test_question_prompt_carries_question_verbatim() {
    let server = MockServer::start().await;
    let (store, user_id) = store_with_user(Persona::Tsundere).await;

    Mock::given(method("POST"))
        .and(body_string_contains("晚上可以吃碳水吗？"))
        .and(body_string_contains(persona_directive(Persona::Tsundere)))
        .respond_with(gemini_success("哼，少吃一点就行。"))
        .expect(1)
        .mount(&server)
        .await;

    let service = service_against(&server.uri(), store.clone(), 5);
    let reply = service
        .answer_question(Some(&user_id), "晚上可以吃碳水吗？")
        .await
        .unwrap();

    assert_eq!(reply.text, "哼，少吃一点就行。");

    let entries = store.list_interactions(&user_id, 10).await.unwrap();
    assert_eq!(entries[0].prompt.as_deref(), Some("晚上可以吃碳水吗？"));
    assert_eq!(entries[0].kind, InteractionKind::Question);
}
