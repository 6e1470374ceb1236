//! LLMドライバーの実装
//!
//! プロバイダに依存しない 1 往復の処理（ペイロード生成 → HTTP → テキスト抽出）を提供します。
//! リトライ・ストリーミングは行わない。

use crate::llm::error::LlmError;
use crate::llm::provider::{LlmProvider, Message};

/// LLMドライバー
pub struct LlmDriver<P: LlmProvider> {
    provider: P,
}

impl<P: LlmProvider> LlmDriver<P> {
    /// 新しいドライバーを作成
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// LLMにクエリを送信してレスポンスを取得（HTTP リクエストはちょうど 1 回）
    ///
    /// # Arguments
    /// * `query` - ユーザーメッセージ
    /// * `system_instruction` - システム指示（オプション）
    ///
    /// # Returns
    /// * `Ok(String)` - LLMからの応答テキスト（前後の空白は除去）
    /// * `Err(LlmError)` - 分類済みのエラー。テキストが空なら MalformedResponse
    pub fn query(&self, query: &str, system_instruction: Option<&str>) -> Result<String, LlmError> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = system_instruction {
            messages.push(Message::system(system));
        }
        messages.push(Message::user(query));

        let payload = self.provider.make_request_payload(&messages);
        let request_json = serde_json::to_string(&payload)
            .map_err(|e| LlmError::MalformedResponse(format!("Failed to serialize request: {}", e)))?;

        let response_json = self.provider.make_http_request(&request_json)?;

        let text = self
            .provider
            .parse_response_text(&response_json)?
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| LlmError::MalformedResponse("No text in response".to_string()))?;

        Ok(text)
    }

    /// プロバイダを取得
    pub fn provider(&self) -> &P {
        &self.provider
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use std::sync::Mutex;

    // モックプロバイダ（受け取ったリクエストを記録する）
    struct MockProvider {
        response: Result<String, LlmError>,
        requests: Mutex<Vec<String>>,
    }

    impl MockProvider {
        fn replying(body: &str) -> Self {
            Self {
                response: Ok(body.to_string()),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn failing(err: LlmError) -> Self {
            Self {
                response: Err(err),
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    impl LlmProvider for MockProvider {
        fn name(&self) -> &str {
            "mock"
        }

        fn model(&self) -> &str {
            "mock-model"
        }

        fn make_request_payload(&self, messages: &[Message]) -> Value {
            let msgs: Vec<Value> = messages
                .iter()
                .map(|m| json!({ "role": m.role, "content": m.content }))
                .collect();
            json!({ "messages": msgs })
        }

        fn make_http_request(&self, request_json: &str) -> Result<String, LlmError> {
            self.requests.lock().unwrap().push(request_json.to_string());
            self.response.clone()
        }

        fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, LlmError> {
            let v: Value = serde_json::from_str(response_json)
                .map_err(|e| LlmError::MalformedResponse(e.to_string()))?;
            Ok(v["text"].as_str().map(|s| s.to_string()))
        }
    }

    #[test]
    fn test_llm_driver_new() {
        let driver = LlmDriver::new(MockProvider::replying("{}"));
        assert_eq!(driver.provider().name(), "mock");
    }

    #[test]
    fn test_llm_driver_query_sends_system_then_user() {
        let driver = LlmDriver::new(MockProvider::replying(r#"{"text":"  Hello, world!\n"}"#));
        let result = driver.query("convert this", Some("only the message")).unwrap();
        assert_eq!(result, "Hello, world!");

        let requests = driver.provider().requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        let sent: Value = serde_json::from_str(&requests[0]).unwrap();
        assert_eq!(sent["messages"][0]["role"], "system");
        assert_eq!(sent["messages"][1]["role"], "user");
        assert_eq!(sent["messages"][1]["content"], "convert this");
    }

    #[test]
    fn test_llm_driver_query_without_system_instruction() {
        let driver = LlmDriver::new(MockProvider::replying(r#"{"text":"ok"}"#));
        driver.query("hi", None).unwrap();
        let requests = driver.provider().requests.lock().unwrap();
        let sent: Value = serde_json::from_str(&requests[0]).unwrap();
        assert_eq!(sent["messages"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_llm_driver_empty_text_is_malformed() {
        let driver = LlmDriver::new(MockProvider::replying(r#"{"text":"   "}"#));
        let err = driver.query("hi", None).unwrap_err();
        assert!(matches!(err, LlmError::MalformedResponse(_)));

        let driver = LlmDriver::new(MockProvider::replying(r#"{}"#));
        let err = driver.query("hi", None).unwrap_err();
        assert_eq!(err, LlmError::MalformedResponse("No text in response".to_string()));
    }

    #[test]
    fn test_llm_driver_propagates_provider_error() {
        let driver = LlmDriver::new(MockProvider::failing(LlmError::Unauthorized(
            "bad key".to_string(),
        )));
        let err = driver.query("hi", None).unwrap_err();
        assert_eq!(err, LlmError::Unauthorized("bad key".to_string()));
        assert_eq!(driver.provider().requests.lock().unwrap().len(), 1);
    }
}
