//! Echoプロバイダの実装
//!
//! このプロバイダは実際にLLM APIを呼び出さず、最後の user メッセージをそのまま返します。
//! API キーなしでの動作確認やテスト用に使用します。

use crate::llm::error::LlmError;
use crate::llm::provider::{LlmProvider, Message};
use serde_json::{json, Value};

/// Echoプロバイダ
#[derive(Debug, Clone, Default)]
pub struct EchoProvider;

impl EchoProvider {
    /// 新しいEchoプロバイダを作成
    pub fn new() -> Self {
        Self
    }
}

impl LlmProvider for EchoProvider {
    fn name(&self) -> &str {
        "echo"
    }

    fn model(&self) -> &str {
        "echo"
    }

    fn make_request_payload(&self, messages: &[Message]) -> Value {
        let query = messages
            .iter()
            .rev()
            .find(|m| m.role == "user")
            .map(|m| m.content.clone())
            .unwrap_or_default();
        let mut payload = json!({ "query": query });
        if let Some(system) = messages.iter().find(|m| m.role == "system") {
            payload["system_instruction"] = json!(system.content);
        }
        payload
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, LlmError> {
        // 実際のAPI呼び出しは行わず、query を echo として返す
        let v: Value = serde_json::from_str(request_json)
            .map_err(|e| LlmError::MalformedResponse(e.to_string()))?;
        Ok(json!({ "echo": v["query"] }).to_string())
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, LlmError> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| LlmError::MalformedResponse(e.to_string()))?;
        Ok(v["echo"].as_str().map(|s| s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::driver::LlmDriver;

    #[test]
    fn test_echo_provider_name() {
        let provider = EchoProvider::new();
        assert_eq!(provider.name(), "echo");
    }

    #[test]
    fn test_echo_provider_make_request_payload_with_system() {
        let provider = EchoProvider::new();
        let payload = provider.make_request_payload(&[
            Message::system("You are helpful"),
            Message::user("Hello"),
        ]);
        assert_eq!(payload["query"], "Hello");
        assert_eq!(payload["system_instruction"], "You are helpful");
    }

    #[test]
    fn test_echo_provider_round_trip_through_driver() {
        let driver = LlmDriver::new(EchoProvider::new());
        let text = driver.query("make this polite", Some("sys")).unwrap();
        assert_eq!(text, "make this polite");
    }
}
