//! OpenAI Chat Completions 互換 (/chat/completions) プロバイダ
//!
//! base_url で任意のエンドポイントを指定可能。失敗は LlmError に分類して返す。

use crate::llm::error::LlmError;
use crate::llm::provider::{LlmProvider, Message};
use serde_json::{json, Value};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// OpenAI Chat Completions 互換プロバイダ
pub struct OpenAiCompatProvider {
    model: String,
    base_url: String,
    api_key: Option<String>,
    temperature: Option<f64>,
    client: reqwest::blocking::Client,
}

impl OpenAiCompatProvider {
    /// 新しいプロバイダを作成
    ///
    /// * `model` - モデル名（None のとき DEFAULT_MODEL）
    /// * `base_url` - ベース URL（None のとき DEFAULT_BASE_URL）
    /// * `api_key` - Bearer に使うキー（None のとき Authorization を付けない）
    /// * `temperature` - 温度（None のときペイロードに含めない）
    pub fn new(
        model: Option<String>,
        base_url: Option<String>,
        api_key: Option<String>,
        temperature: Option<f32>,
    ) -> Self {
        let model = model.unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        Self {
            model,
            base_url,
            api_key,
            temperature: temperature.map(f64::from),
            client: reqwest::blocking::Client::new(),
        }
    }

    fn url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

impl LlmProvider for OpenAiCompatProvider {
    fn name(&self) -> &str {
        "openai_compat"
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn make_request_payload(&self, messages: &[Message]) -> Value {
        let messages: Vec<Value> = messages
            .iter()
            .map(|m| json!({ "role": m.role, "content": m.content }))
            .collect();
        let mut payload = json!({
            "model": self.model,
            "messages": messages,
        });
        if let Some(t) = self.temperature {
            payload["temperature"] = json!(t);
        }
        payload
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, LlmError> {
        let mut builder = self
            .client
            .post(self.url())
            .header("Content-Type", "application/json")
            .body(request_json.to_string());

        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder
            .send()
            .map_err(|e| LlmError::Transport(e.to_string()))?;

        let status = response.status();
        let response_text = response
            .text()
            .map_err(|e| LlmError::Transport(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(LlmError::from_api_response(status.as_u16(), &response_text));
        }

        Ok(response_text)
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, LlmError> {
        let v: Value = serde_json::from_str(response_json).map_err(|e| {
            LlmError::MalformedResponse(format!("Failed to parse response JSON: {}", e))
        })?;

        // 200 でも error を返す互換サーバがある
        if v.get("error").is_some() {
            return Err(LlmError::from_api_response(200, response_json));
        }

        let text = v["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.to_string());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::driver::LlmDriver;
    use httpmock::Method::POST;
    use httpmock::MockServer;

    fn provider_for(server: &MockServer, key: Option<&str>) -> OpenAiCompatProvider {
        OpenAiCompatProvider::new(
            None,
            Some(server.url("/v1")),
            key.map(|k| k.to_string()),
            None,
        )
    }

    #[test]
    fn test_make_request_payload_defaults() {
        let provider = OpenAiCompatProvider::new(None, None, Some("test-key".to_string()), None);
        let payload = provider.make_request_payload(&[Message::user("Hello")]);
        assert_eq!(payload["model"], "gpt-4o-mini");
        assert_eq!(payload["messages"].as_array().unwrap().len(), 1);
        assert!(payload.get("temperature").is_none());
    }

    #[test]
    fn test_make_request_payload_with_temperature() {
        let provider = OpenAiCompatProvider::new(
            Some("gpt-4o".to_string()),
            None,
            None,
            Some(0.5),
        );
        let payload =
            provider.make_request_payload(&[Message::system("sys"), Message::user("Hello")]);
        assert_eq!(payload["model"], "gpt-4o");
        assert_eq!(payload["temperature"], 0.5);
        assert_eq!(payload["messages"][0]["role"], "system");
    }

    #[test]
    fn test_url_trims_trailing_slash() {
        let provider = OpenAiCompatProvider::new(
            None,
            Some("http://localhost:11434/v1/".to_string()),
            None,
            None,
        );
        assert_eq!(provider.url(), "http://localhost:11434/v1/chat/completions");
    }

    #[test]
    fn test_parse_response_text() {
        let provider = OpenAiCompatProvider::new(None, None, None, None);
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"Hi"}}]}"#;
        assert_eq!(provider.parse_response_text(body).unwrap().as_deref(), Some("Hi"));
        assert_eq!(provider.parse_response_text(r#"{"choices":[]}"#).unwrap(), None);
    }

    #[test]
    fn test_parse_response_text_error_body() {
        let provider = OpenAiCompatProvider::new(None, None, None, None);
        let body = r#"{"error":{"message":"quota","code":"insufficient_quota"}}"#;
        assert!(matches!(
            provider.parse_response_text(body),
            Err(LlmError::QuotaExceeded(_))
        ));
        assert!(matches!(
            provider.parse_response_text("not json"),
            Err(LlmError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_query_success_sends_bearer_and_single_request() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/v1/chat/completions")
                .header("authorization", "Bearer test-key")
                .body_contains("\"model\":\"gpt-4o-mini\"");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"choices":[{"message":{"role":"assistant","content":"Converted."}}]}"#);
        });

        let driver = LlmDriver::new(provider_for(&server, Some("test-key")));
        let text = driver.query("rewrite", Some("only the message")).unwrap();
        mock.assert_hits(1);
        assert_eq!(text, "Converted.");
    }

    #[test]
    fn test_query_401_is_unauthorized() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(401).body(
                r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error","code":"invalid_api_key"}}"#,
            );
        });

        let driver = LlmDriver::new(provider_for(&server, Some("wrong")));
        let err = driver.query("rewrite", None).unwrap_err();
        assert_eq!(err, LlmError::Unauthorized("Incorrect API key provided".to_string()));
    }

    #[test]
    fn test_query_429_is_quota_exceeded() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(429).body(
                r#"{"error":{"message":"You exceeded your current quota","type":"insufficient_quota","code":"insufficient_quota"}}"#,
            );
        });

        let driver = LlmDriver::new(provider_for(&server, Some("k")));
        let err = driver.query("rewrite", None).unwrap_err();
        assert!(matches!(err, LlmError::QuotaExceeded(_)));
    }

    #[test]
    fn test_query_500_is_api_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(500).body("internal");
        });

        let driver = LlmDriver::new(provider_for(&server, None));
        let err = driver.query("rewrite", None).unwrap_err();
        assert_eq!(
            err,
            LlmError::Api {
                status: 500,
                message: "internal".to_string()
            }
        );
    }

    #[test]
    fn test_query_malformed_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(200).body("<html>gateway</html>");
        });

        let driver = LlmDriver::new(provider_for(&server, None));
        let err = driver.query("rewrite", None).unwrap_err();
        assert!(matches!(err, LlmError::MalformedResponse(_)));
    }

    #[test]
    fn test_query_connection_refused_is_transport() {
        let provider = OpenAiCompatProvider::new(
            None,
            Some("http://127.0.0.1:9/v1".to_string()),
            None,
            None,
        );
        let err = LlmDriver::new(provider).query("rewrite", None).unwrap_err();
        assert!(matches!(err, LlmError::Transport(_)));
    }
}
