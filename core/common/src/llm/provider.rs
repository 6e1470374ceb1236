//! LLMプロバイダのトレイト定義

use crate::llm::error::LlmError;
use serde_json::Value;

/// LLMプロバイダのトレイト
///
/// 各プロバイダ（OpenAI 互換、Echo など）はこのトレイトを実装する必要があります。
pub trait LlmProvider: Send + Sync {
    /// プロバイダ名を返す
    fn name(&self) -> &str;

    /// リクエストに使うモデル名
    fn model(&self) -> &str;

    /// リクエストペイロードを生成
    ///
    /// # Arguments
    /// * `messages` - role 付きメッセージ列（system → user の順）
    fn make_request_payload(&self, messages: &[Message]) -> Value;

    /// HTTPリクエストを実行してレスポンスを取得
    ///
    /// # Returns
    /// * `Ok(String)` - レスポンスJSON文字列
    /// * `Err(LlmError)` - 分類済みのエラー
    fn make_http_request(&self, request_json: &str) -> Result<String, LlmError>;

    /// レスポンスからテキストを抽出
    ///
    /// # Returns
    /// * `Ok(Option<String>)` - 抽出したテキスト（存在しない場合はNone）
    /// * `Err(LlmError)` - 本文にエラーが含まれる・JSON が壊れている
    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, LlmError>;
}

/// role 付きメッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_user() {
        let msg = Message::user("Hello");
        assert_eq!(msg.role, "user");
        assert_eq!(msg.content, "Hello");
    }

    #[test]
    fn test_message_system() {
        let msg = Message::system("Return only the message");
        assert_eq!(msg.role, "system");
    }

    #[test]
    fn test_message_with_multiline_content() {
        let msg = Message::user("Line 1\nLine 2");
        assert_eq!(msg.content, "Line 1\nLine 2");
    }
}
