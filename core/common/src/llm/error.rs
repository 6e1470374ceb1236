//! LLM 呼び出しの失敗分類
//!
//! HTTP ステータスとエラーボディ（`{"error": {"message", "type", "code"}}`）から
//! 呼び出し元が扱い分けられる種別に正規化する。

use crate::error::Error;
use serde_json::Value;

/// LLM プロバイダのエラー
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LlmError {
    /// 認証情報が拒否された（HTTP 401 / invalid_api_key）
    #[error("Authentication failed: {0}")]
    Unauthorized(String),
    /// クォータ不足・レート制限（HTTP 429 / insufficient_quota）
    #[error("Quota exceeded: {0}")]
    QuotaExceeded(String),
    /// 上記以外の API エラー
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },
    /// 接続失敗など、レスポンスを受け取れなかった
    #[error("HTTP request failed: {0}")]
    Transport(String),
    /// レスポンスが想定した形でない
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl LlmError {
    /// ステータスとレスポンス本文から分類する
    pub fn from_api_response(status: u16, body: &str) -> Self {
        let parsed: Option<Value> = serde_json::from_str(body).ok();
        let err = parsed.as_ref().map(|v| &v["error"]);
        let field = |key: &str| -> Option<String> {
            err.and_then(|e| e[key].as_str()).map(|s| s.to_string())
        };
        let message = field("message")
            .or_else(|| err.and_then(|e| e.as_str()).map(|s| s.to_string()))
            .unwrap_or_else(|| {
                if body.trim().is_empty() {
                    format!("HTTP {}", status)
                } else {
                    body.trim().to_string()
                }
            });
        let code = field("code").unwrap_or_default();
        let type_ = field("type").unwrap_or_default();

        if status == 401 || code == "invalid_api_key" {
            return Self::Unauthorized(message);
        }
        if status == 429 || code == "insufficient_quota" || type_ == "insufficient_quota" {
            return Self::QuotaExceeded(message);
        }
        Self::Api { status, message }
    }
}

impl From<LlmError> for Error {
    fn from(e: LlmError) -> Self {
        Error::http(e.to_string())
    }
}
