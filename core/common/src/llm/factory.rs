//! プロバイダファクトリー
//!
//! 解決済みプロファイルと認証情報から適切なプロバイダを作成します。

use crate::llm::echo::EchoProvider;
use crate::llm::error::LlmError;
use crate::llm::openai_compat::OpenAiCompatProvider;
use crate::llm::provider::{LlmProvider, Message};
use crate::llm::resolver::ResolvedProvider;
use serde::Deserialize;
use serde_json::Value;

/// プロバイダタイプ（profiles.json の "type"）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ProviderType {
    /// api.openai.com（API キー必須）
    #[serde(rename = "openai", alias = "gpt")]
    OpenAi,
    /// OpenAI Chat Completions 互換 (/chat/completions)。API キーは任意
    #[serde(rename = "openai_compat", alias = "ollama")]
    OpenAiCompat,
    /// Echo（API を呼ばずにクエリを返す）
    #[serde(rename = "echo")]
    Echo,
}

impl ProviderType {
    /// 文字列からプロバイダタイプを解析
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "openai" | "gpt" => Some(Self::OpenAi),
            "openai_compat" => Some(Self::OpenAiCompat),
            "echo" => Some(Self::Echo),
            _ => None,
        }
    }

    /// プロバイダタイプを文字列に変換
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::OpenAiCompat => "openai_compat",
            Self::Echo => "echo",
        }
    }
}

/// プロバイダのenumラッパー
///
/// 異なるプロバイダタイプを型安全に扱うために使用します。
pub enum AnyProvider {
    OpenAiCompat(OpenAiCompatProvider),
    Echo(EchoProvider),
}

impl LlmProvider for AnyProvider {
    fn name(&self) -> &str {
        match self {
            Self::OpenAiCompat(p) => p.name(),
            Self::Echo(p) => p.name(),
        }
    }

    fn model(&self) -> &str {
        match self {
            Self::OpenAiCompat(p) => p.model(),
            Self::Echo(p) => p.model(),
        }
    }

    fn make_request_payload(&self, messages: &[Message]) -> Value {
        match self {
            Self::OpenAiCompat(p) => p.make_request_payload(messages),
            Self::Echo(p) => p.make_request_payload(messages),
        }
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, LlmError> {
        match self {
            Self::OpenAiCompat(p) => p.make_http_request(request_json),
            Self::Echo(p) => p.make_http_request(request_json),
        }
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, LlmError> {
        match self {
            Self::OpenAiCompat(p) => p.parse_response_text(response_json),
            Self::Echo(p) => p.parse_response_text(response_json),
        }
    }
}

/// プロバイダを作成する
///
/// # Arguments
/// * `resolved` - 解決済みプロファイル（type / base_url / model / temperature）
/// * `api_key` - Bearer に使うキー。Echo では無視される
pub fn create_provider(resolved: &ResolvedProvider, api_key: Option<String>) -> AnyProvider {
    match resolved.provider_type {
        ProviderType::OpenAi | ProviderType::OpenAiCompat => {
            AnyProvider::OpenAiCompat(OpenAiCompatProvider::new(
                resolved.model.clone(),
                resolved.base_url.clone(),
                api_key,
                resolved.temperature,
            ))
        }
        ProviderType::Echo => AnyProvider::Echo(EchoProvider::new()),
    }
}
