//! profiles.json（接続先プロファイル）
//!
//! ```json
//! {
//!   "default": "work",
//!   "profiles": {
//!     "work":  { "type": "openai", "model": "gpt-4o", "api_key_env": "WORK_OPENAI_KEY" },
//!     "local": { "type": "openai_compat", "base_url": "http://localhost:11434/v1", "model": "llama3.1" }
//!   }
//! }
//! ```

use crate::llm::factory::ProviderType;
use serde::Deserialize;
use std::collections::BTreeMap;

/// profiles.json 全体
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfilesConfig {
    /// -p 省略時のプロファイル名
    #[serde(default, alias = "default", alias = "default_provider")]
    pub default_profile: Option<String>,
    #[serde(default, alias = "providers")]
    pub profiles: BTreeMap<String, Profile>,
}

/// 1 接続先。省略した項目は種別ごとの既定値になる
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Profile {
    #[serde(rename = "type", alias = "provider")]
    pub kind: ProviderType,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default, alias = "default_model")]
    pub model: Option<String>,
    /// 秘密を読む環境変数名
    #[serde(default)]
    pub api_key_env: Option<String>,
    /// 指定時のみリクエストに載せる
    #[serde(default)]
    pub temperature: Option<f32>,
}

impl Profile {
    pub fn of_kind(kind: ProviderType) -> Self {
        Self {
            kind,
            base_url: None,
            model: None,
            api_key_env: None,
            temperature: None,
        }
    }
}

impl ProfilesConfig {
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn get(&self, name: &str) -> Option<&Profile> {
        self.profiles.get(name)
    }

    /// 設定ファイルに書かれたプロファイル名（昇順）
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }
}
