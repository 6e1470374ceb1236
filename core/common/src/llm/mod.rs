//! LLMドライバーとプロバイダの実装
//!
//! Chat Completions 互換エンドポイントへの 1 往復（リクエスト生成 → HTTP → テキスト抽出）と、
//! 失敗の分類（認証 / クォータ / その他）を提供します。

pub mod config;
pub mod driver;
pub mod echo;
pub mod error;
pub mod factory;
pub mod openai_compat;
pub mod provider;
pub mod resolver;

pub use driver::LlmDriver;
pub use error::LlmError;
pub use factory::{create_provider, AnyProvider, ProviderType};
pub use provider::{LlmProvider, Message};
pub use resolver::{list_profiles, load_profiles_config, resolve_provider, ResolvedProvider};
