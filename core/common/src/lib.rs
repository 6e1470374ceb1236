//! tone 共通ライブラリ
//!
//! `tone` コマンドが使う外界 I/O（ログ・時刻・FS・環境変数・LLM）を提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（Newtype）
pub mod domain;

/// Ports & Adapters
pub mod ports;
pub mod adapter;

/// LLMドライバーとプロバイダ
pub mod llm;

/// ログ・表示前の秘匿情報マスク
pub mod redact;
