//! CLI フロントエンド（引数解析・対話セッション・表示用の整形）

pub mod args;
pub mod render;
pub mod repl;

pub use args::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
#[cfg(test)]
pub use args::parse_args_from;
pub use repl::run_repl;
