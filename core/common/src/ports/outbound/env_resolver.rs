//! 環境変数解決 Outbound ポート
//!
//! ホームディレクトリと API キー（事前登録されたシークレット）を環境変数から解決する。
//! usecase / adapter はこの trait 経由でのみ環境変数にアクセスする。

use crate::domain::HomeDir;
use crate::error::Error;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// ホームディレクトリを環境変数から解決する
    ///
    /// 優先順位:
    /// 1. TONE_HOME（設定されていれば）
    /// 2. $XDG_CONFIG_HOME/tone（XDG_CONFIG_HOME が設定されていれば）
    /// 3. $HOME/.config/tone
    fn resolve_home_dir(&self) -> Result<HomeDir, Error>;

    /// 指定した環境変数の値（未設定・空文字は None）
    fn var(&self, name: &str) -> Option<String>;
}
