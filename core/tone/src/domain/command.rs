//! tone コマンドの enum（Command Pattern）
//!
//! 一発変換 / 対話セッション / 一覧表示の分岐を enum で明示する。

use crate::domain::ConversionRequest;
use common::domain::{ModelName, ProviderName};

/// tone の実行モード
#[derive(Debug, Clone, PartialEq)]
pub enum ToneCommand {
    /// ヘルプ表示
    Help,
    /// 口調プリセット一覧
    ListTones,
    /// 有効なプロファイル一覧
    ListProfiles,
    /// 1 回だけ変換して結果を表示
    Convert {
        profile: Option<ProviderName>,
        model: Option<ModelName>,
        api_key: Option<String>,
        request: ConversionRequest,
    },
    /// 標準入力で対話セッション（form は初期値）
    Interactive {
        profile: Option<ProviderName>,
        model: Option<ModelName>,
        api_key: Option<String>,
        form: ConversionRequest,
    },
}
