//! リモート補完サービスの Outbound ポート
//!
//! 1 回の呼び出しで 1 リクエストだけ送り、テキストか分類済みの ConvertError を返す。

use crate::domain::{ConvertError, Credential};

pub trait CompletionService: Send + Sync {
    /// ログ用のプロファイル名
    fn profile_name(&self) -> &str;

    /// リクエストに載るモデル名
    fn model_name(&self) -> &str;

    /// 認証情報なしでは呼べないか（echo やキー不要のローカルサーバは false）
    fn requires_credential(&self) -> bool;

    /// system 指示 + user プロンプトを送り、変換後のテキストを返す
    fn complete(
        &self,
        credential: Option<&Credential>,
        system_instruction: &str,
        prompt: &str,
    ) -> Result<String, ConvertError>;
}
