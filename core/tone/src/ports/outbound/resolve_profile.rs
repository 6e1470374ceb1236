//! プロファイル・モデル解決の Outbound ポート

use common::domain::{ModelName, ProviderName};
use common::error::Error;
use common::llm::ResolvedProvider;

pub trait ResolveProfile: Send + Sync {
    /// -p / -m（未指定なら profiles.json のデフォルト）から接続先を決める。
    /// model 指定はプロファイルのモデルより優先する。
    fn resolve(
        &self,
        profile: Option<&ProviderName>,
        model: Option<&ModelName>,
    ) -> Result<ResolvedProvider, Error>;
}
