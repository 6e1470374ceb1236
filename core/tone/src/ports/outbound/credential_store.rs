//! 事前に用意された秘密（API キー）を読む Outbound ポート

use crate::domain::Credential;

pub trait CredentialStore: Send + Sync {
    /// 設定されていなければ None
    fn load(&self) -> Option<Credential>;
}
