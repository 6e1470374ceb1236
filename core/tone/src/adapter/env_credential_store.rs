//! 環境変数から API キーを読む CredentialStore

use std::sync::Arc;

use common::ports::outbound::EnvResolver;

use crate::domain::{Credential, CredentialSource};
use crate::ports::outbound::CredentialStore;

/// プロファイルの api_key_env（openai のデフォルトは OPENAI_API_KEY）を読む
pub struct EnvCredentialStore {
    env_resolver: Arc<dyn EnvResolver>,
    var_name: Option<String>,
}

impl EnvCredentialStore {
    /// var_name が None（echo 等）のときは常に None を返す
    pub fn new(env_resolver: Arc<dyn EnvResolver>, var_name: Option<String>) -> Self {
        Self {
            env_resolver,
            var_name,
        }
    }
}

impl CredentialStore for EnvCredentialStore {
    fn load(&self) -> Option<Credential> {
        let name = self.var_name.as_deref()?;
        let value = self.env_resolver.var(name)?;
        Credential::new(value, CredentialSource::Environment(name.to_string()))
    }
}
