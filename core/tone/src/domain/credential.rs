//! API 認証情報
//!
//! Debug / ログに秘密値を出さないため String をそのまま運ばない。

use std::fmt;

/// 認証情報の入手元
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// 事前に用意された秘密（環境変数名）
    Environment(String),
    /// 利用者が直接入力（--api-key / /key）
    UserEntry,
}

impl CredentialSource {
    /// ログ用の短い表記
    pub fn describe(&self) -> String {
        match self {
            Self::Environment(var) => format!("env:{}", var),
            Self::UserEntry => "user".to_string(),
        }
    }
}

/// 空でない API キー
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    secret: String,
    source: CredentialSource,
}

impl Credential {
    /// 空白のみのキーは None
    pub fn new(secret: impl Into<String>, source: CredentialSource) -> Option<Self> {
        let secret = secret.into().trim().to_string();
        if secret.is_empty() {
            return None;
        }
        Some(Self { secret, source })
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn source(&self) -> &CredentialSource {
        &self.source
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("secret", &"***")
            .field("source", &self.source)
            .finish()
    }
}
