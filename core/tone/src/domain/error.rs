//! 変換ゲートウェイのエラー分類
//!
//! convert は例外ではなく Result<_, ConvertError> を返す。CLI では common::error::Error に変換して終了コードを決める。

use common::error::Error;
use thiserror::Error as ThisError;

/// 入力検証エラー（リモートサービスには一切問い合わせない）
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum ValidationError {
    #[error("Content is empty. Enter the message to convert.")]
    EmptyContent,
    #[error("Review message is empty. Enter a message to post a review.")]
    EmptyReviewMessage,
    #[error("Strength must be an integer between 1 and 5 (got '{0}')")]
    InvalidStrength(String),
    #[error("Unknown tone: '{0}'. Available: polite, casual, business-formal, witty")]
    UnknownTone(String),
}

/// convert の失敗（1 回の送信に対して終端。自動リトライはしない）
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum ConvertError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("No API key configured. Export the key in the profile's environment variable, pass --api-key, or enter it with /key.")]
    CredentialMissing,
    #[error("Authentication failed: {0}. Check that your API key is correct.")]
    AuthenticationFailure(String),
    #[error("Quota exceeded: {0}. Check your plan and billing details.")]
    QuotaExceeded(String),
    #[error("Remote service error: {0}")]
    RemoteServiceError(String),
}

impl ConvertError {
    /// ログ用の分類名
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::CredentialMissing => "credential_missing",
            Self::AuthenticationFailure(_) => "authentication_failure",
            Self::QuotaExceeded(_) => "quota_exceeded",
            Self::RemoteServiceError(_) => "remote_service_error",
        }
    }
}

impl From<ValidationError> for Error {
    fn from(e: ValidationError) -> Self {
        Error::invalid_argument(e.to_string())
    }
}

/// 入力・設定の問題は usage (64)、リモート側の失敗は 74
impl From<ConvertError> for Error {
    fn from(e: ConvertError) -> Self {
        match e {
            ConvertError::Validation(_) | ConvertError::CredentialMissing => {
                Error::invalid_argument(e.to_string())
            }
            ConvertError::AuthenticationFailure(_)
            | ConvertError::QuotaExceeded(_)
            | ConvertError::RemoteServiceError(_) => Error::http(e.to_string()),
        }
    }
}
