//! CompletionService の標準実装（common::llm のプロバイダ + LlmDriver）
//!
//! LlmError を ConvertError の分類へ写す。リモートのエラーメッセージは表示前に秘匿情報をマスクする。

use common::llm::{create_provider, LlmDriver, LlmError, ResolvedProvider};
use common::redact::redact_secrets;

use crate::domain::{ConvertError, Credential};
use crate::ports::outbound::CompletionService;

pub struct LlmCompletionService {
    resolved: ResolvedProvider,
}

impl LlmCompletionService {
    pub fn new(resolved: ResolvedProvider) -> Self {
        Self { resolved }
    }
}

/// LlmError → ConvertError
fn classify(err: LlmError, secret: Option<&str>) -> ConvertError {
    match err {
        LlmError::Unauthorized(msg) => ConvertError::AuthenticationFailure(redact_secrets(&msg, secret)),
        LlmError::QuotaExceeded(msg) => ConvertError::QuotaExceeded(redact_secrets(&msg, secret)),
        other @ (LlmError::Api { .. } | LlmError::Transport(_) | LlmError::MalformedResponse(_)) => {
            ConvertError::RemoteServiceError(redact_secrets(&other.to_string(), secret))
        }
    }
}

impl CompletionService for LlmCompletionService {
    fn profile_name(&self) -> &str {
        &self.resolved.profile_name
    }

    fn model_name(&self) -> &str {
        self.resolved.effective_model()
    }

    fn requires_credential(&self) -> bool {
        self.resolved.requires_credential()
    }

    fn complete(
        &self,
        credential: Option<&Credential>,
        system_instruction: &str,
        prompt: &str,
    ) -> Result<String, ConvertError> {
        let secret = credential.map(|c| c.secret());
        let provider = create_provider(&self.resolved, secret.map(str::to_string));
        LlmDriver::new(provider)
            .query(prompt, Some(system_instruction))
            .map_err(|e| classify(e, secret))
    }
}
