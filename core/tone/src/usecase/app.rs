//! セッション記録 & プロンプトゲートウェイのユースケース
//!
//! use case 自体は状態を持たない（&self）。認証情報・履歴・レビューはすべて呼び出し側の Session にある。

use std::sync::Arc;

use common::ports::outbound::{Clock, Log, LogLevel, LogRecord};

use crate::domain::{
    render_prompt, ConversionRequest, ConversionResult, ConvertError, Credential,
    CredentialSource, ReviewEntry, Session, ValidationError, SYSTEM_INSTRUCTION,
};
use crate::ports::outbound::{CompletionService, CredentialStore};

// --- 責務別 Deps（usecase が定義を所有し、wiring は組み立てるだけ）

pub struct ToneDeps {
    pub completion: Arc<dyn CompletionService>,
    pub credential_store: Arc<dyn CredentialStore>,
    pub clock: Arc<dyn Clock>,
    pub log: Arc<dyn Log>,
}

/// tone のユースケース（アダプター経由で I/O を行う）
pub struct ToneUseCase {
    deps: ToneDeps,
}

impl ToneUseCase {
    pub fn new(deps: ToneDeps) -> Self {
        Self { deps }
    }

    fn log(&self, record: LogRecord) {
        let _ = self.deps.log.log(&record.layer("usecase"));
    }

    /// 新しいセッションを作る。
    ///
    /// 明示入力（--api-key）があればそれを、無ければ保管済みの秘密を使う。どちらも無ければ未設定のまま。
    pub fn open_session(&self, entered_key: Option<&str>) -> Session {
        let credential = entered_key
            .and_then(|k| Credential::new(k, CredentialSource::UserEntry))
            .or_else(|| self.deps.credential_store.load());
        match &credential {
            Some(c) => self.log(
                LogRecord::new(LogLevel::Info, "credential configured")
                    .kind("credential")
                    .field("source", c.source().describe()),
            ),
            None if self.requires_credential() => self.log(
                LogRecord::new(LogLevel::Warn, "no credential configured")
                    .kind("credential")
                    .field("profile", self.deps.completion.profile_name()),
            ),
            None => {}
        }
        Session::new(credential)
    }

    /// 利用者が入力したキーをセッションに設定する。空なら ValidationError ではなく CredentialMissing
    pub fn enter_credential(&self, session: &mut Session, key: &str) -> Result<(), ConvertError> {
        let credential =
            Credential::new(key, CredentialSource::UserEntry).ok_or(ConvertError::CredentialMissing)?;
        session.set_credential(credential);
        self.log(
            LogRecord::new(LogLevel::Info, "credential configured")
                .kind("credential")
                .field("source", CredentialSource::UserEntry.describe()),
        );
        Ok(())
    }

    /// 接続先が認証情報を必要とするか
    pub fn requires_credential(&self) -> bool {
        self.deps.completion.requires_credential()
    }

    /// セッションで変換できる状態か（認証情報が不要、または設定済み）
    pub fn is_ready(&self, session: &Session) -> bool {
        !self.requires_credential() || session.credential().is_some()
    }

    /// 接続先の (profile, model)
    pub fn target(&self) -> (&str, &str) {
        (
            self.deps.completion.profile_name(),
            self.deps.completion.model_name(),
        )
    }

    /// リクエストを検証し、1 回だけリモートへ送り、成功時のみ履歴へ 1 件追加して返す
    pub fn convert(
        &self,
        session: &mut Session,
        request: &ConversionRequest,
    ) -> Result<ConversionResult, ConvertError> {
        if let Err(e) = request.validate() {
            self.log(
                LogRecord::new(LogLevel::Info, e.to_string())
                    .kind("conversion")
                    .field("event", "conversion_rejected"),
            );
            return Err(e.into());
        }
        if !self.is_ready(session) {
            self.log(
                LogRecord::new(LogLevel::Warn, "conversion blocked: no credential")
                    .kind("conversion")
                    .field("event", "conversion_rejected")
                    .field("error_kind", ConvertError::CredentialMissing.kind()),
            );
            return Err(ConvertError::CredentialMissing);
        }

        let (profile, model) = self.target();
        self.log(
            LogRecord::new(
                LogLevel::Info,
                format!("conversion started (profile: {}, model: {})", profile, model),
            )
            .kind("conversion")
            .field("event", "conversion_started")
            .field("tone", request.tone.as_str())
            .field("strength", request.strength.get())
            .field("profile", profile)
            .field("model", model),
        );

        let prompt = render_prompt(request);
        let text = match self
            .deps
            .completion
            .complete(session.credential(), SYSTEM_INSTRUCTION, &prompt)
        {
            Ok(text) => text,
            Err(e) => {
                self.log(
                    LogRecord::new(LogLevel::Error, e.to_string())
                        .kind("conversion")
                        .field("event", "conversion_failed")
                        .field("error_kind", e.kind()),
                );
                return Err(e);
            }
        };

        let result = ConversionResult::new(
            self.deps.clock.now(),
            request.tone,
            request.target.as_str(),
            text,
        );
        session.history_mut().push(result.clone());
        self.log(
            LogRecord::new(LogLevel::Info, "conversion finished")
                .kind("conversion")
                .field("event", "conversion_finished")
                .field("history_len", session.history().len()),
        );
        Ok(result)
    }

    /// レビューを記録する。履歴や補完サービスには触れない
    pub fn record_review(
        &self,
        session: &mut Session,
        name: &str,
        message: &str,
    ) -> Result<ReviewEntry, ValidationError> {
        match ReviewEntry::new(name, message, self.deps.clock.now()) {
            Ok(entry) => {
                session.reviews_mut().push(entry.clone());
                self.log(
                    LogRecord::new(LogLevel::Info, "review recorded")
                        .kind("review")
                        .field("reviews_len", session.reviews().len()),
                );
                Ok(entry)
            }
            Err(e) => {
                self.log(LogRecord::new(LogLevel::Info, e.to_string()).kind("review"));
                Err(e)
            }
        }
    }
}
