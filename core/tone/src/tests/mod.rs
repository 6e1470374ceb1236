//! use case / CLI 結合テスト


use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone};
use common::adapter::{FixedClock, NoopLog};

use crate::adapter::StubCompletion;
use crate::domain::{Credential, CredentialSource};
use crate::ports::outbound::CredentialStore;
use crate::usecase::app::{ToneDeps, ToneUseCase};

/// テスト用: 固定の秘密を返す CredentialStore
pub(crate) struct FixedCredentialStore(pub Option<&'static str>);

impl CredentialStore for FixedCredentialStore {
    fn load(&self) -> Option<Credential> {
        self.0.and_then(|k| {
            Credential::new(k, CredentialSource::Environment("OPENAI_API_KEY".to_string()))
        })
    }
}

pub(crate) fn fixed_time() -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 6, 3, 14, 25, 9).unwrap()
}

/// StubCompletion・固定時刻・NoopLog で ToneUseCase を組み立てる
pub(crate) fn use_case_with(stub: Arc<StubCompletion>, stored_key: Option<&'static str>) -> ToneUseCase {
    ToneUseCase::new(ToneDeps {
        completion: stub,
        credential_store: Arc::new(FixedCredentialStore(stored_key)),
        clock: Arc::new(FixedClock(fixed_time())),
        log: Arc::new(NoopLog),
    })
}
