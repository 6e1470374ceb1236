//! 1 利用者セッションの状態（認証情報・変換履歴・レビュー）
//!
//! プロセス全体のシングルトンにはせず、セッションごとに 1 つ作って use case に &mut で渡す。

use crate::domain::{Credential, HistoryLog, ReviewLog};

#[derive(Debug, Default)]
pub struct Session {
    credential: Option<Credential>,
    history: HistoryLog,
    reviews: ReviewLog,
}

impl Session {
    pub fn new(credential: Option<Credential>) -> Self {
        Self {
            credential,
            ..Default::default()
        }
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    pub fn set_credential(&mut self, credential: Credential) {
        self.credential = Some(credential);
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn reviews(&self) -> &ReviewLog {
        &self.reviews
    }

    pub(crate) fn history_mut(&mut self) -> &mut HistoryLog {
        &mut self.history
    }

    pub(crate) fn reviews_mut(&mut self) -> &mut ReviewLog {
        &mut self.reviews
    }
}
