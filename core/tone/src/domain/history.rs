//! セッション内の変換履歴
//!
//! 挿入順（古い順）に無制限に保持し、表示だけを直近 N 件に絞る。

use crate::domain::ConversionResult;

/// 履歴表示の件数
pub const HISTORY_DISPLAY_LIMIT: usize = 5;

/// 変換履歴（追記のみ）
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    entries: Vec<ConversionResult>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 末尾へ 1 件追加する（成功した変換のみが呼ぶ）
    pub(crate) fn push(&mut self, result: ConversionResult) {
        self.entries.push(result);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 古い順の全件
    #[cfg(test)]
    pub fn entries(&self) -> &[ConversionResult] {
        &self.entries
    }

    /// 直近の結果（結果ペイン用）
    pub fn latest(&self) -> Option<&ConversionResult> {
        self.entries.last()
    }

    /// 直近 n 件を新しい順で返す
    pub fn recent(&self, n: usize) -> Vec<&ConversionResult> {
        self.entries.iter().rev().take(n).collect()
    }
}
