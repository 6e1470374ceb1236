//! ユーザーレビュー（変換とは独立したフィードバック記録）

use crate::domain::ValidationError;
use chrono::{DateTime, Local};

/// 名前が空のときの表示名
pub const ANONYMOUS: &str = "anonymous";

/// レビュー表示の件数
pub const REVIEW_DISPLAY_LIMIT: usize = 3;

/// レビュー 1 件
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewEntry {
    name: String,
    message: String,
    timestamp: DateTime<Local>,
}

impl ReviewEntry {
    /// message が空なら拒否、name が空なら ANONYMOUS
    pub fn new(name: &str, message: &str, timestamp: DateTime<Local>) -> Result<Self, ValidationError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ValidationError::EmptyReviewMessage);
        }
        let name = match name.trim() {
            "" => ANONYMOUS,
            n => n,
        };
        Ok(Self {
            name: name.to_string(),
            message: message.to_string(),
            timestamp,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    #[cfg(test)]
    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn display_time(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

/// レビューの記録（追記のみ）
#[derive(Debug, Clone, Default)]
pub struct ReviewLog {
    entries: Vec<ReviewEntry>,
}

impl ReviewLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, entry: ReviewEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn entries(&self) -> &[ReviewEntry] {
        &self.entries
    }

    /// 直近 n 件を新しい順で返す
    pub fn recent(&self, n: usize) -> Vec<&ReviewEntry> {
        self.entries.iter().rev().take(n).collect()
    }
}
