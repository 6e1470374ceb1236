//! 変換リクエスト（フォーム入力の構造化表現）

use crate::domain::{Strength, TonePreset, ValidationError};

/// 1 回の変換で送るフォーム内容
///
/// 必須は content のみ。target / situation / required_phrases は空でもよい。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConversionRequest {
    pub tone: TonePreset,
    pub strength: Strength,
    /// 受け取る相手（例: manager, client）
    pub target: String,
    /// 状況（例: sick leave, running late）
    pub situation: String,
    /// 変換する元の文章
    pub content: String,
    /// 必ず含めたい語句。None または空は「なし」
    pub required_phrases: Option<String>,
}

impl ConversionRequest {
    /// content だけ指定し、残りはデフォルト（polite / 3 / 空）
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }

    /// 送信前の検証。content が空白のみでも拒否する
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.content.trim().is_empty() {
            return Err(ValidationError::EmptyContent);
        }
        Ok(())
    }

    /// 空白でない required_phrases
    pub fn required_phrases(&self) -> Option<&str> {
        self.required_phrases
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
