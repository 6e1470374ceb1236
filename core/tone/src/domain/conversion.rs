//! 変換結果（成功した 1 回の呼び出しの記録）

use crate::domain::TonePreset;
use chrono::{DateTime, Local};

/// 成功した変換 1 件。作成後は不変
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    timestamp: DateTime<Local>,
    tone: TonePreset,
    target: String,
    text: String,
}

impl ConversionResult {
    pub fn new(
        timestamp: DateTime<Local>,
        tone: TonePreset,
        target: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            tone,
            target: target.into(),
            text: text.into(),
        }
    }

    #[cfg(test)]
    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn tone(&self) -> TonePreset {
        self.tone
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// 表示用の時刻（分単位）
    pub fn display_time(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_display_time_minute_resolution() {
        let ts = Local.with_ymd_and_hms(2024, 5, 1, 9, 7, 42).unwrap();
        let r = ConversionResult::new(ts, TonePreset::Casual, "friend", "hey!");
        assert_eq!(r.display_time(), "09:07");
        assert_eq!(r.tone(), TonePreset::Casual);
        assert_eq!(r.target(), "friend");
        assert_eq!(r.text(), "hey!");
        assert_eq!(r.timestamp(), ts);
    }
}
