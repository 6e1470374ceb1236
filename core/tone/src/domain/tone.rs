//! 口調プリセット

use crate::domain::ValidationError;
use std::fmt;
use std::str::FromStr;

/// 変換先の口調（固定の少数プリセット）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TonePreset {
    #[default]
    Polite,
    Casual,
    BusinessFormal,
    Witty,
}

impl TonePreset {
    pub const ALL: [TonePreset; 4] = [
        TonePreset::Polite,
        TonePreset::Casual,
        TonePreset::BusinessFormal,
        TonePreset::Witty,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Polite => "polite",
            Self::Casual => "casual",
            Self::BusinessFormal => "business-formal",
            Self::Witty => "witty",
        }
    }

    /// プロンプトと --list-tones で使う説明
    pub fn description(&self) -> &'static str {
        match self {
            Self::Polite => "courteous and respectful",
            Self::Casual => "friendly and casual",
            Self::BusinessFormal => "formal business register",
            Self::Witty => "witty, with light humor",
        }
    }
}

impl FromStr for TonePreset {
    type Err = ValidationError;

    /// 大文字小文字と区切り（- / _ / 空白）の違いは許容する
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c == '_' || c == ' ' { '-' } else { c })
            .collect();
        match key.as_str() {
            "polite" => Ok(Self::Polite),
            "casual" => Ok(Self::Casual),
            "business-formal" | "business" | "formal" => Ok(Self::BusinessFormal),
            "witty" | "humor" => Ok(Self::Witty),
            _ => Err(ValidationError::UnknownTone(s.trim().to_string())),
        }
    }
}

impl fmt::Display for TonePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_presets() {
        assert_eq!("polite".parse::<TonePreset>(), Ok(TonePreset::Polite));
        assert_eq!("Casual".parse::<TonePreset>(), Ok(TonePreset::Casual));
        assert_eq!("business_formal".parse::<TonePreset>(), Ok(TonePreset::BusinessFormal));
        assert_eq!("business formal".parse::<TonePreset>(), Ok(TonePreset::BusinessFormal));
        assert_eq!(" witty ".parse::<TonePreset>(), Ok(TonePreset::Witty));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "sarcastic".parse::<TonePreset>(),
            Err(ValidationError::UnknownTone("sarcastic".to_string()))
        );
    }

    #[test]
    fn test_as_str_parses_back() {
        for t in TonePreset::ALL {
            assert_eq!(t.as_str().parse::<TonePreset>(), Ok(t));
            assert!(!t.description().is_empty());
        }
        assert_eq!(TonePreset::default(), TonePreset::Polite);
        assert_eq!(TonePreset::BusinessFormal.to_string(), "business-formal");
    }
}
