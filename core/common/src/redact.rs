//! 秘匿情報のマスク
//!
//! リモート API のエラーメッセージは受け取った API キーの一部を含むことがあるため、
//! ログ・画面へ出す前にここを通す。

use regex::Regex;
use std::sync::OnceLock;

const MASK: &str = "***";

/// これより短い既知の秘密値は本文を壊すため置換しない
const MIN_KNOWN_SECRET_LEN: usize = 8;

fn patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            // OpenAI 形式（sk-..., sk-proj-...）
            r"sk-[A-Za-z0-9_\-\*]{8,}",
            // Authorization ヘッダ
            r"(?i)bearer\s+[A-Za-z0-9_\-\.=]+",
        ]
        .iter()
        .filter_map(|p| Regex::new(p).ok())
        .collect()
    })
}

/// 既知の API キー形式と、明示された秘密値をマスクする
pub fn redact_secrets(text: &str, known_secret: Option<&str>) -> String {
    let mut out = text.to_string();
    if let Some(secret) = known_secret
        .map(str::trim)
        .filter(|s| s.chars().count() >= MIN_KNOWN_SECRET_LEN)
    {
        out = out.replace(secret, MASK);
    }
    for re in patterns() {
        out = re.replace_all(&out, MASK).into_owned();
    }
    out
}
