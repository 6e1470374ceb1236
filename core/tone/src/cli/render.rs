//! 表示用の整形（履歴サイドバー・レビュー一覧・口調一覧・現在のフォーム）

use crate::domain::{ConversionRequest, HistoryLog, ReviewLog, TonePreset, NONE_MARKER};

fn indent(text: &str) -> String {
    text.lines()
        .map(|l| format!("  {}", l))
        .collect::<Vec<_>>()
        .join("\n")
}

/// 直近 limit 件を新しい順で
///
/// ```text
/// [09:07] polite
///   To: manager
///   <text>
/// ```
pub fn render_history(history: &HistoryLog, limit: usize) -> String {
    if history.is_empty() {
        return "No conversions yet.".to_string();
    }
    let mut out = String::from("Recent conversions:");
    for item in history.recent(limit) {
        out.push_str(&format!("\n[{}] {}", item.display_time(), item.tone()));
        let target = match item.target().trim() {
            "" => NONE_MARKER,
            t => t,
        };
        out.push_str(&format!("\n  To: {}", target));
        out.push('\n');
        out.push_str(&indent(item.text()));
    }
    out
}

/// 直近 limit 件を新しい順で `name: message (HH:MM)`
pub fn render_reviews(reviews: &ReviewLog, limit: usize) -> String {
    if reviews.is_empty() {
        return "No reviews yet.".to_string();
    }
    let mut out = String::from("Recent reviews:");
    for r in reviews.recent(limit) {
        out.push_str(&format!("\n  {}: {} ({})", r.name(), r.message(), r.display_time()));
    }
    out
}

pub fn render_tones() -> String {
    TonePreset::ALL
        .iter()
        .map(|t| format!("{:<16} {}", t.as_str(), t.description()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// 対話セッションの現在のフォーム設定
pub fn render_form(form: &ConversionRequest) -> String {
    let or_none = |s: &str| {
        if s.trim().is_empty() {
            NONE_MARKER.to_string()
        } else {
            s.trim().to_string()
        }
    };
    format!(
        "tone: {}\nstrength: {}/5\nto: {}\nsituation: {}\ninclude: {}",
        form.tone,
        form.strength,
        or_none(&form.target),
        or_none(&form.situation),
        form.required_phrases().unwrap_or(NONE_MARKER),
    )
}
