//! 変換指示のプロンプト生成（決定的な文字列補間）

use crate::domain::ConversionRequest;

/// 値が無い欄に入れる目印
pub const NONE_MARKER: &str = "none";

/// system ロールで送る指示
pub const SYSTEM_INSTRUCTION: &str = "You rewrite messages for the user. \
Reply with only the rewritten message. Do not add explanations, quotes, or any other text.";

fn or_none(s: &str) -> &str {
    let t = s.trim();
    if t.is_empty() {
        NONE_MARKER
    } else {
        t
    }
}

/// リクエストを 1 つの user メッセージに展開する
pub fn render_prompt(req: &ConversionRequest) -> String {
    format!(
        "You are a communication expert. Rewrite the original message to match the conditions below.\n\
         - Recipient: {target}\n\
         - Situation: {situation}\n\
         - Tone: {tone} ({description}), strength {strength}/5\n\
         - Required phrases: {phrases}\n\
         - Original message: {content}\n\
         \n\
         Output only the rewritten message, with no explanation.",
        target = or_none(&req.target),
        situation = or_none(&req.situation),
        tone = req.tone.as_str(),
        description = req.tone.description(),
        strength = req.strength,
        phrases = req.required_phrases().unwrap_or(NONE_MARKER),
        content = req.content.trim(),
    )
}
