//! 対話セッション（1 行 1 送信、スラッシュコマンドでフォームを編集）
//!
//! 変換が成功するたびに結果と履歴を明示的に再表示する。

use std::io::{BufRead, Write};

use common::error::Error;

use crate::cli::render::{render_form, render_history, render_reviews, render_tones};
use crate::domain::{
    ConversionRequest, Session, Strength, TonePreset, HISTORY_DISPLAY_LIMIT, REVIEW_DISPLAY_LIMIT,
};
use crate::usecase::app::ToneUseCase;

/// 1 行分の入力
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// スラッシュで始まらない行は変換する本文
    Convert(String),
    Tone(String),
    Strength(String),
    Target(String),
    Situation(String),
    Include(String),
    Key(String),
    History,
    Last,
    Review { name: String, message: String },
    Reviews,
    Tones,
    Form,
    Help,
    Quit,
    Unknown(String),
}

/// 空行は None
pub fn parse_line(line: &str) -> Option<ReplCommand> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let Some(rest) = line.strip_prefix('/') else {
        return Some(ReplCommand::Convert(line.to_string()));
    };
    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((n, a)) => (n, a.trim().to_string()),
        None => (rest, String::new()),
    };
    let cmd = match name {
        "tone" => ReplCommand::Tone(arg),
        "strength" => ReplCommand::Strength(arg),
        "to" | "target" => ReplCommand::Target(arg),
        "situation" => ReplCommand::Situation(arg),
        "include" => ReplCommand::Include(arg),
        "key" => ReplCommand::Key(arg),
        "history" => ReplCommand::History,
        "last" => ReplCommand::Last,
        "review" => {
            // "/review 名前 | 本文"。区切りが無ければ全体が本文（名前は匿名）
            let (name, message) = match arg.split_once('|') {
                Some((n, m)) => (n.trim().to_string(), m.trim().to_string()),
                None => (String::new(), arg),
            };
            ReplCommand::Review { name, message }
        }
        "reviews" => ReplCommand::Reviews,
        "tones" => ReplCommand::Tones,
        "form" => ReplCommand::Form,
        "help" => ReplCommand::Help,
        "quit" | "exit" => ReplCommand::Quit,
        other => ReplCommand::Unknown(other.to_string()),
    };
    Some(cmd)
}

fn emit<W: Write>(out: &mut W, text: &str) -> Result<(), Error> {
    writeln!(out, "{}", text).map_err(|e| Error::io_msg(e.to_string()))
}

fn prompt<W: Write>(out: &mut W) -> Result<(), Error> {
    write!(out, "> ").map_err(|e| Error::io_msg(e.to_string()))?;
    out.flush().map_err(|e| Error::io_msg(e.to_string()))
}

const HELP: &str = "\
Type a message and press Enter to rewrite it with the current settings.
Commands:
  /tone <tone>             Set the tone (see /tones)
  /strength <1-5>          Set how strongly the tone is applied
  /to <recipient>          Set who receives the message (empty clears)
  /situation <text>        Set the situation (empty clears)
  /include <phrases>       Phrases that must appear (empty clears)
  /key <api-key>           Set the API key for this session
  /form                    Show the current settings
  /last                    Show the last converted message
  /history                 Show the 5 most recent conversions
  /review <name> | <text>  Post a review (name may be empty)
  /reviews                 Show the 3 most recent reviews
  /tones                   List tone presets
  /help                    Show this help
  /quit                    End the session";

/// 入力が尽きるか /quit まで対話する。変換やレビューの失敗は表示して続行する
pub fn run_repl<R: BufRead, W: Write>(
    use_case: &ToneUseCase,
    session: &mut Session,
    mut form: ConversionRequest,
    input: R,
    out: &mut W,
) -> Result<i32, Error> {
    let (profile, model) = use_case.target();
    emit(
        out,
        &format!(
            "tone interactive session (profile: {}, model: {}). Type /help for commands.",
            profile, model
        ),
    )?;
    if !use_case.is_ready(session) {
        emit(out, "warning: No API key configured. Use /key <api-key> before converting.")?;
    }

    let mut lines = input.lines();
    loop {
        prompt(out)?;
        let line = match lines.next() {
            Some(line) => line.map_err(|e| Error::io_msg(e.to_string()))?,
            None => break,
        };
        let Some(cmd) = parse_line(&line) else {
            continue;
        };
        match cmd {
            ReplCommand::Convert(content) => {
                form.content = content;
                match use_case.convert(session, &form) {
                    Ok(result) => {
                        emit(out, result.text())?;
                        emit(out, "")?;
                        emit(out, &render_history(session.history(), HISTORY_DISPLAY_LIMIT))?;
                    }
                    Err(e) => emit(out, &format!("error: {}", e))?,
                }
            }
            ReplCommand::Tone(arg) if arg.is_empty() => emit(out, &format!("tone: {}", form.tone))?,
            ReplCommand::Tone(arg) => match arg.parse::<TonePreset>() {
                Ok(t) => {
                    form.tone = t;
                    emit(out, &format!("tone: {}", t))?;
                }
                Err(e) => emit(out, &format!("error: {}", e))?,
            },
            ReplCommand::Strength(arg) => match arg.parse::<Strength>() {
                Ok(s) => {
                    form.strength = s;
                    emit(out, &format!("strength: {}/5", s))?;
                }
                Err(e) => emit(out, &format!("error: {}", e))?,
            },
            ReplCommand::Target(arg) => {
                form.target = arg;
                emit(out, &render_form(&form))?;
            }
            ReplCommand::Situation(arg) => {
                form.situation = arg;
                emit(out, &render_form(&form))?;
            }
            ReplCommand::Include(arg) => {
                form.required_phrases = Some(arg).filter(|s| !s.is_empty());
                emit(out, &render_form(&form))?;
            }
            ReplCommand::Key(arg) => match use_case.enter_credential(session, &arg) {
                Ok(()) => emit(out, "API key set for this session.")?,
                Err(e) => emit(out, &format!("error: {}", e))?,
            },
            ReplCommand::History => {
                emit(out, &render_history(session.history(), HISTORY_DISPLAY_LIMIT))?
            }
            ReplCommand::Last => match session.history().latest() {
                Some(r) => emit(out, r.text())?,
                None => emit(out, "No result yet. Submit a message to see the converted text here.")?,
            },
            ReplCommand::Review { name, message } => {
                match use_case.record_review(session, &name, &message) {
                    Ok(_) => {
                        emit(out, "Thanks for the review!")?;
                        emit(out, &render_reviews(session.reviews(), REVIEW_DISPLAY_LIMIT))?;
                    }
                    Err(e) => emit(out, &format!("error: {}", e))?,
                }
            }
            ReplCommand::Reviews => {
                emit(out, &render_reviews(session.reviews(), REVIEW_DISPLAY_LIMIT))?
            }
            ReplCommand::Tones => emit(out, &render_tones())?,
            ReplCommand::Form => emit(out, &render_form(&form))?,
            ReplCommand::Help => emit(out, HELP)?,
            ReplCommand::Quit => break,
            ReplCommand::Unknown(name) => emit(
                out,
                &format!("error: Unknown command '/{}'. Type /help for commands.", name),
            )?,
        }
    }
    Ok(0)
}
