//! テスト用: 決まった応答を返し、呼び出しを記録する CompletionService


#[cfg(test)]
pub use stub::StubCompletion;
