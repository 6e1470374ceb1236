//! Ports & Adapters のポート定義
//!
//! - inbound: ドライバ（CLI）がアプリを呼び出すインターフェース
//! - outbound: アプリが外界（補完サービス・秘密の保管場所・プロファイル）を使うための trait

pub mod inbound;
pub mod outbound;
