//! Outbound ポート: アプリが外界（補完サービス・秘密の保管場所・プロファイル）を使うための trait

pub mod completion_service;
pub mod credential_store;
pub mod profile_lister;
pub mod resolve_profile;

pub use completion_service::CompletionService;
pub use credential_store::CredentialStore;
pub use profile_lister::ProfileLister;
pub use resolve_profile::ResolveProfile;
