//! tone のアダプター（Outbound ポートの標準実装とテスト用スタブ）

pub mod env_credential_store;
pub mod llm_completion_service;
pub mod profile_lister;
pub mod resolve_profile;
pub mod stub_completion;

pub use env_credential_store::EnvCredentialStore;
pub use llm_completion_service::LlmCompletionService;
pub use profile_lister::StdProfileLister;
pub use resolve_profile::StdResolveProfile;
#[cfg(test)]
pub use stub_completion::StubCompletion;
