//! プロファイル・モデル解決アダプタ（common::llm の resolve_provider を使用）

use std::sync::Arc;

use common::domain::{ModelName, ProviderName};
use common::error::Error;
use common::llm::{load_profiles_config, resolve_provider, ResolvedProvider};
use common::ports::outbound::{EnvResolver, FileSystem};

use crate::ports::outbound::ResolveProfile;

/// 標準プロファイル・モデル解決（profiles.json + resolve_provider）
pub struct StdResolveProfile {
    fs: Arc<dyn FileSystem>,
    env_resolver: Arc<dyn EnvResolver>,
}

impl StdResolveProfile {
    pub fn new(fs: Arc<dyn FileSystem>, env_resolver: Arc<dyn EnvResolver>) -> Self {
        Self { fs, env_resolver }
    }
}

impl ResolveProfile for StdResolveProfile {
    fn resolve(
        &self,
        profile: Option<&ProviderName>,
        model: Option<&ModelName>,
    ) -> Result<ResolvedProvider, Error> {
        let cfg_opt = load_profiles_config(self.fs.as_ref(), self.env_resolver.as_ref())?;
        let mut resolved = resolve_provider(profile, cfg_opt.as_ref())?;
        if let Some(m) = model {
            resolved.model = Some(m.to_string());
        }
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::adapter::StdFileSystem;
    use common::domain::HomeDir;
    use common::llm::ProviderType;
    use std::path::PathBuf;

    struct HomeAt(PathBuf);

    impl EnvResolver for HomeAt {
        fn resolve_home_dir(&self) -> Result<HomeDir, Error> {
            Ok(HomeDir::new(self.0.clone()))
        }

        fn var(&self, _name: &str) -> Option<String> {
            None
        }
    }

    fn resolver(dir: &tempfile::TempDir) -> StdResolveProfile {
        StdResolveProfile::new(
            Arc::new(StdFileSystem),
            Arc::new(HomeAt(dir.path().to_path_buf())),
        )
    }

    #[test]
    fn test_default_is_openai_without_profiles_file() {
        let dir = tempfile::tempdir().unwrap();
        let r = resolver(&dir).resolve(None, None).unwrap();
        assert_eq!(r.provider_type, ProviderType::OpenAi);
        assert_eq!(r.effective_model(), "gpt-4o-mini");
    }

    #[test]
    fn test_model_override_wins() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("profiles.json"),
            r#"{ "providers": { "work": { "type": "openai", "model": "gpt-4o" } } }"#,
        )
        .unwrap();
        let profile = ProviderName::new("work");
        let r = resolver(&dir).resolve(Some(&profile), None).unwrap();
        assert_eq!(r.effective_model(), "gpt-4o");

        let model = ModelName::new("gpt-4.1-mini");
        let r = resolver(&dir).resolve(Some(&profile), Some(&model)).unwrap();
        assert_eq!(r.effective_model(), "gpt-4.1-mini");
        assert_eq!(r.profile_name, "work");
    }

    #[test]
    fn test_unknown_profile_is_usage_error() {
        let dir = tempfile::tempdir().unwrap();
        let profile = ProviderName::new("nope");
        let err = resolver(&dir).resolve(Some(&profile), None).unwrap_err();
        assert_eq!(err.exit_code(), 64);
    }
}
