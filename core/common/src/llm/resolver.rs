//! profiles.json の読み込みとプロバイダ解決

use crate::domain::ProviderName;
use crate::error::Error;
use crate::llm::config::ProfilesConfig;
use crate::llm::factory::ProviderType;
use crate::llm::openai_compat::DEFAULT_MODEL;
use crate::ports::outbound::{EnvResolver, FileSystem};

/// api.openai.com 用の API キーを読むデフォルトの環境変数
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// プロバイダ名未指定かつ設定も無いときのデフォルト
const DEFAULT_PROVIDER: &str = "openai";

/// 解決済みプロバイダ（ProviderType + オプション）
#[derive(Debug, Clone)]
pub struct ResolvedProvider {
    /// 解決に使ったプロファイル名（例: "local", "openai"）。ログ・エラー表示用
    pub profile_name: String,
    pub provider_type: ProviderType,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub api_key_env: Option<String>,
    pub temperature: Option<f32>,
}

impl ResolvedProvider {
    /// API キーを読む環境変数名（openai はデフォルトあり、echo は None）
    pub fn api_key_env_name(&self) -> Option<&str> {
        match self.provider_type {
            ProviderType::OpenAi => Some(self.api_key_env.as_deref().unwrap_or(DEFAULT_API_KEY_ENV)),
            ProviderType::OpenAiCompat => self.api_key_env.as_deref(),
            ProviderType::Echo => None,
        }
    }

    /// 呼び出しに認証情報が必須か
    ///
    /// openai_compat は api_key_env を設定したプロファイルのみ必須（ローカルサーバはキー不要）。
    pub fn requires_credential(&self) -> bool {
        match self.provider_type {
            ProviderType::OpenAi => true,
            ProviderType::OpenAiCompat => self.api_key_env.is_some(),
            ProviderType::Echo => false,
        }
    }

    /// 実際にリクエストへ載るモデル名
    pub fn effective_model(&self) -> &str {
        match self.provider_type {
            ProviderType::Echo => "echo",
            _ => self.model.as_deref().unwrap_or(DEFAULT_MODEL),
        }
    }
}

/// profiles.json を読み込む。ファイルが無ければ Ok(None)、JSON が壊れていれば Err（メッセージにパス含める）
pub fn load_profiles_config(
    fs: &dyn FileSystem,
    env: &dyn EnvResolver,
) -> Result<Option<ProfilesConfig>, Error> {
    let path = env.resolve_home_dir()?.profiles_path();
    if !fs.exists(path.as_path()) {
        return Ok(None);
    }
    let contents = fs
        .read_to_string(path.as_path())
        .map_err(|e| Error::io_msg(format!("{}: {}", path.display(), e)))?;
    ProfilesConfig::parse(&contents)
        .map_err(|e| Error::json(format!("{}: {}", path.display(), e)))
        .map(Some)
}

/// 利用可能なビルトインプロバイダ名
fn builtin_provider_names() -> &'static [&'static str] {
    &["openai", "gpt", "openai_compat", "echo"]
}

/// 要求されたプロバイダ名（None の場合は default）と ProfilesConfig から ResolvedProvider を解決する。
/// 不明なプロバイダの場合は Error::invalid_argument（is_usage == true）で利用可能一覧を返す。
pub fn resolve_provider(
    requested: Option<&ProviderName>,
    cfg: Option<&ProfilesConfig>,
) -> Result<ResolvedProvider, Error> {
    let effective_name: &str = requested.map(|r| &**r).unwrap_or_else(|| {
        cfg.and_then(|c| c.default_profile.as_deref())
            .unwrap_or(DEFAULT_PROVIDER)
    });

    // 1) profiles.json の名前が組み込み名より優先
    if let Some(profile) = cfg.and_then(|c| c.get(effective_name)) {
        return Ok(ResolvedProvider {
            profile_name: effective_name.to_string(),
            provider_type: profile.kind,
            base_url: profile.base_url.clone(),
            model: profile.model.clone(),
            api_key_env: profile.api_key_env.clone(),
            temperature: profile.temperature,
        });
    }

    // 2) ビルトイン (ProviderType::from_str) を試す
    if let Some(provider_type) = ProviderType::from_str(effective_name) {
        return Ok(ResolvedProvider {
            profile_name: effective_name.to_string(),
            provider_type,
            base_url: None,
            model: None,
            api_key_env: None,
            temperature: None,
        });
    }

    // 3) どれも無ければ usage エラー
    let mut available: Vec<String> = builtin_provider_names()
        .iter()
        .map(|s| (*s).to_string())
        .collect();
    if let Some(cfg) = cfg {
        for name in cfg.names() {
            if !available.iter().any(|a| a == name) {
                available.push(name.to_string());
            }
        }
    }
    available.sort();
    Err(Error::invalid_argument(format!(
        "Unknown provider: '{}'. Available: {}",
        effective_name,
        available.join(", ")
    )))
}

/// 表示用: 有効なプロファイル名の一覧（ソート済み）とデフォルト名
pub fn list_profiles(cfg: Option<&ProfilesConfig>) -> (Vec<String>, String) {
    let mut names: Vec<String> = ["openai", "echo"].iter().map(|s| s.to_string()).collect();
    if let Some(cfg) = cfg {
        for name in cfg.names() {
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
    }
    names.sort();
    let default = cfg
        .and_then(|c| c.default_profile.clone())
        .unwrap_or_else(|| DEFAULT_PROVIDER.to_string());
    (names, default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::HomeDir;
    use crate::llm::config::Profile;
    use std::collections::BTreeMap;
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

    fn config_with(default: Option<&str>, name: &str, profile: Profile) -> ProfilesConfig {
        let mut profiles = BTreeMap::new();
        profiles.insert(name.to_string(), profile);
        ProfilesConfig {
            default_profile: default.map(str::to_string),
            profiles,
        }
    }

    #[test]
    fn test_resolve_provider_no_cfg_requested_none() {
        let r = resolve_provider(None, None).unwrap();
        assert_eq!(r.profile_name, "openai");
        assert_eq!(r.provider_type, ProviderType::OpenAi);
        assert_eq!(r.api_key_env_name(), Some("OPENAI_API_KEY"));
        assert!(r.requires_credential());
        assert_eq!(r.effective_model(), "gpt-4o-mini");
    }

    #[test]
    fn test_resolve_provider_no_cfg_requested_echo() {
        let name = ProviderName::new("echo");
        let r = resolve_provider(Some(&name), None).unwrap();
        assert_eq!(r.provider_type, ProviderType::Echo);
        assert!(!r.requires_credential());
        assert_eq!(r.api_key_env_name(), None);
    }

    #[test]
    fn test_resolve_provider_no_cfg_unknown() {
        let name = ProviderName::new("unknown_provider");
        let e = resolve_provider(Some(&name), None).unwrap_err();
        assert!(e.is_usage());
        assert!(e.to_string().contains("Unknown provider"));
        assert!(e.to_string().contains("unknown_provider"));
        assert!(e.to_string().contains("Available"));
    }

    #[test]
    fn test_resolve_provider_cfg_default_provider() {
        let cfg = config_with(
            Some("work"),
            "work",
            Profile {
                base_url: Some("https://proxy.example/v1".to_string()),
                model: Some("gpt-4o".to_string()),
                api_key_env: Some("WORK_KEY".to_string()),
                temperature: Some(0.7),
                ..Profile::of_kind(ProviderType::OpenAi)
            },
        );
        let r = resolve_provider(None, Some(&cfg)).unwrap();
        assert_eq!(r.profile_name, "work");
        assert_eq!(r.provider_type, ProviderType::OpenAi);
        assert_eq!(r.base_url.as_deref(), Some("https://proxy.example/v1"));
        assert_eq!(r.effective_model(), "gpt-4o");
        assert_eq!(r.api_key_env_name(), Some("WORK_KEY"));
        assert_eq!(r.temperature, Some(0.7));
    }

    #[test]
    fn test_openai_compat_without_key_env_needs_no_credential() {
        let cfg = config_with(None, "local", Profile::of_kind(ProviderType::OpenAiCompat));
        let name = ProviderName::new("local");
        let r = resolve_provider(Some(&name), Some(&cfg)).unwrap();
        assert!(!r.requires_credential());
        assert_eq!(r.api_key_env_name(), None);
    }

    #[test]
    fn test_resolve_provider_cfg_unknown_provider_lists_available() {
        let cfg = config_with(None, "my_custom", Profile::of_kind(ProviderType::Echo));
        let name = ProviderName::new("nonexistent");
        let msg = resolve_provider(Some(&name), Some(&cfg)).unwrap_err().to_string();
        assert!(msg.contains("nonexistent"));
        assert!(msg.contains("my_custom"));
        assert!(msg.contains("openai"));
    }

    #[test]
    fn test_load_profiles_config_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let fs = crate::adapter::StdFileSystem;
        let cfg = load_profiles_config(&fs, &HomeAt(dir.path().to_path_buf())).unwrap();
        assert!(cfg.is_none());
    }

    #[test]
    fn test_load_profiles_config_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("profiles.json"),
            r#"{ "default_provider": "echo", "providers": {} }"#,
        )
        .unwrap();
        let fs = crate::adapter::StdFileSystem;
        let cfg = load_profiles_config(&fs, &HomeAt(dir.path().to_path_buf()))
            .unwrap()
            .unwrap();
        assert_eq!(cfg.default_profile.as_deref(), Some("echo"));
    }

    #[test]
    fn test_load_profiles_config_broken_json_names_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("profiles.json"), "{ not json").unwrap();
        let fs = crate::adapter::StdFileSystem;
        let err = load_profiles_config(&fs, &HomeAt(dir.path().to_path_buf())).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().contains("profiles.json"));
    }

    #[test]
    fn test_list_profiles_merges_config() {
        let cfg = config_with(Some("local"), "local", Profile::of_kind(ProviderType::OpenAiCompat));
        let (names, default) = list_profiles(Some(&cfg));
        assert_eq!(names, vec!["echo", "local", "openai"]);
        assert_eq!(default, "local");

        let (names, default) = list_profiles(None);
        assert_eq!(names, vec!["echo", "openai"]);
        assert_eq!(default, "openai");
    }
}
