//! 配線: 標準アダプタで App を組み立てる

use std::sync::Arc;

use common::adapter::{CompositeLog, FileJsonLog, StderrLog, StdClock, StdEnvResolver, StdFileSystem};
use common::domain::{ModelName, ProviderName};
use common::error::Error;
use common::ports::outbound::{Clock, EnvResolver, FileSystem, Log};

use crate::adapter::{EnvCredentialStore, LlmCompletionService, StdProfileLister, StdResolveProfile};
use crate::ports::outbound::{ProfileLister, ResolveProfile};
use crate::usecase::app::{ToneDeps, ToneUseCase};

/// main / Runner が使う組み立て済みの依存
pub struct App {
    pub logger: Arc<dyn Log>,
    pub profile_lister: Arc<dyn ProfileLister>,
    resolve_profile: Arc<dyn ResolveProfile>,
    env_resolver: Arc<dyn EnvResolver>,
    clock: Arc<dyn Clock>,
}

impl App {
    /// プロファイルを解決して ToneUseCase を組み立てる（-p / -m はここで反映）
    pub fn tone_use_case(
        &self,
        profile: Option<&ProviderName>,
        model: Option<&ModelName>,
    ) -> Result<ToneUseCase, Error> {
        let resolved = self.resolve_profile.resolve(profile, model)?;
        let credential_store = Arc::new(EnvCredentialStore::new(
            Arc::clone(&self.env_resolver),
            resolved.api_key_env_name().map(str::to_string),
        ));
        let completion = Arc::new(LlmCompletionService::new(resolved));
        Ok(ToneUseCase::new(ToneDeps {
            completion,
            credential_store,
            clock: Arc::clone(&self.clock),
            log: Arc::clone(&self.logger),
        }))
    }
}

/// 標準アダプタで App を組み立てる。verbose のときは stderr にもログを出す。
pub fn wire_tone(verbose: bool) -> App {
    wire_tone_with(
        Arc::new(StdFileSystem),
        Arc::new(StdEnvResolver),
        Arc::new(StdClock),
        verbose,
    )
}

/// FS・環境変数・時刻を差し替えて App を組み立てる
pub fn wire_tone_with(
    fs: Arc<dyn FileSystem>,
    env_resolver: Arc<dyn EnvResolver>,
    clock: Arc<dyn Clock>,
    verbose: bool,
) -> App {
    let mut logs: Vec<Arc<dyn Log>> = Vec::new();
    // ホームが決まらない環境ではファイルログを諦める
    if let Ok(home) = env_resolver.resolve_home_dir() {
        logs.push(Arc::new(FileJsonLog::new(Arc::clone(&fs), home.log_path())));
    }
    if verbose {
        logs.push(Arc::new(StderrLog));
    }
    let logger: Arc<dyn Log> = Arc::new(CompositeLog::new(logs));

    App {
        logger,
        profile_lister: Arc::new(StdProfileLister::new(Arc::clone(&fs), Arc::clone(&env_resolver))),
        resolve_profile: Arc::new(StdResolveProfile::new(fs, Arc::clone(&env_resolver))),
        env_resolver,
        clock,
    }
}
