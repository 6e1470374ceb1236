use crate::domain::{ConversionRequest, Strength, ToneCommand, TonePreset};
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::domain::{ModelName, ProviderName};
use common::error::Error;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub help: bool,
    /// --list-tones: 口調プリセット一覧を表示
    pub list_tones: bool,
    /// -L / --list-profiles: 現在有効なプロファイル一覧を表示
    pub list_profiles: bool,
    /// -I / --interactive: 標準入力で対話セッションを開始
    pub interactive: bool,
    /// -v / --verbose: 不具合調査用の冗長ログを stderr に出力する
    pub verbose: bool,
    pub tone: Option<String>,
    pub strength: Option<String>,
    pub target: Option<String>,
    pub situation: Option<String>,
    /// -i / --include: 必ず含めたい語句
    pub include: Option<String>,
    pub profile: Option<ProviderName>,
    pub model: Option<ModelName>,
    /// --api-key: 環境変数より優先する API キー
    pub api_key: Option<String>,
    pub message_args: Vec<String>,
}

/// 解析結果: 通常の Config / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("tone")
        .about("Rewrite a message in the tone you choose using an LLM")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("list-tones")
                .long("list-tones")
                .help("List available tone presets")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("list-profiles")
                .short('L')
                .long("list-profiles")
                .help("List currently available provider profiles")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("interactive")
                .short('I')
                .long("interactive")
                .help("Start an interactive session that keeps history and reviews")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Emit verbose debug logs to stderr (for troubleshooting)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("tone")
                .short('t')
                .long("tone")
                .value_name("tone")
                .help("Tone preset (polite, casual, business-formal, witty)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("strength")
                .short('s')
                .long("strength")
                .value_name("1-5")
                .help("How strongly to apply the tone (default: 3)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("target")
                .long("to")
                .visible_alias("target")
                .value_name("recipient")
                .help("Who receives the message (e.g. manager, client)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("situation")
                .long("situation")
                .value_name("situation")
                .help("Context of the message (e.g. sick leave, running late)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("include")
                .short('i')
                .long("include")
                .value_name("phrases")
                .help("Phrases that must appear in the result")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("profile")
                .short('p')
                .long("profile")
                .value_name("profile")
                .help("Specify LLM profile (openai, echo, or a profiles.json entry)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("model")
                .short('m')
                .long("model")
                .value_name("model")
                .help("Specify model name (e.g. gpt-4o-mini)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("api-key")
                .long("api-key")
                .value_name("key")
                .help("API key to use instead of the profile's environment variable")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("positional")
                .index(1)
                .help("The message to rewrite")
                .num_args(0..)
                .trailing_var_arg(true),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    let string = |id: &str| matches.get_one::<String>(id).cloned();
    Config {
        help: matches.get_flag("help"),
        list_tones: matches.get_flag("list-tones"),
        list_profiles: matches.get_flag("list-profiles"),
        interactive: matches.get_flag("interactive"),
        verbose: matches.get_flag("verbose"),
        tone: string("tone"),
        strength: string("strength"),
        target: string("target"),
        situation: string("situation"),
        include: string("include"),
        profile: string("profile").map(ProviderName::new),
        model: string("model").map(ModelName::new),
        api_key: string("api-key"),
        message_args: matches
            .get_many::<String>("positional")
            .map(|i| i.cloned().collect())
            .unwrap_or_default(),
    }
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let matches = build_clap_command()
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// テスト用: 引数スライスから解析する
#[cfg(test)]
pub fn parse_args_from(args: &[&str]) -> Result<Config, Error> {
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "tone", &mut std::io::stdout());
}

/// フォーム部分（口調・強さ・相手・状況・必須語句・本文）を組み立てる
fn config_to_request(config: &Config) -> Result<ConversionRequest, Error> {
    let tone = match &config.tone {
        Some(t) => t.parse::<TonePreset>()?,
        None => TonePreset::default(),
    };
    let strength = match &config.strength {
        Some(s) => s.parse::<Strength>()?,
        None => Strength::default(),
    };
    Ok(ConversionRequest {
        tone,
        strength,
        target: config.target.clone().unwrap_or_default(),
        situation: config.situation.clone().unwrap_or_default(),
        content: config.message_args.join(" "),
        required_phrases: config.include.clone(),
    })
}

/// Config を ToneCommand に変換する。口調・強さの値が不正なら usage エラー
pub fn config_to_command(config: Config) -> Result<ToneCommand, Error> {
    if config.help {
        return Ok(ToneCommand::Help);
    }

    if config.list_tones {
        return Ok(ToneCommand::ListTones);
    }

    if config.list_profiles {
        return Ok(ToneCommand::ListProfiles);
    }

    let request = config_to_request(&config)?;
    if config.interactive {
        return Ok(ToneCommand::Interactive {
            profile: config.profile,
            model: config.model,
            api_key: config.api_key,
            form: request,
        });
    }

    Ok(ToneCommand::Convert {
        profile: config.profile,
        model: config.model,
        api_key: config.api_key,
        request,
    })
}
