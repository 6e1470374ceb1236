mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::io;
use std::process;

use cli::render::render_tones;
use cli::{config_to_command, parse_args, print_completion, run_repl, Config, ParseOutcome};
use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};
use domain::ToneCommand;
use ports::inbound::UseCaseRunner;
use wiring::{wire_tone, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl UseCaseRunner for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        let cmd = config_to_command(config)?;
        let command_name = cmd_name_for_log(&cmd);
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "command started")
                .layer("cli")
                .kind("lifecycle")
                .field("command", command_name),
        );

        let result = self.dispatch(cmd);

        let code = match &result {
            Ok(code) => *code,
            Err(e) => e.exit_code(),
        };
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "command finished")
                .layer("cli")
                .kind("lifecycle")
                .field("command", command_name)
                .field("exit_code", code),
        );
        if let Err(ref e) = result {
            let _ = self.app.logger.log(
                &LogRecord::new(LogLevel::Error, e.to_string())
                    .layer("cli")
                    .kind("error"),
            );
        }
        result
    }
}

impl Runner {
    fn dispatch(&self, cmd: ToneCommand) -> Result<i32, Error> {
        match cmd {
            ToneCommand::Help => {
                print_help();
                Ok(0)
            }
            ToneCommand::ListTones => {
                println!("{}", render_tones());
                Ok(0)
            }
            ToneCommand::ListProfiles => {
                let (names, default) = self.app.profile_lister.list_profiles()?;
                for name in &names {
                    if *name == default {
                        println!("{} (default)", name);
                    } else {
                        println!("{}", name);
                    }
                }
                Ok(0)
            }
            ToneCommand::Convert {
                profile,
                model,
                api_key,
                request,
            } => {
                let use_case = self.app.tone_use_case(profile.as_ref(), model.as_ref())?;
                let mut session = use_case.open_session(api_key.as_deref());
                let result = use_case.convert(&mut session, &request)?;
                println!("{}", result.text());
                Ok(0)
            }
            ToneCommand::Interactive {
                profile,
                model,
                api_key,
                form,
            } => {
                let use_case = self.app.tone_use_case(profile.as_ref(), model.as_ref())?;
                let mut session = use_case.open_session(api_key.as_deref());
                let stdin = io::stdin();
                let mut stdout = io::stdout();
                run_repl(&use_case, &mut session, form, stdin.lock(), &mut stdout)
            }
        }
    }
}

fn cmd_name_for_log(cmd: &ToneCommand) -> &'static str {
    match cmd {
        ToneCommand::Help => "help",
        ToneCommand::ListTones => "list-tones",
        ToneCommand::ListProfiles => "list-profiles",
        ToneCommand::Convert { .. } => "convert",
        ToneCommand::Interactive { .. } => "interactive",
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("tone: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    let app = wire_tone(config.verbose);
    let runner = Runner { app };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: tone [options] <message...>  |  tone -I [options]");
}

fn print_help() {
    println!("Usage: tone [options] <message...>");
    println!("       tone -I [options]");
    println!("Options:");
    println!("  -h, --help                    Show this help message");
    println!("  -t, --tone <tone>             Tone preset: polite, casual, business-formal, witty (default: polite)");
    println!("  -s, --strength <1-5>          How strongly to apply the tone (default: 3)");
    println!("      --to <recipient>          Who receives the message (alias: --target)");
    println!("      --situation <situation>   Context of the message");
    println!("  -i, --include <phrases>       Phrases that must appear in the result");
    println!("  -I, --interactive             Start a session that keeps history and reviews (type /help inside)");
    println!("  -p, --profile <profile>       Specify LLM profile (openai, echo, or a profiles.json entry). Default: profiles.json default, or openai");
    println!("  -m, --model <model>           Specify model name. Default: profile model, or gpt-4o-mini");
    println!("      --api-key <key>           API key for this run (overrides the profile's environment variable)");
    println!("      --list-tones              List tone presets");
    println!("  -L, --list-profiles           List currently available provider profiles (from profiles.json + built-ins)");
    println!("  -v, --verbose                 Emit verbose debug logs to stderr");
    println!("      --generate <shell>        Generate shell completion script (bash, zsh, fish, ...)");
    println!();
    println!("Environment:");
    println!("  OPENAI_API_KEY  API key for the openai profile (profiles can name another variable via api_key_env).");
    println!("  TONE_HOME       Home directory. Profiles: $TONE_HOME/profiles.json; log: $TONE_HOME/logs/tone.jsonl");
    println!("                  If unset, $XDG_CONFIG_HOME/tone (e.g. ~/.config/tone) is used.");
    println!();
    println!("Exit status:");
    println!("  0 success, 64 invalid input or missing API key, 74 remote service failure");
    println!();
    println!("Examples:");
    println!("  tone -t polite --to manager --situation 'sick leave' I'm sick, can't come tomorrow");
    println!("  tone -t witty -s 5 -i 'see you soon' running 10 minutes late");
    println!("  tone -p echo -I");
}
