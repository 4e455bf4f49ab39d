//! tts-client: send text to the TTS Voice service on an Android device.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tts_voice_tools::client::{TtsClient, DEFAULT_RATE};
use tts_voice_tools::commands::{self, Command};
use tts_voice_tools::config::Config;

#[derive(Parser, Debug)]
#[command(
    name = "tts-client",
    about = "Send text to the TTS Voice service on an Android device",
    arg_required_else_help = true
)]
struct Args {
    /// Path to config.yaml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Service base URL, e.g. http://192.168.1.100:8765
    #[arg(long, global = true)]
    url: Option<String>,

    /// Device IP address (ignored when --url is given)
    #[arg(long, global = true)]
    device_ip: Option<String>,

    /// Service port (ignored when --url is given)
    #[arg(long, global = true)]
    port: Option<u16>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Send text to speak
    #[command(allow_negative_numbers = true)]
    Speak {
        /// Text to speak
        text: String,
        /// Speech speed (0.5 - 2.0): 0.5 very slow, 1.0 normal, 2.0 very fast
        #[arg(default_value_t = DEFAULT_RATE)]
        speed: f32,
        /// Voice pitch (0.5 - 2.0): 0.5 very low, 1.0 normal, 2.0 very high
        #[arg(default_value_t = DEFAULT_RATE)]
        pitch: f32,
    },
    /// Get service status
    Status,
    /// Health check
    Health,
}

impl From<CliCommand> for Command {
    fn from(command: CliCommand) -> Self {
        match command {
            CliCommand::Speak { text, speed, pitch } => Command::Speak { text, speed, pitch },
            CliCommand::Status => Command::Status,
            CliCommand::Health => Command::Health,
        }
    }
}

const COMMANDS: [&str; 3] = ["speak", "status", "health"];

/// Global flags that take a separate value argument.
const VALUE_FLAGS: [&str; 6] = ["-c", "--config", "--url", "--device-ip", "--port", "--timeout"];

/// Lowercase the subcommand name so `STATUS` and `Speak` are accepted.
/// Only the first positional argument is touched; speak text is left alone.
fn normalize_command<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let mut i = 1;
    while i < args.len() {
        let Some(arg) = args[i].to_str() else {
            break;
        };
        if arg.starts_with('-') {
            i += if VALUE_FLAGS.contains(&arg) { 2 } else { 1 };
            continue;
        }
        let lower = arg.to_ascii_lowercase();
        if COMMANDS.contains(&lower.as_str()) {
            args[i] = lower.into();
        }
        break;
    }
    args
}

/// Exit status for a clap parse failure: help and version succeed, every
/// usage error exits 1.
fn exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

fn parse_args() -> Args {
    match Args::try_parse_from(normalize_command(std::env::args_os())) {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            std::process::exit(exit_code(e.kind()));
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = parse_args();

    // Logs go to stderr; stdout is the command report
    let filter = if args.verbose {
        EnvFilter::new("debug,hyper=info,reqwest=info")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::load(args.config.as_deref());
    if let Some(url) = args.url {
        config.client.base_url = Some(url);
    }
    if let Some(ip) = args.device_ip {
        config.client.device_ip = ip;
    }
    if let Some(port) = args.port {
        config.client.port = port;
    }
    if let Some(secs) = args.timeout {
        config.client.timeout_secs = secs;
    }

    let client = TtsClient::new(&config.client)?;
    info!("Using TTS service at {}", client.base_url());

    let command = Command::from(args.command);
    debug!("Command: {:?}", command);

    let stdout = std::io::stdout();
    commands::execute(&client, &command, &mut stdout.lock()).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(normalize_command(args.iter().copied()))
    }

    fn exit_for(args: &[&str]) -> i32 {
        match parse(args) {
            Ok(_) => panic!("expected {args:?} to fail"),
            Err(e) => exit_code(e.kind()),
        }
    }

    #[test]
    fn cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn subcommands_are_case_insensitive() {
        assert!(matches!(parse(&["tts-client", "STATUS"]).unwrap().command, CliCommand::Status));
        assert!(matches!(parse(&["tts-client", "Health"]).unwrap().command, CliCommand::Health));
        let args = parse(&["tts-client", "--url", "http://x:1", "Speak", "STATUS"]).unwrap();
        match args.command {
            CliCommand::Speak { text, .. } => assert_eq!(text, "STATUS"),
            other => panic!("expected speak, got {other:?}"),
        }
        assert_eq!(args.url.as_deref(), Some("http://x:1"));
    }

    #[test]
    fn flag_values_are_not_mistaken_for_commands() {
        let args = normalize_command(["tts-client", "--device-ip", "STATUS", "HEALTH"]);
        assert_eq!(args[2], "STATUS");
        assert_eq!(args[3], "health");
    }

    #[test]
    fn speak_defaults_and_negative_rates() {
        match parse(&["tts-client", "speak", "hello"]).unwrap().command {
            CliCommand::Speak { speed, pitch, .. } => assert_eq!((speed, pitch), (1.0, 1.0)),
            other => panic!("expected speak, got {other:?}"),
        }
        match parse(&["tts-client", "speak", "hi", "-1", "3"]).unwrap().command {
            CliCommand::Speak { speed, pitch, .. } => assert_eq!((speed, pitch), (-1.0, 3.0)),
            other => panic!("expected speak, got {other:?}"),
        }
    }

    #[test]
    fn usage_errors_exit_one() {
        assert_eq!(exit_for(&["tts-client"]), 1);
        assert_eq!(exit_for(&["tts-client", "speak"]), 1);
        assert_eq!(exit_for(&["tts-client", "bogus"]), 1);
        assert_eq!(exit_for(&["tts-client", "speak", "hi", "fast"]), 1);
    }

    #[test]
    fn help_exits_zero() {
        assert_eq!(exit_for(&["tts-client", "--help"]), 0);
        assert_eq!(exit_for(&["tts-client", "speak", "--help"]), 0);
    }
}
