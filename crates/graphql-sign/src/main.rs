mod cli;
mod command;
mod command_result;
mod commands;
mod input_files;
mod output_utils;
mod signing_args;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;
const LOG_LEVEL_ENV_VAR: &str = "LOG_LEVEL";

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    let Some(command) = cli.cmd.take() else {
        return match cli.run_default().await {
            Ok(()) => std::process::ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{} {err:#}", output_utils::RED_X);
                std::process::ExitCode::FAILURE
            },
        };
    };

    let result = command.run(cli).await;
    if let Some(stdout) = result.stdout {
        println!("{stdout}");
    }
    if let Some(stderr) = result.stderr {
        eprintln!("{stderr}");
    }
    result.exit_code
}

/// Maps a `LOG_LEVEL` value onto a tracing level. `None` means the value was
/// not recognized.
fn parse_log_level(value: &str) -> Option<tracing::Level> {
    match value.trim().to_ascii_lowercase().as_str() {
        "error" => Some(tracing::Level::ERROR),
        "warn" => Some(tracing::Level::WARN),
        "info" => Some(tracing::Level::INFO),
        "debug" | "verbose" => Some(tracing::Level::DEBUG),
        "trace" => Some(tracing::Level::TRACE),
        _ => None,
    }
}

fn setup_logger(cli: &Cli) {
    let mut rejected_env_value = None;
    let log_level = match std::env::var(LOG_LEVEL_ENV_VAR) {
        _ if cli.verbose => tracing::Level::DEBUG,
        Ok(value) => parse_log_level(value.as_str()).unwrap_or_else(|| {
            rejected_env_value = Some(value);
            DEFAULT_LOG_LEVEL
        }),
        Err(_) => DEFAULT_LOG_LEVEL,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Logging at `{log_level}`.");

    if let Some(value) = rejected_env_value {
        log::warn!("Ignoring unrecognized `{LOG_LEVEL_ENV_VAR}` value: `{value}`");
    }
}

#[cfg(test)]
mod tests;
