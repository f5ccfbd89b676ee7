use std::process::ExitCode;
use clap::Parser;
use pulsedash::config::config_manager::ConfigManager;
use pulsedash::errors::ErrorHandler;
use pulsedash::structs::cli::Cli;
use pulsedash::workers::command_runner::CommandRunner;

fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose || ConfigManager::load().map(|c| c.output.verbose).unwrap_or(false);
    init_logger(verbose);

    match CommandRunner::new().run_command(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ErrorHandler::handle_error(&e);
            ExitCode::FAILURE
        }
    }
}
