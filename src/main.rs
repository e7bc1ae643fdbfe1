// Thu Oct 15 2026 - Alex

use anyhow::Context;
use colored::Colorize;
use siggrep::{
    config::ScanConfig,
    error::EXIT_USAGE,
    ui::{cli, usage, Command, CommandHandler, ErrorDisplay},
    utils::LoggingUtils,
};

fn load_config() -> anyhow::Result<ScanConfig> {
    let config = ScanConfig::from_env()
        .map_err(anyhow::Error::msg)
        .context("Invalid environment configuration")?;
    log::debug!("Configuration: {}", serde_json::to_string(&config)?);
    Ok(config)
}

fn main() {
    let command = match cli::parse_args() {
        Ok(command) => command,
        Err(e) => {
            ErrorDisplay::new().print(&e);
            std::process::exit(e.exit_code());
        }
    };

    let args = match command {
        Command::Help => {
            print!("{}", usage::usage());
            return;
        }
        Command::Version => {
            println!("{}", usage::version());
            return;
        }
        Command::Scan(args) => args,
    };

    LoggingUtils::init_logger(args.verbose);

    let config = match load_config() {
        Ok(config) => config.with_json(args.json),
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            std::process::exit(EXIT_USAGE);
        }
    };

    if let Err(e) = CommandHandler::new(config).execute(&args) {
        ErrorDisplay::new().print(&e);
        std::process::exit(e.exit_code());
    }
}
