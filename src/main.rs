// Patient Store - Durable Patient Record Store
// Copyright (c) 2025 Patient Store Contributors
// Licensed under the MIT License

use clap::Parser;
use patient_store::cli::{Cli, Commands};
use patient_store::config::load_config;
use patient_store::log_error_with_context;
use patient_store::logging::init_logging;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Logging settings come from the config file when it loads; commands
    // report config errors themselves
    let config = load_config(&cli.config).ok();
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| config.as_ref().map(|c| c.application.log_level.clone()))
        .unwrap_or_else(|| "info".to_string());
    let logging_config = config.map(|c| c.logging).unwrap_or_default();

    let guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        file_logging = guard.has_file_output(),
        "Patient Store - Durable Patient Record Store"
    );

    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            log_error_with_context!(e, "Command execution failed");
            eprintln!("Error: {e}");
            5
        }
    };

    // process::exit skips destructors, so flush file logs first
    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Add(args) => args.execute(&cli.config).await,
        Commands::Update(args) => args.execute(&cli.config).await,
        Commands::Delete(args) => args.execute(&cli.config).await,
        Commands::SetStatus(args) => args.execute(&cli.config).await,
        Commands::Get(args) => args.execute(&cli.config).await,
        Commands::List(args) => args.execute(&cli.config).await,
        Commands::ValidateConfig(args) => args.execute(&cli.config).await,
        Commands::Init(args) => args.execute().await,
    }
}
