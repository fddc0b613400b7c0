//! CLI interface and argument parsing
//!
//! This module provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Patient Store - durable patient record store
#[derive(Parser, Debug)]
#[command(name = "patient-store")]
#[command(version, about, long_about = None)]
#[command(author = "Patient Store Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(
        short,
        long,
        default_value = "patient-store.toml",
        env = "PATIENT_STORE_CONFIG",
        global = true
    )]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "PATIENT_STORE_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new patient
    Add(commands::add::AddArgs),

    /// Replace a patient's names and birth date
    Update(commands::update::UpdateArgs),

    /// Delete a patient
    Delete(commands::delete::DeleteArgs),

    /// Change a patient's status (active or inactive)
    SetStatus(commands::set_status::SetStatusArgs),

    /// Show one patient
    Get(commands::get::GetArgs),

    /// List patients, optionally filtered by status
    List(commands::list::ListArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
