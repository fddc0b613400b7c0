//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "patient-store.toml")]
    pub output: String,

    /// Include comments explaining every option
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            eprintln!("❌ Configuration file already exists: {}", self.output);
            eprintln!("   Use --force to overwrite");
            return Ok(2);
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Validate configuration: patient-store validate-config");
                println!("  3. Add a patient: patient-store add --first-name Ann --last-name Lee --birth-date 0");
                println!();
                Ok(0)
            }
            Err(e) => {
                eprintln!("❌ Failed to write configuration file");
                eprintln!("   Error: {e}");
                Ok(5)
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# Patient Store Configuration File

[application]
log_level = "info"

[storage]
backend = "file"
path = "data/patients.json"
max_key_size = 44
max_value_size = 1024

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"
"#
        .to_string()
    }

    /// Generate configuration with examples and comments
    fn generate_config_with_examples() -> String {
        r#"# Patient Store Configuration File
#
# Values may reference environment variables with ${VAR_NAME}.
# Any setting can also be overridden with PATIENT_STORE_<SECTION>_<KEY>,
# e.g. PATIENT_STORE_STORAGE_PATH=/srv/patients.json

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# ============================================================================
# Storage Configuration
# ============================================================================
[storage]
# Backend: "file" (durable JSON document) or "memory" (lost on exit)
backend = "file"

# Location of the JSON document for the file backend
path = "data/patients.json"

# Maximum key size in bytes (generated ids are 36 bytes)
max_key_size = 44

# Maximum serialized record size in bytes
max_value_size = 1024

# ============================================================================
# Logging Configuration
# ============================================================================
[logging]
# Enable JSON file logging in addition to the console
local_enabled = false

# Directory for log files
local_path = "logs"

# Log rotation (daily, hourly or never)
local_rotation = "daily"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config_from_str;
    use tempfile::TempDir;

    #[test]
    fn test_generated_configs_are_valid() {
        assert!(load_config_from_str(&InitArgs::generate_minimal_config()).is_ok());
        assert!(load_config_from_str(&InitArgs::generate_config_with_examples()).is_ok());
    }

    #[test]
    fn test_generate_config_with_examples() {
        let config = InitArgs::generate_config_with_examples();
        assert!(config.contains("[storage]"));
        assert!(config.contains("PATIENT_STORE_STORAGE_PATH"));
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("patient-store.toml");
        std::fs::write(&output, "existing").unwrap();

        let args = InitArgs {
            output: output.to_string_lossy().to_string(),
            with_examples: false,
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), 2);
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "existing");
    }

    #[tokio::test]
    async fn test_init_writes_file() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("patient-store.toml");

        let args = InitArgs {
            output: output.to_string_lossy().to_string(),
            with_examples: true,
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), 0);
        assert!(output.exists());
    }
}
