//! Get command implementation

use super::{open_service, print_json, report_error};
use clap::Args;

/// Arguments for the get command
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Patient ID
    pub id: String,
}

impl GetArgs {
    /// Execute the get command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let service = match open_service(config_path).await {
            Ok(s) => s,
            Err(code) => return Ok(code),
        };

        match service.get_patient(&self.id).await {
            Ok(patient) => {
                print_json(&patient)?;
                Ok(0)
            }
            Err(e) => Ok(report_error(&e)),
        }
    }
}
