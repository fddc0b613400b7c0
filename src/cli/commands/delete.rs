//! Delete command implementation

use super::{open_service, print_json, report_error};
use clap::Args;

/// Arguments for the delete command
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Patient ID
    pub id: String,
}

impl DeleteArgs {
    /// Execute the delete command, printing the removed record
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let mut service = match open_service(config_path).await {
            Ok(s) => s,
            Err(code) => return Ok(code),
        };

        match service.delete_patient(&self.id).await {
            Ok(patient) => {
                print_json(&patient)?;
                Ok(0)
            }
            Err(e) => Ok(report_error(&e)),
        }
    }
}
