//! Set-status command implementation

use super::{open_service, report_error};
use clap::Args;

/// Arguments for the set-status command
#[derive(Args, Debug)]
pub struct SetStatusArgs {
    /// Patient ID
    pub id: String,

    /// New status (active or inactive)
    pub status: String,
}

impl SetStatusArgs {
    /// Execute the set-status command, printing the new status
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let mut service = match open_service(config_path).await {
            Ok(s) => s,
            Err(code) => return Ok(code),
        };

        match service.update_patient_status(&self.id, &self.status).await {
            Ok(status) => {
                println!("{status}");
                Ok(0)
            }
            Err(e) => Ok(report_error(&e)),
        }
    }
}
