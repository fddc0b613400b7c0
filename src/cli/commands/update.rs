//! Update command implementation

use super::{open_service, print_json, report_error};
use crate::domain::PatientPayload;
use clap::Args;

/// Arguments for the update command
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Patient ID
    pub id: String,

    /// New given name
    #[arg(long)]
    pub first_name: String,

    /// New family name
    #[arg(long)]
    pub last_name: String,

    /// New birth date as a 64-bit timestamp
    #[arg(long)]
    pub birth_date: u64,
}

impl UpdateArgs {
    /// Execute the update command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let mut service = match open_service(config_path).await {
            Ok(s) => s,
            Err(code) => return Ok(code),
        };

        let payload = PatientPayload::new(&self.first_name, &self.last_name, self.birth_date);
        match service.update_patient(&self.id, payload).await {
            Ok(patient) => {
                print_json(&patient)?;
                Ok(0)
            }
            Err(e) => Ok(report_error(&e)),
        }
    }
}
