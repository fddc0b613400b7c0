//! Add command implementation

use super::{open_service, print_json, report_error};
use crate::domain::PatientPayload;
use clap::Args;

/// Arguments for the add command
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Given name
    #[arg(long)]
    pub first_name: String,

    /// Family name
    #[arg(long)]
    pub last_name: String,

    /// Birth date as a 64-bit timestamp
    #[arg(long)]
    pub birth_date: u64,
}

impl AddArgs {
    /// Build the payload for the service call
    pub fn payload(&self) -> PatientPayload {
        PatientPayload::new(&self.first_name, &self.last_name, self.birth_date)
    }

    /// Execute the add command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let mut service = match open_service(config_path).await {
            Ok(s) => s,
            Err(code) => return Ok(code),
        };

        match service.add_patient(self.payload()).await {
            Ok(patient) => {
                print_json(&patient)?;
                Ok(0)
            }
            Err(e) => Ok(report_error(&e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_args_payload() {
        let args = AddArgs {
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            birth_date: 100,
        };
        assert_eq!(args.payload(), PatientPayload::new("Ann", "Lee", 100));
    }
}
