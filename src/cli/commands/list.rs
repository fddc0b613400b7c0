//! List command implementation
//!
//! Lists every patient, or only those with a given status.

use super::{open_service, print_json, report_error};
use crate::domain::Patient;
use clap::{Args, ValueEnum};

/// Output format for the list command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum ListFormat {
    /// Pretty JSON array
    #[default]
    Json,
    /// Human-readable table
    Table,
}

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show patients with this status (active or inactive)
    #[arg(long)]
    pub status: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = ListFormat::Json)]
    pub format: ListFormat,
}

impl ListArgs {
    /// Execute the list command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let service = match open_service(config_path).await {
            Ok(s) => s,
            Err(code) => return Ok(code),
        };

        let result = match &self.status {
            Some(status) => service.get_patients_by_status(status).await,
            None => service.get_patients().await,
        };

        let patients = match result {
            Ok(p) => p,
            Err(e) => return Ok(report_error(&e)),
        };

        match self.format {
            ListFormat::Json => print_json(&patients)?,
            ListFormat::Table => print!("{}", render_table(&patients)),
        }

        Ok(0)
    }
}

/// Render patients as a fixed-width table
fn render_table(patients: &[Patient]) -> String {
    if patients.is_empty() {
        return "No patients found.\n".to_string();
    }

    let mut out = format!("Found {} patient(s):\n\n", patients.len());
    out.push_str(&format!(
        "{:<38} {:<20} {:<20} {:<10} {:<22}\n",
        "ID", "First Name", "Last Name", "Status", "Updated At"
    ));
    out.push_str(&"-".repeat(112));
    out.push('\n');

    for patient in patients {
        let updated = patient
            .updated_at
            .map(|t| t.to_string())
            .unwrap_or_else(|| "Never".to_string());

        out.push_str(&format!(
            "{:<38} {:<20} {:<20} {:<10} {:<22}\n",
            patient.id.as_str(),
            patient.first_name,
            patient.last_name,
            patient.status,
            updated
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PatientId, PatientPayload};

    #[test]
    fn test_render_empty_table() {
        assert_eq!(render_table(&[]), "No patients found.\n");
    }

    #[test]
    fn test_render_table_rows() {
        let patient = Patient::new(
            PatientId::new("p-1").unwrap(),
            PatientPayload::new("Ann", "Lee", 100),
            1,
        );
        let table = render_table(&[patient]);

        assert!(table.starts_with("Found 1 patient(s):"));
        assert!(table.contains("p-1"));
        assert!(table.contains("active"));
        assert!(table.contains("Never"));
    }

    #[test]
    fn test_list_args_defaults() {
        let args = ListArgs {
            status: None,
            format: ListFormat::default(),
        };
        assert!(args.status.is_none());
        assert_eq!(args.format, ListFormat::Json);
    }
}
