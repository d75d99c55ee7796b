use serde::{Deserialize, Serialize};

use crate::domain::common::{parse_iso_date, RecordDraft, TableRecord, ValidationError};
use crate::system::roles::Role;

/// Injection-molding machine (press) on the production floor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Machine {
    pub id: String,
    pub machine_code: Option<String>,
    pub name: Option<String>,
    pub machine_type: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub year_manufactured: Option<i32>,
    pub tonnage: Option<f64>,
    pub shot_size_capacity: Option<f64>,
    pub status: Option<String>,
    pub location: Option<String>,
    pub installation_date: Option<String>,
    pub last_maintenance_date: Option<String>,
    pub next_maintenance_date: Option<String>,
    pub total_operating_hours: Option<f64>,
    pub total_shots: Option<i64>,
    pub hourly_rate: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachineDraft {
    pub machine_code: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub machine_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_manufactured: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tonnage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shot_size_capacity: Option<f64>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installation_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,
}

impl Default for MachineDraft {
    fn default() -> Self {
        Self {
            machine_code: String::new(),
            name: String::new(),
            machine_type: None,
            brand: None,
            model: None,
            serial_number: None,
            year_manufactured: None,
            tonnage: None,
            shot_size_capacity: None,
            status: "active".to_string(),
            location: None,
            installation_date: None,
            hourly_rate: None,
        }
    }
}

impl TableRecord for Machine {
    type Draft = MachineDraft;

    fn table() -> &'static str {
        "machines"
    }

    fn columns() -> &'static str {
        "id, machine_code, name, machine_type, brand, model, serial_number, year_manufactured, tonnage, shot_size_capacity, status, location, installation_date, last_maintenance_date, next_maintenance_date, total_operating_hours, total_shots, hourly_rate"
    }

    fn permitted_roles() -> Option<&'static [Role]> {
        Some(&[Role::Admin, Role::ProductionManager])
    }

    fn entity_name() -> &'static str {
        "Machine"
    }

    fn list_name() -> &'static str {
        "Machines"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> MachineDraft {
        MachineDraft {
            machine_code: self.machine_code.clone().unwrap_or_default(),
            name: self.name.clone().unwrap_or_default(),
            machine_type: self.machine_type.clone(),
            brand: self.brand.clone(),
            model: self.model.clone(),
            serial_number: self.serial_number.clone(),
            year_manufactured: self.year_manufactured,
            tonnage: self.tonnage,
            shot_size_capacity: self.shot_size_capacity,
            status: self.status.clone().unwrap_or_else(|| "active".to_string()),
            location: self.location.clone(),
            installation_date: self.installation_date.clone(),
            hourly_rate: self.hourly_rate,
        }
    }
}

impl RecordDraft for MachineDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.machine_code.trim().is_empty() {
            return Err(ValidationError::Required("machine_code"));
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::Required("name"));
        }
        if let Some(tonnage) = self.tonnage {
            if tonnage < 0.0 {
                return Err(ValidationError::invalid("tonnage", "must not be negative"));
            }
        }
        if let Some(rate) = self.hourly_rate {
            if rate < 0.0 {
                return Err(ValidationError::invalid("hourly_rate", "must not be negative"));
            }
        }
        parse_iso_date("installation_date", self.installation_date.as_deref())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_catches_negative_tonnage_and_bad_dates() {
        let mut draft = MachineDraft {
            machine_code: "INJ-01".into(),
            name: "Haitian MA 1600".into(),
            ..Default::default()
        };
        assert!(draft.validate().is_ok());

        draft.tonnage = Some(-160.0);
        assert!(draft.validate().is_err());
        draft.tonnage = Some(160.0);

        draft.installation_date = Some("01.03.2019".into());
        assert!(draft.validate().is_err());
        draft.installation_date = Some("2019-03-01".into());
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn rows_with_null_columns_deserialize() {
        let json = r#"{"id": "m-1", "machine_code": "INJ-01", "name": null, "tonnage": 160.5}"#;
        let machine: Machine = serde_json::from_str(json).unwrap();
        assert_eq!(machine.name, None);
        assert_eq!(machine.tonnage, Some(160.5));
        assert_eq!(machine.total_shots, None);
    }
}
