use serde::{Deserialize, Serialize};

use crate::domain::common::{parse_iso_date, RecordDraft, TableRecord, ValidationError};
use crate::system::roles::Role;

/// Recurring preventive-maintenance item for a machine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceSchedule {
    pub id: String,
    pub machine_id: Option<String>,
    pub maintenance_type: Option<String>,
    pub maintenance_item: Option<String>,
    pub description: Option<String>,
    pub frequency_days: Option<i32>,
    pub estimated_duration_hours: Option<f64>,
    pub last_performed: Option<String>,
    pub next_due_date: Option<String>,
    pub responsible_person: Option<String>,
    pub priority_level: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceScheduleDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub machine_id: Option<String>,
    pub maintenance_type: String,
    pub maintenance_item: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_days: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_duration_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_performed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsible_person: Option<String>,
    pub priority_level: String,
    pub is_active: bool,
}

impl Default for MaintenanceScheduleDraft {
    fn default() -> Self {
        Self {
            machine_id: None,
            maintenance_type: "preventive".to_string(),
            maintenance_item: String::new(),
            description: None,
            frequency_days: None,
            estimated_duration_hours: None,
            last_performed: None,
            next_due_date: None,
            responsible_person: None,
            priority_level: "normal".to_string(),
            is_active: true,
        }
    }
}

impl TableRecord for MaintenanceSchedule {
    type Draft = MaintenanceScheduleDraft;

    fn table() -> &'static str {
        "machine_maintenance_schedule"
    }

    fn columns() -> &'static str {
        "id, machine_id, maintenance_type, maintenance_item, description, frequency_days, estimated_duration_hours, last_performed, next_due_date, responsible_person, priority_level, is_active"
    }

    fn permitted_roles() -> Option<&'static [Role]> {
        Some(&[Role::Admin, Role::ProductionManager])
    }

    fn entity_name() -> &'static str {
        "Maintenance Item"
    }

    fn list_name() -> &'static str {
        "Maintenance Schedule"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> MaintenanceScheduleDraft {
        MaintenanceScheduleDraft {
            machine_id: self.machine_id.clone(),
            maintenance_type: self
                .maintenance_type
                .clone()
                .unwrap_or_else(|| "preventive".to_string()),
            maintenance_item: self.maintenance_item.clone().unwrap_or_default(),
            description: self.description.clone(),
            frequency_days: self.frequency_days,
            estimated_duration_hours: self.estimated_duration_hours,
            last_performed: self.last_performed.clone(),
            next_due_date: self.next_due_date.clone(),
            responsible_person: self.responsible_person.clone(),
            priority_level: self
                .priority_level
                .clone()
                .unwrap_or_else(|| "normal".to_string()),
            is_active: self.is_active.unwrap_or(true),
        }
    }
}

impl RecordDraft for MaintenanceScheduleDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.maintenance_item.trim().is_empty() {
            return Err(ValidationError::Required("maintenance_item"));
        }
        if let Some(days) = self.frequency_days {
            if days < 1 {
                return Err(ValidationError::invalid(
                    "frequency_days",
                    "must be at least 1",
                ));
            }
        }
        parse_iso_date("last_performed", self.last_performed.as_deref())?;
        parse_iso_date("next_due_date", self.next_due_date.as_deref())?;
        Ok(())
    }
}
