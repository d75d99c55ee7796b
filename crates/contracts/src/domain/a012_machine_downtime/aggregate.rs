use serde::{Deserialize, Serialize};

use crate::domain::a010_work_order::MachineRef;
use crate::domain::common::{RecordDraft, TableRecord, ValidationError};
use crate::system::roles::Role;

/// Unplanned machine stoppage log entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachineDowntime {
    pub id: String,
    pub machine_id: Option<String>,
    pub downtime_start: Option<String>,
    pub downtime_end: Option<String>,
    pub duration_minutes: Option<i32>,
    pub reason: Option<String>,
    pub action_taken: Option<String>,
    pub reported_by: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub machines: Option<MachineRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachineDowntimeDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub machine_id: Option<String>,
    pub downtime_start: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub downtime_end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<i32>,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_taken: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reported_by: Option<String>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Default for MachineDowntimeDraft {
    fn default() -> Self {
        Self {
            machine_id: None,
            downtime_start: String::new(),
            downtime_end: None,
            duration_minutes: None,
            reason: String::new(),
            action_taken: None,
            reported_by: None,
            status: "open".to_string(),
            notes: None,
        }
    }
}

impl TableRecord for MachineDowntime {
    type Draft = MachineDowntimeDraft;

    fn table() -> &'static str {
        "machine_downtime"
    }

    fn columns() -> &'static str {
        "id, machine_id, downtime_start, downtime_end, duration_minutes, reason, action_taken, reported_by, status, notes, machines(name, machine_code)"
    }

    fn permitted_roles() -> Option<&'static [Role]> {
        Some(&[
            Role::Admin,
            Role::ProductionManager,
            Role::MaintenanceStaff,
        ])
    }

    fn entity_name() -> &'static str {
        "Downtime Entry"
    }

    fn list_name() -> &'static str {
        "Machine Downtime"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> MachineDowntimeDraft {
        MachineDowntimeDraft {
            machine_id: self.machine_id.clone(),
            downtime_start: self.downtime_start.clone().unwrap_or_default(),
            downtime_end: self.downtime_end.clone(),
            duration_minutes: self.duration_minutes,
            reason: self.reason.clone().unwrap_or_default(),
            action_taken: self.action_taken.clone(),
            reported_by: self.reported_by.clone(),
            status: self.status.clone().unwrap_or_else(|| "open".to_string()),
            notes: self.notes.clone(),
        }
    }
}

impl RecordDraft for MachineDowntimeDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.downtime_start.trim().is_empty() {
            return Err(ValidationError::Required("downtime_start"));
        }
        if self.reason.trim().is_empty() {
            return Err(ValidationError::Required("reason"));
        }
        if let Some(minutes) = self.duration_minutes {
            if minutes < 0 {
                return Err(ValidationError::invalid(
                    "duration_minutes",
                    "must not be negative",
                ));
            }
        }
        Ok(())
    }
}
