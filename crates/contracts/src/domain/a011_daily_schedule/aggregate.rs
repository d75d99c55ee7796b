use serde::{Deserialize, Serialize};

use crate::domain::common::{parse_iso_date, RecordDraft, TableRecord, ValidationError};
use crate::system::roles::Role;

/// One shift slot on the daily production schedule. The embedded
/// production-order reference carries its own nested mold reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySchedule {
    pub id: String,
    pub schedule_date: Option<String>,
    pub production_order_id: Option<String>,
    pub machine_id: Option<String>,
    pub shift: Option<String>,
    pub planned_quantity: Option<i64>,
    pub actual_quantity: Option<i64>,
    pub status: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub production_orders: Option<ScheduleOrderRef>,
    #[serde(default)]
    pub machines: Option<ScheduleMachineRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleOrderRef {
    pub order_number: Option<String>,
    pub product_id: Option<String>,
    #[serde(default)]
    pub molds: Option<ScheduleMoldRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleMoldRef {
    pub name: Option<String>,
    pub mold_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleMachineRef {
    pub name: Option<String>,
    pub machine_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyScheduleDraft {
    pub schedule_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub production_order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub machine_id: Option<String>,
    pub shift: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_quantity: Option<i64>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Default for DailyScheduleDraft {
    fn default() -> Self {
        Self {
            schedule_date: String::new(),
            production_order_id: None,
            machine_id: None,
            shift: "day".to_string(),
            planned_quantity: None,
            actual_quantity: None,
            status: "scheduled".to_string(),
            notes: None,
        }
    }
}

impl TableRecord for DailySchedule {
    type Draft = DailyScheduleDraft;

    fn table() -> &'static str {
        "daily_production_schedule"
    }

    fn columns() -> &'static str {
        "id, schedule_date, production_order_id, machine_id, shift, planned_quantity, actual_quantity, status, notes, production_orders(order_number, product_id, molds(name, mold_code)), machines(name, machine_code)"
    }

    fn permitted_roles() -> Option<&'static [Role]> {
        Some(&[
            Role::Admin,
            Role::ProductionManager,
            Role::ProductionStaff,
        ])
    }

    fn entity_name() -> &'static str {
        "Schedule Entry"
    }

    fn list_name() -> &'static str {
        "Daily Production Schedule"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> DailyScheduleDraft {
        DailyScheduleDraft {
            schedule_date: self.schedule_date.clone().unwrap_or_default(),
            production_order_id: self.production_order_id.clone(),
            machine_id: self.machine_id.clone(),
            shift: self.shift.clone().unwrap_or_else(|| "day".to_string()),
            planned_quantity: self.planned_quantity,
            actual_quantity: self.actual_quantity,
            status: self
                .status
                .clone()
                .unwrap_or_else(|| "scheduled".to_string()),
            notes: self.notes.clone(),
        }
    }
}

impl RecordDraft for DailyScheduleDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.schedule_date.trim().is_empty() {
            return Err(ValidationError::Required("schedule_date"));
        }
        parse_iso_date("schedule_date", Some(&self.schedule_date))?;
        if let Some(planned) = self.planned_quantity {
            if planned < 0 {
                return Err(ValidationError::invalid(
                    "planned_quantity",
                    "must not be negative",
                ));
            }
        }
        Ok(())
    }
}
