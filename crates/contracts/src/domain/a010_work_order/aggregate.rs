use serde::{Deserialize, Serialize};

use crate::domain::common::{parse_iso_date, RecordDraft, TableRecord, ValidationError};
use crate::system::roles::Role;

/// Maintenance / setup / repair work order. The list projection embeds
/// the display name and code of the referenced machine, mold and
/// product; those sub-records are read-only and never drafted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkOrder {
    pub id: String,
    pub work_order_number: Option<String>,
    pub order_type: Option<String>,
    pub description: Option<String>,
    pub machine_id: Option<String>,
    pub mold_id: Option<String>,
    pub product_id: Option<String>,
    pub priority_level: Option<String>,
    pub status: Option<String>,
    pub assigned_to: Option<String>,
    pub scheduled_start_date: Option<String>,
    pub scheduled_end_date: Option<String>,
    pub actual_start_date: Option<String>,
    pub actual_end_date: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub machines: Option<MachineRef>,
    #[serde(default)]
    pub molds: Option<MoldRef>,
    #[serde(default)]
    pub products: Option<ProductRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachineRef {
    pub name: Option<String>,
    pub machine_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoldRef {
    pub name: Option<String>,
    pub mold_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRef {
    pub name: Option<String>,
    pub product_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkOrderDraft {
    pub work_order_number: String,
    pub order_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub machine_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mold_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    pub priority_level: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Default for WorkOrderDraft {
    fn default() -> Self {
        Self {
            work_order_number: String::new(),
            order_type: "maintenance".to_string(),
            description: None,
            machine_id: None,
            mold_id: None,
            product_id: None,
            priority_level: "normal".to_string(),
            status: "open".to_string(),
            assigned_to: None,
            scheduled_start_date: None,
            scheduled_end_date: None,
            notes: None,
        }
    }
}

impl TableRecord for WorkOrder {
    type Draft = WorkOrderDraft;

    fn table() -> &'static str {
        "work_orders"
    }

    fn columns() -> &'static str {
        "id, work_order_number, order_type, description, machine_id, mold_id, product_id, priority_level, status, assigned_to, scheduled_start_date, scheduled_end_date, actual_start_date, actual_end_date, notes, machines(name, machine_code), molds(name, mold_code), products(name, product_code)"
    }

    fn permitted_roles() -> Option<&'static [Role]> {
        Some(&[Role::Admin, Role::MaintenanceStaff, Role::ProductionManager])
    }

    fn entity_name() -> &'static str {
        "Work Order"
    }

    fn list_name() -> &'static str {
        "Work Orders"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> WorkOrderDraft {
        WorkOrderDraft {
            work_order_number: self.work_order_number.clone().unwrap_or_default(),
            order_type: self
                .order_type
                .clone()
                .unwrap_or_else(|| "maintenance".to_string()),
            description: self.description.clone(),
            machine_id: self.machine_id.clone(),
            mold_id: self.mold_id.clone(),
            product_id: self.product_id.clone(),
            priority_level: self
                .priority_level
                .clone()
                .unwrap_or_else(|| "normal".to_string()),
            status: self.status.clone().unwrap_or_else(|| "open".to_string()),
            assigned_to: self.assigned_to.clone(),
            scheduled_start_date: self.scheduled_start_date.clone(),
            scheduled_end_date: self.scheduled_end_date.clone(),
            notes: self.notes.clone(),
        }
    }
}

impl RecordDraft for WorkOrderDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.work_order_number.trim().is_empty() {
            return Err(ValidationError::Required("work_order_number"));
        }
        if self.order_type.trim().is_empty() {
            return Err(ValidationError::Required("order_type"));
        }
        parse_iso_date("scheduled_start_date", self.scheduled_start_date.as_deref())?;
        parse_iso_date("scheduled_end_date", self.scheduled_end_date.as_deref())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_relations_deserialize_and_stay_out_of_drafts() {
        let json = r#"{
            "id": "wo-1",
            "work_order_number": "WO-0099",
            "order_type": "repair",
            "machines": {"name": "Haitian MA 1600", "machine_code": "INJ-01"},
            "molds": null
        }"#;
        let wo: WorkOrder = serde_json::from_str(json).unwrap();
        assert_eq!(
            wo.machines.as_ref().and_then(|m| m.machine_code.clone()),
            Some("INJ-01".to_string())
        );
        assert!(wo.molds.is_none());

        let draft_json = serde_json::to_value(wo.to_draft()).unwrap();
        assert!(draft_json.get("machines").is_none());
    }
}
