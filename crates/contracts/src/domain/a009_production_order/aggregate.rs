use serde::{Deserialize, Serialize};

use crate::domain::common::{parse_iso_date, RecordDraft, TableRecord, ValidationError};
use crate::system::roles::Role;

/// Production order: one run of a product on a machine with a mold.
/// Quantities split into target / actual / NG (reject).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionOrder {
    pub id: String,
    pub order_number: Option<String>,
    pub product_id: Option<String>,
    pub mold_id: Option<String>,
    pub machine_id: Option<String>,
    pub target_quantity: Option<i64>,
    pub actual_quantity: Option<i64>,
    pub ng_quantity: Option<i64>,
    pub scheduled_start_date: Option<String>,
    pub scheduled_end_date: Option<String>,
    pub actual_start_date: Option<String>,
    pub actual_end_date: Option<String>,
    pub setup_time_minutes: Option<i32>,
    pub breakdown_time_minutes: Option<i32>,
    pub cycle_time_standard: Option<f64>,
    pub cycle_time_actual: Option<f64>,
    pub priority_level: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionOrderDraft {
    pub order_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mold_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub machine_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ng_quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_time_minutes: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle_time_standard: Option<f64>,
    pub priority_level: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Default for ProductionOrderDraft {
    fn default() -> Self {
        Self {
            order_number: String::new(),
            product_id: None,
            mold_id: None,
            machine_id: None,
            target_quantity: None,
            actual_quantity: None,
            ng_quantity: None,
            scheduled_start_date: None,
            scheduled_end_date: None,
            setup_time_minutes: None,
            cycle_time_standard: None,
            priority_level: "normal".to_string(),
            status: "planned".to_string(),
            notes: None,
        }
    }
}

impl TableRecord for ProductionOrder {
    type Draft = ProductionOrderDraft;

    fn table() -> &'static str {
        "production_orders"
    }

    fn columns() -> &'static str {
        "id, order_number, product_id, mold_id, machine_id, target_quantity, actual_quantity, ng_quantity, scheduled_start_date, scheduled_end_date, actual_start_date, actual_end_date, setup_time_minutes, breakdown_time_minutes, cycle_time_standard, cycle_time_actual, priority_level, status, notes"
    }

    fn permitted_roles() -> Option<&'static [Role]> {
        Some(&[Role::Admin, Role::ProductionManager])
    }

    fn entity_name() -> &'static str {
        "Production Order"
    }

    fn list_name() -> &'static str {
        "Production Orders"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> ProductionOrderDraft {
        ProductionOrderDraft {
            order_number: self.order_number.clone().unwrap_or_default(),
            product_id: self.product_id.clone(),
            mold_id: self.mold_id.clone(),
            machine_id: self.machine_id.clone(),
            target_quantity: self.target_quantity,
            actual_quantity: self.actual_quantity,
            ng_quantity: self.ng_quantity,
            scheduled_start_date: self.scheduled_start_date.clone(),
            scheduled_end_date: self.scheduled_end_date.clone(),
            setup_time_minutes: self.setup_time_minutes,
            cycle_time_standard: self.cycle_time_standard,
            priority_level: self
                .priority_level
                .clone()
                .unwrap_or_else(|| "normal".to_string()),
            status: self.status.clone().unwrap_or_else(|| "planned".to_string()),
            notes: self.notes.clone(),
        }
    }
}

impl RecordDraft for ProductionOrderDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.order_number.trim().is_empty() {
            return Err(ValidationError::Required("order_number"));
        }
        if let Some(target) = self.target_quantity {
            if target <= 0 {
                return Err(ValidationError::invalid(
                    "target_quantity",
                    "must be greater than zero",
                ));
            }
        }
        for (field, value) in [
            ("actual_quantity", self.actual_quantity),
            ("ng_quantity", self.ng_quantity),
        ] {
            if let Some(v) = value {
                if v < 0 {
                    return Err(ValidationError::invalid(field, "must not be negative"));
                }
            }
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
    fn target_quantity_must_be_positive() {
        let mut draft = ProductionOrderDraft {
            order_number: "PO-2026-0142".into(),
            target_quantity: Some(0),
            ..Default::default()
        };
        assert!(draft.validate().is_err());
        draft.target_quantity = Some(50_000);
        assert!(draft.validate().is_ok());
    }
}
