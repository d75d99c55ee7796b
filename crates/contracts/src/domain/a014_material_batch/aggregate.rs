use serde::{Deserialize, Serialize};

use crate::domain::common::{parse_iso_date, RecordDraft, TableRecord, ValidationError};
use crate::system::roles::Role;

/// Received lot of a raw material, costed and tracked per storage
/// location. Embeds its material and supplier for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialBatch {
    pub id: String,
    pub batch_number: Option<String>,
    pub material_id: Option<String>,
    pub quantity: Option<f64>,
    pub unit_of_measure: Option<String>,
    pub received_date: Option<String>,
    pub expiry_date: Option<String>,
    pub supplier_id: Option<String>,
    pub unit_cost: Option<f64>,
    pub total_cost: Option<f64>,
    pub storage_location: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub raw_materials: Option<MaterialRef>,
    #[serde(default)]
    pub suppliers: Option<SupplierRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialRef {
    pub name: Option<String>,
    pub material_code: Option<String>,
    pub unit_of_measure: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierRef {
    pub company_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialBatchDraft {
    pub batch_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_of_measure: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_location: Option<String>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Default for MaterialBatchDraft {
    fn default() -> Self {
        Self {
            batch_number: String::new(),
            material_id: None,
            quantity: None,
            unit_of_measure: None,
            received_date: None,
            expiry_date: None,
            supplier_id: None,
            unit_cost: None,
            total_cost: None,
            storage_location: None,
            status: "in_stock".to_string(),
            notes: None,
        }
    }
}

impl MaterialBatchDraft {
    /// Total cost is derived, not typed in: quantity times unit cost.
    pub fn recompute_total(&mut self) {
        self.total_cost = match (self.quantity, self.unit_cost) {
            (Some(qty), Some(cost)) => Some(qty * cost),
            _ => None,
        };
    }
}

impl TableRecord for MaterialBatch {
    type Draft = MaterialBatchDraft;

    fn table() -> &'static str {
        "material_batches"
    }

    fn columns() -> &'static str {
        "id, batch_number, material_id, quantity, unit_of_measure, received_date, expiry_date, supplier_id, unit_cost, total_cost, storage_location, status, notes, raw_materials(name, material_code, unit_of_measure), suppliers(company_name)"
    }

    fn permitted_roles() -> Option<&'static [Role]> {
        Some(&[Role::Admin, Role::WarehouseStaff])
    }

    fn entity_name() -> &'static str {
        "Material Batch"
    }

    fn list_name() -> &'static str {
        "Material Batches"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> MaterialBatchDraft {
        MaterialBatchDraft {
            batch_number: self.batch_number.clone().unwrap_or_default(),
            material_id: self.material_id.clone(),
            quantity: self.quantity,
            unit_of_measure: self.unit_of_measure.clone(),
            received_date: self.received_date.clone(),
            expiry_date: self.expiry_date.clone(),
            supplier_id: self.supplier_id.clone(),
            unit_cost: self.unit_cost,
            total_cost: self.total_cost,
            storage_location: self.storage_location.clone(),
            status: self
                .status
                .clone()
                .unwrap_or_else(|| "in_stock".to_string()),
            notes: self.notes.clone(),
        }
    }
}

impl RecordDraft for MaterialBatchDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.batch_number.trim().is_empty() {
            return Err(ValidationError::Required("batch_number"));
        }
        if let Some(qty) = self.quantity {
            if qty <= 0.0 {
                return Err(ValidationError::invalid(
                    "quantity",
                    "must be greater than zero",
                ));
            }
        }
        if let Some(cost) = self.unit_cost {
            if cost < 0.0 {
                return Err(ValidationError::invalid("unit_cost", "must not be negative"));
            }
        }
        parse_iso_date("received_date", self.received_date.as_deref())?;
        parse_iso_date("expiry_date", self.expiry_date.as_deref())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_cost_tracks_quantity_and_unit_cost() {
        let mut draft = MaterialBatchDraft {
            batch_number: "B-2026-031".into(),
            quantity: Some(250.0),
            unit_cost: Some(1.8),
            ..Default::default()
        };
        draft.recompute_total();
        assert_eq!(draft.total_cost, Some(450.0));

        draft.unit_cost = None;
        draft.recompute_total();
        assert_eq!(draft.total_cost, None);
    }
}
