use serde::{Deserialize, Serialize};

use crate::domain::common::{parse_iso_date, RecordDraft, TableRecord, ValidationError};
use crate::system::roles::Role;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinishedGood {
    pub id: String,
    pub product_id: Option<String>,
    pub production_order_id: Option<String>,
    pub batch_number: Option<String>,
    pub quantity: Option<i64>,
    pub production_date: Option<String>,
    pub expiry_date: Option<String>,
    pub quality_status: Option<String>,
    pub location_id: Option<String>,
    pub unit_cost: Option<f64>,
    pub total_cost: Option<f64>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinishedGoodDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub production_order_id: Option<String>,
    pub batch_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub production_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    pub quality_status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Default for FinishedGoodDraft {
    fn default() -> Self {
        Self {
            product_id: None,
            production_order_id: None,
            batch_number: String::new(),
            quantity: None,
            production_date: None,
            expiry_date: None,
            quality_status: "pending".to_string(),
            location_id: None,
            unit_cost: None,
            total_cost: None,
            status: "in_stock".to_string(),
            notes: None,
        }
    }
}

impl TableRecord for FinishedGood {
    type Draft = FinishedGoodDraft;

    fn table() -> &'static str {
        "finished_goods_inventory"
    }

    fn columns() -> &'static str {
        "id, product_id, production_order_id, batch_number, quantity, production_date, expiry_date, quality_status, location_id, unit_cost, total_cost, status, notes"
    }

    fn permitted_roles() -> Option<&'static [Role]> {
        Some(&[Role::Admin, Role::WarehouseStaff])
    }

    fn entity_name() -> &'static str {
        "Finished Good"
    }

    fn list_name() -> &'static str {
        "Finished Goods"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> FinishedGoodDraft {
        FinishedGoodDraft {
            product_id: self.product_id.clone(),
            production_order_id: self.production_order_id.clone(),
            batch_number: self.batch_number.clone().unwrap_or_default(),
            quantity: self.quantity,
            production_date: self.production_date.clone(),
            expiry_date: self.expiry_date.clone(),
            quality_status: self
                .quality_status
                .clone()
                .unwrap_or_else(|| "pending".to_string()),
            location_id: self.location_id.clone(),
            unit_cost: self.unit_cost,
            total_cost: self.total_cost,
            status: self
                .status
                .clone()
                .unwrap_or_else(|| "in_stock".to_string()),
            notes: self.notes.clone(),
        }
    }
}

impl RecordDraft for FinishedGoodDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.batch_number.trim().is_empty() {
            return Err(ValidationError::Required("batch_number"));
        }
        if let Some(qty) = self.quantity {
            if qty < 0 {
                return Err(ValidationError::invalid("quantity", "must not be negative"));
            }
        }
        parse_iso_date("production_date", self.production_date.as_deref())?;
        parse_iso_date("expiry_date", self.expiry_date.as_deref())?;
        Ok(())
    }
}
