use serde::{Deserialize, Serialize};

use crate::domain::common::{parse_iso_date, RecordDraft, TableRecord, ValidationError};
use crate::system::roles::Role;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: String,
    pub po_number: Option<String>,
    pub supplier_name: Option<String>,
    pub supplier_contact: Option<String>,
    pub order_date: Option<String>,
    pub required_date: Option<String>,
    pub status: Option<String>,
    pub total_amount: Option<f64>,
    pub currency: Option<String>,
    pub payment_terms: Option<String>,
    pub delivery_terms: Option<String>,
    pub created_by: Option<String>,
    pub approved_by: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseOrderDraft {
    pub po_number: String,
    pub supplier_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_date: Option<String>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_terms: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_terms: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Default for PurchaseOrderDraft {
    fn default() -> Self {
        Self {
            po_number: String::new(),
            supplier_name: String::new(),
            supplier_contact: None,
            order_date: None,
            required_date: None,
            status: "draft".to_string(),
            total_amount: None,
            currency: "USD".to_string(),
            payment_terms: None,
            delivery_terms: None,
            created_by: None,
            approved_by: None,
            notes: None,
        }
    }
}

impl TableRecord for PurchaseOrder {
    type Draft = PurchaseOrderDraft;

    fn table() -> &'static str {
        "purchase_orders"
    }

    fn columns() -> &'static str {
        "id, po_number, supplier_name, supplier_contact, order_date, required_date, status, total_amount, currency, payment_terms, delivery_terms, created_by, approved_by, notes"
    }

    fn permitted_roles() -> Option<&'static [Role]> {
        Some(&[Role::Admin, Role::WarehouseStaff])
    }

    fn entity_name() -> &'static str {
        "Purchase Order"
    }

    fn list_name() -> &'static str {
        "Purchase Orders"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> PurchaseOrderDraft {
        PurchaseOrderDraft {
            po_number: self.po_number.clone().unwrap_or_default(),
            supplier_name: self.supplier_name.clone().unwrap_or_default(),
            supplier_contact: self.supplier_contact.clone(),
            order_date: self.order_date.clone(),
            required_date: self.required_date.clone(),
            status: self.status.clone().unwrap_or_else(|| "draft".to_string()),
            total_amount: self.total_amount,
            currency: self.currency.clone().unwrap_or_else(|| "USD".to_string()),
            payment_terms: self.payment_terms.clone(),
            delivery_terms: self.delivery_terms.clone(),
            created_by: self.created_by.clone(),
            approved_by: self.approved_by.clone(),
            notes: self.notes.clone(),
        }
    }
}

impl RecordDraft for PurchaseOrderDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.po_number.trim().is_empty() {
            return Err(ValidationError::Required("po_number"));
        }
        if self.supplier_name.trim().is_empty() {
            return Err(ValidationError::Required("supplier_name"));
        }
        if let Some(amount) = self.total_amount {
            if amount < 0.0 {
                return Err(ValidationError::invalid(
                    "total_amount",
                    "must not be negative",
                ));
            }
        }
        parse_iso_date("order_date", self.order_date.as_deref())?;
        parse_iso_date("required_date", self.required_date.as_deref())?;
        Ok(())
    }
}
