use serde::{Deserialize, Serialize};

use crate::domain::common::{parse_iso_date, RecordDraft, TableRecord, ValidationError};
use crate::system::roles::Role;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesOrder {
    pub id: String,
    pub order_number: Option<String>,
    pub customer_id: Option<String>,
    pub order_date: Option<String>,
    pub required_date: Option<String>,
    pub promised_date: Option<String>,
    pub delivery_date: Option<String>,
    pub status: Option<String>,
    pub total_amount: Option<f64>,
    pub currency: Option<String>,
    pub payment_status: Option<String>,
    pub payment_terms: Option<String>,
    pub sales_person: Option<String>,
    pub priority_level: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesOrderDraft {
    pub order_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promised_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<String>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
    pub currency: String,
    pub payment_status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_terms: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_person: Option<String>,
    pub priority_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Default for SalesOrderDraft {
    fn default() -> Self {
        Self {
            order_number: String::new(),
            customer_id: None,
            order_date: None,
            required_date: None,
            promised_date: None,
            delivery_date: None,
            status: "pending".to_string(),
            total_amount: None,
            currency: "USD".to_string(),
            payment_status: "unpaid".to_string(),
            payment_terms: None,
            sales_person: None,
            priority_level: "normal".to_string(),
            notes: None,
        }
    }
}

impl TableRecord for SalesOrder {
    type Draft = SalesOrderDraft;

    fn table() -> &'static str {
        "sales_orders"
    }

    fn columns() -> &'static str {
        "id, order_number, customer_id, order_date, required_date, promised_date, delivery_date, status, total_amount, currency, payment_status, payment_terms, sales_person, priority_level, notes"
    }

    fn permitted_roles() -> Option<&'static [Role]> {
        Some(&[Role::Admin, Role::SalesStaff])
    }

    fn entity_name() -> &'static str {
        "Sales Order"
    }

    fn list_name() -> &'static str {
        "Sales Orders"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> SalesOrderDraft {
        SalesOrderDraft {
            order_number: self.order_number.clone().unwrap_or_default(),
            customer_id: self.customer_id.clone(),
            order_date: self.order_date.clone(),
            required_date: self.required_date.clone(),
            promised_date: self.promised_date.clone(),
            delivery_date: self.delivery_date.clone(),
            status: self.status.clone().unwrap_or_else(|| "pending".to_string()),
            total_amount: self.total_amount,
            currency: self.currency.clone().unwrap_or_else(|| "USD".to_string()),
            payment_status: self
                .payment_status
                .clone()
                .unwrap_or_else(|| "unpaid".to_string()),
            payment_terms: self.payment_terms.clone(),
            sales_person: self.sales_person.clone(),
            priority_level: self
                .priority_level
                .clone()
                .unwrap_or_else(|| "normal".to_string()),
            notes: self.notes.clone(),
        }
    }
}

impl RecordDraft for SalesOrderDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.order_number.trim().is_empty() {
            return Err(ValidationError::Required("order_number"));
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
        parse_iso_date("promised_date", self.promised_date.as_deref())?;
        parse_iso_date("delivery_date", self.delivery_date.as_deref())?;
        Ok(())
    }
}
