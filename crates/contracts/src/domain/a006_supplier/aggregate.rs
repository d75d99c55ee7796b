use serde::{Deserialize, Serialize};

use crate::domain::common::{RecordDraft, TableRecord, ValidationError};
use crate::system::roles::Role;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    pub id: String,
    pub supplier_code: Option<String>,
    pub company_name: Option<String>,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state_province: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub payment_terms: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierDraft {
    pub supplier_code: String,
    pub company_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_terms: Option<String>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Default for SupplierDraft {
    fn default() -> Self {
        Self {
            supplier_code: String::new(),
            company_name: String::new(),
            contact_person: None,
            email: None,
            phone: None,
            address: None,
            city: None,
            state_province: None,
            postal_code: None,
            country: None,
            payment_terms: None,
            status: "active".to_string(),
            notes: None,
        }
    }
}

impl TableRecord for Supplier {
    type Draft = SupplierDraft;

    fn table() -> &'static str {
        "suppliers"
    }

    fn columns() -> &'static str {
        "id, supplier_code, company_name, contact_person, email, phone, address, city, state_province, postal_code, country, payment_terms, status, notes"
    }

    fn permitted_roles() -> Option<&'static [Role]> {
        Some(&[Role::Admin, Role::PurchaseManager])
    }

    fn entity_name() -> &'static str {
        "Supplier"
    }

    fn list_name() -> &'static str {
        "Suppliers"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> SupplierDraft {
        SupplierDraft {
            supplier_code: self.supplier_code.clone().unwrap_or_default(),
            company_name: self.company_name.clone().unwrap_or_default(),
            contact_person: self.contact_person.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            state_province: self.state_province.clone(),
            postal_code: self.postal_code.clone(),
            country: self.country.clone(),
            payment_terms: self.payment_terms.clone(),
            status: self.status.clone().unwrap_or_else(|| "active".to_string()),
            notes: self.notes.clone(),
        }
    }
}

impl RecordDraft for SupplierDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.supplier_code.trim().is_empty() {
            return Err(ValidationError::Required("supplier_code"));
        }
        if self.company_name.trim().is_empty() {
            return Err(ValidationError::Required("company_name"));
        }
        if let Some(email) = &self.email {
            if !email.contains('@') {
                return Err(ValidationError::invalid("email", "not an email address"));
            }
        }
        Ok(())
    }
}
