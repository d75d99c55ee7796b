use serde::{Deserialize, Serialize};

use crate::domain::common::{RecordDraft, TableRecord, ValidationError};
use crate::system::roles::Role;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub customer_code: Option<String>,
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
    pub credit_limit: Option<f64>,
    pub tax_id: Option<String>,
    pub customer_type: Option<String>,
    pub status: Option<String>,
    pub sales_representative: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerDraft {
    pub customer_code: String,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_limit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_type: Option<String>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_representative: Option<String>,
}

impl Default for CustomerDraft {
    fn default() -> Self {
        Self {
            customer_code: String::new(),
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
            credit_limit: None,
            tax_id: None,
            customer_type: None,
            status: "active".to_string(),
            sales_representative: None,
        }
    }
}

impl TableRecord for Customer {
    type Draft = CustomerDraft;

    fn table() -> &'static str {
        "customers"
    }

    fn columns() -> &'static str {
        "id, customer_code, company_name, contact_person, email, phone, address, city, state_province, postal_code, country, payment_terms, credit_limit, tax_id, customer_type, status, sales_representative"
    }

    fn permitted_roles() -> Option<&'static [Role]> {
        Some(&[Role::Admin, Role::SalesStaff])
    }

    fn entity_name() -> &'static str {
        "Customer"
    }

    fn list_name() -> &'static str {
        "Customers"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> CustomerDraft {
        CustomerDraft {
            customer_code: self.customer_code.clone().unwrap_or_default(),
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
            credit_limit: self.credit_limit,
            tax_id: self.tax_id.clone(),
            customer_type: self.customer_type.clone(),
            status: self.status.clone().unwrap_or_else(|| "active".to_string()),
            sales_representative: self.sales_representative.clone(),
        }
    }
}

impl RecordDraft for CustomerDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.customer_code.trim().is_empty() {
            return Err(ValidationError::Required("customer_code"));
        }
        if self.company_name.trim().is_empty() {
            return Err(ValidationError::Required("company_name"));
        }
        if let Some(limit) = self.credit_limit {
            if limit < 0.0 {
                return Err(ValidationError::invalid(
                    "credit_limit",
                    "must not be negative",
                ));
            }
        }
        Ok(())
    }
}
