use serde::{Deserialize, Serialize};

use crate::domain::common::{RecordDraft, TableRecord, ValidationError};
use crate::system::roles::Role;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerComplaint {
    pub id: String,
    pub complaint_number: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerComplaintDraft {
    pub complaint_number: String,
    pub status: String,
}

impl Default for CustomerComplaintDraft {
    fn default() -> Self {
        Self {
            complaint_number: String::new(),
            status: "open".to_string(),
        }
    }
}

impl TableRecord for CustomerComplaint {
    type Draft = CustomerComplaintDraft;

    fn table() -> &'static str {
        "customer_complaints"
    }

    fn columns() -> &'static str {
        "id, complaint_number, status"
    }

    fn permitted_roles() -> Option<&'static [Role]> {
        Some(&[Role::Admin, Role::SalesStaff, Role::QualityInspector])
    }

    fn entity_name() -> &'static str {
        "Complaint"
    }

    fn list_name() -> &'static str {
        "Customer Complaints"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> CustomerComplaintDraft {
        CustomerComplaintDraft {
            complaint_number: self.complaint_number.clone().unwrap_or_default(),
            status: self.status.clone().unwrap_or_else(|| "open".to_string()),
        }
    }
}

impl RecordDraft for CustomerComplaintDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.complaint_number.trim().is_empty() {
            return Err(ValidationError::Required("complaint_number"));
        }
        Ok(())
    }
}
