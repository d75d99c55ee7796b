use serde::{Deserialize, Serialize};

use crate::domain::common::{RecordDraft, TableRecord, ValidationError};
use crate::system::roles::Role;

/// Returnable shipping container tracked by code and status only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Container {
    pub id: String,
    pub container_code: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerDraft {
    pub container_code: String,
    pub status: String,
}

impl Default for ContainerDraft {
    fn default() -> Self {
        Self {
            container_code: String::new(),
            status: "available".to_string(),
        }
    }
}

impl TableRecord for Container {
    type Draft = ContainerDraft;

    fn table() -> &'static str {
        "containers"
    }

    fn columns() -> &'static str {
        "id, container_code, status"
    }

    fn permitted_roles() -> Option<&'static [Role]> {
        Some(&[Role::Admin, Role::WarehouseStaff])
    }

    fn entity_name() -> &'static str {
        "Container"
    }

    fn list_name() -> &'static str {
        "Containers"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> ContainerDraft {
        ContainerDraft {
            container_code: self.container_code.clone().unwrap_or_default(),
            status: self
                .status
                .clone()
                .unwrap_or_else(|| "available".to_string()),
        }
    }
}

impl RecordDraft for ContainerDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.container_code.trim().is_empty() {
            return Err(ValidationError::Required("container_code"));
        }
        Ok(())
    }
}
