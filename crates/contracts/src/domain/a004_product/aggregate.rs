use serde::{Deserialize, Serialize};

use crate::domain::common::{RecordDraft, TableRecord, ValidationError};
use crate::system::roles::Role;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub product_code: Option<String>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub material_type: Option<String>,
    pub weight_per_piece: Option<f64>,
    pub image_url: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDraft {
    pub product_code: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_per_piece: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub status: String,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            product_code: String::new(),
            name: String::new(),
            category: None,
            material_type: None,
            weight_per_piece: None,
            image_url: None,
            status: "active".to_string(),
        }
    }
}

impl TableRecord for Product {
    type Draft = ProductDraft;

    fn table() -> &'static str {
        "products"
    }

    fn columns() -> &'static str {
        "id, product_code, name, category, material_type, weight_per_piece, image_url, status"
    }

    fn permitted_roles() -> Option<&'static [Role]> {
        Some(&[Role::Admin, Role::ProductionManager])
    }

    fn entity_name() -> &'static str {
        "Product"
    }

    fn list_name() -> &'static str {
        "Products"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            product_code: self.product_code.clone().unwrap_or_default(),
            name: self.name.clone().unwrap_or_default(),
            category: self.category.clone(),
            material_type: self.material_type.clone(),
            weight_per_piece: self.weight_per_piece,
            image_url: self.image_url.clone(),
            status: self.status.clone().unwrap_or_else(|| "active".to_string()),
        }
    }
}

impl RecordDraft for ProductDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.product_code.trim().is_empty() {
            return Err(ValidationError::Required("product_code"));
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::Required("name"));
        }
        if let Some(weight) = self.weight_per_piece {
            if weight <= 0.0 {
                return Err(ValidationError::invalid(
                    "weight_per_piece",
                    "must be greater than zero",
                ));
            }
        }
        Ok(())
    }
}
