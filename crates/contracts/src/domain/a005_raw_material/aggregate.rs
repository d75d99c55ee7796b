use serde::{Deserialize, Serialize};

use crate::domain::common::{RecordDraft, TableRecord, ValidationError};
use crate::system::roles::Role;

/// Raw material (resin, masterbatch, additive) with reorder thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMaterial {
    pub id: String,
    pub material_code: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub material_type: Option<String>,
    pub supplier: Option<String>,
    pub unit_of_measure: Option<String>,
    pub current_stock: Option<f64>,
    pub minimum_stock: Option<f64>,
    pub maximum_stock: Option<f64>,
    pub reorder_point: Option<f64>,
    pub reorder_quantity: Option<f64>,
    pub unit_cost: Option<f64>,
    pub storage_location: Option<String>,
    pub shelf_life_days: Option<i32>,
    #[serde(default)]
    pub is_active: Option<bool>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMaterialDraft {
    pub material_code: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_of_measure: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_stock: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_stock: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_stock: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reorder_point: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reorder_quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shelf_life_days: Option<i32>,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Default for RawMaterialDraft {
    fn default() -> Self {
        Self {
            material_code: String::new(),
            name: String::new(),
            description: None,
            category: None,
            material_type: None,
            supplier: None,
            unit_of_measure: None,
            current_stock: None,
            minimum_stock: None,
            maximum_stock: None,
            reorder_point: None,
            reorder_quantity: None,
            unit_cost: None,
            storage_location: None,
            shelf_life_days: None,
            is_active: true,
            image_url: None,
        }
    }
}

impl TableRecord for RawMaterial {
    type Draft = RawMaterialDraft;

    fn table() -> &'static str {
        "raw_materials"
    }

    fn columns() -> &'static str {
        "id, material_code, name, description, category, material_type, supplier, unit_of_measure, current_stock, minimum_stock, maximum_stock, reorder_point, reorder_quantity, unit_cost, storage_location, shelf_life_days, is_active, image_url"
    }

    fn permitted_roles() -> Option<&'static [Role]> {
        Some(&[Role::Admin, Role::WarehouseStaff])
    }

    fn entity_name() -> &'static str {
        "Raw Material"
    }

    fn list_name() -> &'static str {
        "Raw Materials"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> RawMaterialDraft {
        RawMaterialDraft {
            material_code: self.material_code.clone().unwrap_or_default(),
            name: self.name.clone().unwrap_or_default(),
            description: self.description.clone(),
            category: self.category.clone(),
            material_type: self.material_type.clone(),
            supplier: self.supplier.clone(),
            unit_of_measure: self.unit_of_measure.clone(),
            current_stock: self.current_stock,
            minimum_stock: self.minimum_stock,
            maximum_stock: self.maximum_stock,
            reorder_point: self.reorder_point,
            reorder_quantity: self.reorder_quantity,
            unit_cost: self.unit_cost,
            storage_location: self.storage_location.clone(),
            shelf_life_days: self.shelf_life_days,
            is_active: self.is_active.unwrap_or(true),
            image_url: self.image_url.clone(),
        }
    }
}

impl RecordDraft for RawMaterialDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.material_code.trim().is_empty() {
            return Err(ValidationError::Required("material_code"));
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::Required("name"));
        }
        for (field, value) in [
            ("current_stock", self.current_stock),
            ("minimum_stock", self.minimum_stock),
            ("maximum_stock", self.maximum_stock),
            ("unit_cost", self.unit_cost),
        ] {
            if let Some(v) = value {
                if v < 0.0 {
                    return Err(ValidationError::invalid(field, "must not be negative"));
                }
            }
        }
        if let (Some(min), Some(max)) = (self.minimum_stock, self.maximum_stock) {
            if min > max {
                return Err(ValidationError::invalid(
                    "minimum_stock",
                    "exceeds maximum stock",
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_bounds_are_checked_together() {
        let mut draft = RawMaterialDraft {
            material_code: "PP-H350".into(),
            name: "Polypropylene H350".into(),
            minimum_stock: Some(500.0),
            maximum_stock: Some(100.0),
            ..Default::default()
        };
        assert!(draft.validate().is_err());
        draft.maximum_stock = Some(2_000.0);
        assert!(draft.validate().is_ok());
    }
}
