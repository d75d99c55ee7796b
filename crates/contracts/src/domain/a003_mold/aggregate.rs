use serde::{Deserialize, Serialize};

use crate::domain::common::{parse_iso_date, RecordDraft, TableRecord, ValidationError};
use crate::system::roles::Role;

/// Injection mold tooling. Shot counts and condition are tracked per
/// mold to drive maintenance decisions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mold {
    pub id: String,
    pub mold_code: Option<String>,
    pub name: Option<String>,
    pub mold_type: Option<String>,
    pub number_of_cavities: Option<i32>,
    pub material: Option<String>,
    pub weight: Option<f64>,
    pub dimensions_length: Option<f64>,
    pub dimensions_width: Option<f64>,
    pub dimensions_height: Option<f64>,
    pub cycle_time_standard: Option<f64>,
    pub current_shot_count: Option<i64>,
    pub condition_rating: Option<i32>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub purchase_date: Option<String>,
    pub purchase_cost: Option<f64>,
    pub supplier: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoldDraft {
    pub mold_code: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mold_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_cavities: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions_length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle_time_standard: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_rating: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Default for MoldDraft {
    fn default() -> Self {
        Self {
            mold_code: String::new(),
            name: String::new(),
            mold_type: None,
            number_of_cavities: None,
            material: None,
            weight: None,
            dimensions_length: None,
            dimensions_width: None,
            dimensions_height: None,
            cycle_time_standard: None,
            condition_rating: None,
            location: None,
            status: "active".to_string(),
            purchase_date: None,
            purchase_cost: None,
            supplier: None,
            image_url: None,
        }
    }
}

impl TableRecord for Mold {
    type Draft = MoldDraft;

    fn table() -> &'static str {
        "molds"
    }

    fn columns() -> &'static str {
        "id, mold_code, name, mold_type, number_of_cavities, material, weight, dimensions_length, dimensions_width, dimensions_height, cycle_time_standard, current_shot_count, condition_rating, location, status, purchase_date, purchase_cost, supplier, image_url"
    }

    fn permitted_roles() -> Option<&'static [Role]> {
        Some(&[Role::Admin, Role::ProductionManager])
    }

    fn entity_name() -> &'static str {
        "Mold"
    }

    fn list_name() -> &'static str {
        "Molds"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> MoldDraft {
        MoldDraft {
            mold_code: self.mold_code.clone().unwrap_or_default(),
            name: self.name.clone().unwrap_or_default(),
            mold_type: self.mold_type.clone(),
            number_of_cavities: self.number_of_cavities,
            material: self.material.clone(),
            weight: self.weight,
            dimensions_length: self.dimensions_length,
            dimensions_width: self.dimensions_width,
            dimensions_height: self.dimensions_height,
            cycle_time_standard: self.cycle_time_standard,
            condition_rating: self.condition_rating,
            location: self.location.clone(),
            status: self.status.clone().unwrap_or_else(|| "active".to_string()),
            purchase_date: self.purchase_date.clone(),
            purchase_cost: self.purchase_cost,
            supplier: self.supplier.clone(),
            image_url: self.image_url.clone(),
        }
    }
}

impl RecordDraft for MoldDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.mold_code.trim().is_empty() {
            return Err(ValidationError::Required("mold_code"));
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::Required("name"));
        }
        if let Some(cavities) = self.number_of_cavities {
            if cavities < 1 {
                return Err(ValidationError::invalid(
                    "number_of_cavities",
                    "must be at least 1",
                ));
            }
        }
        if let Some(rating) = self.condition_rating {
            if !(1..=5).contains(&rating) {
                return Err(ValidationError::invalid(
                    "condition_rating",
                    "must be between 1 and 5",
                ));
            }
        }
        parse_iso_date("purchase_date", self.purchase_date.as_deref())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_rating_is_bounded() {
        let mut draft = MoldDraft {
            mold_code: "MLD-014".into(),
            name: "Cap 28mm 16-cav".into(),
            ..Default::default()
        };
        draft.condition_rating = Some(6);
        assert!(draft.validate().is_err());
        draft.condition_rating = Some(4);
        assert!(draft.validate().is_ok());
    }
}
