use serde::{Deserialize, Serialize};

use crate::domain::common::{RecordDraft, TableRecord, ValidationError};
use crate::system::roles::Role;

/// Quality inspection report for a production order sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityInspection {
    pub id: String,
    pub production_order_id: Option<String>,
    pub inspection_type: Option<String>,
    pub inspection_datetime: Option<String>,
    pub inspector_id: Option<String>,
    pub sample_size: Option<i64>,
    pub pass_quantity: Option<i64>,
    pub fail_quantity: Option<i64>,
    pub overall_result: Option<String>,
    pub action_taken: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityInspectionDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub production_order_id: Option<String>,
    pub inspection_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inspection_datetime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inspector_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass_quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail_quantity: Option<i64>,
    pub overall_result: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_taken: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Default for QualityInspectionDraft {
    fn default() -> Self {
        Self {
            production_order_id: None,
            inspection_type: "in_process".to_string(),
            inspection_datetime: None,
            inspector_id: None,
            sample_size: None,
            pass_quantity: None,
            fail_quantity: None,
            overall_result: "pending".to_string(),
            action_taken: None,
            notes: None,
        }
    }
}

impl TableRecord for QualityInspection {
    type Draft = QualityInspectionDraft;

    fn table() -> &'static str {
        "quality_inspection_reports"
    }

    fn columns() -> &'static str {
        "id, production_order_id, inspection_type, inspection_datetime, inspector_id, sample_size, pass_quantity, fail_quantity, overall_result, action_taken, notes"
    }

    fn permitted_roles() -> Option<&'static [Role]> {
        Some(&[Role::Admin, Role::QualityInspector])
    }

    fn entity_name() -> &'static str {
        "Inspection Report"
    }

    fn list_name() -> &'static str {
        "Quality Inspections"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> QualityInspectionDraft {
        QualityInspectionDraft {
            production_order_id: self.production_order_id.clone(),
            inspection_type: self
                .inspection_type
                .clone()
                .unwrap_or_else(|| "in_process".to_string()),
            inspection_datetime: self.inspection_datetime.clone(),
            inspector_id: self.inspector_id.clone(),
            sample_size: self.sample_size,
            pass_quantity: self.pass_quantity,
            fail_quantity: self.fail_quantity,
            overall_result: self
                .overall_result
                .clone()
                .unwrap_or_else(|| "pending".to_string()),
            action_taken: self.action_taken.clone(),
            notes: self.notes.clone(),
        }
    }
}

impl RecordDraft for QualityInspectionDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.inspection_type.trim().is_empty() {
            return Err(ValidationError::Required("inspection_type"));
        }
        for (field, value) in [
            ("sample_size", self.sample_size),
            ("pass_quantity", self.pass_quantity),
            ("fail_quantity", self.fail_quantity),
        ] {
            if let Some(v) = value {
                if v < 0 {
                    return Err(ValidationError::invalid(field, "must not be negative"));
                }
            }
        }
        if let (Some(sample), Some(pass), Some(fail)) =
            (self.sample_size, self.pass_quantity, self.fail_quantity)
        {
            if pass + fail > sample {
                return Err(ValidationError::invalid(
                    "sample_size",
                    "pass + fail exceeds the sample",
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
    fn pass_and_fail_cannot_exceed_the_sample() {
        let mut draft = QualityInspectionDraft {
            sample_size: Some(32),
            pass_quantity: Some(30),
            fail_quantity: Some(5),
            ..Default::default()
        };
        assert!(draft.validate().is_err());
        draft.fail_quantity = Some(2);
        assert!(draft.validate().is_ok());
    }
}
