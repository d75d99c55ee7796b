use serde::{Deserialize, Serialize};

use crate::domain::common::{parse_iso_date, RecordDraft, TableRecord, ValidationError};
use crate::system::roles::Role;

/// Daily cost record for a production order, broken down by component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionCost {
    pub id: String,
    pub production_order_id: Option<String>,
    pub cost_date: Option<String>,
    pub material_cost: Option<f64>,
    pub labor_cost: Option<f64>,
    pub machine_cost: Option<f64>,
    pub overhead_cost: Option<f64>,
    pub total_cost: Option<f64>,
    pub unit_cost: Option<f64>,
    pub notes: Option<String>,
    #[serde(default)]
    pub production_orders: Option<CostOrderRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostOrderRef {
    pub order_number: Option<String>,
    pub actual_quantity: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductionCostDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub production_order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labor_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub machine_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overhead_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ProductionCostDraft {
    /// Sum the component costs into `total_cost`; components left blank
    /// count as zero. All blank leaves the total unset.
    pub fn recompute_total(&mut self) {
        let components = [
            self.material_cost,
            self.labor_cost,
            self.machine_cost,
            self.overhead_cost,
        ];
        if components.iter().all(Option::is_none) {
            self.total_cost = None;
        } else {
            self.total_cost = Some(components.iter().flatten().sum());
        }
    }
}

impl TableRecord for ProductionCost {
    type Draft = ProductionCostDraft;

    fn table() -> &'static str {
        "production_costs"
    }

    fn columns() -> &'static str {
        "id, production_order_id, cost_date, material_cost, labor_cost, machine_cost, overhead_cost, total_cost, unit_cost, notes, production_orders(order_number, actual_quantity)"
    }

    fn permitted_roles() -> Option<&'static [Role]> {
        Some(&[Role::Admin, Role::FinanceManager])
    }

    fn entity_name() -> &'static str {
        "Cost Record"
    }

    fn list_name() -> &'static str {
        "Production Costs"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> ProductionCostDraft {
        ProductionCostDraft {
            production_order_id: self.production_order_id.clone(),
            cost_date: self.cost_date.clone(),
            material_cost: self.material_cost,
            labor_cost: self.labor_cost,
            machine_cost: self.machine_cost,
            overhead_cost: self.overhead_cost,
            total_cost: self.total_cost,
            unit_cost: self.unit_cost,
            notes: self.notes.clone(),
        }
    }
}

impl RecordDraft for ProductionCostDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("material_cost", self.material_cost),
            ("labor_cost", self.labor_cost),
            ("machine_cost", self.machine_cost),
            ("overhead_cost", self.overhead_cost),
        ] {
            if let Some(v) = value {
                if v < 0.0 {
                    return Err(ValidationError::invalid(field, "must not be negative"));
                }
            }
        }
        parse_iso_date("cost_date", self.cost_date.as_deref())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_sums_present_components() {
        let mut draft = ProductionCostDraft {
            material_cost: Some(120.0),
            machine_cost: Some(45.5),
            ..Default::default()
        };
        draft.recompute_total();
        assert_eq!(draft.total_cost, Some(165.5));

        let mut blank = ProductionCostDraft::default();
        blank.recompute_total();
        assert_eq!(blank.total_cost, None);
    }
}
