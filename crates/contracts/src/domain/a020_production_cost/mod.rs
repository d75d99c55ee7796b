mod aggregate;

pub use aggregate::{CostOrderRef, ProductionCost, ProductionCostDraft};
