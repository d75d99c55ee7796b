mod aggregate;

pub use aggregate::{ProductionOrder, ProductionOrderDraft};
