mod aggregate;

pub use aggregate::{MachineRef, MoldRef, ProductRef, WorkOrder, WorkOrderDraft};
