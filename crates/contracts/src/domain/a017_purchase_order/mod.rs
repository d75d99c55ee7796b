mod aggregate;

pub use aggregate::{PurchaseOrder, PurchaseOrderDraft};
