mod aggregate;

pub use aggregate::{MaterialBatch, MaterialBatchDraft, MaterialRef, SupplierRef};
