mod aggregate;

pub use aggregate::{QualityInspection, QualityInspectionDraft};
