mod aggregate;

pub use aggregate::{RawMaterial, RawMaterialDraft};
