mod aggregate;

pub use aggregate::{Product, ProductDraft};
