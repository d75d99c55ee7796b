mod aggregate;

pub use aggregate::{Customer, CustomerDraft};
