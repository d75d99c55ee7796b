mod aggregate;

pub use aggregate::{Machine, MachineDraft};
