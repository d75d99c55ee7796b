mod aggregate;

pub use aggregate::{Mold, MoldDraft};
