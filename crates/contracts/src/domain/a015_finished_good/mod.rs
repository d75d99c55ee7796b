mod aggregate;

pub use aggregate::{FinishedGood, FinishedGoodDraft};
