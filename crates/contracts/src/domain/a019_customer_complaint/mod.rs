mod aggregate;

pub use aggregate::{CustomerComplaint, CustomerComplaintDraft};
