mod aggregate;

pub use aggregate::{MaintenanceSchedule, MaintenanceScheduleDraft};
