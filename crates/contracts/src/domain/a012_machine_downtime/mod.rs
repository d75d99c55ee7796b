mod aggregate;

pub use aggregate::{MachineDowntime, MachineDowntimeDraft};
