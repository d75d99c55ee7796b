mod aggregate;

pub use aggregate::{DailySchedule, DailyScheduleDraft, ScheduleMachineRef, ScheduleOrderRef};
