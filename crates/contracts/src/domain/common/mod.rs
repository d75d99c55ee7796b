mod record;
mod text;

pub use record::{RecordDraft, TableRecord, ValidationError};
pub use text::{none_if_empty, parse_iso_date};
