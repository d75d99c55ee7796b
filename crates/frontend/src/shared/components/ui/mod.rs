mod checkbox;
mod input;
mod select;
mod textarea;

pub use checkbox::CheckboxField;
pub use input::{DateField, NumberField, TextField};
pub use select::SelectField;
pub use textarea::TextAreaField;

/// Form display helpers for optional numeric draft fields.
pub fn fmt_opt_f64(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

pub fn fmt_opt_i64(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

pub fn fmt_opt_i32(value: Option<i32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
