mod aggregate;

pub use aggregate::{SalesOrder, SalesOrderDraft};
