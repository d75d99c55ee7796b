//! Boundary to the hosted tabular backend.
//!
//! Everything behind this trait is an external service: storage,
//! querying and authorization enforcement all live gateway-side. The
//! frontend only issues per-table CRUD calls and treats the results as
//! opaque rows.

mod error;
mod rest;

use std::sync::Arc;

use async_trait::async_trait;
use leptos::prelude::*;
use serde_json::Value;

pub use error::GatewayError;
pub use rest::RestGateway;

/// Single equality filter, rendered as `column=eq.value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub column: String,
    pub value: String,
}

impl Filter {
    pub fn eq(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }
}

#[async_trait(?Send)]
pub trait Gateway: Send + Sync {
    async fn select(
        &self,
        table: &str,
        columns: &str,
        filters: &[Filter],
    ) -> Result<Vec<Value>, GatewayError>;

    async fn insert(&self, table: &str, row: Value) -> Result<Value, GatewayError>;

    async fn update(&self, table: &str, id: &str, patch: Value) -> Result<Value, GatewayError>;

    async fn delete(&self, table: &str, id: &str) -> Result<(), GatewayError>;
}

/// Cloneable handle stored in the leptos context.
#[derive(Clone)]
pub struct GatewayHandle(pub Arc<dyn Gateway>);

pub fn provide_gateway() {
    provide_context(GatewayHandle(Arc::new(RestGateway::from_config())));
}

pub fn use_gateway() -> GatewayHandle {
    use_context::<GatewayHandle>().expect("GatewayHandle not found in context")
}
