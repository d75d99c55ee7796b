use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde_json::Value;

use super::{Filter, Gateway, GatewayError};
use crate::shared::config::gateway_config;
use crate::system::auth::storage;

/// PostgREST-compatible gateway client: one resource path per table,
/// `select`/`eq` query parameters, `Prefer: return=representation` on
/// writes.
pub struct RestGateway {
    base: String,
    anon_key: String,
}

impl RestGateway {
    pub fn new(base: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            anon_key: anon_key.into(),
        }
    }

    pub fn from_config() -> Self {
        let cfg = gateway_config();
        if cfg.anon_key.is_empty() {
            log::warn!("gateway anon key is empty; requests will likely be rejected");
        }
        Self::new(cfg.url.clone(), cfg.anon_key.clone())
    }

    fn check_configured(&self) -> Result<(), GatewayError> {
        if self.base.is_empty() {
            return Err(GatewayError::Config("gateway URL is not configured".into()));
        }
        Ok(())
    }

    fn table_url(&self, table: &str, query: &str) -> String {
        if query.is_empty() {
            format!("{}/rest/v1/{}", self.base, table)
        } else {
            format!("{}/rest/v1/{}?{}", self.base, table, query)
        }
    }

    /// Session token when logged in, anon key otherwise; gateway-side
    /// row policies key off this.
    fn bearer(&self) -> String {
        storage::get_access_token().unwrap_or_else(|| self.anon_key.clone())
    }

    fn authorized(&self, request: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        request
            .header("apikey", &self.anon_key)
            .header("Authorization", &format!("Bearer {}", self.bearer()))
            .header("Accept", "application/json")
    }
}

fn select_query(columns: &str, filters: &[Filter]) -> String {
    let mut query = format!("select={}", urlencoding::encode(columns));
    for filter in filters {
        query.push_str(&format!(
            "&{}=eq.{}",
            filter.column,
            urlencoding::encode(&filter.value)
        ));
    }
    query
}

fn id_query(id: &str) -> String {
    format!("id=eq.{}", urlencoding::encode(id))
}

async fn status_error(response: Response) -> GatewayError {
    let status = response.status();
    let message = response.text().await.unwrap_or_default();
    GatewayError::Status { status, message }
}

async fn decode_rows(response: Response) -> Result<Vec<Value>, GatewayError> {
    response
        .json::<Vec<Value>>()
        .await
        .map_err(|e| GatewayError::Decode(e.to_string()))
}

/// Writes return the representation as a one-element array.
async fn decode_row(response: Response) -> Result<Value, GatewayError> {
    decode_rows(response).await.and_then(|rows| {
        rows.into_iter()
            .next()
            .ok_or_else(|| GatewayError::Decode("empty representation".into()))
    })
}

#[async_trait(?Send)]
impl Gateway for RestGateway {
    async fn select(
        &self,
        table: &str,
        columns: &str,
        filters: &[Filter],
    ) -> Result<Vec<Value>, GatewayError> {
        self.check_configured()?;
        let url = self.table_url(table, &select_query(columns, filters));
        let response = self
            .authorized(Request::get(&url))
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(status_error(response).await);
        }
        decode_rows(response).await
    }

    async fn insert(&self, table: &str, row: Value) -> Result<Value, GatewayError> {
        self.check_configured()?;
        let url = self.table_url(table, "");
        let response = self
            .authorized(Request::post(&url))
            .header("Prefer", "return=representation")
            .json(&row)
            .map_err(|e| GatewayError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(status_error(response).await);
        }
        decode_row(response).await
    }

    async fn update(&self, table: &str, id: &str, patch: Value) -> Result<Value, GatewayError> {
        self.check_configured()?;
        let url = self.table_url(table, &id_query(id));
        let response = self
            .authorized(Request::patch(&url))
            .header("Prefer", "return=representation")
            .json(&patch)
            .map_err(|e| GatewayError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(status_error(response).await);
        }
        decode_row(response).await
    }

    async fn delete(&self, table: &str, id: &str) -> Result<(), GatewayError> {
        self.check_configured()?;
        let url = self.table_url(table, &id_query(id));
        let response = self
            .authorized(Request::delete(&url))
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(status_error(response).await);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_query_encodes_projection_and_filters() {
        let query = select_query(
            "id, name, machines(name, machine_code)",
            &[Filter::eq("user_id", "u-1"), Filter::eq("roles.is_active", "true")],
        );
        assert_eq!(
            query,
            "select=id%2C%20name%2C%20machines%28name%2C%20machine_code%29&user_id=eq.u-1&roles.is_active=eq.true"
        );
    }

    #[test]
    fn table_urls_compose() {
        let gw = RestGateway::new("http://127.0.0.1:54321", "anon");
        assert_eq!(
            gw.table_url("machines", ""),
            "http://127.0.0.1:54321/rest/v1/machines"
        );
        assert_eq!(
            gw.table_url("machines", &id_query("m 1")),
            "http://127.0.0.1:54321/rest/v1/machines?id=eq.m%201"
        );
    }

    #[test]
    fn unconfigured_base_is_rejected_up_front() {
        let gw = RestGateway::new("", "anon");
        assert_eq!(
            gw.check_configured(),
            Err(GatewayError::Config("gateway URL is not configured".into()))
        );
    }
}
