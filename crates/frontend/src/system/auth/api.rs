//! Gateway auth endpoints (password grant, session introspection) plus
//! the role lookup that feeds the permission gate.

use contracts::system::auth::{AuthSession, AuthUser, Credentials, UserRoleRow};
use contracts::system::roles::Role;
use gloo_net::http::Request;
use serde_json::json;
use uuid::Uuid;

use crate::shared::config::gateway_config;
use crate::shared::gateway::{Filter, Gateway, GatewayError};

fn auth_url(path: &str) -> String {
    format!("{}/auth/v1/{}", gateway_config().url, path)
}

/// Extract the human-readable message a failed auth call carries.
async fn auth_error(response: gloo_net::http::Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| {
            v.get("error_description")
                .or_else(|| v.get("msg"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| format!("authentication failed (HTTP {status})"))
}

pub async fn sign_in(email: String, password: String) -> Result<AuthSession, String> {
    let response = Request::post(&auth_url("token?grant_type=password"))
        .header("apikey", &gateway_config().anon_key)
        .json(&Credentials { email, password })
        .map_err(|e| format!("Failed to serialize request: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {e}"))?;

    if !response.ok() {
        return Err(auth_error(response).await);
    }

    response
        .json::<AuthSession>()
        .await
        .map_err(|e| format!("Failed to parse response: {e}"))
}

pub async fn refresh(refresh_token: &str) -> Result<AuthSession, String> {
    let response = Request::post(&auth_url("token?grant_type=refresh_token"))
        .header("apikey", &gateway_config().anon_key)
        .json(&json!({ "refresh_token": refresh_token }))
        .map_err(|e| format!("Failed to serialize request: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {e}"))?;

    if !response.ok() {
        return Err(auth_error(response).await);
    }

    response
        .json::<AuthSession>()
        .await
        .map_err(|e| format!("Failed to parse response: {e}"))
}

pub async fn get_user(access_token: &str) -> Result<AuthUser, String> {
    let response = Request::get(&auth_url("user"))
        .header("apikey", &gateway_config().anon_key)
        .header("Authorization", &format!("Bearer {access_token}"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {e}"))?;

    if !response.ok() {
        return Err(auth_error(response).await);
    }

    response
        .json::<AuthUser>()
        .await
        .map_err(|e| format!("Failed to parse response: {e}"))
}

pub async fn sign_out(access_token: &str) -> Result<(), String> {
    let response = Request::post(&auth_url("logout"))
        .header("apikey", &gateway_config().anon_key)
        .header("Authorization", &format!("Bearer {access_token}"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {e}"))?;

    if !response.ok() {
        return Err(auth_error(response).await);
    }

    Ok(())
}

/// Active role labels for a user, from the `user_roles` assignment
/// table joined to its role row. Unknown labels are dropped.
pub async fn fetch_roles(
    gateway: &dyn Gateway,
    user_id: Uuid,
) -> Result<Vec<Role>, GatewayError> {
    let rows = gateway
        .select(
            "user_roles",
            "role_id, roles(name, is_active)",
            &[
                Filter::eq("user_id", user_id.to_string()),
                Filter::eq("roles.is_active", "true"),
            ],
        )
        .await?;

    let mut parsed = Vec::new();
    for row in rows {
        let row: UserRoleRow =
            serde_json::from_value(row).map_err(|e| GatewayError::Decode(e.to_string()))?;
        if let Some(role) = row.label().and_then(Role::parse) {
            parsed.push(role);
        }
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use serde_json::{json, Value};

    struct RolesGateway;

    #[async_trait(?Send)]
    impl Gateway for RolesGateway {
        async fn select(
            &self,
            table: &str,
            _columns: &str,
            filters: &[Filter],
        ) -> Result<Vec<Value>, GatewayError> {
            assert_eq!(table, "user_roles");
            assert_eq!(filters.len(), 2);
            Ok(vec![
                json!({"role_id": "1", "roles": {"name": "admin", "is_active": true}}),
                json!({"role_id": "2", "roles": {"name": "shift_lead", "is_active": true}}),
                json!({"role_id": "3", "roles": null}),
            ])
        }

        async fn insert(&self, _table: &str, _row: Value) -> Result<Value, GatewayError> {
            unreachable!("role lookup never writes")
        }

        async fn update(
            &self,
            _table: &str,
            _id: &str,
            _patch: Value,
        ) -> Result<Value, GatewayError> {
            unreachable!("role lookup never writes")
        }

        async fn delete(&self, _table: &str, _id: &str) -> Result<(), GatewayError> {
            unreachable!("role lookup never writes")
        }
    }

    #[test]
    fn unknown_and_missing_role_labels_are_dropped() {
        let roles = block_on(fetch_roles(&RolesGateway, Uuid::nil())).unwrap();
        assert_eq!(roles, vec![Role::Admin]);
    }
}
