use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Password-grant login payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Session issued by the gateway's auth endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub refresh_token: String,
    pub user: AuthUser,
}

/// The authenticated principal as reported by the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: Option<String>,
}

/// Row shape of the `user_roles` join used to derive the session's
/// role labels: `select("user_roles", "role_id, roles(name,
/// is_active)")` filtered to the current user and active roles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRoleRow {
    pub role_id: String,
    #[serde(default)]
    pub roles: Option<RoleRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleRef {
    pub name: String,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl UserRoleRow {
    /// Extract the role label, if the embedded role row was returned.
    pub fn label(&self) -> Option<&str> {
        self.roles.as_ref().map(|r| r.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_role_rows_deserialize_with_embedded_role() {
        let json = r#"[
            {"role_id": "1", "roles": {"name": "admin", "is_active": true}},
            {"role_id": "2", "roles": null}
        ]"#;
        let rows: Vec<UserRoleRow> = serde_json::from_str(json).unwrap();
        assert_eq!(rows[0].label(), Some("admin"));
        assert_eq!(rows[1].label(), None);
    }
}
