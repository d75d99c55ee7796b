use serde::{Deserialize, Serialize};

use crate::domain::common::{RecordDraft, TableRecord, ValidationError};
use crate::system::roles::Role;

/// Application user account. Role assignments live in the gateway's
/// `user_roles` table and are not edited through this record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub employee_id: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    pub profile_picture_url: Option<String>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        )
        .trim()
        .to_string()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserDraft {
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
}

impl TableRecord for User {
    type Draft = UserDraft;

    fn table() -> &'static str {
        "users"
    }

    fn columns() -> &'static str {
        "id, username, email, first_name, last_name, employee_id, department, position, phone, is_active, profile_picture_url"
    }

    fn permitted_roles() -> Option<&'static [Role]> {
        Some(&[Role::Admin])
    }

    fn entity_name() -> &'static str {
        "User"
    }

    fn list_name() -> &'static str {
        "Users"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> UserDraft {
        UserDraft {
            username: self.username.clone().unwrap_or_default(),
            email: self.email.clone().unwrap_or_default(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            employee_id: self.employee_id.clone(),
            department: self.department.clone(),
            position: self.position.clone(),
            phone: self.phone.clone(),
            is_active: self.is_active.unwrap_or(false),
            profile_picture_url: self.profile_picture_url.clone(),
        }
    }
}

impl RecordDraft for UserDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.username.trim().is_empty() {
            return Err(ValidationError::Required("username"));
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::Required("email"));
        }
        if !self.email.contains('@') {
            return Err(ValidationError::invalid("email", "not an email address"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_requires_username_and_email() {
        let mut draft = UserDraft::default();
        assert_eq!(draft.validate(), Err(ValidationError::Required("username")));
        draft.username = "tsurya".into();
        assert_eq!(draft.validate(), Err(ValidationError::Required("email")));
        draft.email = "not-an-email".into();
        assert!(draft.validate().is_err());
        draft.email = "tsurya@example.com".into();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn unset_optionals_stay_out_of_the_payload() {
        let draft = UserDraft {
            username: "tsurya".into(),
            email: "tsurya@example.com".into(),
            is_active: true,
            ..Default::default()
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert!(json.get("department").is_none());
        assert_eq!(json["is_active"], serde_json::json!(true));
    }
}
