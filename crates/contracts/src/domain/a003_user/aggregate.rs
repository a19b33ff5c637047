use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::common::{provisional_id, provisional_timestamp, AdminEntity, RefreshStrategy};
use crate::shared::validation::{require, CreatePayload, FieldError};

// ============================================================================
// Record
// ============================================================================

/// User as returned by the backend.
///
/// `organizations_name` is a denormalized reference, not an ownership relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(alias = "email_id")]
    pub email: String,
    #[serde(default)]
    pub organizations_name: String,
    #[serde(default)]
    pub role: String,
    pub created_on: String,
}

impl AdminEntity for User {
    type CreateDto = CreateUserDto;

    const LIST_ENDPOINT: &'static str = "/get_users";
    const CREATE_ENDPOINT: &'static str = "/create_user";
    const REFRESH: RefreshStrategy = RefreshStrategy::Refetch;

    fn id(&self) -> &str {
        &self.id
    }

    fn provisional(dto: &CreateUserDto) -> Self {
        Self {
            id: provisional_id(),
            username: dto.username.trim().to_string(),
            email: dto.email_id.trim().to_string(),
            organizations_name: dto.organizations_name.clone(),
            role: String::new(),
            created_on: provisional_timestamp(),
        }
    }

    fn element_name() -> &'static str {
        "User"
    }

    fn list_name() -> &'static str {
        "Users"
    }

    fn create_failed_message() -> &'static str {
        "Failed to create user."
    }
}

// ============================================================================
// Envelopes
// ============================================================================

/// GET /get_users
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UsersResponse {
    #[serde(default)]
    pub users: Vec<User>,
}

impl From<UsersResponse> for Vec<User> {
    fn from(r: UsersResponse) -> Self {
        r.users
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// POST /create_user
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserDto {
    pub username: String,
    pub email_id: String,
    pub user_password: String,
    pub organizations_name: String,
    /// Forwarded as entered; enforcement is up to the backend
    pub ignore_policies: bool,
}

// Password never reaches logs
impl fmt::Debug for CreateUserDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateUserDto")
            .field("username", &self.username)
            .field("email_id", &self.email_id)
            .field("user_password", &"***")
            .field("organizations_name", &self.organizations_name)
            .field("ignore_policies", &self.ignore_policies)
            .finish()
    }
}

impl CreatePayload for CreateUserDto {
    fn validate(&self) -> Result<(), FieldError> {
        require("username", "Username", &self.username)?;
        require("email_id", "Email", &self.email_id)?;
        require("user_password", "Password", &self.user_password)?;
        require("organizations_name", "Organization", &self.organizations_name)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filled() -> CreateUserDto {
        CreateUserDto {
            username: "akash".into(),
            email_id: "akash@example.com".into(),
            user_password: "s3cret".into(),
            organizations_name: "Acme".into(),
            ignore_policies: false,
        }
    }

    #[test]
    fn test_create_payload_wire_shape() {
        let dto = CreateUserDto {
            ignore_policies: true,
            ..filled()
        };
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({
                "username": "akash",
                "email_id": "akash@example.com",
                "user_password": "s3cret",
                "organizations_name": "Acme",
                "ignore_policies": true
            })
        );
    }

    #[test]
    fn test_each_required_field_blocks_submission() {
        let cases: [(&str, fn(&mut CreateUserDto)); 4] = [
            ("username", |d| d.username.clear()),
            ("email_id", |d| d.email_id.clear()),
            ("user_password", |d| d.user_password.clear()),
            ("organizations_name", |d| d.organizations_name.clear()),
        ];
        for (field, clear) in cases {
            let mut dto = filled();
            clear(&mut dto);
            assert_eq!(dto.validate().unwrap_err().field, field);
        }
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn test_debug_hides_password() {
        let printed = format!("{:?}", filled());
        assert!(!printed.contains("s3cret"));
    }

    #[test]
    fn test_decode_users_accepts_email_id_alias() {
        let body = r#"{"users":[{"id":"u1","username":"akash","email_id":"a@b.c","created_on":"2024-05-01"}]}"#;
        let users: Vec<User> = serde_json::from_str::<UsersResponse>(body).unwrap().into();
        assert_eq!(users[0].email, "a@b.c");
        assert_eq!(users[0].organizations_name, "");
    }
}
