use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::common::{provisional_id, provisional_timestamp, AdminEntity, RefreshStrategy};
use crate::shared::validation::{require, CreatePayload, FieldError};

// ============================================================================
// Permission level
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionLevel {
    Read,
    Write,
    Admin,
}

impl PermissionLevel {
    pub const ALL: [PermissionLevel; 3] = [Self::Read, Self::Write, Self::Admin];

    /// Wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Write => "write",
            Self::Admin => "admin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Read => "Read",
            Self::Write => "Write",
            Self::Admin => "Admin",
        }
    }
}

impl fmt::Display for PermissionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PermissionLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "read" => Ok(Self::Read),
            "write" => Ok(Self::Write),
            "admin" => Ok(Self::Admin),
            other => Err(format!("Unknown permission level: {}", other)),
        }
    }
}

// ============================================================================
// Record
// ============================================================================

/// Role as returned by the backend.
///
/// `permissions` stays a plain string: the backend owns the set of levels and a
/// value this client does not know must not break the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: String,
    pub role_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub permissions: String,
    pub created_on: String,
}

impl Role {
    pub fn permission_level(&self) -> Option<PermissionLevel> {
        self.permissions.parse().ok()
    }
}

impl AdminEntity for Role {
    type CreateDto = CreateRoleDto;

    const LIST_ENDPOINT: &'static str = "/get_roles_data";
    const CREATE_ENDPOINT: &'static str = "/create_role";
    const REFRESH: RefreshStrategy = RefreshStrategy::Refetch;

    fn id(&self) -> &str {
        &self.id
    }

    fn provisional(dto: &CreateRoleDto) -> Self {
        let description = dto.description.trim();
        Self {
            id: provisional_id(),
            role_name: dto.role_name.trim().to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            permissions: dto.permissions.clone(),
            created_on: provisional_timestamp(),
        }
    }

    fn element_name() -> &'static str {
        "Role"
    }

    fn list_name() -> &'static str {
        "Roles"
    }

    fn create_failed_message() -> &'static str {
        "Failed to create role."
    }
}

// ============================================================================
// Envelopes
// ============================================================================

/// GET /get_roles_data
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RolesResponse {
    #[serde(default)]
    pub roles: Vec<Role>,
}

impl From<RolesResponse> for Vec<Role> {
    fn from(r: RolesResponse) -> Self {
        r.roles
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// POST /create_role
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRoleDto {
    /// Role key, e.g. "marketing_admin"
    pub role_name: String,
    pub description: String,
    /// One of the `PermissionLevel` wire values, empty until selected
    pub permissions: String,
}

impl CreatePayload for CreateRoleDto {
    fn validate(&self) -> Result<(), FieldError> {
        require("role_name", "Role key", &self.role_name)?;
        require("permissions", "Permissions", &self.permissions)?;
        self.permissions
            .parse::<PermissionLevel>()
            .map_err(|e| FieldError::new("permissions", e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_roles_with_missing_description() {
        let body = r#"{"roles":[
            {"id":"r1","role_name":"viewer","permissions":"read","created_on":"2024-03-01"},
            {"id":"r2","role_name":"ops","description":"Ops team","permissions":"root","created_on":"2024-03-02"}
        ]}"#;
        let roles: Vec<Role> = serde_json::from_str::<RolesResponse>(body).unwrap().into();
        assert_eq!(roles[0].description, None);
        assert_eq!(roles[0].permission_level(), Some(PermissionLevel::Read));
        assert_eq!(roles[1].description.as_deref(), Some("Ops team"));
        assert_eq!(roles[1].permission_level(), None);
    }

    #[test]
    fn test_create_payload_wire_shape() {
        let dto = CreateRoleDto {
            role_name: "marketing_admin".into(),
            description: String::new(),
            permissions: PermissionLevel::Write.to_string(),
        };
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({"role_name": "marketing_admin", "description": "", "permissions": "write"})
        );
    }

    #[test]
    fn test_validation_requires_key_and_known_permission() {
        let mut dto = CreateRoleDto::default();
        assert_eq!(dto.validate().unwrap_err().field, "role_name");
        dto.role_name = "viewer".into();
        assert_eq!(dto.validate().unwrap_err().field, "permissions");
        dto.permissions = "superuser".into();
        assert_eq!(dto.validate().unwrap_err().field, "permissions");
        dto.permissions = "admin".into();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_description_is_optional() {
        let dto = CreateRoleDto {
            role_name: "viewer".into(),
            description: "  ".into(),
            permissions: "read".into(),
        };
        assert!(dto.validate().is_ok());
        assert_eq!(Role::provisional(&dto).description, None);
    }

    #[test]
    fn test_permission_level_round_trip() {
        for level in PermissionLevel::ALL {
            assert_eq!(level.as_str().parse::<PermissionLevel>(), Ok(level));
        }
    }
}
