use serde::{Deserialize, Serialize};

use crate::domain::common::{provisional_id, provisional_timestamp, AdminEntity, RefreshStrategy};
use crate::shared::validation::{require, CreatePayload, FieldError};

// ============================================================================
// Record
// ============================================================================

/// Organization (tenant) as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: String,
    pub organizations_name: String,
    pub owner: String,
    /// Backend-formatted, shown verbatim
    pub created_on: String,
}

impl AdminEntity for Organization {
    type CreateDto = CreateTenantDto;

    const LIST_ENDPOINT: &'static str = "/get_tenants";
    const CREATE_ENDPOINT: &'static str = "/create_tenant";
    const REFRESH: RefreshStrategy = RefreshStrategy::AppendReturned;

    fn id(&self) -> &str {
        &self.id
    }

    fn provisional(dto: &CreateTenantDto) -> Self {
        Self {
            id: provisional_id(),
            organizations_name: dto.organizations_name.trim().to_string(),
            owner: dto.owner.trim().to_string(),
            created_on: provisional_timestamp(),
        }
    }

    fn element_name() -> &'static str {
        "Organization"
    }

    fn list_name() -> &'static str {
        "Organizations"
    }

    fn create_failed_message() -> &'static str {
        "Failed to create organization."
    }
}

// ============================================================================
// Envelopes
// ============================================================================

/// GET /get_tenants
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TenantsResponse {
    #[serde(default)]
    pub tenants: Vec<Organization>,
}

impl From<TenantsResponse> for Vec<Organization> {
    fn from(r: TenantsResponse) -> Self {
        r.tenants
    }
}

/// GET /get_organizations (names only, feeds the user form selector)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrganizationNamesResponse {
    #[serde(default)]
    pub organizations: Vec<String>,
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// POST /create_tenant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTenantDto {
    pub organizations_name: String,
    pub owner: String,
}

impl CreatePayload for CreateTenantDto {
    fn validate(&self) -> Result<(), FieldError> {
        require("organizations_name", "Organization name", &self.organizations_name)?;
        require("owner", "Owner", &self.owner)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::is_provisional_id;
    use serde_json::json;

    #[test]
    fn test_decode_tenants_envelope() {
        let body = r#"{"tenants":[
            {"id":"1","organizations_name":"Acme","owner":"Jane","created_on":"2024-01-01"},
            {"id":"2","organizations_name":"Globex","owner":"Hank","created_on":"2024-02-01"}
        ]}"#;
        let rows: Vec<Organization> = serde_json::from_str::<TenantsResponse>(body).unwrap().into();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].organizations_name, "Acme");
        assert_eq!(rows[1].owner, "Hank");
    }

    #[test]
    fn test_create_payload_wire_shape() {
        let dto = CreateTenantDto {
            organizations_name: "Acme".into(),
            owner: "Jane".into(),
        };
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({"organizations_name": "Acme", "owner": "Jane"})
        );
    }

    #[test]
    fn test_validation_requires_name_then_owner() {
        let mut dto = CreateTenantDto::default();
        assert_eq!(dto.validate().unwrap_err().field, "organizations_name");
        dto.organizations_name = "Acme".into();
        assert_eq!(dto.validate().unwrap_err().field, "owner");
        dto.owner = "Jane".into();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_provisional_row_uses_client_id() {
        let dto = CreateTenantDto {
            organizations_name: " Acme ".into(),
            owner: "Jane".into(),
        };
        let row = Organization::provisional(&dto);
        assert!(is_provisional_id(&row.id));
        assert_eq!(row.organizations_name, "Acme");
    }
}
