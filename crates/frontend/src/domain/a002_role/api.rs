use contracts::domain::a002_role::{CreateRoleDto, Role, RolesResponse};
use contracts::domain::common::AdminEntity;

use crate::shared::api_utils::{get_json, post};
use crate::shared::crud::Created;
use crate::shared::error::ApiError;

/// GET /get_roles_data
pub async fn fetch_roles() -> Result<Vec<Role>, ApiError> {
    let envelope: RolesResponse = get_json(Role::LIST_ENDPOINT).await?;
    Ok(envelope.into())
}

/// POST /create_role
///
/// The response carries no role record, only a status text.
pub async fn create_role(dto: CreateRoleDto) -> Result<Created<Role>, ApiError> {
    let body = post(Role::CREATE_ENDPOINT, &dto).await?;
    log::debug!("create_role: {}", body);
    Ok(Created::Submitted(dto))
}
