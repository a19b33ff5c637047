use contracts::domain::a001_organization::OrganizationNamesResponse;
use contracts::domain::a003_user::{CreateUserDto, User, UsersResponse};
use contracts::domain::common::AdminEntity;

use crate::shared::api_utils::{get_json, post};
use crate::shared::crud::Created;
use crate::shared::error::ApiError;

/// GET /get_users
pub async fn fetch_users() -> Result<Vec<User>, ApiError> {
    let envelope: UsersResponse = get_json(User::LIST_ENDPOINT).await?;
    Ok(envelope.into())
}

/// POST /create_user
///
/// Answers with `{ message }` only; the list re-fetches to pick the user up.
pub async fn create_user(dto: CreateUserDto) -> Result<Created<User>, ApiError> {
    let body = post(User::CREATE_ENDPOINT, &dto).await?;
    log::debug!("create_user: {}", body);
    Ok(Created::Submitted(dto))
}

/// GET /get_organizations, names for the organization selector
pub async fn fetch_organization_names() -> Result<Vec<String>, ApiError> {
    let envelope: OrganizationNamesResponse = get_json("/get_organizations").await?;
    Ok(envelope.organizations)
}
