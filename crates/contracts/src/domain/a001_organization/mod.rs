pub mod aggregate;

pub use aggregate::{CreateTenantDto, Organization, OrganizationNamesResponse, TenantsResponse};
