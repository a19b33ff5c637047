pub mod aggregate;

pub use aggregate::{CreateRoleDto, PermissionLevel, Role, RolesResponse};
