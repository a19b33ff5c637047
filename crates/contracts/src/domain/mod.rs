pub mod a001_organization;
pub mod a002_role;
pub mod a003_user;
pub mod common;
