//! Common types and traits for all admin entities

pub mod admin_entity;
pub mod provisional;

// Re-exports
pub use admin_entity::{AdminEntity, RefreshStrategy};
pub use provisional::{
    is_provisional_id, provisional_id, provisional_timestamp, PROVISIONAL_ID_PREFIX,
};
