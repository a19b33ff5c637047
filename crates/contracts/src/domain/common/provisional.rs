use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

/// Marks client-generated ids so they never collide with backend ids
pub const PROVISIONAL_ID_PREFIX: &str = "tmp-";

pub fn provisional_id() -> String {
    format!("{}{}", PROVISIONAL_ID_PREFIX, Uuid::new_v4())
}

pub fn provisional_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub fn is_provisional_id(id: &str) -> bool {
    id.starts_with(PROVISIONAL_ID_PREFIX)
}
