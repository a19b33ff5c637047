use crate::shared::validation::CreatePayload;

/// How a list picks up a record after a successful create request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshStrategy {
    /// The create response echoes the record in list-row shape; append it locally.
    AppendReturned,
    /// The create response carries no record; re-fetch the whole collection.
    Refetch,
}

/// Trait for every backend-owned record shown in the admin dashboard.
///
/// Binds a record type to its endpoints, its create payload and its UI names.
pub trait AdminEntity: Clone {
    /// Payload of the create request
    type CreateDto: CreatePayload;

    /// GET endpoint returning the collection envelope
    const LIST_ENDPOINT: &'static str;

    /// POST endpoint creating one record
    const CREATE_ENDPOINT: &'static str;

    /// Update strategy after a successful create
    const REFRESH: RefreshStrategy;

    // ============================================================================
    // Instance data
    // ============================================================================

    /// Backend identifier, or a provisional one for rows not confirmed yet
    fn id(&self) -> &str;

    /// Build a row for local display from a submitted payload.
    ///
    /// Id and timestamp are client-generated and must be treated as provisional.
    fn provisional(dto: &Self::CreateDto) -> Self;

    // ============================================================================
    // Class metadata
    // ============================================================================

    /// Element name for UI (singular, e.g. "Organization")
    fn element_name() -> &'static str;

    /// List name for UI (plural, e.g. "Organizations")
    fn list_name() -> &'static str;

    /// Shown when a create request is rejected without a server message
    fn create_failed_message() -> &'static str;

    /// Shown after a successful create
    fn created_message() -> String {
        format!("{} created successfully!", Self::element_name())
    }

    /// Shown when the backend answers the list request with a non-2xx status
    fn fetch_failed_message() -> String {
        format!("Failed to fetch {}.", Self::list_name().to_lowercase())
    }

    /// Shown when the list request never produced a usable response
    fn fetch_error_message() -> String {
        format!(
            "An error occurred while fetching {}.",
            Self::list_name().to_lowercase()
        )
    }
}
