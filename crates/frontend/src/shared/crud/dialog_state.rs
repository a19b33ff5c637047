use contracts::shared::validation::{CreatePayload, FieldError};

use crate::shared::error::ApiError;

/// Why a submit attempt was refused before any request went out
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    /// A request for this dialog is already in flight
    InFlight,
    /// A required field is empty
    Invalid(FieldError),
}

/// Create dialog: form fields, open/closed state and the submit lifecycle.
///
/// The submit guard is flipped synchronously inside `begin_submit`, before the
/// caller awaits anything, so on the single UI thread a second click can never
/// observe `is_submitting == false` while a request is pending.
#[derive(Clone, Debug, Default)]
pub struct CreateDialogState<D> {
    pub form: D,
    pub is_open: bool,
    pub is_submitting: bool,
    pub field_error: Option<FieldError>,
    pub error: Option<String>,
    pub success: Option<String>,
    /// Bumped on every open; a delayed close only applies to the session it was scheduled in
    pub session: u32,
}

impl<D: CreatePayload> CreateDialogState<D> {
    /// Returns true on a closed -> open transition
    pub fn open(&mut self) -> bool {
        if self.is_open {
            return false;
        }
        self.is_open = true;
        self.session = self.session.wrapping_add(1);
        self.clear_messages();
        true
    }

    /// Close unless a request is in flight; form fields are kept
    pub fn close(&mut self) -> bool {
        if self.is_submitting {
            return false;
        }
        self.is_open = false;
        self.clear_messages();
        true
    }

    /// Delayed close after a successful create.
    ///
    /// Ignored when the dialog was closed or reopened meanwhile, or when the
    /// success message is no longer showing.
    pub fn close_after_success(&mut self, session: u32) -> bool {
        if !self.is_open || self.session != session || self.success.is_none() {
            return false;
        }
        self.close()
    }

    /// Validate and lock the form; the returned payload is what gets sent
    pub fn begin_submit(&mut self) -> Result<D, SubmitRejected> {
        if self.is_submitting {
            return Err(SubmitRejected::InFlight);
        }
        self.clear_messages();

        if let Err(e) = self.form.validate() {
            self.field_error = Some(e.clone());
            return Err(SubmitRejected::Invalid(e));
        }

        self.is_submitting = true;
        Ok(self.form.clone())
    }

    /// Request succeeded: reset fields and show the success message
    pub fn finish_success(&mut self, message: impl Into<String>) {
        self.is_submitting = false;
        self.form = D::default();
        self.clear_messages();
        self.success = Some(message.into());
    }

    /// Request failed: keep what the user typed so it can be corrected
    pub fn finish_failure(&mut self, err: &ApiError, rejected_fallback: &str) {
        self.is_submitting = false;
        self.success = None;
        self.error = Some(err.user_message(rejected_fallback));
    }

    /// Message for the input bound to `field`
    pub fn error_for(&self, field: &str) -> Option<String> {
        self.field_error
            .as_ref()
            .filter(|e| e.field == field)
            .map(|e| e.message.clone())
    }

    /// Any user edit clears the field-level error of that field
    pub fn edit(&mut self, field: &str, apply: impl FnOnce(&mut D)) {
        apply(&mut self.form);
        if self.field_error.as_ref().is_some_and(|e| e.field == field) {
            self.field_error = None;
        }
    }

    fn clear_messages(&mut self) {
        self.field_error = None;
        self.error = None;
        self.success = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::TRANSPORT_FALLBACK;
    use contracts::domain::a001_organization::CreateTenantDto;

    fn acme() -> CreateTenantDto {
        CreateTenantDto {
            organizations_name: "Acme".into(),
            owner: "Jane".into(),
        }
    }

    fn opened(form: CreateTenantDto) -> CreateDialogState<CreateTenantDto> {
        let mut state = CreateDialogState {
            form,
            ..Default::default()
        };
        state.open();
        state
    }

    #[test]
    fn test_fields_start_empty_and_closed() {
        let state = CreateDialogState::<CreateTenantDto>::default();
        assert!(!state.is_open);
        assert_eq!(state.form, CreateTenantDto::default());
    }

    #[test]
    fn test_open_reports_only_transitions() {
        let mut state = CreateDialogState::<CreateTenantDto>::default();
        assert!(state.open());
        assert!(!state.open());
        assert!(state.close());
        assert!(state.open());
    }

    #[test]
    fn test_empty_required_field_never_yields_payload() {
        let mut state = opened(CreateTenantDto {
            organizations_name: "Acme".into(),
            owner: String::new(),
        });
        let rejected = state.begin_submit().unwrap_err();
        assert!(matches!(rejected, SubmitRejected::Invalid(ref e) if e.field == "owner"));
        assert!(!state.is_submitting);
        assert_eq!(state.error_for("owner").as_deref(), Some("Owner is required."));
        assert_eq!(state.error_for("organizations_name"), None);
    }

    #[test]
    fn test_second_submit_while_pending_is_refused() {
        let mut state = opened(acme());
        let payload = state.begin_submit().unwrap();
        assert_eq!(payload, acme());
        assert!(state.is_submitting);
        assert_eq!(state.begin_submit().unwrap_err(), SubmitRejected::InFlight);
    }

    #[test]
    fn test_cannot_close_while_submitting() {
        let mut state = opened(acme());
        state.begin_submit().unwrap();
        assert!(!state.close());
        assert!(state.is_open);
    }

    #[test]
    fn test_success_resets_fields() {
        let mut state = opened(acme());
        state.begin_submit().unwrap();
        state.finish_success("Organization created successfully!");
        assert_eq!(state.form, CreateTenantDto::default());
        assert!(!state.is_submitting);
        assert_eq!(
            state.success.as_deref(),
            Some("Organization created successfully!")
        );
        assert!(state.close());
        assert!(!state.is_open);
    }

    #[test]
    fn test_failure_keeps_fields_and_shows_server_message() {
        let mut state = opened(acme());
        state.begin_submit().unwrap();
        let err = ApiError::rejected(400, r#"{"message":"Owner unknown"}"#);
        state.finish_failure(&err, "Failed to create organization.");
        assert_eq!(state.form, acme());
        assert!(state.is_open);
        assert!(!state.is_submitting);
        assert_eq!(state.error.as_deref(), Some("Owner unknown"));
    }

    #[test]
    fn test_failure_without_message_uses_fallbacks() {
        let mut state = opened(acme());
        state.begin_submit().unwrap();
        state.finish_failure(
            &ApiError::Rejected { status: 500, message: None },
            "Failed to create organization.",
        );
        assert_eq!(state.error.as_deref(), Some("Failed to create organization."));

        state.begin_submit().unwrap();
        state.finish_failure(&ApiError::Transport("offline".into()), "unused");
        assert_eq!(state.error.as_deref(), Some(TRANSPORT_FALLBACK));
        assert_eq!(state.form, acme());
    }

    #[test]
    fn test_validation_message_is_only_shown_inline() {
        let mut state = opened(CreateTenantDto::default());
        assert!(state.begin_submit().is_err());
        assert_eq!(
            state.error_for("organizations_name").as_deref(),
            Some("Organization name is required.")
        );
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_delayed_close_applies_to_its_own_session() {
        let mut state = opened(acme());
        state.begin_submit().unwrap();
        state.finish_success("Organization created successfully!");
        let session = state.session;
        assert!(state.close_after_success(session));
        assert!(!state.is_open);
    }

    #[test]
    fn test_delayed_close_spares_a_reopened_dialog() {
        let mut state = opened(acme());
        state.begin_submit().unwrap();
        state.finish_success("Organization created successfully!");
        let session = state.session;

        assert!(state.close());
        assert!(state.open());

        assert!(!state.close_after_success(session));
        assert!(state.is_open);
    }

    #[test]
    fn test_delayed_close_skips_after_new_submit_fails() {
        let mut state = opened(acme());
        state.begin_submit().unwrap();
        state.finish_success("Organization created successfully!");
        let session = state.session;

        state.form = acme();
        state.begin_submit().unwrap();
        state.finish_failure(&ApiError::Transport("offline".into()), "unused");

        assert!(!state.close_after_success(session));
        assert!(state.is_open);
    }

    #[test]
    fn test_editing_field_clears_its_error() {
        let mut state = opened(CreateTenantDto::default());
        assert!(state.begin_submit().is_err());
        state.edit("organizations_name", |f| f.organizations_name = "Acme".into());
        assert_eq!(state.field_error, None);
    }
}
