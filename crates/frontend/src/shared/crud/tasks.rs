use std::future::Future;

use contracts::domain::common::AdminEntity;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::dialog_state::{CreateDialogState, SubmitRejected};
use super::list_state::{Created, ListState};
use crate::shared::config::api_config;
use crate::shared::error::ApiError;

/// Run one list request and fold its result into `state`.
///
/// Results arriving after the page unmounted are dropped.
pub fn spawn_fetch<T, Fut>(state: RwSignal<ListState<T>>, fetch: Fut)
where
    T: AdminEntity + Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    if state.try_update(|s| s.begin_fetch()).is_none() {
        return;
    }
    log::debug!("Fetching {}", T::list_name().to_lowercase());

    spawn_local(async move {
        let result = fetch.await;
        match &result {
            Ok(items) => log::info!("Loaded {} {}", items.len(), T::list_name().to_lowercase()),
            Err(e) => log::warn!("Fetching {} failed: {}", T::list_name().to_lowercase(), e),
        }
        state.try_update(|s| s.apply_fetch(result));
    });
}

/// Validate the dialog form and, when it passes, send exactly one create request.
///
/// On success the list is notified through `on_created` and the dialog closes
/// after the configured delay. On failure the form is left as typed.
pub fn spawn_submit<T, F, Fut>(
    dialog: RwSignal<CreateDialogState<T::CreateDto>>,
    on_created: Callback<Created<T>>,
    create: F,
) where
    T: AdminEntity + Send + Sync + 'static,
    T::CreateDto: Send + Sync + 'static,
    F: FnOnce(T::CreateDto) -> Fut + 'static,
    Fut: Future<Output = Result<Created<T>, ApiError>> + 'static,
{
    let dto = match dialog.try_update(|s| s.begin_submit()) {
        Some(Ok(dto)) => dto,
        Some(Err(SubmitRejected::InFlight)) => {
            log::debug!("{} create already in flight", T::element_name());
            return;
        }
        Some(Err(SubmitRejected::Invalid(e))) => {
            log::debug!("{} form invalid ({}): {}", T::element_name(), e.field, e);
            return;
        }
        None => return,
    };
    log::debug!("Creating {}", T::element_name().to_lowercase());

    spawn_local(async move {
        match create(dto).await {
            Ok(created) => {
                log::info!("{} created", T::element_name());
                let Some(session) = dialog.try_update(|s| {
                    s.finish_success(T::created_message());
                    s.session
                }) else {
                    return;
                };
                on_created.run(created);

                TimeoutFuture::new(api_config().success_close_delay_ms).await;
                dialog.try_update(|s| s.close_after_success(session));
            }
            Err(e) => {
                log::warn!("Creating {} failed: {}", T::element_name().to_lowercase(), e);
                dialog.try_update(|s| s.finish_failure(&e, T::create_failed_message()));
            }
        }
    });
}
