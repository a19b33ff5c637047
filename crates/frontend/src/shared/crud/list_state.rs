use contracts::domain::common::{AdminEntity, RefreshStrategy};
use leptos::prelude::*;

use crate::shared::error::ApiError;

/// One rendered row; provisional rows were built locally and are not confirmed
#[derive(Clone, Debug, PartialEq)]
pub struct ListRow<T> {
    pub record: T,
    pub provisional: bool,
}

/// Result of a successful create, handed from a dialog to its list
#[derive(Clone, Debug)]
pub enum Created<T: AdminEntity> {
    /// The backend echoed the created record
    Echoed(T),
    /// Only the submitted payload is known
    Submitted(T::CreateDto),
}

/// Page-scoped snapshot of one collection, dropped when the page unmounts
#[derive(Clone, Debug)]
pub struct ListState<T> {
    pub rows: Vec<ListRow<T>>,
    pub is_loaded: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            is_loaded: false,
            is_loading: false,
            error: None,
        }
    }
}

impl<T: AdminEntity> ListState<T> {
    pub fn begin_fetch(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    /// Replace the snapshot with the server collection, or keep it and record an error
    pub fn apply_fetch(&mut self, result: Result<Vec<T>, ApiError>) {
        self.is_loading = false;
        match result {
            Ok(items) => {
                self.rows = items
                    .into_iter()
                    .map(|record| ListRow {
                        record,
                        provisional: false,
                    })
                    .collect();
                self.is_loaded = true;
                self.error = None;
            }
            Err(e) => {
                self.error = Some(if e.is_rejected() {
                    T::fetch_failed_message()
                } else {
                    T::fetch_error_message()
                });
            }
        }
    }

    /// Optimistic insertion of a server-returned record
    pub fn append(&mut self, record: T) {
        self.rows.push(ListRow {
            record,
            provisional: false,
        });
    }

    pub fn append_provisional(&mut self, record: T) {
        self.rows.push(ListRow {
            record,
            provisional: true,
        });
    }

    /// Fold a create result into the snapshot; returns true when a re-fetch must follow
    pub fn apply_created(&mut self, created: Created<T>) -> bool {
        match (T::REFRESH, created) {
            (RefreshStrategy::AppendReturned, Created::Echoed(record)) => {
                self.append(record);
                false
            }
            (RefreshStrategy::Refetch, Created::Echoed(_)) => true,
            (_, Created::Submitted(dto)) => {
                self.append_provisional(T::provisional(&dto));
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// No rows yet and a request is pending
    pub fn shows_loading(&self) -> bool {
        self.is_loading && self.rows.is_empty()
    }

    /// The server answered with an empty collection
    pub fn shows_empty_state(&self) -> bool {
        self.is_loaded && !self.is_loading && self.rows.is_empty()
    }

    pub fn provisional_count(&self) -> usize {
        self.rows.iter().filter(|r| r.provisional).count()
    }
}

pub fn create_state<T>() -> RwSignal<ListState<T>>
where
    T: Send + Sync + 'static,
{
    RwSignal::new(ListState::default())
}
