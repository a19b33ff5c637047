use contracts::domain::a001_organization::{CreateTenantDto, Organization};
use leptos::prelude::*;

use crate::domain::a001_organization::api;
use crate::shared::crud::{spawn_submit, CreateDialogState, Created};

/// ViewModel for the create-organization dialog
#[derive(Clone, Copy)]
pub struct OrganizationDialogViewModel {
    pub state: RwSignal<CreateDialogState<CreateTenantDto>>,
}

impl OrganizationDialogViewModel {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(CreateDialogState::default()),
        }
    }

    pub fn open(&self) {
        self.state.update(|s| {
            s.open();
        });
    }

    pub fn close(&self) {
        self.state.update(|s| {
            s.close();
        });
    }

    pub fn is_open(&self) -> bool {
        self.state.with(|s| s.is_open)
    }

    pub fn set_name(&self, value: String) {
        self.state
            .update(|s| s.edit("organizations_name", |f| f.organizations_name = value));
    }

    pub fn set_owner(&self, value: String) {
        self.state.update(|s| s.edit("owner", |f| f.owner = value));
    }

    pub fn submit_command(&self, on_created: Callback<Created<Organization>>) {
        spawn_submit(self.state, on_created, api::create_organization);
    }
}

impl Default for OrganizationDialogViewModel {
    fn default() -> Self {
        Self::new()
    }
}
