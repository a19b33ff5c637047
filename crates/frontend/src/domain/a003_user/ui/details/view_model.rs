use contracts::domain::a003_user::{CreateUserDto, User};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a003_user::api;
use crate::shared::crud::{spawn_submit, CreateDialogState, Created};

pub const IGNORE_POLICIES_HINT: &str =
    "If checked, password policies will not be enforced on this password.";

#[derive(Clone, Copy)]
pub struct UserDialogViewModel {
    pub state: RwSignal<CreateDialogState<CreateUserDto>>,
    /// Choices for the organization selector, loaded each time the dialog opens
    pub organizations: RwSignal<Vec<String>>,
}

impl UserDialogViewModel {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(CreateDialogState::default()),
            organizations: RwSignal::new(Vec::new()),
        }
    }

    /// Opening the dialog (and only that) refreshes the organization names
    pub fn open(&self) {
        if self.state.try_update(|s| s.open()) == Some(true) {
            self.load_organizations();
        }
    }

    pub fn close(&self) {
        self.state.update(|s| {
            s.close();
        });
    }

    pub fn is_open(&self) -> bool {
        self.state.with(|s| s.is_open)
    }

    fn load_organizations(&self) {
        let organizations = self.organizations;
        log::debug!("Fetching organization names");
        spawn_local(async move {
            match api::fetch_organization_names().await {
                Ok(names) => {
                    log::info!("Loaded {} organization names", names.len());
                    organizations.try_set(names);
                }
                Err(e) => log::error!("Fetching organization names failed: {}", e),
            }
        });
    }

    pub fn organization_options(&self) -> Vec<(String, String)> {
        self.organizations
            .with(|names| names.iter().map(|n| (n.clone(), n.clone())).collect())
    }

    pub fn set_username(&self, value: String) {
        self.state.update(|s| s.edit("username", |f| f.username = value));
    }

    pub fn set_email(&self, value: String) {
        self.state.update(|s| s.edit("email_id", |f| f.email_id = value));
    }

    pub fn set_password(&self, value: String) {
        self.state
            .update(|s| s.edit("user_password", |f| f.user_password = value));
    }

    pub fn set_organization(&self, value: String) {
        self.state
            .update(|s| s.edit("organizations_name", |f| f.organizations_name = value));
    }

    pub fn set_ignore_policies(&self, value: bool) {
        self.state
            .update(|s| s.edit("ignore_policies", |f| f.ignore_policies = value));
    }

    pub fn submit_command(&self, on_created: Callback<Created<User>>) {
        spawn_submit(self.state, on_created, api::create_user);
    }
}

impl Default for UserDialogViewModel {
    fn default() -> Self {
        Self::new()
    }
}
