use contracts::domain::a002_role::{CreateRoleDto, PermissionLevel, Role};
use leptos::prelude::*;

use crate::domain::a002_role::api;
use crate::shared::crud::{spawn_submit, CreateDialogState, Created};

/// Prefix shown in front of the role key input; not part of the submitted value
pub const ROLE_KEY_PREFIX: &str = "org:";

#[derive(Clone, Copy)]
pub struct RoleDialogViewModel {
    pub state: RwSignal<CreateDialogState<CreateRoleDto>>,
}

impl RoleDialogViewModel {
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

    pub fn set_role_name(&self, value: String) {
        self.state.update(|s| s.edit("role_name", |f| f.role_name = value));
    }

    pub fn set_description(&self, value: String) {
        self.state
            .update(|s| s.edit("description", |f| f.description = value));
    }

    pub fn set_permissions(&self, value: String) {
        self.state
            .update(|s| s.edit("permissions", |f| f.permissions = value));
    }

    pub fn submit_command(&self, on_created: Callback<Created<Role>>) {
        spawn_submit(self.state, on_created, api::create_role);
    }
}

impl Default for RoleDialogViewModel {
    fn default() -> Self {
        Self::new()
    }
}

/// `(value, label)` pairs for the permission selector
pub fn permission_options() -> Vec<(String, String)> {
    PermissionLevel::ALL
        .iter()
        .map(|level| (level.as_str().to_string(), level.label().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_options_use_wire_values() {
        let values: Vec<String> = permission_options().into_iter().map(|(v, _)| v).collect();
        assert_eq!(values, ["read", "write", "admin"]);
    }
}
