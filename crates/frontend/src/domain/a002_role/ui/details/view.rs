use contracts::domain::a002_role::Role;
use leptos::prelude::*;

use super::view_model::{permission_options, RoleDialogViewModel, ROLE_KEY_PREFIX};
use crate::shared::components::ui::{Button, Input, Select, Textarea};
use crate::shared::crud::Created;
use crate::shared::modal::Modal;

#[component]
pub fn CreateRoleDialog(
    vm: RoleDialogViewModel,
    on_created: Callback<Created<Role>>,
) -> impl IntoView {
    let state = vm.state;
    let submitting = Signal::derive(move || state.with(|s| s.is_submitting));

    view! {
        <Show when=move || vm.is_open()>
            <Modal
                title="Create New Role".to_string()
                description="Define a role and the permission level it grants."
                on_close=Callback::new(move |_| vm.close())
            >
                <form
                    class="details-form"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        vm.submit_command(on_created);
                    }
                >
                    <Input
                        id="role_name"
                        label="Role Key"
                        prefix=ROLE_KEY_PREFIX
                        placeholder="marketing_admin"
                        value=Signal::derive(move || state.with(|s| s.form.role_name.clone()))
                        on_input=Callback::new(move |v| vm.set_role_name(v))
                        error=Signal::derive(move || state.with(|s| s.error_for("role_name")))
                        disabled=submitting
                    />
                    <Textarea
                        id="description"
                        label="Description"
                        placeholder="What this role is for (optional)"
                        rows=3
                        value=Signal::derive(move || state.with(|s| s.form.description.clone()))
                        on_input=Callback::new(move |v| vm.set_description(v))
                        disabled=submitting
                    />
                    <Select
                        id="permissions"
                        label="Permissions"
                        placeholder="Select a permission level"
                        options=Signal::derive(permission_options)
                        value=Signal::derive(move || state.with(|s| s.form.permissions.clone()))
                        on_change=Callback::new(move |v| vm.set_permissions(v))
                        error=Signal::derive(move || state.with(|s| s.error_for("permissions")))
                        disabled=submitting
                    />

                    {move || state.with(|s| s.error.clone()).map(|e| view! {
                        <div class="alert alert--error">{e}</div>
                    })}
                    {move || state.with(|s| s.success.clone()).map(|m| view! {
                        <div class="alert alert--success">{m}</div>
                    })}

                    <div class="details-actions">
                        <Button
                            variant="secondary"
                            disabled=submitting
                            on_click=Callback::new(move |_| vm.close())
                        >
                            "Cancel"
                        </Button>
                        <Button variant="primary" button_type="submit" disabled=submitting>
                            {move || if submitting.get() { "Creating..." } else { "Create Role" }}
                        </Button>
                    </div>
                </form>
            </Modal>
        </Show>
    }
}
