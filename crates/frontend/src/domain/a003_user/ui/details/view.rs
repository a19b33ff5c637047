use contracts::domain::a003_user::User;
use leptos::prelude::*;

use super::view_model::{UserDialogViewModel, IGNORE_POLICIES_HINT};
use crate::shared::components::ui::{Button, Checkbox, Input, Select};
use crate::shared::crud::Created;
use crate::shared::modal::Modal;

#[component]
pub fn CreateUserDialog(
    vm: UserDialogViewModel,
    on_created: Callback<Created<User>>,
) -> impl IntoView {
    let state = vm.state;
    let submitting = Signal::derive(move || state.with(|s| s.is_submitting));

    view! {
        <Show when=move || vm.is_open()>
            <Modal
                title="Create New User".to_string()
                description="Add a user and assign them to an organization."
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
                        id="username"
                        label="Username"
                        placeholder="jane.doe"
                        value=Signal::derive(move || state.with(|s| s.form.username.clone()))
                        on_input=Callback::new(move |v| vm.set_username(v))
                        error=Signal::derive(move || state.with(|s| s.error_for("username")))
                        disabled=submitting
                    />
                    <Input
                        id="email_id"
                        label="Email"
                        input_type="email"
                        placeholder="jane@example.com"
                        value=Signal::derive(move || state.with(|s| s.form.email_id.clone()))
                        on_input=Callback::new(move |v| vm.set_email(v))
                        error=Signal::derive(move || state.with(|s| s.error_for("email_id")))
                        disabled=submitting
                    />
                    <Input
                        id="user_password"
                        label="Password"
                        input_type="password"
                        value=Signal::derive(move || state.with(|s| s.form.user_password.clone()))
                        on_input=Callback::new(move |v| vm.set_password(v))
                        error=Signal::derive(move || state.with(|s| s.error_for("user_password")))
                        disabled=submitting
                    />
                    <Select
                        id="organizations_name"
                        label="Organization"
                        placeholder="Select an organization"
                        options=Signal::derive(move || vm.organization_options())
                        value=Signal::derive(move || state.with(|s| s.form.organizations_name.clone()))
                        on_change=Callback::new(move |v| vm.set_organization(v))
                        error=Signal::derive(move || state.with(|s| s.error_for("organizations_name")))
                        disabled=submitting
                    />
                    <Checkbox
                        id="ignore_policies"
                        label="Ignore password policies"
                        hint=IGNORE_POLICIES_HINT
                        checked=Signal::derive(move || state.with(|s| s.form.ignore_policies))
                        on_change=Callback::new(move |v| vm.set_ignore_policies(v))
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
                            {move || if submitting.get() { "Creating..." } else { "Create User" }}
                        </Button>
                    </div>
                </form>
            </Modal>
        </Show>
    }
}
