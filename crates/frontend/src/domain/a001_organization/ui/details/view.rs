use contracts::domain::a001_organization::Organization;
use leptos::prelude::*;

use super::view_model::OrganizationDialogViewModel;
use crate::shared::components::ui::{Button, Input};
use crate::shared::crud::Created;
use crate::shared::modal::Modal;

#[component]
pub fn CreateOrganizationDialog(
    vm: OrganizationDialogViewModel,
    on_created: Callback<Created<Organization>>,
) -> impl IntoView {
    let state = vm.state;
    let submitting = Signal::derive(move || state.with(|s| s.is_submitting));

    view! {
        <Show when=move || vm.is_open()>
            <Modal
                title="Create New Organization".to_string()
                description="Add a new organization to the system."
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
                        id="organizations_name"
                        label="Organization Name"
                        placeholder="Acme Inc."
                        value=Signal::derive(move || state.with(|s| s.form.organizations_name.clone()))
                        on_input=Callback::new(move |v| vm.set_name(v))
                        error=Signal::derive(move || state.with(|s| s.error_for("organizations_name")))
                        disabled=submitting
                    />
                    <Input
                        id="owner"
                        label="Owner"
                        placeholder="Owner name"
                        value=Signal::derive(move || state.with(|s| s.form.owner.clone()))
                        on_input=Callback::new(move |v| vm.set_owner(v))
                        error=Signal::derive(move || state.with(|s| s.error_for("owner")))
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
                            {move || if submitting.get() { "Creating..." } else { "Create Organization" }}
                        </Button>
                    </div>
                </form>
            </Modal>
        </Show>
    }
}
