mod state;

use contracts::domain::a002_role::Role;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

use crate::domain::a002_role::api;
use crate::domain::a002_role::ui::details::{CreateRoleDialog, RoleDialogViewModel};
use crate::shared::components::{EntityTable, PageHeader, SearchBar};
use crate::shared::crud::{create_state, spawn_fetch, Created};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;

#[component]
#[allow(non_snake_case)]
pub fn RoleList() -> impl IntoView {
    let state = create_state::<Role>();
    let dialog = RoleDialogViewModel::new();

    let load_data = move || spawn_fetch(state, api::fetch_roles());

    // Role creation returns no record: show a pending row, then re-fetch.
    let on_created = Callback::new(move |created: Created<Role>| {
        if state.try_update(|s| s.apply_created(created)) == Some(true) {
            load_data();
        }
    });

    load_data();

    let loading = Signal::derive(move || state.with(|s| s.is_loading));

    view! {
        <PageFrame page_id="a002_role--list">
            <PageHeader
                title="Roles & Permissions"
                subtitle="Manage roles and the permission levels they grant."
                count=Signal::derive(move || state.with(|s| s.len()))
            >
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load_data()
                    disabled=loading
                >
                    {icon("refresh")}
                    {move || if loading.get() { " Loading..." } else { " Refresh" }}
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| dialog.open()>
                    {icon("plus")}
                    " Create Role"
                </Button>
            </PageHeader>

            <SearchBar placeholder="Search roles..." />

            {move || state.with(|s| s.error.clone()).map(|e| view! {
                <div class="alert alert--error">{e}</div>
            })}

            <EntityTable state=state />

            <CreateRoleDialog vm=dialog on_created=on_created />
        </PageFrame>
    }
}
