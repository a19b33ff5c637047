mod state;

use contracts::domain::a001_organization::Organization;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

use crate::domain::a001_organization::api;
use crate::domain::a001_organization::ui::details::{
    CreateOrganizationDialog, OrganizationDialogViewModel,
};
use crate::shared::components::{EntityTable, PageHeader, SearchBar};
use crate::shared::crud::{create_state, spawn_fetch, Created};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;

#[component]
#[allow(non_snake_case)]
pub fn OrganizationList() -> impl IntoView {
    let state = create_state::<Organization>();
    let dialog = OrganizationDialogViewModel::new();

    let load_data = move || spawn_fetch(state, api::fetch_organizations());

    let on_created = Callback::new(move |created: Created<Organization>| {
        if state.try_update(|s| s.apply_created(created)) == Some(true) {
            load_data();
        }
    });

    load_data();

    let loading = Signal::derive(move || state.with(|s| s.is_loading));

    view! {
        <PageFrame page_id="a001_organization--list">
            <PageHeader
                title="Organizations"
                subtitle="Manage the organizations registered on the platform."
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
                    " Add Organization"
                </Button>
            </PageHeader>

            <SearchBar placeholder="Search organizations..." />

            {move || state.with(|s| s.error.clone()).map(|e| view! {
                <div class="alert alert--error">{e}</div>
            })}

            <EntityTable state=state />

            <CreateOrganizationDialog vm=dialog on_created=on_created />
        </PageFrame>
    }
}
