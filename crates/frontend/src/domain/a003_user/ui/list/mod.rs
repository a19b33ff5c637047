mod state;

use contracts::domain::a003_user::User;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

use crate::domain::a003_user::api;
use crate::domain::a003_user::ui::details::{CreateUserDialog, UserDialogViewModel};
use crate::shared::components::{EntityTable, PageHeader, SearchBar};
use crate::shared::crud::{create_state, spawn_fetch, Created};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;

#[component]
#[allow(non_snake_case)]
pub fn UserList() -> impl IntoView {
    let state = create_state::<User>();
    let dialog = UserDialogViewModel::new();

    let load_data = move || spawn_fetch(state, api::fetch_users());

    let on_created = Callback::new(move |created: Created<User>| {
        if state.try_update(|s| s.apply_created(created)) == Some(true) {
            load_data();
        }
    });

    load_data();

    let loading = Signal::derive(move || state.with(|s| s.is_loading));

    view! {
        <PageFrame page_id="a003_user--list">
            <PageHeader
                title="Users"
                subtitle="Manage user accounts and their organizations."
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
                    " Add User"
                </Button>
            </PageHeader>

            <SearchBar placeholder="Search users..." />

            {move || state.with(|s| s.error.clone()).map(|e| view! {
                <div class="alert alert--error">{e}</div>
            })}

            <EntityTable state=state />

            <CreateUserDialog vm=dialog on_created=on_created />
        </PageFrame>
    }
}
