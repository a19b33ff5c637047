use crate::domain::a001_organization::ui::list::OrganizationList;
use crate::domain::a002_role::ui::list::RoleList;
use crate::domain::a003_user::ui::list::UserList;
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--not-found">
            <h1>"Page not found"</h1>
            <p>"The page you are looking for does not exist."</p>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/users" /> } />
                    <Route path=path!("/users") view=UserList />
                    <Route path=path!("/organizations") view=OrganizationList />
                    <Route path=path!("/roles_permissions") view=RoleList />
                </Routes>
            </Shell>
        </Router>
    }
}
