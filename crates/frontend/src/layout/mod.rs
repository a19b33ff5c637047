pub mod navbar;

use leptos::prelude::*;
use navbar::Navbar;

/// Application shell: top navigation bar above the routed page.
///
/// ```text
/// +------------------------------------------+
/// |  Navbar (Users | Organizations | Roles)  |
/// +------------------------------------------+
/// |              routed page                 |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Navbar />
            <main class="app-main">
                {children()}
            </main>
        </div>
    }
}
