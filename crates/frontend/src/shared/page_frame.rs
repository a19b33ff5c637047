//! PageFrame: standard root wrapper for every routed page.
//!
//! The root element carries `id="{entity}--list"`, so an id copied from the DOM
//! inspector leads straight to `domain/{entity}/ui/list`.

use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--list`, e.g. `"a001_organization--list"`
    page_id: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div id=page_id class="page" data-page-category="list">
            {children()}
        </div>
    }
}
