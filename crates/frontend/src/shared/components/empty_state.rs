use leptos::prelude::*;

use crate::shared::icons::icon;

/// Shown in place of table rows when the collection is empty
#[component]
pub fn EmptyState() -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state__icon">{icon("search")}</div>
            <h2 class="empty-state__title">"No results found"</h2>
            <p class="empty-state__hint">
                "Try adjusting your search or filter to find what you're looking for."
            </p>
        </div>
    }
}
