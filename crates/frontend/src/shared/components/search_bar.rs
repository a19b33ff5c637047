use leptos::prelude::*;
use thaw::*;

/// Search box rendered above every list.
///
/// Not wired: lists always show the full server collection in server order.
#[component]
pub fn SearchBar(#[prop(into)] placeholder: String) -> impl IntoView {
    let query = RwSignal::new(String::new());

    view! {
        <div class="filter-panel">
            <div style="flex: 1; max-width: 480px;">
                <Input value=query placeholder=placeholder />
            </div>
        </div>
    }
}
