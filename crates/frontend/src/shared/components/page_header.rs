use leptos::prelude::*;

use super::ui::Badge;

/// Header for list pages: title, subtitle, record count and page actions
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
    /// Number of rows currently in the snapshot
    #[prop(into)]
    count: Signal<usize>,
    /// Action buttons (refresh, create dialog trigger)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                <div class="page-header__text">
                    <h1 class="page-header__title">
                        {title}
                        " "
                        <Badge>{move || count.get().to_string()}</Badge>
                    </h1>
                    {move || subtitle.get().map(|s| view! {
                        <div class="page-header__subtitle">{s}</div>
                    })}
                </div>
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}
