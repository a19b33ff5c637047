use leptos::prelude::*;

/// Checkbox with a label and an optional hint line below it
#[component]
pub fn Checkbox(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    checked: Signal<bool>,
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional, into)]
    hint: MaybeProp<String>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let checkbox_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            <div class="form__checkbox-wrapper">
                <input
                    id=checkbox_id
                    type="checkbox"
                    class="form__checkbox"
                    prop:checked=move || checked.get()
                    disabled=move || disabled.get().unwrap_or(false)
                    on:change=move |ev| {
                        if let Some(handler) = on_change {
                            handler.run(event_target_checked(&ev));
                        }
                    }
                />
                <label class="form__checkbox-label" for=checkbox_id>
                    {move || label.get().unwrap_or_default()}
                </label>
            </div>
            {move || hint.get().map(|h| view! { <div class="form__hint">{h}</div> })}
        </div>
    }
}
