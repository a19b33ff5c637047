use leptos::prelude::*;

/// Text input bound to a form field.
///
/// The DOM value is driven through `prop:value`, so resetting the form after a
/// successful create also clears what the browser displays.
#[component]
pub fn Input(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "password", "email", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Field-level validation message
    #[prop(optional, into)]
    error: MaybeProp<String>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Text shown before the input, e.g. a key namespace
    #[prop(optional, into)]
    prefix: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let has_error = move || error.get().is_some();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <div class="form__input-row">
                {move || prefix.get().map(|p| view! { <span class="form__input-prefix">{p}</span> })}
                <input
                    id=input_id
                    class="form__input"
                    class:form__input--invalid=has_error
                    type=input_t
                    prop:value=move || value.get()
                    placeholder=input_placeholder
                    disabled=move || disabled.get().unwrap_or(false)
                    on:input=move |ev| {
                        if let Some(handler) = on_input {
                            handler.run(event_target_value(&ev));
                        }
                    }
                />
            </div>
            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}
