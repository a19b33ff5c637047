use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Overlay dialog with a title bar and a close button.
///
/// `on_close` fires on overlay click, on the close button and on Escape;
/// the owner decides whether the close is honoured.
#[component]
pub fn Modal(
    title: String,
    on_close: Callback<()>,
    /// Optional line under the title
    #[prop(optional, into)]
    description: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let escape = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || escape.remove());

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" role="dialog" on:click=stop_propagation>
                <div class="modal-header">
                    <div>
                        <h2 class="modal-title">{title}</h2>
                        {move || description.get().map(|text| view! {
                            <p class="modal-description">{text}</p>
                        })}
                    </div>
                    <button
                        class="button button--icon modal__close"
                        on:click=move |_| on_close.run(())
                    >
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}
