use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const OVERLAY_STYLE: &str = "position: fixed; top: 0; left: 0; right: 0; bottom: 0; \
    background-color: rgba(0, 0, 0, 0.5); display: flex; \
    justify-content: center; align-items: center;";

const SURFACE_STYLE: &str = "background-color: white; padding: 20px; border-radius: 5px; \
    position: relative; width: 300px;";

const CLOSE_STYLE: &str = "position: absolute; top: 10px; right: 10px; background: none; \
    border: none; font-size: 1.5rem; cursor: pointer;";

/// Overlay with a centered surface and a single close button.
///
/// Clicks on the dimmed backdrop are ignored; the only way out is the `×` button
/// (or whatever the content itself offers).
#[component]
pub fn Modal(
    /// Title of the modal
    title: String,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    let handle_close = move |_| {
        // Defer close to next tick: the button is removed together with the modal
        // while its own click is still being dispatched.
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            on_close.run(());
        });
    };

    view! {
        <div class="modal-overlay" style=OVERLAY_STYLE>
            <div class="modal" style=SURFACE_STYLE>
                <button
                    class="modal__close"
                    style=CLOSE_STYLE
                    aria-label="Close"
                    on:click=handle_close
                >
                    {icon("x")}
                </button>
                <h2 class="modal-title">{title}</h2>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
