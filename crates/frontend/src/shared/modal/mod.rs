use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

/// Dialog over a dimmed overlay. Clicking the overlay or pressing Escape
/// calls `on_close`.
#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: Signal<String>,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Footer actions (Cancel, Save, ...)
    #[prop(optional, into)]
    footer: Option<ViewFn>,
    /// Wider variant for multi-column forms
    #[prop(optional)]
    wide: bool,
    /// Modal content
    children: Children,
) -> impl IntoView {
    // Escape closes; the listener is removed when the modal unmounts
    let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
        if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
            if keyboard_event.key() == "Escape" {
                on_close.run(());
            }
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    let listener = SendWrapper::new(KeydownListener(closure));
    on_cleanup(move || listener.take().remove());

    let handle_overlay_click = move |_| {
        on_close.run(());
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let modal_class = if wide { "modal modal--wide" } else { "modal" };

    view! {
        <div class="modal-overlay" on:click=handle_overlay_click>
            <div class=modal_class role="dialog" aria-modal="true" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{move || title.get()}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
                {footer.map(|footer| view! {
                    <div class="modal-footer">{footer.run()}</div>
                })}
            </div>
        </div>
    }
}

/// Keeps the keydown closure alive until the modal unmounts.
struct KeydownListener(Closure<dyn FnMut(web_sys::Event)>);

impl KeydownListener {
    fn remove(self) {
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback("keydown", self.0.as_ref().unchecked_ref());
        }
    }
}
