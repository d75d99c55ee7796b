//! Create/edit form overlay. Renders nothing at all while closed; the
//! Escape handler is armed only while the overlay is mounted.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

use crate::shared::icons::icon;

#[component]
pub fn FormModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] saving: Signal<bool>,
    on_close: Callback<()>,
    on_submit: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            {
                let children = children.clone();
                view! {
                    <ModalOverlay title=title error=error saving=saving on_close=on_close on_submit=on_submit>
                        {children()}
                    </ModalOverlay>
                }
            }
        </Show>
    }
}

#[component]
fn ModalOverlay(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] saving: Signal<bool>,
    on_close: Callback<()>,
    on_submit: Callback<()>,
    children: Children,
) -> impl IntoView {
    // Escape closes the form. The browser listener itself cannot be
    // reclaimed once forgotten, so it is disarmed through the flag when
    // the overlay unmounts.
    let armed = Arc::new(AtomicBool::new(true));
    {
        let armed = armed.clone();
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if !armed.load(Ordering::Relaxed) {
                return;
            }
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" {
                    on_close.run(());
                }
            }
        }) as Box<dyn FnMut(_)>);
        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
    on_cleanup(move || armed.store(false, Ordering::Relaxed));

    let handle_overlay_click = move |_| on_close.run(());
    let stop_propagation = move |ev: ev::MouseEvent| ev.stop_propagation();
    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <div class="modal-overlay" on:click=handle_overlay_click>
            <form class="modal" on:click=stop_propagation on:submit=handle_submit>
                <div class="modal-header">
                    <h2 class="modal-title">{move || title.get()}</h2>
                    <button
                        type="button"
                        class="button button--icon modal__close"
                        on:click=move |_| on_close.run(())
                    >
                        {icon("x")}
                    </button>
                </div>

                {move || error.get().map(|message| view! {
                    <div class="modal__error">{message}</div>
                })}

                <div class="modal-body">
                    {children()}
                </div>

                <div class="modal-footer">
                    <button
                        type="button"
                        class="button button--secondary"
                        on:click=move |_| on_close.run(())
                        disabled=move || saving.get()
                    >
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || saving.get()
                    >
                        {icon("save")}
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
