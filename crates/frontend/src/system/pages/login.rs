use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::gateway::use_gateway;
use crate::system::auth::context::{do_login, use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let state = use_auth();
    let gateway = use_gateway();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get();
        let password_val = password.get();
        let gateway = gateway.clone();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match do_login(state, gateway, email_val, password_val).await {
                Ok(()) => {
                    // AuthState flips to logged-in, which swaps in the shell.
                    set_is_loading.set(false);
                }
                Err(err) => {
                    set_error_message.set(Some(err));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"MoldERP"</h1>
                <h2>"Sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form__group">
                        <label class="form__label" for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            class="form__input"
                            placeholder="you@factory.example"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form__group">
                        <label class="form__label" for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            class="form__input"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="button button--primary login__submit"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
